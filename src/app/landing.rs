use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use crate::content::{Glyph, PROFILE};
use crate::state::{start_reveal, ViewState};

use super::browser::BrowserTimer;
use super::icons::Icon;
use super::sections::{
    About, CallToAction, Contact, Footer, Hero, HeroHeading, NavBar, Projects, Skills,
    ThemeSwitch, Timeline,
};
use super::ui::{Button, ButtonVariant};

const TEASER_BASE: &str =
    "relative min-h-screen flex flex-col items-center justify-center px-6 text-center transition-all duration-700 ease-in-out";

/// The teaser until the visitor asks for more, then the whole site.
#[component]
pub fn LandingPage() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    view! {
        <Title text=PROFILE.headline />
        <Show when=move || state.with(|v| v.revealed) fallback=|| view! { <Teaser /> }>
            <FullSite />
        </Show>
    }
}

#[component]
fn Teaser() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let leaving = move || state.with(|v| v.transitioning);
    let reveal = move |_: MouseEvent| {
        start_reveal(
            move |transition: fn(&mut ViewState)| state.update(transition),
            &BrowserTimer,
        )
    };

    view! {
        <section
            id="teaser"
            aria-busy=move || leaving().to_string()
            class=move || {
                if leaving() {
                    format!("{TEASER_BASE} opacity-0 scale-95 blur-sm")
                } else {
                    format!("{TEASER_BASE} opacity-100 scale-100")
                }
            }
        >
            <div class="space-y-8">
                <HeroHeading />
                <div class="flex justify-center">
                    <Button
                        variant=ButtonVariant::Outline
                        class="border-white/20 text-white hover:bg-white/10 px-8 py-6 text-lg font-semibold rounded-full transition-all duration-300"
                        on:click=reveal
                    >
                        "Learn More"
                        <Icon glyph=Glyph::User class="ml-2 h-5 w-5" />
                    </Button>
                </div>
            </div>
            <div class="absolute top-6 right-6">
                <ThemeSwitch />
            </div>
        </section>
    }
}

#[component]
fn FullSite() -> impl IntoView {
    view! {
        <div id="full-site" class="animate-reveal">
            <NavBar />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Timeline />
            <CallToAction />
            <Contact />
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::toaster::Notifier;
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::provide_meta_context;

    fn render_landing(state: ViewState) -> String {
        Owner::new().with(|| {
            provide_meta_context();
            provide_context(RwSignal::new(state));
            provide_context(Notifier::new());
            view! { <LandingPage /> }.to_html()
        })
    }

    #[test]
    fn test_teaser_before_reveal() {
        let html = render_landing(ViewState::default());
        assert!(html.contains(r#"id="teaser""#));
        assert!(html.contains("Learn More"));
        assert!(!html.contains(r#"id="skills""#));
        assert!(!html.contains(r#"id="full-site""#));
    }

    #[test]
    fn test_teaser_exit_classes_while_transitioning() {
        let html = render_landing(ViewState {
            transitioning: true,
            ..ViewState::default()
        });
        assert!(html.contains("opacity-0"));
    }

    #[test]
    fn test_full_site_after_reveal() {
        let html = render_landing(ViewState::full_site());
        assert!(!html.contains(r#"id="teaser""#));
        for id in ["hero", "about", "skills", "projects", "timeline", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
        assert!(html.contains(PROFILE.email));
    }
}
