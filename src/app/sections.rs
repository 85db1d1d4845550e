use leptos::prelude::*;

use crate::content::{
    copyright_year, Glyph, ABOUT, CORE_STRENGTHS, CTA_BODY, CTA_HEADING, LINKEDIN_STATUS,
    PROFILE, PROJECTS, SKILL_GROUPS, TIMELINE,
};
use crate::state::{Section, ViewState};

use super::browser;
use super::icons::Icon;
use super::toaster::Notifier;
use super::ui::{Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Switch};

const PILL_PRIMARY: &str = "bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 text-white px-8 py-6 text-lg font-semibold rounded-full transition-all duration-300 transform hover:scale-105";
const PILL_OUTLINE: &str = "border-white/20 text-white hover:bg-white/10 px-8 py-6 text-lg font-semibold rounded-full transition-all duration-300";
const HOVER_CARD: &str = "group hover:bg-white/10 transition-all duration-300";

/// Marks `section` active and scrolls to it.
pub fn go_to(state: RwSignal<ViewState>, section: Section) {
    state.update(|v| v.focus(section));
    browser::scroll_to_section(section.id());
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl font-bold text-white mb-4">{title}</h2>
            <p class="text-lg text-white/60">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let is_dark = Signal::derive(move || state.with(|v| v.theme.is_dark()));
    view! {
        <div class="flex items-center space-x-2">
            <Icon glyph=Glyph::Sun class="h-4 w-4 text-yellow-400" />
            <Switch
                checked=is_dark
                label="Toggle dark mode"
                on:click=move |_| state.update(ViewState::toggle_theme)
            />
            <Icon glyph=Glyph::Moon class="h-4 w-4 text-slate-300" />
        </div>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-black/20 backdrop-blur-md border-b border-white/10">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-2xl font-bold text-white">{PROFILE.full_name()}</div>
                    <div class="flex items-center space-x-6">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                let active = move || state.with(|v| v.active_section == section);
                                view! {
                                    <button
                                        type="button"
                                        aria-current=move || active().then_some("true")
                                        class=move || {
                                            if active() {
                                                "text-white font-semibold transition-colors"
                                            } else {
                                                "text-white/80 hover:text-white transition-colors"
                                            }
                                        }
                                        on:click=move |_| go_to(state, section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <ThemeSwitch />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Name, headline and tagline; shared by the teaser and the full hero.
#[component]
pub fn HeroHeading() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-6xl md:text-8xl font-bold text-white leading-tight">
                {PROFILE.first_name}
                <span class="block text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-pink-400">
                    {PROFILE.last_name}
                </span>
            </h1>
            <p class="text-2xl md:text-3xl text-white/80 font-light">{PROFILE.headline}</p>
            <p class="text-lg text-white/60 max-w-2xl mx-auto">{PROFILE.tagline}</p>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    view! {
        <section id=Section::Hero.id() class="pt-36 pb-32 px-6">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center space-y-8">
                    <HeroHeading />
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button class=PILL_PRIMARY on:click=move |_| go_to(state, Section::Contact)>
                            "Let's Talk"
                            <Icon glyph=Glyph::MessageSquare class="ml-2 h-5 w-5" />
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            class=PILL_OUTLINE
                            on:click=move |_| go_to(state, Section::About)
                        >
                            "Learn More"
                            <Icon glyph=Glyph::User class="ml-2 h-5 w-5" />
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h2 class="text-4xl font-bold text-white">"About Me"</h2>
                        {ABOUT
                            .iter()
                            .map(|p| view! { <p class="text-lg text-white/80 leading-relaxed">{*p}</p> })
                            .collect_view()}
                        <div class="flex items-center space-x-2 text-purple-400">
                            <Icon glyph=Glyph::Award class="h-5 w-5" />
                            <span class="text-lg font-semibold">
                                {format!("Motto: \"{}\"", PROFILE.motto)}
                            </span>
                        </div>
                    </div>
                    <Card>
                        <CardHeader>
                            <CardTitle class="flex items-center">
                                <Icon glyph=Glyph::Briefcase class="mr-2 h-5 w-5" />
                                "Core Strengths"
                            </CardTitle>
                        </CardHeader>
                        <CardContent class="space-y-3">
                            {CORE_STRENGTHS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <div class="flex items-center space-x-2" data-key=s.key>
                                            <div class="w-2 h-2 bg-purple-400 rounded-full"></div>
                                            <span class="text-white/80">{s.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading title="Skills & Tools" subtitle="Technologies I work with" />
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div data-key=group.key>
                                    <Card class=HOVER_CARD>
                                        <CardHeader>
                                            <CardTitle class="flex items-center">
                                                <Icon
                                                    glyph=group.glyph
                                                    class=format!("mr-2 h-5 w-5 {}", group.tone.text_class())
                                                />
                                                {group.title}
                                            </CardTitle>
                                        </CardHeader>
                                        <CardContent>
                                            <div class="flex flex-wrap gap-2">
                                                {group
                                                    .skills
                                                    .iter()
                                                    .map(|skill| view! { <Badge tone=group.tone>{*skill}</Badge> })
                                                    .collect_view()}
                                            </div>
                                        </CardContent>
                                    </Card>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="Key project highlights from my experience"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div data-key=project.key>
                                    <Card class=HOVER_CARD>
                                        <CardHeader>
                                            <CardTitle>{project.title}</CardTitle>
                                            <p class="text-purple-400 font-semibold">
                                                {project.organization}
                                            </p>
                                        </CardHeader>
                                        <CardContent class="space-y-4">
                                            <p class="text-white/80">{project.summary}</p>
                                            <div class="flex flex-wrap gap-2">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| view! { <Badge tone=project.tone>{*tag}</Badge> })
                                                    .collect_view()}
                                            </div>
                                        </CardContent>
                                    </Card>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section id=Section::Timeline.id() class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading title="Work Timeline" subtitle="My professional journey" />
                <div class="space-y-8">
                    {TIMELINE
                        .iter()
                        .map(|entry| {
                            let accent = entry.tone.text_class();
                            view! {
                                <div class="flex items-start space-x-4" data-key=entry.key>
                                    <div class=format!(
                                        "flex-shrink-0 w-4 h-4 rounded-full mt-2 {}",
                                        entry.tone.dot_class(),
                                    )></div>
                                    <div class="flex-1">
                                        <Card>
                                            <CardContent class="p-6">
                                                <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                                                    <h3 class="text-xl font-semibold text-white">
                                                        {entry.role}
                                                    </h3>
                                                    <div class=format!(
                                                        "flex items-center space-x-2 {accent}",
                                                    )>
                                                        <Icon glyph=Glyph::Calendar class="h-4 w-4" />
                                                        <span>{entry.period}</span>
                                                    </div>
                                                </div>
                                                <p class=format!("font-semibold mb-2 {accent}")>
                                                    {entry.company}
                                                </p>
                                                <ul class="text-white/80 space-y-1">
                                                    {entry
                                                        .highlights
                                                        .iter()
                                                        .map(|h| view! { <li>"• "{*h}</li> })
                                                        .collect_view()}
                                                </ul>
                                            </CardContent>
                                        </Card>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    view! {
        <section class="py-20 px-6">
            <div class="container mx-auto max-w-4xl text-center">
                <Card class="bg-gradient-to-r from-purple-600/20 to-pink-600/20 border-purple-600/30">
                    <CardContent class="p-12">
                        <h2 class="text-4xl font-bold text-white mb-4">{CTA_HEADING}</h2>
                        <p class="text-lg text-white/80 mb-8">{CTA_BODY}</p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <Button
                                class="bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 text-white px-8 py-4 text-lg font-semibold rounded-full"
                                on:click=move |_| go_to(state, Section::Contact)
                            >
                                "Get In Touch"
                                <Icon glyph=Glyph::MessageSquare class="ml-2 h-5 w-5" />
                            </Button>
                        </div>
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    view! {
        <section id=Section::Contact.id() class="py-20 px-6">
            <div class="container mx-auto max-w-4xl">
                <SectionHeading
                    title="Let's Connect"
                    subtitle="Feel free to reach out for opportunities or collaborations"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    <Card class=HOVER_CARD>
                        <CardContent class="p-8 text-center">
                            <div class="w-16 h-16 bg-purple-600/20 rounded-full flex items-center justify-center mx-auto mb-4">
                                <Icon glyph=Glyph::Mail class="h-8 w-8 text-purple-400" />
                            </div>
                            <h3 class="text-xl font-semibold text-white mb-2">"Email"</h3>
                            <p class="text-white/80 mb-4">{PROFILE.email}</p>
                            <div class="flex flex-col sm:flex-row gap-2 justify-center">
                                <Button
                                    variant=ButtonVariant::Outline
                                    class="border-purple-600/30 text-purple-400 hover:bg-purple-600/20"
                                    on:click=move |_| browser::copy_to_clipboard(PROFILE.email, notifier)
                                >
                                    "Copy Email"
                                </Button>
                                <Button
                                    class="bg-purple-600 hover:bg-purple-700"
                                    on:click=move |_| browser::open_in_new_tab(&PROFILE.mailto())
                                >
                                    "Send Email"
                                </Button>
                            </div>
                        </CardContent>
                    </Card>
                    <Card class=HOVER_CARD>
                        <CardContent class="p-8 text-center">
                            <div class="w-16 h-16 bg-blue-600/20 rounded-full flex items-center justify-center mx-auto mb-4">
                                <Icon glyph=Glyph::Linkedin class="h-8 w-8 text-blue-400" />
                            </div>
                            <h3 class="text-xl font-semibold text-white mb-2">"LinkedIn"</h3>
                            <p class="text-white/80 mb-4">{LINKEDIN_STATUS}</p>
                            <Button disabled=true class="bg-blue-600/50 cursor-not-allowed">
                                "Coming Soon"
                            </Button>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    view! {
        <footer class="py-12 px-6 border-t border-white/10">
            <div class="container mx-auto max-w-6xl">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="text-white/60 mb-4 md:mb-0">
                        {format!(
                            "© {} {}. All rights reserved.",
                            copyright_year(),
                            PROFILE.full_name(),
                        )}
                    </div>
                    <div class="flex items-center space-x-6">
                        <button
                            type="button"
                            class="text-white/60 hover:text-white transition-colors"
                            on:click=move |_| go_to(state, Section::Hero)
                        >
                            "Back to Top"
                        </button>
                        <ThemeSwitch />
                    </div>
                </div>
            </div>
        </footer>
    }
}
