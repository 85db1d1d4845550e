mod browser;
mod icons;
mod landing;
mod sections;
mod toaster;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::state::ViewState;

use landing::LandingPage;
pub use toaster::{Notifier, Toaster};

const BACKDROP: &str = "min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 dark:from-slate-950 dark:via-purple-950 dark:to-slate-950 transition-all duration-300";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <meta name="description" content=PROFILE.tagline />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = RwSignal::new(ViewState::default());
    provide_context(state);
    provide_context(Notifier::new());

    let root_class = move || format!("{} {BACKDROP}", state.with(|v| v.theme.class()));

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name()) />

        <div class=root_class>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=LandingPage />
                    </Routes>
                </main>
            </Router>
            <Toaster />
        </div>
    }
}
