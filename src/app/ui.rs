//! Stateless display primitives. Callers attach handlers with `on:click`
//! and extra attributes with `attr:`, which land on each root element.

use leptos::prelude::*;

use crate::content::Tone;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-xl border border-white/10 bg-white/5 text-white shadow backdrop-blur-sm {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col space-y-1.5 p-6">{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <h3 class=format!("font-semibold leading-none tracking-tight text-white {class}")>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("p-6 pt-0 {class}")>{children()}</div> }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Solid => "text-white shadow",
            Self::Outline => "border bg-transparent shadow-sm",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, optional)] class: String,
    #[prop(optional)] disabled: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            disabled=disabled
            class=format!(
                "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md px-4 py-2 text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-purple-400 disabled:pointer-events-none disabled:opacity-50 {} {class}",
                variant.class(),
            )
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Badge(tone: Tone, children: Children) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors {}",
            tone.badge_class(),
        )>{children()}</span>
    }
}

/// A two-state toggle. It only displays `checked`; flipping it is the caller's job.
#[component]
pub fn Switch(#[prop(into)] checked: Signal<bool>, #[prop(into)] label: String) -> impl IntoView {
    let state = move || if checked.get() { "checked" } else { "unchecked" };
    view! {
        <button
            type="button"
            role="switch"
            aria-label=label
            aria-checked=move || checked.get().to_string()
            data-state=state
            class="inline-flex h-6 w-11 shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent bg-slate-600 transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-purple-400 data-[state=checked]:bg-purple-600"
        >
            <span
                data-state=state
                class="pointer-events-none block h-5 w-5 rounded-full bg-white shadow-lg ring-0 transition-transform data-[state=checked]:translate-x-5 data-[state=unchecked]:translate-x-0"
            ></span>
        </button>
    }
}
