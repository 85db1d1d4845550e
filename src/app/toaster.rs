use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::Glyph;
use crate::toast::{Notice, Toast, ToastQueue};

use super::icons::Icon;

/// Context handle for raising toasts from event handlers.
#[derive(Debug, Clone, Copy)]
pub struct Notifier(RwSignal<ToastQueue>);

impl Notifier {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastQueue::default()))
    }

    pub fn notify(&self, notice: Notice) -> u64 {
        log::debug!("toast: {}", notice.title);
        self.0.try_update(|q| q.push(notice)).unwrap_or_default()
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|q| {
            q.dismiss(id);
        });
    }

    fn toasts(&self) -> Vec<Toast> {
        self.0.with(|q| q.iter().cloned().collect())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    view! {
        <ol
            aria-live="polite"
            class="fixed bottom-0 right-0 z-[100] flex max-h-screen w-full flex-col gap-2 p-4 md:max-w-[420px]"
        >
            <For each=move || notifier.toasts() key=|toast| toast.id let:toast>
                <ToastItem toast />
            </For>
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let id = toast.id;
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| notifier.dismiss(id),
        toast.notice.duration.as_secs_f64() * 1000.0,
    );
    start(());

    view! {
        <li
            role="status"
            class="relative flex w-full items-start justify-between gap-4 overflow-hidden rounded-md border border-white/10 bg-slate-900/90 p-4 pr-8 text-white shadow-lg backdrop-blur-md animate-reveal"
        >
            <div class="grid gap-1">
                <div class="text-sm font-semibold">{toast.notice.title}</div>
                <div class="text-sm opacity-90">{toast.notice.description}</div>
            </div>
            <button
                type="button"
                aria-label="Dismiss notification"
                class="absolute right-2 top-2 rounded-md p-1 text-white/50 hover:text-white"
                on:click=move |_| notifier.dismiss(id)
            >
                <Icon glyph=Glyph::Close class="h-4 w-4" />
            </button>
        </li>
    }
}
