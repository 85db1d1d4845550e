//! Glue between the page's handlers and the live browser.
//!
//! Everything here is a no-op outside the `hydrate` build; the server never
//! runs event handlers.

use std::time::Duration;

use crate::state::Scheduler;

use super::toaster::Notifier;

/// Fires scheduled tasks on the browser's timer queue.
pub struct BrowserTimer;

impl Scheduler for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            // forgotten so it fires even if the caller's scope is gone
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
        }
    }
}

pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        crate::nav::scroll_to_section(&dom::BrowserDocument, id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Copies `text` and reports the result through the toaster.
pub fn copy_to_clipboard(text: &'static str, notifier: Notifier) {
    #[cfg(feature = "hydrate")]
    {
        use crate::clipboard::copy_with_fallback;

        leptos::task::spawn_local(async move {
            let outcome =
                copy_with_fallback(&dom::BrowserClipboard, &dom::BrowserDocument, text).await;
            notifier.notify(outcome.notice(text));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, notifier);
    }
}

pub fn open_in_new_tab(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(href, "_blank") {
            log::warn!("couldn't open {href}: {}", dom::describe(&err));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::future::Future;

    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Document, Element, HtmlDocument, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    };

    use crate::clipboard::{AsyncClipboard, CopyError, LegacyCopySurface};
    use crate::nav::SectionTargets;

    // Off-screen but still selectable; display:none would break the selection
    const HIDDEN_INPUT_STYLE: &str =
        "position:fixed;top:0;left:0;width:1px;height:1px;padding:0;border:0;opacity:0;pointer-events:none;";

    pub fn describe(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    fn unavailable(reason: impl Into<String>) -> CopyError {
        CopyError::ClipboardUnavailable(reason.into())
    }

    fn legacy_failed(reason: impl Into<String>) -> CopyError {
        CopyError::LegacyCopyFailed(reason.into())
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    pub struct BrowserClipboard;

    impl BrowserClipboard {
        // navigator.clipboard is missing outside secure contexts, so look it up dynamically
        fn start_write(text: &str) -> Result<Promise, CopyError> {
            let window = web_sys::window().ok_or_else(|| unavailable("no window"))?;
            let navigator: JsValue = window.navigator().into();
            let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                .map_err(|e| unavailable(describe(&e)))?;
            if clipboard.is_undefined() || clipboard.is_null() {
                return Err(unavailable("navigator.clipboard is not available"));
            }
            let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                .map_err(|e| unavailable(describe(&e)))?
                .dyn_into::<Function>()
                .map_err(|_| unavailable("navigator.clipboard.writeText is not a function"))?;
            write_text
                .call1(&clipboard, &JsValue::from_str(text))
                .map_err(|e| unavailable(describe(&e)))?
                .dyn_into::<Promise>()
                .map_err(|_| unavailable("writeText did not return a promise"))
        }
    }

    impl AsyncClipboard for BrowserClipboard {
        fn write_text(&self, text: &str) -> impl Future<Output = Result<(), CopyError>> {
            let write = Self::start_write(text);
            async move {
                JsFuture::from(write?)
                    .await
                    .map(|_| ())
                    .map_err(|e| unavailable(describe(&e)))
            }
        }
    }

    pub struct BrowserDocument;

    impl LegacyCopySurface for BrowserDocument {
        type Element = HtmlInputElement;

        fn insert_hidden_input(&self, text: &str) -> Result<HtmlInputElement, CopyError> {
            let document = document().ok_or_else(|| legacy_failed("no document"))?;
            let body = document
                .body()
                .ok_or_else(|| legacy_failed("document has no body"))?;
            let input = document
                .create_element("input")
                .map_err(|e| legacy_failed(describe(&e)))?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| legacy_failed("created element is not an input"))?;
            input.set_value(text);
            input.set_read_only(true);
            input
                .set_attribute("aria-hidden", "true")
                .and_then(|_| input.set_attribute("style", HIDDEN_INPUT_STYLE))
                .map_err(|e| legacy_failed(describe(&e)))?;
            // not attached until this succeeds, so there is nothing to clean up on error
            body.append_child(&input)
                .map_err(|e| legacy_failed(describe(&e)))?;
            Ok(input)
        }

        fn select_and_copy(&self, input: &HtmlInputElement) -> Result<(), CopyError> {
            input.select();
            let document = document()
                .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
                .ok_or_else(|| legacy_failed("document does not support execCommand"))?;
            match document.exec_command("copy") {
                Ok(true) => Ok(()),
                Ok(false) => Err(legacy_failed("copy command was rejected")),
                Err(e) => Err(legacy_failed(describe(&e))),
            }
        }

        fn remove(&self, input: HtmlInputElement) {
            input.remove();
        }
    }

    impl SectionTargets for BrowserDocument {
        type Target = Element;

        fn find(&self, id: &str) -> Option<Element> {
            document()?.get_element_by_id(id)
        }

        fn scroll_smoothly(&self, target: &Element) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
