//! Copy text to the clipboard, falling back to the legacy
//! select-and-`execCommand("copy")` technique when the async API is missing
//! or refuses the write.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::toast::Notice;

pub const COPIED_TOAST_DURATION: Duration = Duration::from_secs(3);
pub const MANUAL_COPY_TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
    #[error("legacy copy failed: {0}")]
    LegacyCopyFailed(String),
}

/// The asynchronous clipboard API (`navigator.clipboard`).
pub trait AsyncClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), CopyError>>;
}

/// A document that can host a temporary input for the legacy copy.
pub trait LegacyCopySurface {
    type Element;

    /// Creates an invisible input holding `text` and attaches it to the document.
    fn insert_hidden_input(&self, text: &str) -> Result<Self::Element, CopyError>;

    fn select_and_copy(&self, element: &Self::Element) -> Result<(), CopyError>;

    fn remove(&self, element: Self::Element);
}

/// Owns a temporary input and detaches it on drop, whichever way the copy went.
struct StagedInput<'a, S: LegacyCopySurface + ?Sized> {
    surface: &'a S,
    element: Option<S::Element>,
}

impl<'a, S: LegacyCopySurface + ?Sized> StagedInput<'a, S> {
    fn insert(surface: &'a S, text: &str) -> Result<Self, CopyError> {
        let element = surface.insert_hidden_input(text)?;
        Ok(Self {
            surface,
            element: Some(element),
        })
    }

    fn copy(&self) -> Result<(), CopyError> {
        match &self.element {
            Some(element) => self.surface.select_and_copy(element),
            None => Err(CopyError::LegacyCopyFailed(
                "temporary input already removed".to_string(),
            )),
        }
    }
}

impl<S: LegacyCopySurface + ?Sized> Drop for StagedInput<'_, S> {
    fn drop(&mut self) {
        if let Some(element) = self.element.take() {
            self.surface.remove(element);
        }
    }
}

pub fn legacy_copy<S>(surface: &S, text: &str) -> Result<(), CopyError>
where
    S: LegacyCopySurface + ?Sized,
{
    let staged = StagedInput::insert(surface, text)?;
    staged.copy()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    CopiedWithFallback,
    /// Both paths failed; the user has to copy by hand.
    Manual(CopyError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        !matches!(self, Self::Manual(_))
    }

    pub fn notice(&self, text: &str) -> Notice {
        if self.is_copied() {
            Notice::new(
                "Email copied",
                format!("{text} has been copied to your clipboard."),
                COPIED_TOAST_DURATION,
            )
        } else {
            Notice::new(
                "Copy failed",
                format!("Please copy the address manually: {text}"),
                MANUAL_COPY_TOAST_DURATION,
            )
        }
    }
}

pub async fn copy_with_fallback<C, S>(clipboard: &C, surface: &S, text: &str) -> CopyOutcome
where
    C: AsyncClipboard + ?Sized,
    S: LegacyCopySurface + ?Sized,
{
    let err = match clipboard.write_text(text).await {
        Ok(()) => return CopyOutcome::Copied,
        Err(err) => err,
    };
    log::warn!("{err}, trying legacy copy");
    match legacy_copy(surface, text) {
        Ok(()) => CopyOutcome::CopiedWithFallback,
        Err(err) => {
            log::error!("{err}");
            CopyOutcome::Manual(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeClipboard {
        works: bool,
        written: RefCell<Option<String>>,
    }

    impl FakeClipboard {
        fn working() -> Self {
            Self {
                works: true,
                written: RefCell::new(None),
            }
        }

        fn broken() -> Self {
            Self {
                works: false,
                written: RefCell::new(None),
            }
        }
    }

    impl AsyncClipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), CopyError> {
            if self.works {
                *self.written.borrow_mut() = Some(text.to_string());
                Ok(())
            } else {
                Err(CopyError::ClipboardUnavailable("denied".to_string()))
            }
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Failure {
        None,
        Insert,
        Select,
        Command,
    }

    // Tracks live temporary elements the way the DOM would
    struct FakeDocument {
        failure: Failure,
        live: Cell<usize>,
        created: Cell<usize>,
        copied: RefCell<Option<String>>,
    }

    impl FakeDocument {
        fn new(failure: Failure) -> Self {
            Self {
                failure,
                live: Cell::new(0),
                created: Cell::new(0),
                copied: RefCell::new(None),
            }
        }
    }

    impl LegacyCopySurface for FakeDocument {
        type Element = String;

        fn insert_hidden_input(&self, text: &str) -> Result<String, CopyError> {
            if self.failure == Failure::Insert {
                return Err(CopyError::LegacyCopyFailed("no body".to_string()));
            }
            self.live.set(self.live.get() + 1);
            self.created.set(self.created.get() + 1);
            Ok(text.to_string())
        }

        fn select_and_copy(&self, element: &String) -> Result<(), CopyError> {
            match self.failure {
                Failure::Select => Err(CopyError::LegacyCopyFailed("select threw".to_string())),
                Failure::Command => Err(CopyError::LegacyCopyFailed(
                    "copy command was rejected".to_string(),
                )),
                _ => {
                    *self.copied.borrow_mut() = Some(element.clone());
                    Ok(())
                }
            }
        }

        fn remove(&self, _element: String) {
            self.live.set(self.live.get() - 1);
        }
    }

    const EMAIL: &str = "someone@example.com";

    #[tokio::test]
    async fn test_async_clipboard_success() {
        let clipboard = FakeClipboard::working();
        let doc = FakeDocument::new(Failure::None);

        let outcome = copy_with_fallback(&clipboard, &doc, EMAIL).await;

        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.written.borrow().as_deref(), Some(EMAIL));
        assert_eq!(doc.created.get(), 0);
        assert_eq!(doc.live.get(), 0);
    }

    #[tokio::test]
    async fn test_fallback_success_removes_input() {
        let clipboard = FakeClipboard::broken();
        let doc = FakeDocument::new(Failure::None);

        let outcome = copy_with_fallback(&clipboard, &doc, EMAIL).await;

        assert_eq!(outcome, CopyOutcome::CopiedWithFallback);
        assert_eq!(doc.copied.borrow().as_deref(), Some(EMAIL));
        assert_eq!(doc.created.get(), 1);
        assert_eq!(doc.live.get(), 0);
    }

    #[tokio::test]
    async fn test_fallback_failures_never_leak() {
        for failure in [Failure::Select, Failure::Command] {
            let clipboard = FakeClipboard::broken();
            let doc = FakeDocument::new(failure);

            let outcome = copy_with_fallback(&clipboard, &doc, EMAIL).await;

            assert!(matches!(
                outcome,
                CopyOutcome::Manual(CopyError::LegacyCopyFailed(_))
            ));
            assert_eq!(doc.created.get(), 1);
            assert_eq!(doc.live.get(), 0);
        }
    }

    #[tokio::test]
    async fn test_insert_failure_creates_nothing() {
        let clipboard = FakeClipboard::broken();
        let doc = FakeDocument::new(Failure::Insert);

        let outcome = copy_with_fallback(&clipboard, &doc, EMAIL).await;

        assert!(!outcome.is_copied());
        assert_eq!(doc.created.get(), 0);
        assert_eq!(doc.live.get(), 0);
    }

    #[test]
    fn test_legacy_copy_directly() {
        let doc = FakeDocument::new(Failure::None);
        assert!(legacy_copy(&doc, EMAIL).is_ok());
        assert_eq!(doc.live.get(), 0);
    }

    #[test]
    fn test_success_notice_mentions_value() {
        for outcome in [CopyOutcome::Copied, CopyOutcome::CopiedWithFallback] {
            let notice = outcome.notice(EMAIL);
            assert_eq!(notice.title, "Email copied");
            assert!(notice.description.contains(EMAIL));
            assert_eq!(notice.duration, COPIED_TOAST_DURATION);
        }
    }

    #[test]
    fn test_manual_notice_asks_user_to_copy() {
        let outcome = CopyOutcome::Manual(CopyError::LegacyCopyFailed("nope".to_string()));
        let notice = outcome.notice(EMAIL);
        assert_eq!(notice.title, "Copy failed");
        assert!(notice.description.contains("manually"));
        assert!(notice.description.contains(EMAIL));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CopyError::ClipboardUnavailable("denied".to_string()).to_string(),
            "clipboard unavailable: denied"
        );
        assert_eq!(
            CopyError::LegacyCopyFailed("no body".to_string()).to_string(),
            "legacy copy failed: no body"
        );
    }
}
