/// Anything that can find a section element by id and scroll to it.
pub trait SectionTargets {
    type Target;

    fn find(&self, id: &str) -> Option<Self::Target>;

    fn scroll_smoothly(&self, target: &Self::Target);
}

/// Scrolls the section with `id` into view. Unknown ids are a no-op.
///
/// Returns whether anything was scrolled.
pub fn scroll_to_section<T>(targets: &T, id: &str) -> bool
where
    T: SectionTargets + ?Sized,
{
    match targets.find(id) {
        Some(target) => {
            targets.scroll_smoothly(&target);
            true
        }
        None => {
            log::debug!("no element with id {id:?}, not scrolling");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionTargets for FakePage {
        type Target = String;

        fn find(&self, id: &str) -> Option<String> {
            self.ids.contains(&id).then(|| id.to_string())
        }

        fn scroll_smoothly(&self, target: &String) {
            self.scrolled.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn test_scrolls_existing_section() {
        let page = FakePage::new(&["hero", "about", "contact"]);
        assert!(scroll_to_section(&page, "contact"));
        assert_eq!(*page.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let page = FakePage::new(&["hero", "about"]);
        assert!(!scroll_to_section(&page, "nonexistent-id"));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_empty_page() {
        let page = FakePage::new(&[]);
        assert!(!scroll_to_section(&page, "hero"));
        assert!(page.scrolled.borrow().is_empty());
    }
}
