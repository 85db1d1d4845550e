use std::time::Duration;

/// How long the teaser's exit animation runs before the full site replaces it.
pub const REVEAL_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class applied to the root container; tailwind `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Timeline,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Timeline,
        Section::Contact,
    ];

    /// Sections listed in the navigation bar, in display order.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Timeline,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Timeline => "timeline",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Timeline => "Experience",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Everything the landing page renders from.
///
/// Lives in a `RwSignal` provided as context by the root component, so the
/// theme reaches the render layer as data rather than as a document mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub revealed: bool,
    pub transitioning: bool,
    pub active_section: Section,
}

impl ViewState {
    /// State for a page that skips the teaser.
    pub fn full_site() -> Self {
        Self {
            revealed: true,
            ..Self::default()
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("theme is now {:?}", self.theme);
    }

    pub fn begin_reveal(&mut self) {
        self.transitioning = true;
        log::debug!("reveal started");
    }

    pub fn finish_reveal(&mut self) {
        self.revealed = true;
        self.transitioning = false;
        log::debug!("reveal finished");
    }

    pub fn focus(&mut self, section: Section) {
        self.active_section = section;
    }
}

/// One-shot deferred execution. Scheduled tasks always fire; there is no handle to cancel them.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>);
}

/// Starts the teaser exit and schedules the switch to the full site.
///
/// `update` applies a transition to wherever the view state lives. Repeated
/// calls each schedule their own finish; the end state is the same either way.
pub fn start_reveal<U, S>(update: U, scheduler: &S)
where
    U: Fn(fn(&mut ViewState)) + 'static,
    S: Scheduler + ?Sized,
{
    update(ViewState::begin_reveal);
    scheduler.schedule(
        REVEAL_DELAY,
        Box::new(move || update(ViewState::finish_reveal)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    type Task = Box<dyn FnOnce()>;

    // Runs tasks only when the test advances the clock past their delay
    #[derive(Default)]
    struct ManualScheduler {
        pending: RefCell<Vec<(Duration, Task)>>,
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
            self.pending.borrow_mut().push((delay, task));
        }
    }

    impl ManualScheduler {
        fn advance(&self, elapsed: Duration) {
            let due = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<_>, Vec<_>) =
                    pending.drain(..).partition(|(delay, _)| *delay <= elapsed);
                *pending = rest;
                due
            };
            for (_, task) in due {
                task();
            }
        }

        fn pending(&self) -> usize {
            self.pending.borrow().len()
        }
    }

    fn shared_state() -> (Rc<RefCell<ViewState>>, impl Fn(fn(&mut ViewState)) + Clone) {
        let state = Rc::new(RefCell::new(ViewState::default()));
        let handle = state.clone();
        (state, move |f: fn(&mut ViewState)| f(&mut handle.borrow_mut()))
    }

    #[test]
    fn test_default_view_state() {
        let state = ViewState::default();
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.revealed);
        assert!(!state.transitioning);
        assert_eq!(state.active_section, Section::Hero);
    }

    #[test]
    fn test_toggle_theme_twice_is_identity() {
        let original = ViewState::default();
        let mut state = original;
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
        assert_ne!(state, original);
        state.toggle_theme();
        assert_eq!(state, original);
    }

    #[test]
    fn test_theme_class() {
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.class(), "");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_reveal_sets_transitioning_immediately() {
        let scheduler = ManualScheduler::default();
        let (state, update) = shared_state();

        start_reveal(update, &scheduler);

        assert!(state.borrow().transitioning);
        assert!(!state.borrow().revealed);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_reveal_waits_for_delay() {
        let scheduler = ManualScheduler::default();
        let (state, update) = shared_state();

        start_reveal(update, &scheduler);
        scheduler.advance(REVEAL_DELAY - Duration::from_millis(1));

        assert!(state.borrow().transitioning);
        assert!(!state.borrow().revealed);
    }

    #[test]
    fn test_reveal_finishes_after_delay() {
        let scheduler = ManualScheduler::default();
        let (state, update) = shared_state();

        start_reveal(update, &scheduler);
        scheduler.advance(REVEAL_DELAY);

        let state = *state.borrow();
        assert!(state.revealed);
        assert!(!state.transitioning);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_repeated_reveal_settles_on_same_state() {
        let scheduler = ManualScheduler::default();
        let (state, update) = shared_state();

        for _ in 0..3 {
            start_reveal(update.clone(), &scheduler);
        }
        assert_eq!(scheduler.pending(), 3);

        scheduler.advance(REVEAL_DELAY);

        let state = *state.borrow();
        assert!(state.revealed);
        assert!(!state.transitioning);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_reveal_preserves_theme_and_section() {
        let scheduler = ManualScheduler::default();
        let (state, update) = shared_state();
        state.borrow_mut().toggle_theme();
        state.borrow_mut().focus(Section::Projects);

        start_reveal(update, &scheduler);
        scheduler.advance(REVEAL_DELAY);

        let state = *state.borrow();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.active_section, Section::Projects);
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("nonexistent-id"), None);
    }

    #[test]
    fn test_nav_excludes_hero() {
        assert!(!Section::NAV.contains(&Section::Hero));
        assert_eq!(Section::Timeline.label(), "Experience");
    }
}
