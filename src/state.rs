use crate::model::{View, FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::persisted::ReaderConfig;
use crate::router;

/// Whole-app state. Navigation commands return `true` when they applied,
/// so the caller knows to reset the viewport and rewrite the fragment.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ReaderState {
    pub(crate) view: View,
    pub(crate) menu_open: bool,
    pub(crate) config: ReaderConfig,
}

impl ReaderState {
    /// Startup state: the fragment is consulted exactly once, here.
    pub(crate) fn from_fragment(fragment: &str, config: ReaderConfig) -> Self {
        Self {
            view: router::parse_location(fragment),
            menu_open: false,
            config,
        }
    }

    pub(crate) fn go_home(&mut self) -> bool {
        self.apply_view(View::Home)
    }

    pub(crate) fn go_about(&mut self) -> bool {
        self.apply_view(View::About)
    }

    /// Guarded against the loaded range; out-of-range requests are no-ops.
    pub(crate) fn go_chapter(&mut self, id: u32, chapter_count: usize) -> bool {
        if id == 0 || id as usize > chapter_count {
            return false;
        }
        self.apply_view(View::Chapter(id))
    }

    // The menu closes in the same transition as the view change.
    fn apply_view(&mut self, view: View) -> bool {
        self.view = view;
        self.menu_open = false;
        true
    }

    pub(crate) fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub(crate) fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub(crate) fn toggle_dark_mode(&mut self) {
        self.config.dark_mode = !self.config.dark_mode;
    }

    pub(crate) fn increase_font_size(&mut self) -> bool {
        if self.config.font_size >= FONT_SIZE_MAX {
            return false;
        }
        self.config.font_size += 1;
        true
    }

    pub(crate) fn decrease_font_size(&mut self) -> bool {
        if self.config.font_size <= FONT_SIZE_MIN {
            return false;
        }
        self.config.font_size -= 1;
        true
    }

    pub(crate) fn fragment(&self) -> String {
        router::format_location(&self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ReaderState {
        ReaderState::from_fragment("", ReaderConfig::default())
    }

    #[test]
    fn startup_fragment_selects_view() {
        assert_eq!(fresh().view, View::Home);
        let state = ReaderState::from_fragment("#chapter-5", ReaderConfig::default());
        assert_eq!(state.view, View::Chapter(5));
        let state = ReaderState::from_fragment("#bogus", ReaderConfig::default());
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn out_of_range_chapter_is_a_no_op() {
        let mut state = fresh();
        assert!(!state.go_chapter(0, 10));
        assert!(!state.go_chapter(11, 10));
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn in_range_chapter_applies_and_closes_menu() {
        let mut state = fresh();
        state.toggle_menu();
        assert!(state.menu_open);
        assert!(state.go_chapter(5, 10));
        assert_eq!(state.view, View::Chapter(5));
        assert!(!state.menu_open);
        assert_eq!(state.fragment(), "#chapter-5");
    }

    #[test]
    fn consecutive_navigations_track_the_fragment() {
        let mut state = fresh();
        assert!(state.go_chapter(1, 3));
        assert_eq!(state.fragment(), "#chapter-1");
        state.toggle_menu();
        assert!(state.go_chapter(2, 3));
        assert_eq!(state.fragment(), "#chapter-2");
        assert!(!state.menu_open);
    }

    #[test]
    fn home_and_about_always_apply() {
        let mut state = fresh();
        assert!(state.go_about());
        assert_eq!(state.view, View::About);
        assert!(state.go_home());
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn font_size_clamps_at_both_bounds() {
        let mut state = fresh();
        for _ in 0..40 {
            state.increase_font_size();
        }
        assert_eq!(state.config.font_size, FONT_SIZE_MAX);
        assert!(!state.increase_font_size());
        for _ in 0..40 {
            state.decrease_font_size();
        }
        assert_eq!(state.config.font_size, FONT_SIZE_MIN);
        assert!(!state.decrease_font_size());
    }

    #[test]
    fn dark_mode_and_menu_toggle() {
        let mut state = fresh();
        state.toggle_dark_mode();
        assert!(state.config.dark_mode);
        state.toggle_dark_mode();
        assert!(!state.config.dark_mode);
        state.toggle_menu();
        assert!(state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
    }
}
