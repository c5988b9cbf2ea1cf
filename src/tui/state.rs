use crate::model::{Screen, SessionEvent, Suggestion, SCALE_MAX, SCALE_MIN};

/// Entries of the navigation menu, in display order.
pub const MENU: [(&str, MenuItem); 5] = [
    ("View Analytics", MenuItem::View(Screen::Analytics)),
    ("Memories", MenuItem::View(Screen::Memories)),
    ("Saved Favourites", MenuItem::View(Screen::Favorites)),
    ("FAQ", MenuItem::View(Screen::Faq)),
    ("Tutorial", MenuItem::Tutorial),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    View(Screen),
    Tutorial,
}

impl MenuItem {
    pub fn event(self) -> SessionEvent {
        match self {
            MenuItem::View(screen) => SessionEvent::View(screen),
            MenuItem::Tutorial => SessionEvent::OpenTutorial,
        }
    }
}

/// Everything a key press can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    Session(SessionEvent),
    Input(char),
    Backspace,
    SelectPrev,
    SelectNext,
    AttachPhoto,
    ExportFavorites,
    CopyExportPath,
    CopyJournal,
}

/// View-only state. Session data lives in [`crate::session::Session`].
#[derive(Debug, Default)]
pub struct UiState {
    pub info: String,
    pub journal_input: String,
    pub photo_input: String,
    pub photo_attached: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub activity_selected: usize,
    pub favorites_selected: usize,
    pub menu_selected: usize,
    pub last_exported_path: Option<String>,
}

impl UiState {
    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.activity_selected)
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MENU[self.menu_selected.min(MENU.len() - 1)].1
    }

    /// Forget everything tied to the day's check-in.
    pub fn clear_check_in(&mut self) {
        self.journal_input.clear();
        self.photo_input.clear();
        self.photo_attached = None;
        self.suggestions.clear();
        self.activity_selected = 0;
    }
}

/// Move a list cursor by one, wrapping at both ends.
pub fn step_selection(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// Nudge a mood or rating value. An unset value starts from the middle.
pub fn step_scale(value: Option<u8>, up: bool) -> Option<u8> {
    let Some(v) = value else {
        return Some((SCALE_MIN + SCALE_MAX) / 2);
    };
    let next = if up {
        v.saturating_add(1).min(SCALE_MAX)
    } else {
        v.saturating_sub(1).max(SCALE_MIN)
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps() {
        assert_eq!(step_selection(0, 3, false), 2);
        assert_eq!(step_selection(2, 3, true), 0);
        assert_eq!(step_selection(1, 3, true), 2);
        assert_eq!(step_selection(5, 0, true), 0);
    }

    #[test]
    fn scale_starts_mid_and_clamps() {
        assert_eq!(step_scale(None, true), Some(5));
        assert_eq!(step_scale(None, false), Some(5));
        assert_eq!(step_scale(Some(10), true), Some(10));
        assert_eq!(step_scale(Some(1), false), Some(1));
        assert_eq!(step_scale(Some(7), true), Some(8));
    }

    #[test]
    fn menu_items_map_to_events() {
        let mut ui = UiState::default();
        assert_eq!(
            ui.selected_menu_item().event(),
            SessionEvent::View(Screen::Analytics)
        );
        ui.menu_selected = MENU.len() - 1;
        assert_eq!(ui.selected_menu_item().event(), SessionEvent::OpenTutorial);
    }
}
