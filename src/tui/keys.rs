//! Key bindings.
//!
//! Pure mapping from a key press to a [`UiAction`], given the current session
//! and view state. Nothing here mutates anything.

use super::state::{step_scale, UiAction, UiState};
use crate::model::{Screen, SessionEvent};
use crate::session::Session;
use crate::storage::KeyValueStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn map_key<S: KeyValueStore>(
    session: &Session<S>,
    ui: &UiState,
    key: KeyEvent,
) -> Option<UiAction> {
    let ev = |e: SessionEvent| Some(UiAction::Session(e));

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiAction::Quit);
    }

    if session.tutorial_visible() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?') => {
                ev(SessionEvent::CloseTutorial)
            }
            KeyCode::Char('q') => Some(UiAction::Quit),
            _ => None,
        };
    }

    if session.menu_open() {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiAction::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiAction::SelectNext),
            KeyCode::Enter => ev(ui.selected_menu_item().event()),
            KeyCode::Esc | KeyCode::F(2) | KeyCode::Char('m') => ev(SessionEvent::CloseMenu),
            KeyCode::Char('q') => Some(UiAction::Quit),
            _ => None,
        };
    }

    let screen = session.screen();
    match key.code {
        KeyCode::F(1) => return ev(SessionEvent::OpenTutorial),
        KeyCode::F(2) => return ev(SessionEvent::ToggleMenu),
        KeyCode::F(3) if screen != Screen::MoodTracker => return ev(SessionEvent::BackToHome),
        _ => {}
    }

    // Text entry screens take every printable key.
    match screen {
        Screen::Journal => {
            return match key.code {
                KeyCode::Enter => ev(SessionEvent::CompleteJournal(ui.journal_input.clone())),
                KeyCode::Tab => ev(SessionEvent::SkipToAnalytics),
                KeyCode::Esc => ev(SessionEvent::Back),
                KeyCode::Backspace => Some(UiAction::Backspace),
                KeyCode::Char(c) => Some(UiAction::Input(c)),
                _ => None,
            };
        }
        Screen::Photo => {
            return match key.code {
                KeyCode::Enter
                    if ui.photo_attached.is_none() && !ui.photo_input.trim().is_empty() =>
                {
                    Some(UiAction::AttachPhoto)
                }
                KeyCode::Enter => ev(SessionEvent::CompletePhoto),
                KeyCode::Backspace => Some(UiAction::Backspace),
                KeyCode::Char(c) => Some(UiAction::Input(c)),
                _ => None,
            };
        }
        _ => {}
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiAction::Quit),
        KeyCode::Char('m') => return ev(SessionEvent::OpenMenu),
        KeyCode::Char('?') => return ev(SessionEvent::OpenTutorial),
        KeyCode::Char('h') if screen != Screen::MoodTracker => {
            return ev(SessionEvent::BackToHome)
        }
        _ => {}
    }

    match screen {
        Screen::MoodTracker => match key.code {
            KeyCode::Left => ev(SessionEvent::SetMood(step_scale(session.mood(), false))),
            KeyCode::Right => ev(SessionEvent::SetMood(step_scale(session.mood(), true))),
            KeyCode::Down => ev(SessionEvent::SetRating(step_scale(session.rating(), false))),
            KeyCode::Up => ev(SessionEvent::SetRating(step_scale(session.rating(), true))),
            KeyCode::Enter => ev(SessionEvent::RecordDay),
            KeyCode::Char('r') => ev(SessionEvent::Reset),
            _ => None,
        },
        Screen::Activities => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiAction::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiAction::SelectNext),
            KeyCode::Enter => ui
                .selected_suggestion()
                .and_then(|s| ev(SessionEvent::ChooseActivity(s.activity()))),
            KeyCode::Char('f') => ui
                .selected_suggestion()
                .and_then(|s| ev(SessionEvent::ToggleFavorite(s.clone()))),
            KeyCode::Char('s') => ev(SessionEvent::Skip),
            KeyCode::Esc => ev(SessionEvent::Back),
            _ => None,
        },
        Screen::Favorites => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiAction::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiAction::SelectNext),
            KeyCode::Char('d') => session
                .favorites()
                .as_slice()
                .get(ui.favorites_selected)
                .and_then(|f| ev(SessionEvent::RemoveFavorite(f.title.clone()))),
            KeyCode::Char('e') => Some(UiAction::ExportFavorites),
            KeyCode::Char('y') => Some(UiAction::CopyExportPath),
            KeyCode::Esc => ev(SessionEvent::BackToHome),
            _ => None,
        },
        Screen::Memories => match key.code {
            KeyCode::Char('y') => Some(UiAction::CopyJournal),
            KeyCode::Esc => ev(SessionEvent::BackToHome),
            _ => None,
        },
        Screen::Analytics | Screen::Faq => match key.code {
            KeyCode::Esc => ev(SessionEvent::BackToHome),
            _ => None,
        },
        Screen::Journal | Screen::Photo => None,
    }
}
