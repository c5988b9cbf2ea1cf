mod export;
mod help;
mod keys;
mod screens;
mod state;

use crate::activities;
use crate::model::{Outcome, Screen, SessionEvent};
use crate::session::Session;
use crate::storage::KeyValueStore;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use state::{step_selection, UiAction, UiState, MENU};
use std::{io, path::Path, time::Duration};

pub fn run<S: KeyValueStore>(mut session: Session<S>) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut state = UiState::default();
    let res = event_loop(&mut terminal, &mut session, &mut state);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    tracing::info!("exiting");
    res
}

fn event_loop<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    session: &mut Session<S>,
    state: &mut UiState,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| draw(f.area(), f, session, state))
            .context("draw frame")?;

        // Poll with a timeout so terminal resizes get redrawn.
        if !event::poll(Duration::from_millis(250)).unwrap_or(false) {
            continue;
        }
        let Ok(Event::Key(k)) = event::read() else {
            continue;
        };
        if k.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = keys::map_key(session, state, k) else {
            continue;
        };
        if !apply_action(session, state, action) {
            return Ok(());
        }
    }
}

/// Apply one action. Returns `false` when the app should exit.
fn apply_action<S: KeyValueStore>(
    session: &mut Session<S>,
    state: &mut UiState,
    action: UiAction,
) -> bool {
    match action {
        UiAction::Quit => return false,
        UiAction::Session(ev) => dispatch(session, state, ev),
        UiAction::Input(c) => match session.screen() {
            Screen::Journal => state.journal_input.push(c),
            Screen::Photo if state.photo_attached.is_none() => state.photo_input.push(c),
            _ => {}
        },
        UiAction::Backspace => match session.screen() {
            Screen::Journal => {
                state.journal_input.pop();
            }
            Screen::Photo => {
                if state.photo_attached.take().is_none() {
                    state.photo_input.pop();
                }
            }
            _ => {}
        },
        UiAction::SelectPrev | UiAction::SelectNext => {
            let forward = action == UiAction::SelectNext;
            if session.menu_open() {
                state.menu_selected = step_selection(state.menu_selected, MENU.len(), forward);
            } else if session.screen() == Screen::Activities {
                state.activity_selected =
                    step_selection(state.activity_selected, state.suggestions.len(), forward);
            } else if session.screen() == Screen::Favorites {
                state.favorites_selected = step_selection(
                    state.favorites_selected,
                    session.favorites().len(),
                    forward,
                );
            }
        }
        UiAction::AttachPhoto => {
            let path = state.photo_input.trim().to_string();
            if Path::new(&path).is_file() {
                state.info = format!("Attached {path}");
                state.photo_attached = Some(path);
            } else {
                state.info = format!("No such file: {path}");
            }
        }
        UiAction::ExportFavorites => {
            if session.favorites().is_empty() {
                state.info = "Nothing to export yet.".into();
            } else {
                match export::export_favorites(session.favorites()) {
                    Ok(p) => {
                        state.last_exported_path = Some(p.to_string_lossy().to_string());
                        state.info =
                            format!("Exported JSON: {} (press 'y' to copy path)", p.display());
                    }
                    Err(e) => state.info = format!("JSON export failed: {e:#}"),
                }
            }
        }
        UiAction::CopyExportPath => match state.last_exported_path.clone() {
            Some(path) => copy(state, &path, "path"),
            None => state.info = "No exported file path to copy. Export first (e)".into(),
        },
        UiAction::CopyJournal => {
            let entry = session.journal_entry().to_string();
            if entry.is_empty() {
                state.info = "No journal entry to copy.".into();
            } else {
                copy(state, &entry, "journal entry");
            }
        }
    }
    true
}

fn copy(state: &mut UiState, text: &str, what: &str) {
    match export::copy_to_clipboard(text) {
        Ok(()) => state.info = format!("✓ Copied {what} to clipboard"),
        Err(e) => state.info = format!("Clipboard copy failed: {e:#}"),
    }
}

fn dispatch<S: KeyValueStore>(session: &mut Session<S>, state: &mut UiState, ev: SessionEvent) {
    let favorite_title = match &ev {
        SessionEvent::ToggleFavorite(s) => Some(s.title.clone()),
        _ => None,
    };
    let was_record = ev == SessionEvent::RecordDay;
    let was_menu_event = matches!(ev, SessionEvent::OpenMenu | SessionEvent::ToggleMenu);

    let outcome = match session.dispatch(ev) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!(error = %e, "write-through failed");
            state.info = format!("Save failed: {e}");
            return;
        }
    };

    match outcome {
        Outcome::Moved { to, .. } => {
            state.info.clear();
            on_enter(session, state, to);
        }
        Outcome::Blocked if was_record => {
            state.info = "Pick a mood and rate your day first.".into();
        }
        Outcome::Updated | Outcome::Blocked => {}
    }

    if was_menu_event && session.menu_open() {
        state.menu_selected = 0;
    }
    if let Some(title) = favorite_title {
        state.info = if session.is_favorite(&title) {
            format!("Saved {title} to favourites")
        } else {
            format!("Removed {title} from favourites")
        };
    }
    if session.screen() == Screen::Favorites {
        let len = session.favorites().len();
        state.favorites_selected = state.favorites_selected.min(len.saturating_sub(1));
    }
}

/// Prepare view state for a screen that just became active.
fn on_enter<S: KeyValueStore>(session: &Session<S>, state: &mut UiState, screen: Screen) {
    match screen {
        Screen::MoodTracker => state.clear_check_in(),
        Screen::Journal => state.journal_input = session.journal_entry().to_string(),
        Screen::Activities => {
            if let (Some(m), Some(r)) = (session.mood(), session.rating()) {
                state.suggestions = activities::suggest(m, r);
            }
            state.activity_selected = 0;
        }
        Screen::Photo => {
            state.photo_input.clear();
            state.photo_attached = None;
        }
        Screen::Favorites => state.favorites_selected = 0,
        Screen::Analytics | Screen::Memories | Screen::Faq => {}
    }
}

fn draw<S: KeyValueStore>(
    area: Rect,
    f: &mut ratatui::Frame,
    session: &Session<S>,
    state: &UiState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("MindScape", Style::default().fg(Color::Magenta)),
        Span::raw("  ·  "),
        Span::raw(session.screen().title()),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    screens::draw_screen(chunks[1], f, session, state);

    let status = if state.info.is_empty() {
        Line::from(Span::styled(
            "m: menu  ?: tutorial  q: quit",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(state.info.as_str())
    };
    f.render_widget(Paragraph::new(status), chunks[2]);

    if session.menu_open() {
        help::draw_menu(chunks[1], f, state);
    }
    if session.tutorial_visible() {
        help::draw_tutorial(area, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingStore, MemoryStore, FAVORITES_KEY, TUTORIAL_SEEN_KEY};
    use ratatui::backend::TestBackend;

    fn session() -> Session<MemoryStore> {
        Session::load(MemoryStore::new().with_entry(TUTORIAL_SEEN_KEY, "true"))
    }

    fn act(s: &mut Session<MemoryStore>, ui: &mut UiState, ev: SessionEvent) {
        assert!(apply_action(s, ui, UiAction::Session(ev)));
    }

    fn to_activities(s: &mut Session<MemoryStore>, ui: &mut UiState) {
        act(s, ui, SessionEvent::SetMood(Some(3)));
        act(s, ui, SessionEvent::SetRating(Some(2)));
        act(s, ui, SessionEvent::RecordDay);
        act(s, ui, SessionEvent::CompleteJournal("rough".into()));
    }

    #[test]
    fn entering_activities_loads_suggestions() {
        let mut s = session();
        let mut ui = UiState::default();
        to_activities(&mut s, &mut ui);
        assert_eq!(s.screen(), Screen::Activities);
        assert_eq!(ui.suggestions, activities::suggest(3, 2));
    }

    #[test]
    fn journal_is_prefilled_when_coming_back() {
        let mut s = session();
        let mut ui = UiState::default();
        to_activities(&mut s, &mut ui);
        ui.journal_input.clear();
        act(&mut s, &mut ui, SessionEvent::Back);
        assert_eq!(s.screen(), Screen::Journal);
        assert_eq!(ui.journal_input, "rough");
    }

    #[test]
    fn blocked_record_day_explains_why() {
        let mut s = session();
        let mut ui = UiState::default();
        act(&mut s, &mut ui, SessionEvent::RecordDay);
        assert_eq!(s.screen(), Screen::MoodTracker);
        assert!(ui.info.contains("first"));
    }

    #[test]
    fn typing_goes_to_the_journal() {
        let mut s = session();
        let mut ui = UiState::default();
        act(&mut s, &mut ui, SessionEvent::SetMood(Some(6)));
        act(&mut s, &mut ui, SessionEvent::SetRating(Some(6)));
        act(&mut s, &mut ui, SessionEvent::RecordDay);
        for c in "ok!".chars() {
            apply_action(&mut s, &mut ui, UiAction::Input(c));
        }
        apply_action(&mut s, &mut ui, UiAction::Backspace);
        assert_eq!(ui.journal_input, "ok");
    }

    #[test]
    fn favorite_toggle_reports_and_persists() {
        let mut s = session();
        let mut ui = UiState::default();
        to_activities(&mut s, &mut ui);
        let pick = ui.suggestions[0].clone();
        act(&mut s, &mut ui, SessionEvent::ToggleFavorite(pick.clone()));
        assert!(ui.info.starts_with("Saved"));
        assert!(s.store().get(FAVORITES_KEY).unwrap().unwrap().contains(&pick.title));
        act(&mut s, &mut ui, SessionEvent::ToggleFavorite(pick));
        assert!(ui.info.starts_with("Removed"));
    }

    #[test]
    fn favorites_cursor_stays_in_range_after_remove() {
        let mut s = session();
        let mut ui = UiState::default();
        to_activities(&mut s, &mut ui);
        let picks = ui.suggestions.clone();
        for p in &picks[..2] {
            act(&mut s, &mut ui, SessionEvent::ToggleFavorite(p.clone()));
        }
        act(&mut s, &mut ui, SessionEvent::View(Screen::Favorites));
        apply_action(&mut s, &mut ui, UiAction::SelectNext);
        assert_eq!(ui.favorites_selected, 1);
        act(&mut s, &mut ui, SessionEvent::RemoveFavorite(picks[1].title.clone()));
        assert_eq!(ui.favorites_selected, 0);
    }

    #[test]
    fn home_clears_view_state() {
        let mut s = session();
        let mut ui = UiState::default();
        to_activities(&mut s, &mut ui);
        act(&mut s, &mut ui, SessionEvent::BackToHome);
        assert!(ui.suggestions.is_empty());
        assert!(ui.journal_input.is_empty());
    }

    #[test]
    fn failed_save_is_reported_on_the_info_line() {
        let mut s = Session::load(FailingStore);
        let mut ui = UiState::default();
        let pick = activities::suggest(5, 5).remove(0);
        assert!(apply_action(
            &mut s,
            &mut ui,
            UiAction::Session(SessionEvent::ToggleFavorite(pick.clone()))
        ));
        assert!(ui.info.starts_with("Save failed"), "info was {:?}", ui.info);
        assert!(s.is_favorite(&pick.title));

        apply_action(&mut s, &mut ui, UiAction::Session(SessionEvent::CloseTutorial));
        assert!(ui.info.starts_with("Save failed"));
        assert!(!s.tutorial_visible());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut s = session();
        let mut ui = UiState::default();
        assert!(!apply_action(&mut s, &mut ui, UiAction::Quit));
    }

    #[test]
    fn every_screen_renders() {
        let mut s = Session::load(MemoryStore::new());
        let mut ui = UiState::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f.area(), f, &s, &ui)).unwrap();

        act(&mut s, &mut ui, SessionEvent::CloseTutorial);
        to_activities(&mut s, &mut ui);
        terminal.draw(|f| draw(f.area(), f, &s, &ui)).unwrap();
        let pick = ui.suggestions[0].activity();
        act(&mut s, &mut ui, SessionEvent::ChooseActivity(pick));
        terminal.draw(|f| draw(f.area(), f, &s, &ui)).unwrap();
        for screen in Screen::SIDE_BRANCHES {
            act(&mut s, &mut ui, SessionEvent::OpenMenu);
            terminal.draw(|f| draw(f.area(), f, &s, &ui)).unwrap();
            act(&mut s, &mut ui, SessionEvent::View(screen));
            terminal.draw(|f| draw(f.area(), f, &s, &ui)).unwrap();
            assert_eq!(s.screen(), screen);
        }
    }
}
