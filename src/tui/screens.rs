//! One draw function per [`Screen`].

use super::state::UiState;
use crate::activities::Band;
use crate::model::{Screen, SCALE_MAX};
use crate::session::Session;
use crate::storage::KeyValueStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw_screen<S: KeyValueStore>(
    area: Rect,
    f: &mut Frame,
    session: &Session<S>,
    state: &UiState,
) {
    match session.screen() {
        Screen::MoodTracker => draw_mood_tracker(area, f, session),
        Screen::Journal => draw_journal(area, f, session, state),
        Screen::Activities => draw_activities(area, f, session, state),
        Screen::Photo => draw_photo(area, f, session, state),
        Screen::Analytics => draw_analytics(area, f, session),
        Screen::Memories => draw_memories(area, f, session, state),
        Screen::Favorites => draw_favorites(area, f, session, state),
        Screen::Faq => draw_faq(area, f),
    }
}

fn mood_face(mood: u8) -> &'static str {
    match mood {
        1..=2 => "😢",
        3..=4 => "😕",
        5..=6 => "😐",
        7..=8 => "🙂",
        _ => "😄",
    }
}

fn scale_gauge(title: &str, value: Option<u8>, color: Color) -> Gauge<'static> {
    let (ratio, label) = match value {
        Some(v) => (f64::from(v) / f64::from(SCALE_MAX), format!("{v} / {SCALE_MAX}")),
        None => (0.0, "not set".to_string()),
    };
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(label)
}

fn draw_mood_tracker<S: KeyValueStore>(area: Rect, f: &mut Frame, session: &Session<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let face = session.mood().map(mood_face).unwrap_or("  ");
    let header = Paragraph::new(vec![
        Line::from(format!("{face} How are you feeling today?")),
        Line::from(Span::styled(
            "Use ←/→ to select your mood and ↑/↓ to rate your day",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(header, rows[0]);
    f.render_widget(scale_gauge("Mood", session.mood(), Color::Magenta), rows[1]);
    f.render_widget(scale_gauge("Day rating", session.rating(), Color::Cyan), rows[2]);

    let ready = session.can_record_day();
    let record_style = if ready {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] Record My Day", record_style),
        Span::raw("    "),
        Span::raw("[r] Reset"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(buttons, rows[3]);

    let footer = if ready {
        "Great! Now press Enter to continue with journaling 💝"
    } else {
        "Taking a moment to check in with yourself is a great first step! 💝"
    };
    f.render_widget(
        Paragraph::new(footer)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        rows[4],
    );
}

fn journal_prompt(mood: Option<u8>) -> &'static str {
    match mood {
        Some(1..=4) => "What's weighing on you today? Writing it down can lighten the load.",
        Some(5..=7) => "What made today feel the way it did?",
        Some(_) => "What went well today? Capture it so you can come back to it.",
        None => "How was your day?",
    }
}

fn draw_journal<S: KeyValueStore>(
    area: Rect,
    f: &mut Frame,
    session: &Session<S>,
    state: &UiState,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    f.render_widget(Paragraph::new(journal_prompt(session.mood())), rows[0]);

    let body = Paragraph::new(format!("{}▏", state.journal_input))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Your entry"));
    f.render_widget(body, rows[1]);
    f.render_widget(
        Paragraph::new("Enter: save & continue   Tab: skip to analytics   Esc: back")
            .style(Style::default().fg(Color::Gray)),
        rows[2],
    );
}

fn draw_activities<S: KeyValueStore>(
    area: Rect,
    f: &mut Frame,
    session: &Session<S>,
    state: &UiState,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let headline = match (session.mood(), session.rating()) {
        (Some(m), Some(r)) => Band::of(m, r).headline(),
        _ => "Here are some ideas:",
    };
    f.render_widget(Paragraph::new(headline).wrap(Wrap { trim: true }), rows[0]);

    let items: Vec<ListItem> = state
        .suggestions
        .iter()
        .map(|s| {
            let star = if session.is_favorite(&s.title) { "★" } else { "☆" };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(star, Style::default().fg(Color::Yellow)),
                    Span::raw(format!(" {} {}", s.icon, s.title)),
                ]),
                Line::from(Span::styled(
                    format!("    {} · {}", s.description, s.benefit),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Activities"))
        .highlight_style(Style::default().fg(Color::Green))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.activity_selected));
    f.render_stateful_widget(list, rows[1], &mut list_state);

    f.render_widget(
        Paragraph::new("Enter: choose   f: favourite   s: skip   Esc: back")
            .style(Style::default().fg(Color::Gray)),
        rows[2],
    );
}

fn draw_photo<S: KeyValueStore>(
    area: Rect,
    f: &mut Frame,
    session: &Session<S>,
    state: &UiState,
) {
    let mut lines = Vec::new();
    if let Some(a) = session.selected_activity() {
        lines.push(Line::from(format!("{} {}", a.icon, a.title)));
        lines.push(Line::from(Span::styled(
            a.description.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    match &state.photo_attached {
        Some(path) => {
            lines.push(Line::from(vec![
                Span::styled("Attached: ", Style::default().fg(Color::Green)),
                Span::raw(path.clone()),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from("Press Enter to finish."));
        }
        None => {
            lines.push(Line::from("Type the path of a photo from your activity (optional):"));
            lines.push(Line::from(format!("> {}▏", state.photo_input)));
            lines.push(Line::from(""));
            lines.push(Line::from("Enter attaches the photo, or finishes when the path is empty."));
        }
    }
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Capture the moment"));
    f.render_widget(p, area);
}

fn draw_analytics<S: KeyValueStore>(area: Rect, f: &mut Frame, session: &Session<S>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let data = [
        ("Mood", u64::from(session.mood().unwrap_or(0))),
        ("Day", u64::from(session.rating().unwrap_or(0))),
    ];
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Today"))
        .bar_width(8)
        .bar_gap(4)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::Black).bg(Color::Magenta))
        .max(u64::from(SCALE_MAX))
        .data(&data[..]);
    f.render_widget(chart, cols[0]);

    let mut lines = Vec::new();
    match (session.mood(), session.rating()) {
        (Some(m), Some(r)) => {
            lines.push(Line::from(format!("{} Mood {m}/{SCALE_MAX}, day {r}/{SCALE_MAX}", mood_face(m))));
        }
        _ => lines.push(Line::from("No check-in recorded this session yet.")),
    }
    lines.push(Line::from(format!(
        "Journal: {}",
        if session.journal_entry().is_empty() {
            "skipped"
        } else {
            "written"
        }
    )));
    if let Some(a) = session.selected_activity() {
        lines.push(Line::from(format!("Activity: {} {}", a.icon, a.title)));
    }
    lines.push(Line::from(format!(
        "Saved favourites: {}",
        session.favorites().len()
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "h: back to home   m: menu",
        Style::default().fg(Color::Gray),
    )));
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Summary"));
    f.render_widget(p, cols[1]);
}

fn draw_memories<S: KeyValueStore>(
    area: Rect,
    f: &mut Frame,
    session: &Session<S>,
    state: &UiState,
) {
    let mut lines = Vec::new();
    if session.journal_entry().is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing written yet today.",
            Style::default().fg(Color::Gray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Journal",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for l in session.journal_entry().lines() {
            lines.push(Line::from(l.to_string()));
        }
    }
    if let Some(a) = session.selected_activity() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("You chose: {} {}", a.icon, a.title)));
    }
    if let Some(p) = &state.photo_attached {
        lines.push(Line::from(format!("Photo: {p}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y: copy entry   h: back to home",
        Style::default().fg(Color::Gray),
    )));
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Memories"));
    f.render_widget(p, area);
}

fn draw_favorites<S: KeyValueStore>(
    area: Rect,
    f: &mut Frame,
    session: &Session<S>,
    state: &UiState,
) {
    let favorites = session.favorites();
    if favorites.is_empty() {
        let p = Paragraph::new(vec![
            Line::from("No favourites yet."),
            Line::from(Span::styled(
                "Press f on a suggested activity to save it here.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Saved Favourites"));
        f.render_widget(p, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let items: Vec<ListItem> = favorites
        .iter()
        .map(|s| {
            ListItem::new(vec![
                Line::from(format!("{} {}", s.icon, s.title)),
                Line::from(Span::styled(
                    format!("    {}", s.benefit),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Saved Favourites ({})", favorites.len())),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.favorites_selected));
    f.render_stateful_widget(list, rows[0], &mut list_state);
    f.render_widget(
        Paragraph::new("d: remove   e: export JSON   y: copy export path   Esc: home")
            .style(Style::default().fg(Color::Gray)),
        rows[1],
    );
}

const FAQ: &[(&str, &str)] = &[
    (
        "What is MindScape?",
        "A small daily check-in: how you feel, how your day went, and one thing you can do about it.",
    ),
    (
        "Where are my favourites stored?",
        "In storage.json inside the data directory. Run with --data-dir to choose another place.",
    ),
    (
        "Is my journal saved?",
        "Journal entries live only for the current session and are cleared when you go home.",
    ),
    (
        "How do I see the tutorial again?",
        "Open the menu with m and pick Tutorial, or press ?.",
    ),
];

fn draw_faq(area: Rect, f: &mut Frame) {
    let mut lines = Vec::new();
    for (q, a) in FAQ {
        lines.push(Line::from(Span::styled(
            *q,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(*a));
        lines.push(Line::from(""));
    }
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("FAQ"));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_cover_the_scale() {
        for v in 1..=SCALE_MAX {
            assert!(!mood_face(v).is_empty());
        }
        assert_ne!(mood_face(1), mood_face(10));
    }

    #[test]
    fn journal_prompt_depends_on_mood() {
        assert_ne!(journal_prompt(Some(2)), journal_prompt(Some(9)));
        assert_eq!(journal_prompt(None), "How was your day?");
    }
}
