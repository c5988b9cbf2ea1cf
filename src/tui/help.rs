use super::state::{UiState, MENU};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

fn key_line(key: &str, pad: usize, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key.to_string(), Style::default().fg(Color::Magenta)),
        Span::raw(format!("{:pad$}{what}", "")),
    ])
}

/// Center a `width`% x `height`% box inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height) / 2),
            Constraint::Percentage(height),
            Constraint::Percentage((100 - height) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .split(vertical[1])[1]
}

/// First-run walkthrough, also reachable from the menu.
pub fn draw_tutorial(area: Rect, f: &mut Frame) {
    let area = centered(area, 70, 80);
    let p = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to MindScape",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Check in: pick how you feel and rate your day."),
        Line::from("2. Write a few lines in your journal, or skip ahead."),
        Line::from("3. Choose an activity that suits your mood. Star the ones you like."),
        Line::from("4. Attach a photo of what you did, then look back at your day."),
        Line::from(""),
        Line::from("Keybinds:"),
        key_line("←/→", 9, "Mood"),
        key_line("↑/↓", 9, "Day rating / move in lists"),
        key_line("Enter", 7, "Confirm"),
        key_line("Esc", 9, "Back"),
        key_line("m", 11, "Menu (F2 while typing)"),
        key_line("h", 11, "Home (F3 while typing)"),
        key_line("f", 11, "Favourite the selected activity"),
        key_line("?", 11, "Show this tutorial (F1 while typing)"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("q", Style::default().fg(Color::Magenta)),
            Span::raw(" / "),
            Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
            Span::raw("  Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(Color::Green),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title("Tutorial"));
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

/// Navigation menu drawn over the right edge of the screen.
pub fn draw_menu(area: Rect, f: &mut Frame, state: &UiState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(area);
    let items: Vec<ListItem> = MENU
        .iter()
        .map(|(label, _)| ListItem::new(Line::from(*label)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("MindScape Menu"),
        )
        .highlight_style(Style::default().fg(Color::Green))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.menu_selected));
    f.render_widget(Clear, cols[1]);
    f.render_stateful_widget(list, cols[1], &mut list_state);
}
