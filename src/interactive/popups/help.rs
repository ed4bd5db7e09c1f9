use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;

const BINDINGS: &[(&str, &str)] = &[
    ("1 / 2 / 3", "Dashboard / Users / Companies"),
    ("j / k", "Move selection"),
    ("Enter", "Open detail view"),
    ("/", "Search the current list"),
    ("n", "Create a new entity"),
    ("e", "Edit (in a detail view)"),
    ("d", "Delete / remove membership"),
    ("a", "Add membership (in a detail view)"),
    ("r", "Refresh the current view"),
    ("x", "Dismiss notifications"),
    ("o", "Log out (dashboard)"),
    ("q", "Quit"),
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let width: u16 = 52;
    let height: u16 = BINDINGS.len() as u16 + 4;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Blue));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = Vec::new();
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<10}", key),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(*action),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
