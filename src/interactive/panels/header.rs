use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::{App, View};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tab = |label: &'static str, active: bool| -> Span<'static> {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        }
    };

    let mut spans = vec![
        Span::styled(
            " orgadmin ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if app.view != View::Login {
        spans.push(tab("[1] Dashboard", app.view == View::Dashboard));
        spans.push(Span::raw("  "));
        spans.push(tab(
            "[2] Users",
            matches!(app.view, View::Users | View::UserDetail),
        ));
        spans.push(Span::raw("  "));
        spans.push(tab(
            "[3] Companies",
            matches!(app.view, View::Companies | View::CompanyDetail),
        ));
    }

    // Principal on the right edge
    let principal = app
        .session
        .principal()
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| "not logged in".to_string());
    let left = Line::from(spans);
    let left_width: usize = left.width();
    let padding = (inner.width as usize)
        .saturating_sub(left_width)
        .saturating_sub(principal.len() + 1);

    let mut all = left.spans;
    all.push(Span::raw(" ".repeat(padding)));
    all.push(Span::styled(
        principal,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(Line::from(all)), inner);
}
