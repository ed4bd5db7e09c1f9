use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Popup, View};
use super::layout::app_layout;
use super::{notifications, panels, popups};

pub fn draw(frame: &mut Frame, app: &App) {
    let visible = app.notifications.iter().filter(|n| !n.dismissed).count();
    let layout = app_layout(frame.size(), visible);

    panels::header::draw(frame, layout.header, app);

    match app.view {
        View::Login => draw_login(frame, layout.main, app),
        View::Dashboard => panels::dashboard::draw_dashboard(frame, layout.main, app),
        View::Users | View::Companies => panels::list::draw_list(frame, layout.main, app),
        View::UserDetail | View::CompanyDetail => {
            panels::detail::draw_detail(frame, layout.main, app)
        }
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    match &app.popup {
        Some(Popup::Help) => popups::help::draw(frame, frame.size()),
        Some(Popup::Confirm(_)) => popups::confirm::draw(frame, frame.size(), app),
        Some(Popup::Form(_)) => popups::form::draw(frame, frame.size(), app),
        Some(Popup::Picker(_)) => popups::picker::draw(frame, frame.size(), app),
        None => {}
    }
}

fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Login ")
        .border_style(Style::default().fg(Color::Cyan));

    let message = if app.loading {
        "Complete the login in your browser..."
    } else {
        "Not logged in"
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(": log in via browser    "),
            Span::styled("q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(": quit"),
        ]),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(body, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Active search input takes over the footer.
    if app.search_active {
        let line = Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(app.search_query.clone()),
            Span::styled("_", Style::default().fg(Color::Yellow)),
            Span::styled(
                "   Enter: apply  Esc: clear",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    let hints = match app.view {
        View::Login => "Enter: login  q: quit",
        View::Dashboard => "2: users  3: companies  r: refresh  o: logout  ?: help  q: quit",
        View::Users | View::Companies => {
            "j/k: move  Enter: detail  /: search  n: new  d: delete  r: refresh  ?: help  q: quit"
        }
        View::UserDetail | View::CompanyDetail => {
            "j/k: move  e: edit  a: add  d: remove  r: refresh  Esc: back  ?: help"
        }
    };

    let mut line = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if !app.search_query.is_empty() {
        line.push(Span::styled(
            format!("   filter: \"{}\"", app.search_query),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(line)), inner);
}
