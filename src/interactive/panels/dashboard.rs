use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::utils::format_age;
use crate::interactive::app::App;

pub fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    if app.loading {
        let loading = Paragraph::new("Loading dashboard...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(5),
        ])
        .split(area);

    draw_operator_line(frame, rows[0], app);
    draw_stat_tiles(frame, rows[1], app);
    draw_recent_lists(frame, rows[2], app);
}

fn draw_operator_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.operator {
        Some(me) => Line::from(vec![
            Span::raw(" Signed in as "),
            Span::styled(
                me.username.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" <{}>", me.email),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled(
            " No resource-server record yet - run a sync from the CLI",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_stat_tiles(frame: &mut Frame, area: Rect, app: &App) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    stat_tile(
        frame,
        tiles[0],
        " Total Users ",
        app.stats.total_users,
        Color::Cyan,
    );
    stat_tile(
        frame,
        tiles[1],
        " Total Companies ",
        app.stats.total_companies,
        Color::Magenta,
    );
}

fn stat_tile(frame: &mut Frame, area: Rect, title: &'static str, value: usize, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color));

    let body = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(body, area);
}

fn draw_recent_lists(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let user_items: Vec<ListItem> = app
        .stats
        .recent_users
        .iter()
        .map(|user| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Green)),
                Span::raw(user.username.clone()),
                Span::styled(
                    format!("  {}", format_age(user.created_at.as_ref())),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let users_list = List::new(user_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Users ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(users_list, columns[0]);

    let company_items: Vec<ListItem> = app
        .stats
        .recent_companies
        .iter()
        .map(|company| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Green)),
                Span::raw(company.name.clone()),
                Span::styled(
                    format!("  {}", format_age(company.created_at.as_ref())),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let companies_list = List::new(company_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Companies ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(companies_list, columns[1]);
}
