use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::formatting::utils::format_date;
use crate::interactive::app::{App, View};
use crate::interactive::layout::detail_layout;

pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let layout = detail_layout(area);
    match app.view {
        View::UserDetail => {
            draw_user_info(frame, layout.info, app);
            draw_user_memberships(frame, layout.members, app);
        }
        View::CompanyDetail => {
            draw_company_info(frame, layout.info, app);
            draw_company_members(frame, layout.members, app);
        }
        _ => {}
    }
}

fn info_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
}

fn label_line(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn draw_user_info(frame: &mut Frame, area: Rect, app: &App) {
    let block = info_block(" User ");

    let Some(user) = &app.detail_user else {
        let empty = Paragraph::new("No user selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let title_line = Line::from(vec![Span::styled(
        format!("#{} {}", user.id, user.username),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]);

    let mut lines = vec![title_line, Line::from("")];
    lines.push(label_line("Email", user.email.clone(), Color::White));
    let name = user.display_name();
    if !name.is_empty() {
        lines.push(label_line("Name", name, Color::White));
    }
    lines.push(label_line(
        "Created",
        format_date(user.created_at.as_ref()),
        Color::Gray,
    ));
    lines.push(label_line(
        "Updated",
        format_date(user.updated_at.as_ref()),
        Color::Gray,
    ));
    lines.push(label_line(
        "Companies",
        user.company_ids.len().to_string(),
        Color::Green,
    ));

    let info = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(info, area);
}

fn draw_company_info(frame: &mut Frame, area: Rect, app: &App) {
    let block = info_block(" Company ");

    let Some(company) = &app.detail_company else {
        let empty = Paragraph::new("No company selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let title_line = Line::from(vec![Span::styled(
        format!("#{} {}", company.id, company.name),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]);

    let mut lines = vec![title_line, Line::from("")];
    if let Some(address) = &company.address {
        lines.push(label_line("Address", address.clone(), Color::White));
    }
    if let Some(industry) = &company.industry {
        lines.push(label_line("Industry", industry.clone(), Color::Magenta));
    }
    if let Some(size) = &company.company_size {
        lines.push(label_line("Size", format!("{} employees", size), Color::White));
    }
    lines.push(label_line(
        "Created",
        format_date(company.created_at.as_ref()),
        Color::Gray,
    ));
    lines.push(label_line(
        "Updated",
        format_date(company.updated_at.as_ref()),
        Color::Gray,
    ));
    lines.push(label_line(
        "Members",
        company.user_ids.len().to_string(),
        Color::Green,
    ));

    let info = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(info, area);
}

fn draw_user_memberships(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Companies ({}) / {} available ",
        app.related_companies.len(),
        app.available_companies.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.related_companies.is_empty() {
        let empty = Paragraph::new("No companies assigned - press 'a' to add one")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .related_companies
        .iter()
        .enumerate()
        .map(|(i, company)| {
            let line = Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Green)),
                Span::raw(company.name.clone()),
                Span::styled(
                    company
                        .industry
                        .as_deref()
                        .map(|ind| format!("  ({})", ind))
                        .unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let item = ListItem::new(line);
            if i == app.member_index {
                item.style(
                    Style::default()
                        .bg(Color::Rgb(30, 35, 50))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_company_members(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Members ({}) / {} available ",
        app.member_users.len(),
        app.available_users.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.member_users.is_empty() {
        let empty = Paragraph::new("No members - press 'a' to add one")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .member_users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let line = Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Green)),
                Span::raw(user.username.clone()),
                Span::styled(
                    format!("  <{}>", user.email),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let item = ListItem::new(line);
            if i == app.member_index {
                item.style(
                    Style::default()
                        .bg(Color::Rgb(30, 35, 50))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
