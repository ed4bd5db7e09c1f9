use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::utils::{format_age, truncate};
use crate::interactive::app::{App, View};

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate(s, width), width = width)
}

/// Draw the entity table for the Users or Companies view. Loading, error,
/// and empty states each short-circuit the table.
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let (title, count) = match app.view {
        View::Users => (" Users ", app.filtered_users.len()),
        View::Companies => (" Companies ", app.filtered_companies.len()),
        _ => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    if app.loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = &app.error_message {
        let error_widget = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(error_widget, area);
        return;
    }

    if count == 0 {
        let message = if app.search_query.is_empty() {
            "Nothing here yet"
        } else {
            "No matches for the current search"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let header_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::UNDERLINED);

    let items: Vec<ListItem> = match app.view {
        View::Users => {
            let header = format!(
                "{} {} {} {} {} {}",
                pad("ID", 6),
                pad("Username", 18),
                pad("Email", 28),
                pad("Name", 20),
                pad("Cos", 4),
                pad("Age", 6),
            );
            std::iter::once(ListItem::new(header).style(header_style))
                .chain(app.filtered_users.iter().enumerate().map(|(i, user)| {
                    let row = format!(
                        "{} {} {} {} {} {}",
                        pad(&user.id.to_string(), 6),
                        pad(&user.username, 18),
                        pad(&user.email, 28),
                        pad(&user.display_name(), 20),
                        pad(&user.company_ids.len().to_string(), 4),
                        pad(&format_age(user.created_at.as_ref()), 6),
                    );
                    style_row(ListItem::new(row), i == app.selected_index)
                }))
                .collect()
        }
        View::Companies => {
            let header = format!(
                "{} {} {} {} {} {}",
                pad("ID", 6),
                pad("Name", 24),
                pad("Industry", 14),
                pad("Size", 8),
                pad("Users", 5),
                pad("Age", 6),
            );
            std::iter::once(ListItem::new(header).style(header_style))
                .chain(app.filtered_companies.iter().enumerate().map(|(i, company)| {
                    let row = format!(
                        "{} {} {} {} {} {}",
                        pad(&company.id.to_string(), 6),
                        pad(&company.name, 24),
                        pad(company.industry.as_deref().unwrap_or("-"), 14),
                        pad(company.company_size.as_deref().unwrap_or("-"), 8),
                        pad(&company.user_ids.len().to_string(), 5),
                        pad(&format_age(company.created_at.as_ref()), 6),
                    );
                    style_row(ListItem::new(row), i == app.selected_index)
                }))
                .collect()
        }
        _ => return,
    };

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(list, area);
}

fn style_row(item: ListItem, selected: bool) -> ListItem {
    if selected {
        item.style(
            Style::default()
                .bg(Color::Rgb(30, 35, 50))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        item
    }
}
