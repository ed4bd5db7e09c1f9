use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::interactive::app::{App, PickerKind, Popup};
use crate::interactive::layout::centered_popup;

/// Draw the add-membership picker over the available entities.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(Popup::Picker(picker)) = &app.popup else {
        return;
    };

    let (title, labels): (&str, Vec<String>) = match picker.kind {
        PickerKind::AddCompanyToUser(_) => (
            " Add to Company ",
            app.available_companies
                .iter()
                .map(|c| {
                    format!(
                        "{}{}",
                        c.name,
                        c.industry
                            .as_deref()
                            .map(|i| format!(" / {}", i))
                            .unwrap_or_default()
                    )
                })
                .collect(),
        ),
        PickerKind::AddUserToCompany(_) => (
            " Add Member ",
            app.available_users
                .iter()
                .map(|u| format!("{} <{}>", u.username, u.email))
                .collect(),
        ),
    };

    let width: u16 = 50;
    let height: u16 = (labels.len() as u16 + 4).min(14);
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let item = ListItem::new(label.clone());
            if i == picker.index {
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

    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(List::new(items), list_area);

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "j/k: Move  Enter: Add  Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        hints_area,
    );
}
