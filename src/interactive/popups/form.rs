use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::formatting::utils::truncate;
use crate::interactive::app::{App, Popup};
use crate::interactive::layout::centered_popup;

/// Draw the create/edit form popup.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(Popup::Form(form)) = &app.popup else {
        return;
    };

    let width: u16 = 58;
    let height: u16 = form.fields.len() as u16 + 4;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(form.title())
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let max_value_width = (inner.width as usize).saturating_sub(16);

    for (i, field) in form.fields.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height.saturating_sub(1) {
            break;
        }

        let is_active = i == form.active_field;

        let label_style = if is_active {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value_style = if is_active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let indicator = if is_active { "\u{25b6} " } else { "  " };

        let label = if field.required {
            format!("{}*", field.label)
        } else {
            field.label.to_string()
        };

        let value = if field.size_select {
            if field.value.is_empty() {
                "< none >".to_string()
            } else {
                format!("< {} >", field.value)
            }
        } else if field.value.is_empty() {
            if is_active {
                String::new()
            } else {
                "-".to_string()
            }
        } else {
            truncate(&field.value, max_value_width)
        };

        let mut spans = vec![
            Span::styled(indicator, label_style),
            Span::styled(format!("{:<12}", label), label_style),
            Span::styled(value, value_style),
        ];
        if is_active && !field.size_select {
            spans.push(Span::styled("_", Style::default().fg(Color::Green)));
        }

        let row_area = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    let hint = if form.submitting {
        "Submitting..."
    } else {
        "Tab: Next field  ←/→: Cycle size  Enter: Save  Esc: Cancel"
    };
    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints_widget = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints_widget, hints_area);
}
