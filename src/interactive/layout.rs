use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Calculate the top-level layout
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(notif_height),
            Constraint::Length(3),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

/// Split a detail view into the entity info card and the membership column.
pub struct DetailLayout {
    pub info: Rect,
    pub members: Rect,
}

pub fn detail_layout(area: Rect) -> DetailLayout {
    if area.width < 90 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(5)])
            .split(area);
        DetailLayout {
            info: chunks[0],
            members: chunks[1],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        DetailLayout {
            info: chunks[0],
            members: chunks[1],
        }
    }
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
