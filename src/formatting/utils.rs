use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// The resource server serializes timestamps as zone-less ISO-8601
/// (`2024-05-01T12:30:00`), but accept RFC 3339 too.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn format_date(raw: Option<&String>) -> String {
    raw.and_then(|r| parse_timestamp(r))
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Compact relative age, e.g. "3d2h" or "2w".
pub fn format_age(raw: Option<&String>) -> String {
    let Some(created) = raw.and_then(|r| parse_timestamp(r)) else {
        return "-".to_string();
    };

    let duration = Utc::now().signed_duration_since(created);
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    if days >= 7 {
        let weeks = days / 7;
        let remaining_days = days % 7;
        if remaining_days > 0 {
            format!("{}w{}d", weeks, remaining_days)
        } else {
            format!("{}w", weeks)
        }
    } else if days > 0 {
        if hours > 0 {
            format!("{}d{}h", days, hours)
        } else {
            format!("{}d", days)
        }
    } else if hours > 0 {
        format!("{}h", hours)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        "< 1m".to_string()
    }
}
