use chrono::{DateTime, NaiveDate};

/// Format a catalog date as "January 5, 2025".
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; anything else is returned as
/// given so the card still shows something meaningful.
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim();

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return day.format("%B %-d, %Y").to_string();
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.date_naive().format("%B %-d, %Y").to_string();
    }

    date.to_string()
}
