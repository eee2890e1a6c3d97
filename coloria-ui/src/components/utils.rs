use chrono::{DateTime, Utc};

/// Long-form date, e.g. `November 2, 2024`.
pub fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
