//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date in long form (like "January 5, 2024")
pub fn long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}

/// Generate a <time> HTML element with a preformatted label
pub fn time_tag<Tz: TimeZone>(date: &DateTime<Tz>, label: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(r#"<time datetime="{}">{}</time>"#, date_xml(date), label)
}
