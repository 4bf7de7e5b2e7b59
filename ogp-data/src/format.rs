//! Display formatting for the production table and chart axes.

use chrono::{DateTime, NaiveDate, Utc};

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Volume with thousands separators and 0 to 2 decimal places.
///
/// `1234.5` -> `1,234.5`, `1000` -> `1,000`, `2.006` -> `2.01`.
pub fn format_volume(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.2}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut result = String::new();
    if value < 0.0 && rounded != "0.00" {
        result.push('-');
    }
    result.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Y-axis tick label. Ticks are whole numbers.
pub fn format_axis_tick(value: f64) -> String {
    format_volume(value.round())
}

/// Medium date for the table (`2024-01-02` -> `Jan 2, 2024`).
///
/// Full timestamps are reduced to their date; anything unparseable is shown
/// as received.
pub fn format_table_date(date: &str) -> String {
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.format("%b %-d, %Y").to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
        return ts.date_naive().format("%b %-d, %Y").to_string();
    }
    date.to_string()
}

/// "Last updated" stamp shown under the dashboard header.
pub fn format_updated_at(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn volume_grouping_and_decimals() {
        assert_eq!(format_volume(0.0), "0");
        assert_eq!(format_volume(999.0), "999");
        assert_eq!(format_volume(1000.0), "1,000");
        assert_eq!(format_volume(1234.5), "1,234.5");
        assert_eq!(format_volume(1234567.891), "1,234,567.89");
        assert_eq!(format_volume(12.25), "12.25");
        assert_eq!(format_volume(-4500.75), "-4,500.75");
        assert_eq!(format_volume(-0.001), "0");
    }

    #[test]
    fn axis_ticks_are_whole() {
        assert_eq!(format_axis_tick(1100.0), "1,100");
        assert_eq!(format_axis_tick(0.0), "0");
    }

    #[test]
    fn table_dates() {
        assert_eq!(format_table_date("2024-01-02"), "Jan 2, 2024");
        assert_eq!(format_table_date("2023-11-30"), "Nov 30, 2023");
        assert_eq!(format_table_date("2024-03-05T10:00:00Z"), "Mar 5, 2024");
        assert_eq!(format_table_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn updated_at_stamp() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 5).unwrap();
        assert_eq!(format_updated_at(&ts), "2024-06-01 08:30:05 UTC");
    }
}
