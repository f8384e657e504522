//! Formatting helpers for prices, dates and file sizes.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Two-decimal amount without a currency sign (`120.00`).
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Price as shown in the estimate panel and order tables (`$120.00`).
pub fn format_price(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// Whole-dollar revenue figure for the admin summary card.
pub fn format_revenue(value: f64) -> String {
    format!("${value:.0}")
}

/// Current time as an RFC 3339 string (order `createdAt`).
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| OffsetDateTime::UNIX_EPOCH.to_string())
}

/// `DD/MM/YYYY` for an RFC 3339 timestamp; unparseable input is shown as-is.
pub fn format_date(created_at: &str) -> String {
    OffsetDateTime::parse(created_at, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(&format_description!("[day]/[month]/[year]")).ok())
        .unwrap_or_else(|| created_at.to_string())
}

/// Compact UTC slug for generated file names.
pub fn timestamp_slug() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

/// Human file size label stored next to an attached file name.
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.2} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_always_show_cents() {
        assert_eq!(format_price(120.0), "$120.00");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_amount(19.999), "20.00");
        assert_eq!(format_revenue(1234.56), "$1235");
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date("2026-03-04T10:20:30Z"), "04/03/2026");
        assert_eq!(format_date("2026-03-04T10:20:30.123+02:00"), "04/03/2026");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn generated_timestamps_parse_back() {
        let now = now_rfc3339();
        assert!(OffsetDateTime::parse(&now, &Rfc3339).is_ok());
        assert_eq!(timestamp_slug().len(), "20260101_120000".len());
    }

    #[test]
    fn file_sizes_pick_a_unit() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
