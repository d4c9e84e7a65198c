//! Display helpers shared by the dashboard tables.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

pub(crate) fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

pub(crate) fn optional_money(amount: Option<Decimal>) -> String {
    amount.map(money).unwrap_or_else(|| "-".to_string())
}

pub(crate) fn clock(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub(crate) fn date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or("-")
}

/// `None` for blank input, so optional fields are left out of the request.
pub(crate) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(Decimal::from_str("4350.5").unwrap()), "$4350.50");
        assert_eq!(optional_money(None), "-");
    }

    #[test]
    fn test_clock_and_date() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(clock(day.and_hms_opt(9, 5, 0)), "09:05");
        assert_eq!(date(Some(day)), "Mar 4, 2024");
        assert_eq!(date(None), "-");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" Ops ".to_string()), Some("Ops".to_string()));
        assert_eq!(text(&Some(String::new())), "-");
    }
}
