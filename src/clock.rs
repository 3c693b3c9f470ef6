//! Clock Formatting
//!
//! Pure formatting for the time, date and greeting widgets.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub fn format_time(now: NaiveDateTime, twelve_hour: bool, seconds: bool) -> String {
    let pattern = match (twelve_hour, seconds) {
        (false, false) => "%H:%M",
        (false, true) => "%H:%M:%S",
        (true, false) => "%-I:%M %p",
        (true, true) => "%-I:%M:%S %p",
    };
    now.format(pattern).to_string()
}

pub fn format_date(date: NaiveDate, weekday: bool, year: bool) -> String {
    let mut out = String::new();
    if weekday {
        out.push_str(&date.format("%A, ").to_string());
    }
    out.push_str(&date.format("%B %-d").to_string());
    if year {
        out.push_str(&format!(", {}", date.year()));
    }
    out
}

pub fn greeting_for(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        18..=21 => "Good evening",
        _ => "Good night",
    }
}

/// Greeting line, with the name appended when one is set
pub fn greeting(now: NaiveDateTime, name: &str) -> String {
    let base = greeting_for(now.hour());
    let name = name.trim();
    if name.is_empty() {
        base.to_string()
    } else {
        format!("{}, {}", base, name)
    }
}

/// Current local time
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(at(14, 5, 9), false, true), "14:05:09");
        assert_eq!(format_time(at(14, 5, 9), false, false), "14:05");
        assert_eq!(format_time(at(14, 5, 9), true, false), "2:05 PM");
        assert_eq!(format_time(at(0, 30, 0), true, true), "12:30:00 AM");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date, true, true), "Saturday, March 7, 2026");
        assert_eq!(format_date(date, false, false), "March 7");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for(4), "Good night");
        assert_eq!(greeting_for(5), "Good morning");
        assert_eq!(greeting_for(12), "Good afternoon");
        assert_eq!(greeting_for(18), "Good evening");
        assert_eq!(greeting_for(22), "Good night");
    }

    #[test]
    fn test_greeting_with_name() {
        assert_eq!(greeting(at(9, 0, 0), " Ada "), "Good morning, Ada");
        assert_eq!(greeting(at(20, 0, 0), ""), "Good evening");
    }
}
