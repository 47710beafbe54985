use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// 2024-04-23 -> "23.04.2024"
pub fn swiss_date(d: NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}

pub fn weekday_name(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

/// Column header for the day `offset` days after `first_day`,
/// e.g. "Dienstag, 23.04.2024".
pub fn day_label(first_day: NaiveDate, offset: u32) -> String {
    let d = first_day + chrono::Duration::days(offset as i64);
    format!("{}, {}", weekday_name(d.weekday()), swiss_date(d))
}
