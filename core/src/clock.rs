//! Wall-clock labels used for timestamps on notes, messages and uploads

use chrono::{Local, NaiveDate, NaiveTime};

/// `09:05 AM` style label.
pub fn time_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

pub fn now_time_label() -> String {
    time_label(Local::now().time())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `Mar 2, 2026` style label.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Mon, Mar 2, 2026` style label used by the schedule header.
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}
