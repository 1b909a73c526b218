//! Menu bar clock formatting

use chrono::{NaiveTime, Timelike};

/// `HH:MM`, zero-padded 24-hour, as `pt-BR` renders `{ hour: "2-digit", minute: "2-digit" }`.
pub fn format_menu_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Build a wall-clock time from browser `Date` parts; out-of-range parts yield `None`.
pub fn menu_clock_from_parts(hour: u32, minute: u32, second: u32) -> Option<String> {
    NaiveTime::from_hms_opt(hour, minute, second).map(format_menu_clock)
}
