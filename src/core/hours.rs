//! Today's opening hours
//!
//! Precomputed weekday descriptions win over raw periods. The weekday is
//! passed in; `today_hours_local` reads it from the local clock.

use chrono::{Datelike, Local, Weekday};
use crate::types::{OpeningHours, TimePoint};

/// Today's hours, if the data covers today
pub fn today_hours(hours: &OpeningHours, today: Weekday) -> Option<String> {
    if let Some(descriptions) = &hours.weekday_descriptions {
        let name = weekday_name(today);
        return descriptions.iter().find(|d| d.starts_with(name)).cloned();
    }

    if let Some(periods) = &hours.periods {
        let index = today.num_days_from_sunday() as u8;
        let period = periods
            .iter()
            .find(|p| p.open.and_then(|o| o.day) == Some(index))?;

        let open = period.open.unwrap_or_default();
        return Some(match period.close {
            Some(close) => format!("{} – {}", format_time(&open), format_time(&close)),
            // No close time: 24h places open at midnight and never close
            None if open.hour.unwrap_or(0) == 0 && open.minute.unwrap_or(0) == 0 => {
                "Open 24 hours".to_string()
            }
            None => format_time(&open),
        });
    }

    None
}

/// Today's hours using the local clock's weekday
pub fn today_hours_local(hours: &OpeningHours) -> Option<String> {
    today_hours(hours, Local::now().weekday())
}

/// 12-hour time, minutes omitted when zero: "9 AM", "5:30 PM"
pub fn format_time(time: &TimePoint) -> String {
    let Some(hour) = time.hour else {
        return String::new();
    };

    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };

    match time.minute {
        Some(m) if m > 0 => format!("{}:{:02} {}", h, m, ampm),
        _ => format!("{} {}", h, ampm),
    }
}

/// English weekday name as used in weekday descriptions
fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
