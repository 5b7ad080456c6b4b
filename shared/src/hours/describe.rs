//! One-line availability summary shown next to the form

use crate::models::{BusinessHoursConfig, DateAvailability, TimeAvailability};

/// Human-readable summary, e.g. "Open at specific times on Mon, Wed"
pub fn describe_availability(config: &BusinessHoursConfig) -> String {
    let prefix = match config.time_availability {
        TimeAvailability::OpenAllDay => "Open 24/7",
        TimeAvailability::ClosedAllDay => "Closed",
        TimeAvailability::SpecificTime => "Open at specific times",
    };

    match config.date_availability {
        DateAvailability::Everyday => format!("{prefix} every day"),
        DateAvailability::SpecificDays => {
            if config.specific_days.is_empty() {
                return "No days selected".to_string();
            }
            let labels: Vec<&str> = config.specific_days.iter().map(|d| d.label()).collect();
            format!("{prefix} on {}", labels.join(", "))
        }
        DateAvailability::SpecificDates => match config.specific_dates.len() {
            0 => "No dates selected".to_string(),
            1 => format!("{prefix} on 1 selected date"),
            n => format!("{prefix} on {n} selected dates"),
        },
    }
}
