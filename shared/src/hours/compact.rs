//! Compact hours strings
//!
//! One string per weekday or date: `"closed"`, `"00:00-23:59"`, or a
//! comma-joined list of `HH:MM-HH:MM` ranges, each with an optional
//! `:N` order cap (`"09:00-12:00:50,14:00-18:00"`).

use crate::models::{TimeAvailability, TimeSlot};

/// Open around the clock
pub const OPEN_ALL_DAY: &str = "00:00-23:59";
/// Closed for the whole day
pub const CLOSED: &str = "closed";

/// Colons inside a bare `HH:MM-HH:MM` range
///
/// Times are `HH:MM` only. A seconds field (`HH:MM:SS`) adds colons and
/// its last part would be read as the order cap.
const RANGE_COLONS: usize = 2;

/// Parsed compact string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompactHours {
    OpenAllDay,
    Closed,
    Slots(Vec<TimeSlot>),
    Unrecognized,
}

impl CompactHours {
    /// Time mode this string stands for, if any
    pub fn time_availability(&self) -> Option<TimeAvailability> {
        match self {
            CompactHours::OpenAllDay => Some(TimeAvailability::OpenAllDay),
            CompactHours::Closed => Some(TimeAvailability::ClosedAllDay),
            CompactHours::Slots(_) => Some(TimeAvailability::SpecificTime),
            CompactHours::Unrecognized => None,
        }
    }
}

/// Encode one day's hours. `None` when `SpecificTime` has no complete slot,
/// in which case the day is left out of the map.
pub fn encode_hours<'a, I>(time_availability: TimeAvailability, slots: I) -> Option<String>
where
    I: IntoIterator<Item = &'a TimeSlot>,
{
    match time_availability {
        TimeAvailability::OpenAllDay => Some(OPEN_ALL_DAY.to_string()),
        TimeAvailability::ClosedAllDay => Some(CLOSED.to_string()),
        TimeAvailability::SpecificTime => {
            let segments: Vec<String> = slots
                .into_iter()
                .filter(|s| s.is_complete())
                .map(encode_segment)
                .collect();
            if segments.is_empty() {
                None
            } else {
                Some(segments.join(","))
            }
        }
    }
}

fn encode_segment(slot: &TimeSlot) -> String {
    let range = format!("{}-{}", slot.start.trim(), slot.end.trim());
    match slot.max_orders_cap() {
        Some(cap) => format!("{range}:{cap}"),
        None => range,
    }
}

/// Parse one compact string
pub fn parse_hours(value: &str) -> CompactHours {
    let value = value.trim();
    if value == OPEN_ALL_DAY {
        return CompactHours::OpenAllDay;
    }
    if value.eq_ignore_ascii_case(CLOSED) {
        return CompactHours::Closed;
    }
    if !value.contains('-') {
        return CompactHours::Unrecognized;
    }

    let slots = value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect();
    CompactHours::Slots(slots)
}

/// `"09:00-12:00:50"` -> start `09:00`, end `12:00`, cap `50`
fn parse_segment(segment: &str) -> TimeSlot {
    let (range, max_orders) = if segment.matches(':').count() > RANGE_COLONS {
        match segment.rsplit_once(':') {
            Some((range, cap)) => (range, cap.trim()),
            None => (segment, ""),
        }
    } else {
        (segment, "")
    };

    let (start, end) = range.split_once('-').unwrap_or((range, ""));
    TimeSlot {
        start: start.trim().to_string(),
        end: end.trim().to_string(),
        max_orders: max_orders.to_string(),
    }
}
