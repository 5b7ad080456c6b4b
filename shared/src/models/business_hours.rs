//! Business Hours Model
//!
//! Editable configuration held by the merchant settings form, plus the wire
//! payload exchanged with `GET/PUT /merchants/{id}/business-hours`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Which calendar selection is authoritative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateAvailability {
    #[default]
    Everyday,
    SpecificDays,
    SpecificDates,
}

/// How the merchant is open on the selected days/dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeAvailability {
    #[default]
    OpenAllDay,
    ClosedAllDay,
    SpecificTime,
}

/// Weekday code used as key of `dayBasedHours` (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayCode {
    pub const ALL: [DayCode; 7] = [
        DayCode::Mon,
        DayCode::Tue,
        DayCode::Wed,
        DayCode::Thu,
        DayCode::Fri,
        DayCode::Sat,
        DayCode::Sun,
    ];

    /// Wire code ("mon")
    pub const fn code(&self) -> &'static str {
        match self {
            DayCode::Mon => "mon",
            DayCode::Tue => "tue",
            DayCode::Wed => "wed",
            DayCode::Thu => "thu",
            DayCode::Fri => "fri",
            DayCode::Sat => "sat",
            DayCode::Sun => "sun",
        }
    }

    /// Display label ("Mon")
    pub const fn label(&self) -> &'static str {
        match self {
            DayCode::Mon => "Mon",
            DayCode::Tue => "Tue",
            DayCode::Wed => "Wed",
            DayCode::Thu => "Thu",
            DayCode::Fri => "Fri",
            DayCode::Sat => "Sat",
            DayCode::Sun => "Sun",
        }
    }

    /// Parse a wire code, case-insensitive
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for DayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Editable time slot as bound to the form inputs.
///
/// Every field is free text: a half-filled row is a legal form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Start time (HH:MM)
    #[serde(default)]
    pub start: String,
    /// End time (HH:MM)
    #[serde(default)]
    pub end: String,
    /// Order cap, empty = unlimited
    #[serde(default)]
    pub max_orders: String,
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            max_orders: String::new(),
        }
    }

    /// Set the order cap
    pub fn with_max_orders(mut self, max_orders: impl Into<String>) -> Self {
        self.max_orders = max_orders.into();
        self
    }

    /// Empty placeholder row shown when no slot is configured
    pub fn blank() -> Self {
        Self::default()
    }

    /// Both bounds are filled in
    pub fn is_complete(&self) -> bool {
        !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }

    /// Neither bound is filled in
    pub fn is_blank(&self) -> bool {
        self.start.trim().is_empty() && self.end.trim().is_empty()
    }

    /// Order cap as a positive integer; blank, zero and garbage mean unlimited
    pub fn max_orders_cap(&self) -> Option<u32> {
        self.max_orders
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|cap| *cap > 0)
    }
}

/// Business hours configuration edited by the dashboard form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHoursConfig {
    #[serde(default)]
    pub date_availability: DateAvailability,
    /// Only meaningful for `SpecificDays`
    #[serde(default)]
    pub specific_days: BTreeSet<DayCode>,
    /// ISO dates, only meaningful for `SpecificDates`
    #[serde(default)]
    pub specific_dates: Vec<String>,
    #[serde(default)]
    pub time_availability: TimeAvailability,
    /// Only meaningful for `SpecificTime`
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

impl Default for BusinessHoursConfig {
    fn default() -> Self {
        Self {
            date_availability: DateAvailability::Everyday,
            specific_days: BTreeSet::new(),
            specific_dates: Vec::new(),
            time_availability: TimeAvailability::OpenAllDay,
            time_slots: vec![TimeSlot::blank()],
        }
    }
}

impl BusinessHoursConfig {
    /// Weekdays the hours apply to: all seven for `Everyday`, the selection
    /// for `SpecificDays`, none for `SpecificDates`.
    pub fn active_days(&self) -> Vec<DayCode> {
        match self.date_availability {
            DateAvailability::Everyday => DayCode::ALL.to_vec(),
            DateAvailability::SpecificDays => self.specific_days.iter().copied().collect(),
            DateAvailability::SpecificDates => Vec::new(),
        }
    }

    /// Dates the hours apply to; empty unless `SpecificDates`
    pub fn active_dates(&self) -> &[String] {
        match self.date_availability {
            DateAvailability::SpecificDates => &self.specific_dates,
            _ => &[],
        }
    }

    /// Slots with both bounds set; empty unless `SpecificTime`
    pub fn complete_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        let slots: &[TimeSlot] = match self.time_availability {
            TimeAvailability::SpecificTime => &self.time_slots,
            _ => &[],
        };
        slots.iter().filter(|s| s.is_complete())
    }
}

/// Structured slot on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTimeSlot {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    /// `null` = unlimited
    #[serde(default, deserialize_with = "lenient_max_orders")]
    pub max_orders: Option<u32>,
}

/// Business hours payload (request body of PUT, `data.businessHours` of GET)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHoursWire {
    #[serde(default)]
    pub date_availability: Option<DateAvailability>,
    #[serde(default)]
    pub time_availability: Option<TimeAvailability>,
    #[serde(default)]
    pub specific_days: Vec<String>,
    #[serde(default)]
    pub specific_dates: Vec<String>,
    #[serde(default)]
    pub specific_time_slots: Vec<WireTimeSlot>,
    /// Weekday code -> compact hours string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_based_hours: Option<BTreeMap<String, String>>,
    /// ISO date -> compact hours string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_based_hours: Option<BTreeMap<String, String>>,
}

/// `data` object of the GET response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHoursData {
    #[serde(default)]
    pub business_hours: Option<BusinessHoursWire>,
}

/// Accepts `12`, `"12"`, `""` and `null`; anything else that is not a
/// positive integer decodes as unlimited.
fn lenient_max_orders<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    let cap = match raw {
        Some(Raw::Int(n)) => u32::try_from(n).ok(),
        Some(Raw::Float(f)) if f.fract() == 0.0 && f >= 1.0 && f <= u32::MAX as f64 => {
            Some(f as u32)
        }
        Some(Raw::Text(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(cap.filter(|n| *n > 0))
}
