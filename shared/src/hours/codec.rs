//! Business hours codec
//!
//! `encode` writes every wire representation the backend still reads;
//! `decode` picks one of them by fixed priority instead of merging.
//! Both are total: malformed input degrades to defaults.

use std::collections::BTreeMap;

use super::compact::{self, CompactHours};
use crate::models::{
    BusinessHoursConfig, BusinessHoursData, BusinessHoursWire, DateAvailability, DayCode,
    TimeAvailability, TimeSlot, WireTimeSlot,
};

/// Build the PUT body for a configuration
pub fn encode(config: &BusinessHoursConfig) -> BusinessHoursWire {
    let specific_days = match config.date_availability {
        DateAvailability::SpecificDays => config
            .specific_days
            .iter()
            .map(|d| d.code().to_string())
            .collect(),
        _ => Vec::new(),
    };

    BusinessHoursWire {
        date_availability: Some(config.date_availability),
        time_availability: Some(config.time_availability),
        specific_days,
        specific_dates: config.active_dates().to_vec(),
        specific_time_slots: to_structured_slots(config),
        day_based_hours: non_empty(to_day_strings(config)),
        date_based_hours: non_empty(to_date_strings(config)),
    }
}

/// Complete slots as structured wire slots
///
/// Only under `SpecificTime`. Rows left in the form after switching to
/// open or closed all day are not sent, otherwise decode would read them
/// back as `SpecificTime`.
pub fn to_structured_slots(config: &BusinessHoursConfig) -> Vec<WireTimeSlot> {
    config
        .complete_slots()
        .map(|slot| WireTimeSlot {
            start: slot.start.trim().to_string(),
            end: slot.end.trim().to_string(),
            max_orders: slot.max_orders_cap(),
        })
        .collect()
}

/// Weekday code -> compact string, for `Everyday` and `SpecificDays`
pub fn to_day_strings(config: &BusinessHoursConfig) -> BTreeMap<String, String> {
    let Some(hours) = compact::encode_hours(config.time_availability, config.complete_slots())
    else {
        return BTreeMap::new();
    };
    config
        .active_days()
        .into_iter()
        .map(|day| (day.code().to_string(), hours.clone()))
        .collect()
}

/// ISO date -> compact string, for `SpecificDates`
pub fn to_date_strings(config: &BusinessHoursConfig) -> BTreeMap<String, String> {
    let Some(hours) = compact::encode_hours(config.time_availability, config.complete_slots())
    else {
        return BTreeMap::new();
    };
    config
        .active_dates()
        .iter()
        .map(|date| (date.clone(), hours.clone()))
        .collect()
}

fn non_empty(map: BTreeMap<String, String>) -> Option<BTreeMap<String, String>> {
    if map.is_empty() { None } else { Some(map) }
}

/// Rebuild the editable configuration from the GET `data` object
pub fn decode(data: Option<&BusinessHoursData>) -> BusinessHoursConfig {
    decode_wire(data.and_then(|d| d.business_hours.as_ref()))
}

/// Decode untyped JSON (`data` object of the GET response).
///
/// Any shape the wire types reject yields the default configuration.
pub fn decode_value(value: &serde_json::Value) -> BusinessHoursConfig {
    match serde_json::from_value::<BusinessHoursData>(value.clone()) {
        Ok(data) => decode(Some(&data)),
        Err(e) => {
            tracing::debug!(error = %e, "Malformed business hours payload, using defaults");
            BusinessHoursConfig::default()
        }
    }
}

/// Rebuild the editable configuration from the business hours payload
pub fn decode_wire(wire: Option<&BusinessHoursWire>) -> BusinessHoursConfig {
    let Some(wire) = wire else {
        return BusinessHoursConfig::default();
    };

    let mut config = BusinessHoursConfig {
        date_availability: wire.date_availability.unwrap_or_default(),
        specific_days: wire
            .specific_days
            .iter()
            .filter_map(|code| DayCode::parse(code))
            .collect(),
        specific_dates: wire.specific_dates.clone(),
        ..Default::default()
    };

    let (time_availability, slots) = from_any_representation(wire);
    config.time_availability = time_availability;
    if let Some(slots) = slots {
        config.time_slots = slots;
    }

    if config.time_availability == TimeAvailability::SpecificTime
        && config.time_slots.iter().all(TimeSlot::is_blank)
    {
        config.time_slots = vec![TimeSlot::blank()];
    }

    config
}

/// Time mode and slots from the highest-priority representation present:
/// structured slots, then weekday strings, then date strings, then the
/// payload's own `timeAvailability`.
fn from_any_representation(wire: &BusinessHoursWire) -> (TimeAvailability, Option<Vec<TimeSlot>>) {
    if !wire.specific_time_slots.is_empty() {
        return (
            TimeAvailability::SpecificTime,
            Some(from_structured_slots(&wire.specific_time_slots)),
        );
    }

    let day_hours = wire
        .day_based_hours
        .as_ref()
        .and_then(first_day_value)
        .or_else(|| wire.date_based_hours.as_ref().and_then(first_value));

    if let Some(hours) = day_hours {
        match compact::parse_hours(hours) {
            CompactHours::Slots(slots) => return (TimeAvailability::SpecificTime, Some(slots)),
            parsed => {
                if let Some(mode) = parsed.time_availability() {
                    return (mode, None);
                }
                tracing::debug!(hours = %hours, "Unrecognized compact hours string");
            }
        }
    }

    (wire.time_availability.unwrap_or_default(), None)
}

fn from_structured_slots(slots: &[WireTimeSlot]) -> Vec<TimeSlot> {
    slots
        .iter()
        .map(|slot| TimeSlot {
            start: slot.start.clone(),
            end: slot.end.clone(),
            max_orders: slot.max_orders.map(|n| n.to_string()).unwrap_or_default(),
        })
        .collect()
}

/// All weekdays are assumed to share one pattern; the first weekday present
/// (Monday first) wins, falling back to the first key for unknown codes.
fn first_day_value(map: &BTreeMap<String, String>) -> Option<&String> {
    DayCode::ALL
        .iter()
        .find_map(|day| map.get(day.code()))
        .or_else(|| first_value(map))
}

fn first_value(map: &BTreeMap<String, String>) -> Option<&String> {
    map.values().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn specific_time(slots: Vec<TimeSlot>) -> BusinessHoursConfig {
        BusinessHoursConfig {
            time_availability: TimeAvailability::SpecificTime,
            time_slots: slots,
            ..Default::default()
        }
    }

    #[test]
    fn test_encode_does_not_touch_input() {
        let config = specific_time(vec![
            TimeSlot::new(" 09:00", "12:00 "),
            TimeSlot::new("13:00", ""),
        ]);
        let before = config.clone();
        let first = encode(&config);
        let second = encode(&config);
        assert_eq!(config, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_residual_slots_ignored_outside_specific_time() {
        let config = BusinessHoursConfig {
            time_slots: vec![TimeSlot::new("09:00", "17:00")],
            ..Default::default()
        };
        let wire = encode(&config);
        assert!(wire.specific_time_slots.is_empty());
        assert_eq!(decode_wire(Some(&wire)).time_availability, TimeAvailability::OpenAllDay);
    }

    #[test]
    fn test_stale_rows_not_sent_when_closed() {
        let config = BusinessHoursConfig {
            time_availability: TimeAvailability::ClosedAllDay,
            time_slots: vec![TimeSlot::new("09:00", "10:00").with_max_orders("5")],
            ..Default::default()
        };
        let json = serde_json::to_value(encode(&config)).unwrap();
        assert_eq!(json["specificTimeSlots"], json!([]));
        assert_eq!(json["dayBasedHours"]["mon"], "closed");
        assert_eq!(
            decode_wire(Some(&encode(&config))).time_availability,
            TimeAvailability::ClosedAllDay
        );
    }

    #[test]
    fn test_specific_time_without_slots_omits_day_map() {
        let wire = encode(&specific_time(vec![TimeSlot::blank()]));
        assert!(wire.specific_time_slots.is_empty());
        assert!(wire.day_based_hours.is_none());
        assert!(wire.date_based_hours.is_none());
    }

    #[test]
    fn test_specific_days_only_selected_codes() {
        let config = BusinessHoursConfig {
            date_availability: DateAvailability::SpecificDays,
            specific_days: [DayCode::Mon, DayCode::Fri].into(),
            specific_dates: vec!["2024-01-01".to_string()],
            time_availability: TimeAvailability::ClosedAllDay,
            ..Default::default()
        };
        let wire = encode(&config);
        assert_eq!(wire.specific_days, vec!["mon", "fri"]);
        assert!(wire.specific_dates.is_empty());
        let days = wire.day_based_hours.unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days["mon"], "closed");
        assert_eq!(days["fri"], "closed");
    }

    #[test]
    fn test_structured_slots_win_over_day_strings() {
        let wire = BusinessHoursWire {
            specific_time_slots: vec![WireTimeSlot {
                start: "10:00".into(),
                end: "14:00".into(),
                max_orders: Some(12),
            }],
            day_based_hours: Some([("mon".to_string(), "closed".to_string())].into()),
            ..Default::default()
        };
        let config = decode_wire(Some(&wire));
        assert_eq!(config.time_availability, TimeAvailability::SpecificTime);
        assert_eq!(
            config.time_slots,
            vec![TimeSlot::new("10:00", "14:00").with_max_orders("12")]
        );
    }

    #[test]
    fn test_day_strings_parsed_into_slots() {
        let wire = BusinessHoursWire {
            day_based_hours: Some(
                [("tue".to_string(), "09:00-12:00:50,14:00-18:00".to_string())].into(),
            ),
            ..Default::default()
        };
        let config = decode_wire(Some(&wire));
        assert_eq!(config.time_availability, TimeAvailability::SpecificTime);
        assert_eq!(
            config.time_slots,
            vec![
                TimeSlot::new("09:00", "12:00").with_max_orders("50"),
                TimeSlot::new("14:00", "18:00"),
            ]
        );
    }

    #[test]
    fn test_heterogeneous_days_use_first_weekday() {
        let wire = BusinessHoursWire {
            day_based_hours: Some(
                [
                    ("fri".to_string(), "closed".to_string()),
                    ("mon".to_string(), "00:00-23:59".to_string()),
                ]
                .into(),
            ),
            ..Default::default()
        };
        assert_eq!(
            decode_wire(Some(&wire)).time_availability,
            TimeAvailability::OpenAllDay
        );
    }

    #[test]
    fn test_blank_slots_fall_back_to_placeholder() {
        let wire = BusinessHoursWire {
            day_based_hours: Some([("mon".to_string(), " - ".to_string())].into()),
            ..Default::default()
        };
        let config = decode_wire(Some(&wire));
        assert_eq!(config.time_availability, TimeAvailability::SpecificTime);
        assert_eq!(config.time_slots, vec![TimeSlot::blank()]);
    }

    #[test]
    fn test_date_strings_decoded_when_no_day_strings() {
        let wire = BusinessHoursWire {
            date_availability: Some(DateAvailability::SpecificDates),
            specific_dates: vec!["2024-12-25".to_string()],
            date_based_hours: Some([("2024-12-25".to_string(), "closed".to_string())].into()),
            ..Default::default()
        };
        let config = decode_wire(Some(&wire));
        assert_eq!(config.date_availability, DateAvailability::SpecificDates);
        assert_eq!(config.specific_dates, vec!["2024-12-25"]);
        assert_eq!(config.time_availability, TimeAvailability::ClosedAllDay);
    }

    #[test]
    fn test_wire_time_mode_used_as_last_resort() {
        let wire = BusinessHoursWire {
            time_availability: Some(TimeAvailability::ClosedAllDay),
            day_based_hours: Some([("mon".to_string(), "later".to_string())].into()),
            ..Default::default()
        };
        assert_eq!(
            decode_wire(Some(&wire)).time_availability,
            TimeAvailability::ClosedAllDay
        );
    }

    #[test]
    fn test_unknown_day_codes_dropped() {
        let wire = BusinessHoursWire {
            date_availability: Some(DateAvailability::SpecificDays),
            specific_days: vec!["mon".into(), "funday".into(), "SAT".into()],
            ..Default::default()
        };
        let config = decode_wire(Some(&wire));
        assert_eq!(config.specific_days, [DayCode::Mon, DayCode::Sat].into());
    }

    #[test]
    fn test_decode_value_malformed_degrades_to_default() {
        let value = json!({ "businessHours": { "dateAvailability": 42 } });
        assert_eq!(decode_value(&value), BusinessHoursConfig::default());
        assert_eq!(decode_value(&json!("nope")), BusinessHoursConfig::default());
        assert_eq!(decode_value(&json!(null)), BusinessHoursConfig::default());
    }

    #[test]
    fn test_decode_value_reads_camel_case_payload() {
        let value = json!({
            "businessHours": {
                "dateAvailability": "specific_days",
                "timeAvailability": "specific_time",
                "specificDays": ["wed"],
                "specificTimeSlots": [{ "start": "08:00", "end": "11:00", "maxOrders": null }]
            }
        });
        let config = decode_value(&value);
        assert_eq!(config.date_availability, DateAvailability::SpecificDays);
        assert_eq!(config.specific_days, [DayCode::Wed].into());
        assert_eq!(config.time_slots, vec![TimeSlot::new("08:00", "11:00")]);
    }
}
