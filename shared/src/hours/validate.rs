//! Save-time validation
//!
//! The codec itself never rejects input; callers run this before sending
//! a configuration to the backend.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{BusinessHoursConfig, DateAvailability, TimeAvailability, TimeSlot};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check a configuration is fit to be saved
pub fn validate(config: &BusinessHoursConfig) -> AppResult<()> {
    match config.date_availability {
        DateAvailability::Everyday => {}
        DateAvailability::SpecificDays => {
            if config.specific_days.is_empty() {
                return Err(required("specificDays", "Select at least one day"));
            }
        }
        DateAvailability::SpecificDates => {
            if config.specific_dates.is_empty() {
                return Err(required("specificDates", "Select at least one date"));
            }
            for (index, date) in config.specific_dates.iter().enumerate() {
                if NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).is_err() {
                    return Err(AppError::with_message(
                        ErrorCode::InvalidFormat,
                        format!("Invalid date '{}', expected YYYY-MM-DD", date),
                    )
                    .with_detail("field", "specificDates")
                    .with_detail("index", index));
                }
            }
        }
    }

    if config.time_availability == TimeAvailability::SpecificTime {
        if config.complete_slots().next().is_none() {
            return Err(required("timeSlots", "Add at least one time slot"));
        }
        for (index, slot) in config.time_slots.iter().enumerate() {
            if slot.is_complete() {
                validate_slot(index, slot)?;
            }
        }
    }

    Ok(())
}

fn validate_slot(index: usize, slot: &TimeSlot) -> AppResult<()> {
    let start = parse_time(index, "start", &slot.start)?;
    let end = parse_time(index, "end", &slot.end)?;

    if start >= end {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Slot {} must end after it starts", index + 1),
        )
        .with_detail("field", "timeSlots")
        .with_detail("index", index));
    }

    if !slot.max_orders.trim().is_empty() && slot.max_orders_cap().is_none() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Max orders for slot {} must be a positive number", index + 1),
        )
        .with_detail("field", "maxOrders")
        .with_detail("index", index));
    }

    Ok(())
}

fn parse_time(index: usize, bound: &str, value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid {} time '{}', expected HH:MM", bound, value),
        )
        .with_detail("field", bound)
        .with_detail("index", index)
    })
}

fn required(field: &str, msg: &str) -> AppError {
    AppError::with_message(ErrorCode::RequiredField, msg).with_detail("field", field)
}
