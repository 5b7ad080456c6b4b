//! Business hours availability codec
//!
//! Converts between [`BusinessHoursConfig`](crate::models::BusinessHoursConfig)
//! and the backend payload, which carries three representations at once:
//! structured slots, per-weekday compact strings and per-date compact strings.

pub mod codec;
pub mod compact;
pub mod describe;
pub mod validate;

pub use codec::{
    decode, decode_value, decode_wire, encode, to_date_strings, to_day_strings,
    to_structured_slots,
};
pub use compact::{CLOSED, CompactHours, OPEN_ALL_DAY};
pub use describe::describe_availability;
pub use validate::validate;
