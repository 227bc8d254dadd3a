//! Day state persistence: one compact JSON object per day.

use crate::errors::StoreError;
use crate::models::{DayIndex, DayState};
use crate::storage::WeekStorage;
use tracing::warn;

/// Decodes a stored day blob. Anything that is not a JSON object yields an empty state.
pub fn decode(raw: &str) -> Option<DayState> {
    serde_json::from_str(raw).ok()
}

pub fn encode(state: &DayState) -> String {
    // A map of string keys to booleans always serializes.
    serde_json::to_string(state).unwrap_or_else(|_| String::from("{}"))
}

/// Loads a day's state. Missing or corrupt entries read as empty; only store
/// failures are returned as errors.
pub fn load<S: WeekStorage + ?Sized>(store: &S, day: DayIndex) -> Result<DayState, StoreError> {
    let Some(raw) = store.get_day(day)? else {
        return Ok(DayState::new());
    };
    Ok(decode(&raw).unwrap_or_else(|| {
        warn!(%day, "discarding unreadable day state");
        DayState::new()
    }))
}

pub fn save<S: WeekStorage + ?Sized>(
    store: &mut S,
    day: DayIndex,
    state: &DayState,
) -> Result<(), StoreError> {
    store.set_day(day, encode(state))
}

/// Removes the day's entry. Reads the same as an empty state afterwards.
pub fn clear<S: WeekStorage + ?Sized>(store: &mut S, day: DayIndex) -> Result<(), StoreError> {
    store.remove_day(day)
}
