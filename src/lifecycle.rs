use crate::codec;
use crate::errors::StoreError;
use crate::models::DayIndex;
use crate::storage::WeekStorage;
use chrono::NaiveDate;
use tracing::info;

/// Clears all seven days. The week start is left as it was.
pub fn reset_all<S: WeekStorage + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    for day in DayIndex::all() {
        codec::clear(store, day)?;
    }
    info!("cleared all days");
    Ok(())
}

/// Clears all days and stamps `today` as the week start. Returns the stored date.
pub fn start_week<S: WeekStorage + ?Sized>(
    store: &mut S,
    today: NaiveDate,
) -> Result<String, StoreError> {
    reset_all(store)?;
    let week_start = today.format("%Y-%m-%d").to_string();
    store.set_week_start(week_start.clone())?;
    info!(%week_start, "started new week");
    Ok(week_start)
}
