use crate::codec;
use crate::errors::{ImportError, StoreError};
use crate::models::{DayIndex, WeekSnapshot};
use crate::storage::WeekStorage;
use chrono::NaiveDate;
use serde_json::Value;

pub fn dump<S: WeekStorage + ?Sized>(store: &S) -> Result<WeekSnapshot, StoreError> {
    let mut snapshot = WeekSnapshot {
        week_start: store.week_start()?,
        ..WeekSnapshot::default()
    };
    for day in DayIndex::all() {
        snapshot.set_day(day, codec::load(store, day)?);
    }
    Ok(snapshot)
}

/// Writes the snapshot's week start (when set) and every day it carries.
/// Days missing from the snapshot keep their stored state.
pub fn restore<S: WeekStorage + ?Sized>(
    store: &mut S,
    snapshot: &WeekSnapshot,
) -> Result<(), StoreError> {
    if let Some(week_start) = &snapshot.week_start {
        store.set_week_start(week_start.clone())?;
    }
    for day in DayIndex::all() {
        if let Some(state) = snapshot.day(day) {
            codec::save(store, day, state)?;
        }
    }
    Ok(())
}

/// Parses and validates an export document without touching any store.
pub fn parse(text: &str) -> Result<WeekSnapshot, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(ImportError::NotAnObject);
    }
    let mut snapshot: WeekSnapshot = serde_json::from_value(value)?;
    // An empty week start carries no date, same as null.
    if snapshot.week_start.as_deref() == Some("") {
        snapshot.week_start = None;
    }
    if let Some(week_start) = &snapshot.week_start {
        if NaiveDate::parse_from_str(week_start, "%Y-%m-%d").is_err() {
            return Err(ImportError::WeekStart(week_start.clone()));
        }
    }
    Ok(snapshot)
}

/// Parses the whole payload first, so a rejected import writes nothing.
pub fn import<S: WeekStorage + ?Sized>(store: &mut S, text: &str) -> Result<WeekSnapshot, ImportError> {
    let snapshot = parse(text)?;
    restore(store, &snapshot)?;
    Ok(snapshot)
}

pub fn to_pretty_json(snapshot: &WeekSnapshot) -> Result<String, StoreError> {
    serde_json::to_string_pretty(snapshot).map_err(|err| StoreError::Unavailable(err.to_string()))
}

pub fn export_filename(week_start: Option<&str>, today: NaiveDate) -> String {
    match week_start {
        Some(week_start) => format!("workout-backup-week-{week_start}.json"),
        None => format!("workout-backup-{}.json", today.format("%Y-%m-%d")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayState;
    use crate::storage::MemoryStore;

    fn day(n: u8) -> DayIndex {
        DayIndex::new(n).unwrap()
    }

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::default();
        store.set_week_start("2026-01-05".into()).unwrap();
        let state: DayState = [("bench", true), ("dips", false)].into_iter().collect();
        codec::save(&mut store, day(1), &state).unwrap();
        codec::save(&mut store, day(4), &[("walk", true)].into_iter().collect()).unwrap();
        store
    }

    #[test]
    fn dump_includes_every_day() {
        let snapshot = dump(&seeded_store()).unwrap();
        assert_eq!(snapshot.week_start.as_deref(), Some("2026-01-05"));
        for d in DayIndex::all() {
            assert!(snapshot.day(d).is_some(), "day {d} missing");
        }
        assert!(snapshot.day(day(1)).unwrap().is_checked("bench"));
        assert!(snapshot.day(day(2)).unwrap().is_empty());
    }

    #[test]
    fn export_then_import_restores_identical_state() {
        let source = seeded_store();
        let text = to_pretty_json(&dump(&source).unwrap()).unwrap();

        let mut target = MemoryStore::default();
        import(&mut target, &text).unwrap();
        assert_eq!(dump(&target).unwrap(), dump(&source).unwrap());
    }

    #[test]
    fn malformed_import_leaves_store_untouched() {
        let mut store = seeded_store();
        let before = store.clone();

        assert!(matches!(import(&mut store, "{\"day1\": "), Err(ImportError::Malformed(_))));
        assert!(import(&mut store, r#"{"day1": {"a": true}, "day2": 5}"#).is_err());
        assert!(matches!(import(&mut store, "[]"), Err(ImportError::NotAnObject)));
        assert_eq!(store, before);
    }

    #[test]
    fn bad_week_start_is_rejected_before_writing() {
        let mut store = seeded_store();
        let before = store.clone();
        let result = import(&mut store, r#"{"weekStart": "next monday", "day1": {"a": true}}"#);
        assert!(matches!(result, Err(ImportError::WeekStart(_))));
        assert_eq!(store, before);
    }

    #[test]
    fn empty_week_start_is_skipped_like_null() {
        let mut store = seeded_store();
        let snapshot = import(&mut store, r#"{"weekStart": "", "day3": {"squat": true}}"#).unwrap();

        assert_eq!(snapshot.week_start, None);
        assert_eq!(store.week_start().unwrap().as_deref(), Some("2026-01-05"));
        assert!(codec::load(&store, day(3)).unwrap().is_checked("squat"));
    }

    #[test]
    fn sparse_import_leaves_missing_days_and_week_start_alone() {
        let mut store = seeded_store();
        import(&mut store, r#"{"weekStart": null, "day2": {"row": true}}"#).unwrap();

        assert_eq!(store.week_start().unwrap().as_deref(), Some("2026-01-05"));
        assert!(codec::load(&store, day(1)).unwrap().is_checked("bench"));
        assert!(codec::load(&store, day(2)).unwrap().is_checked("row"));
        assert!(codec::load(&store, day(4)).unwrap().is_checked("walk"));
    }

    #[test]
    fn filename_prefers_week_start() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(
            export_filename(Some("2026-01-05"), today),
            "workout-backup-week-2026-01-05.json"
        );
        assert_eq!(export_filename(None, today), "workout-backup-2026-01-09.json");
    }
}
