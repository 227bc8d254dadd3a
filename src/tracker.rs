use crate::codec;
use crate::errors::{StoreError, TrackerError};
use crate::lifecycle;
use crate::models::{DayIndex, DayState, DayUpdate, DayView, ItemView, WeekSnapshot, WeekView};
use crate::navigator;
use crate::plan::Plan;
use crate::progress::{self, WeekProgress};
use crate::snapshot;
use crate::storage::{KeyValueStore, WeekStorage};
use chrono::NaiveDate;
use tracing::{debug, info};

pub struct Export {
    pub filename: String,
    pub snapshot: WeekSnapshot,
}

/// Week checklist operations over a store and a plan.
///
/// Each call reads what it needs from the store, writes its changes back, and
/// returns the refreshed state the page should render.
pub struct Tracker<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
    plan: &'a Plan,
}

impl<'a, S: KeyValueStore + ?Sized> Tracker<'a, S> {
    pub fn new(store: &'a mut S, plan: &'a Plan) -> Self {
        Self { store, plan }
    }

    pub fn day_state(&self, day: DayIndex) -> Result<DayState, StoreError> {
        codec::load(&*self.store, day)
    }

    pub fn percent(&self, day: DayIndex) -> Result<u8, StoreError> {
        let state = self.day_state(day)?;
        Ok(progress::percent(self.plan.day(day).item_ids(), &state))
    }

    pub fn progress(&self) -> Result<WeekProgress, StoreError> {
        let mut week = WeekProgress::default();
        for day in DayIndex::all() {
            week[day.offset()] = self.percent(day)?;
        }
        Ok(week)
    }

    pub fn week_start(&self) -> Result<Option<String>, StoreError> {
        self.store.week_start()
    }

    pub fn auto_select(&self, today: NaiveDate) -> Result<DayIndex, StoreError> {
        let week_start = self.week_start()?;
        Ok(navigator::auto_select(week_start.as_deref(), today, &self.progress()?))
    }

    pub fn week_view(&self, today: NaiveDate) -> Result<WeekView, StoreError> {
        let week_start = self.week_start()?;
        let progress = self.progress()?;
        let days = DayIndex::all()
            .map(|day| self.day_view(day))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WeekView {
            week_label: match &week_start {
                Some(date) => format!("Week started: {date}"),
                None => String::from("Start a new week to track."),
            },
            active_day: navigator::auto_select(week_start.as_deref(), today, &progress),
            suggested_day: navigator::suggested_day(today),
            week_start,
            days,
        })
    }

    /// Sets one item's flag. Reaching exactly 100% schedules an advance to the
    /// next unfinished day.
    pub fn toggle_item(
        &mut self,
        day: DayIndex,
        item: &str,
        checked: bool,
    ) -> Result<DayUpdate, TrackerError> {
        if !self.plan.day(day).contains(item) {
            return Err(TrackerError::UnknownItem {
                day,
                item: item.to_owned(),
            });
        }
        let mut state = self.day_state(day)?;
        state.set(item, checked);
        codec::save(&mut *self.store, day, &state)?;
        debug!(%day, item, checked, "toggled item");

        let percents = self.progress()?;
        let auto_advance = navigator::auto_advance(day, &percents);
        Ok(DayUpdate {
            day: self.day_view(day)?,
            percents,
            auto_advance,
        })
    }

    pub fn check_all(&mut self, day: DayIndex) -> Result<DayUpdate, TrackerError> {
        self.set_all(day, true)
    }

    pub fn uncheck_all(&mut self, day: DayIndex) -> Result<DayUpdate, TrackerError> {
        self.set_all(day, false)
    }

    pub fn reset_day(&mut self, day: DayIndex) -> Result<DayUpdate, TrackerError> {
        codec::clear(&mut *self.store, day)?;
        info!(%day, "reset day");
        self.day_update(day)
    }

    pub fn reset_all(&mut self, today: NaiveDate) -> Result<WeekView, TrackerError> {
        lifecycle::reset_all(&mut *self.store)?;
        Ok(self.week_view(today)?)
    }

    pub fn start_week(&mut self, today: NaiveDate) -> Result<WeekView, TrackerError> {
        lifecycle::start_week(&mut *self.store, today)?;
        Ok(self.week_view(today)?)
    }

    pub fn export(&self, today: NaiveDate) -> Result<Export, StoreError> {
        let snapshot = snapshot::dump(&*self.store)?;
        Ok(Export {
            filename: snapshot::export_filename(snapshot.week_start.as_deref(), today),
            snapshot,
        })
    }

    /// Restores a previously exported document. Nothing is written unless the
    /// whole payload parses.
    pub fn import(&mut self, text: &str, today: NaiveDate) -> Result<WeekView, TrackerError> {
        let snapshot = snapshot::import(&mut *self.store, text)?;
        let restored = DayIndex::all().filter(|day| snapshot.day(*day).is_some()).count();
        info!(restored, week_start = ?snapshot.week_start, "imported week snapshot");
        Ok(self.week_view(today)?)
    }

    fn set_all(&mut self, day: DayIndex, checked: bool) -> Result<DayUpdate, TrackerError> {
        let mut state = self.day_state(day)?;
        for item in self.plan.day(day).item_ids() {
            state.set(item, checked);
        }
        codec::save(&mut *self.store, day, &state)?;
        debug!(%day, checked, "set all items");
        self.day_update(day)
    }

    fn day_update(&self, day: DayIndex) -> Result<DayUpdate, TrackerError> {
        Ok(DayUpdate {
            day: self.day_view(day)?,
            percents: self.progress()?,
            auto_advance: None,
        })
    }

    fn day_view(&self, day: DayIndex) -> Result<DayView, StoreError> {
        let plan = self.plan.day(day);
        let state = self.day_state(day)?;
        Ok(DayView {
            day,
            title: plan.title.clone(),
            percent: progress::percent(plan.item_ids(), &state),
            items: plan
                .items
                .iter()
                .map(|item| ItemView {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    checked: state.is_checked(&item.id),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ImportError;
    use crate::storage::MemoryStore;

    fn day(n: u8) -> DayIndex {
        DayIndex::new(n).unwrap()
    }

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
    }

    fn item_ids(plan: &Plan, d: DayIndex) -> Vec<String> {
        plan.day(d).item_ids().map(str::to_owned).collect()
    }

    #[test]
    fn toggle_updates_state_and_percent() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);
        let first = item_ids(&plan, day(1)).remove(0);

        let update = tracker.toggle_item(day(1), &first, true).unwrap();
        assert!(update.day.items[0].checked);
        assert_eq!(update.day.percent, 20);
        assert_eq!(update.percents[0], 20);
        assert!(update.auto_advance.is_none());
        assert!(tracker.day_state(day(1)).unwrap().is_checked(&first));
    }

    #[test]
    fn toggle_rejects_unknown_item() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);

        let err = tracker.toggle_item(day(2), "bench-press", true).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownItem { .. }));
        assert!(store.get_day(day(2)).unwrap().is_none());
    }

    #[test]
    fn completing_day_by_toggle_schedules_advance() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);
        let ids = item_ids(&plan, day(1));

        let (last, rest) = ids.split_last().unwrap();
        for id in rest {
            tracker.toggle_item(day(1), id, true).unwrap();
        }
        let update = tracker.toggle_item(day(1), last, true).unwrap();
        assert_eq!(update.day.percent, 100);
        assert_eq!(update.auto_advance.map(|a| a.target), Some(day(2)));
    }

    #[test]
    fn check_all_completes_without_advancing() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);

        let update = tracker.check_all(day(3)).unwrap();
        assert_eq!(update.day.percent, 100);
        assert!(update.auto_advance.is_none());

        let update = tracker.uncheck_all(day(3)).unwrap();
        assert_eq!(update.day.percent, 0);
        assert!(!tracker.day_state(day(3)).unwrap().is_empty());
    }

    #[test]
    fn reset_day_removes_stored_entry() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);
        tracker.check_all(day(4)).unwrap();

        let update = tracker.reset_day(day(4)).unwrap();
        assert_eq!(update.day.percent, 0);
        assert!(store.get_day(day(4)).unwrap().is_none());
    }

    #[test]
    fn week_view_picks_calendar_day_before_week_starts() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let tracker = Tracker::new(&mut store, &plan);

        let view = tracker.week_view(wednesday()).unwrap();
        assert_eq!(view.active_day, day(3));
        assert_eq!(view.suggested_day, day(3));
        assert_eq!(view.week_label, "Start a new week to track.");
        assert_eq!(view.days.len(), 7);
    }

    #[test]
    fn start_week_then_complete_days_moves_active_day() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);
        tracker.check_all(day(5)).unwrap();

        let view = tracker.start_week(wednesday()).unwrap();
        assert_eq!(view.week_start.as_deref(), Some("2026-01-07"));
        assert_eq!(view.week_label, "Week started: 2026-01-07");
        assert_eq!(view.active_day, day(1));
        assert!(view.days.iter().all(|d| d.percent == 0));

        tracker.check_all(day(1)).unwrap();
        tracker.check_all(day(2)).unwrap();
        assert_eq!(tracker.auto_select(wednesday()).unwrap(), day(3));
    }

    #[test]
    fn reset_all_keeps_week_start() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);
        tracker.start_week(wednesday()).unwrap();
        tracker.check_all(day(1)).unwrap();

        let view = tracker.reset_all(wednesday()).unwrap();
        assert_eq!(view.week_start.as_deref(), Some("2026-01-07"));
        assert!(view.days.iter().all(|d| d.percent == 0));
    }

    #[test]
    fn export_import_round_trip_preserves_percents() {
        let plan = Plan::default();
        let mut source = MemoryStore::default();
        let mut tracker = Tracker::new(&mut source, &plan);
        tracker.start_week(wednesday()).unwrap();
        tracker.check_all(day(1)).unwrap();
        let second = item_ids(&plan, day(2)).remove(1);
        tracker.toggle_item(day(2), &second, true).unwrap();
        let before = tracker.progress().unwrap();
        let export = tracker.export(wednesday()).unwrap();
        assert_eq!(export.filename, "workout-backup-week-2026-01-07.json");

        let text = snapshot::to_pretty_json(&export.snapshot).unwrap();
        let mut target = MemoryStore::default();
        let mut restored = Tracker::new(&mut target, &plan);
        let view = restored.import(&text, wednesday()).unwrap();
        assert_eq!(restored.progress().unwrap(), before);
        assert_eq!(view.active_day, day(2));
        assert_eq!(snapshot::dump(&target).unwrap(), snapshot::dump(&source).unwrap());
    }

    #[test]
    fn invalid_import_reports_failure_and_changes_nothing() {
        let plan = Plan::default();
        let mut store = MemoryStore::default();
        let mut tracker = Tracker::new(&mut store, &plan);
        tracker.start_week(wednesday()).unwrap();
        tracker.check_all(day(2)).unwrap();
        let before = tracker.export(wednesday()).unwrap().snapshot;

        let err = tracker.import("{ definitely not json", wednesday()).unwrap_err();
        assert!(matches!(err, TrackerError::Import(ImportError::Malformed(_))));
        assert_eq!(tracker.export(wednesday()).unwrap().snapshot, before);
    }
}
