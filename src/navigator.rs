//! Chooses which day the page should show.
//!
//! Before a week is started the calendar decides; once a week is running the
//! first unfinished day wins. Nothing here is persisted.

use crate::models::{AutoAdvance, DayIndex};
use crate::progress::{WeekProgress, is_complete};
use chrono::{Datelike, NaiveDate};

pub const AUTO_ADVANCE_DELAY_MS: u64 = 1000;

/// Monday is day 1, Sunday is day 7.
pub fn suggested_day(today: NaiveDate) -> DayIndex {
    let from_monday = today.weekday().num_days_from_monday() as u8;
    DayIndex::new(from_monday + 1).unwrap_or(DayIndex::FIRST)
}

/// First day below 100%, wrapping to day 1 when the whole week is done.
pub fn first_incomplete_day(progress: &WeekProgress) -> DayIndex {
    DayIndex::all()
        .find(|day| !is_complete(progress, *day))
        .unwrap_or(DayIndex::FIRST)
}

pub fn auto_select(week_start: Option<&str>, today: NaiveDate, progress: &WeekProgress) -> DayIndex {
    match week_start {
        Some(_) => first_incomplete_day(progress),
        None => suggested_day(today),
    }
}

/// Called after a checkbox toggle on `day`. Schedules a move to the next
/// unfinished day once `day` reaches exactly 100%, unless that is `day` itself.
pub fn auto_advance(day: DayIndex, progress: &WeekProgress) -> Option<AutoAdvance> {
    if progress[day.offset()] != 100 {
        return None;
    }
    let target = first_incomplete_day(progress);
    (target != day).then_some(AutoAdvance {
        target,
        delay_ms: AUTO_ADVANCE_DELAY_MS,
    })
}
