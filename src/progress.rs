use crate::models::{DAYS_PER_WEEK, DayIndex, DayState};

/// Percent complete for each day, indexed by `DayIndex::offset`.
pub type WeekProgress = [u8; DAYS_PER_WEEK as usize];

/// Share of `items` checked in `state`, rounded half up. No items counts as 0%.
pub fn percent<I, T>(items: I, state: &DayState) -> u8
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let (total, done) = items.into_iter().fold((0u64, 0u64), |(total, done), item| {
        let checked = u64::from(state.is_checked(item.as_ref()));
        (total + 1, done + checked)
    });
    let total = total.max(1);
    // round(100 * done / total) without floats.
    ((200 * done + total) / (2 * total)) as u8
}

pub fn is_complete(progress: &WeekProgress, day: DayIndex) -> bool {
    progress[day.offset()] >= 100
}
