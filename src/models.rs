use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub const DAYS_PER_WEEK: u8 = 7;

/// One of the seven workout slots, 1 through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayIndex(u8);

impl DayIndex {
    pub const FIRST: DayIndex = DayIndex(1);

    pub fn new(day: u8) -> Option<Self> {
        (1..=DAYS_PER_WEEK).contains(&day).then_some(Self(day))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing per-day arrays.
    pub fn offset(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = DayIndex> {
        (1..=DAYS_PER_WEEK).map(DayIndex)
    }
}

impl TryFrom<u8> for DayIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("day must be between 1 and {DAYS_PER_WEEK}, got {value}"))
    }
}

impl From<DayIndex> for u8 {
    fn from(day: DayIndex) -> Self {
        day.0
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion flags for one day, keyed by item id. A missing id means "not done".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DayState(BTreeMap<String, bool>);

impl DayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, item: &str) -> bool {
        self.0.get(item).copied().unwrap_or(false)
    }

    pub fn set(&mut self, item: impl Into<String>, checked: bool) {
        self.0.insert(item.into(), checked);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for DayState {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// Entries whose value is not a boolean carry no completion flag and are dropped.
impl<'de> Deserialize<'de> for DayState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(item, value)| value.as_bool().map(|checked| (item, checked)))
            .collect())
    }
}

/// Whole-week export/import document.
///
/// Exports always carry all seven days. On import a missing or `null` day
/// leaves that day's stored state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSnapshot {
    #[serde(rename = "weekStart", default)]
    pub week_start: Option<String>,
    #[serde(default)]
    pub day1: Option<DayState>,
    #[serde(default)]
    pub day2: Option<DayState>,
    #[serde(default)]
    pub day3: Option<DayState>,
    #[serde(default)]
    pub day4: Option<DayState>,
    #[serde(default)]
    pub day5: Option<DayState>,
    #[serde(default)]
    pub day6: Option<DayState>,
    #[serde(default)]
    pub day7: Option<DayState>,
}

impl WeekSnapshot {
    pub fn day(&self, day: DayIndex) -> Option<&DayState> {
        match day.get() {
            1 => self.day1.as_ref(),
            2 => self.day2.as_ref(),
            3 => self.day3.as_ref(),
            4 => self.day4.as_ref(),
            5 => self.day5.as_ref(),
            6 => self.day6.as_ref(),
            _ => self.day7.as_ref(),
        }
    }

    pub fn set_day(&mut self, day: DayIndex, state: DayState) {
        let slot = match day.get() {
            1 => &mut self.day1,
            2 => &mut self.day2,
            3 => &mut self.day3,
            4 => &mut self.day4,
            5 => &mut self.day5,
            6 => &mut self.day6,
            _ => &mut self.day7,
        };
        *slot = Some(state);
    }
}

/// Deferred switch to another day, to be honoured by the page after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAdvance {
    pub target: DayIndex,
    pub delay_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub item: String,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: DayIndex,
    pub title: String,
    pub percent: u8,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Serialize)]
pub struct WeekView {
    pub week_start: Option<String>,
    pub week_label: String,
    pub active_day: DayIndex,
    pub suggested_day: DayIndex,
    pub days: Vec<DayView>,
}

/// Result of a single-day action: the new state plus what the page should refresh.
#[derive(Debug, Serialize)]
pub struct DayUpdate {
    pub day: DayView,
    pub percents: [u8; DAYS_PER_WEEK as usize],
    pub auto_advance: Option<AutoAdvance>,
}
