use crate::errors::PlanError;
use crate::models::{DAYS_PER_WEEK, DayIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{env, path::Path, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub title: String,
    pub items: Vec<PlanItem>,
}

impl DayPlan {
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// Titles and checklist items for each of the seven days.
///
/// Only completion flags are stored, keyed by item id, so a plan can change
/// between sessions: removed ids are ignored and new ids start unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    days: Vec<DayPlan>,
}

impl Plan {
    pub fn new(days: Vec<DayPlan>) -> Result<Self, PlanError> {
        if days.len() != usize::from(DAYS_PER_WEEK) {
            return Err(PlanError::DayCount(days.len()));
        }
        for (index, day) in days.iter().enumerate() {
            let mut seen = HashSet::new();
            if let Some(dup) = day.items.iter().find(|item| !seen.insert(item.id.as_str())) {
                return Err(PlanError::DuplicateItem {
                    day: index + 1,
                    item: dup.id.clone(),
                });
            }
        }
        Ok(Self { days })
    }

    pub fn day(&self, day: DayIndex) -> &DayPlan {
        &self.days[day.offset()]
    }

    pub fn from_json(text: &str) -> Result<Self, PlanError> {
        let raw: Plan = serde_json::from_str(text)?;
        Self::new(raw.days)
    }

    pub fn load(path: &Path) -> Result<Self, PlanError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl Default for Plan {
    fn default() -> Self {
        let day = |title: &str, items: &[(&str, &str)]| DayPlan {
            title: title.to_owned(),
            items: items
                .iter()
                .map(|(id, label)| PlanItem {
                    id: (*id).to_owned(),
                    label: (*label).to_owned(),
                })
                .collect(),
        };

        Self {
            days: vec![
                day(
                    "Push A",
                    &[
                        ("bench-press", "Bench press 4x6-8"),
                        ("overhead-press", "Overhead press 3x8"),
                        ("incline-db-press", "Incline dumbbell press 3x10"),
                        ("lateral-raise", "Lateral raise 3x15"),
                        ("triceps-pushdown", "Triceps pushdown 3x12"),
                    ],
                ),
                day(
                    "Pull A",
                    &[
                        ("deadlift", "Deadlift 3x5"),
                        ("pull-up", "Pull-up 4x AMRAP"),
                        ("barbell-row", "Barbell row 3x8"),
                        ("face-pull", "Face pull 3x15"),
                        ("biceps-curl", "Biceps curl 3x12"),
                    ],
                ),
                day(
                    "Legs A",
                    &[
                        ("back-squat", "Back squat 4x6"),
                        ("romanian-deadlift", "Romanian deadlift 3x8"),
                        ("walking-lunge", "Walking lunge 3x12"),
                        ("leg-curl", "Leg curl 3x12"),
                        ("calf-raise", "Calf raise 4x15"),
                    ],
                ),
                day(
                    "Active Recovery",
                    &[
                        ("easy-walk", "Easy walk 30 min"),
                        ("mobility", "Mobility flow 15 min"),
                        ("foam-roll", "Foam rolling 10 min"),
                    ],
                ),
                day(
                    "Push B",
                    &[
                        ("db-bench", "Dumbbell bench 4x10"),
                        ("arnold-press", "Arnold press 3x10"),
                        ("dips", "Dips 3x AMRAP"),
                        ("cable-fly", "Cable fly 3x15"),
                        ("overhead-extension", "Overhead extension 3x12"),
                    ],
                ),
                day(
                    "Pull B + Lower",
                    &[
                        ("chin-up", "Chin-up 3x AMRAP"),
                        ("seated-row", "Seated cable row 3x10"),
                        ("front-squat", "Front squat 3x8"),
                        ("hip-thrust", "Hip thrust 3x10"),
                        ("hammer-curl", "Hammer curl 3x12"),
                    ],
                ),
                day(
                    "Rest",
                    &[
                        ("sleep", "Sleep 8 hours"),
                        ("stretch", "Light stretching"),
                    ],
                ),
            ],
        }
    }
}

pub fn resolve_plan_path() -> Option<PathBuf> {
    env::var("WORKOUT_PLAN_PATH").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_is_valid() {
        let plan = Plan::default();
        assert_eq!(Plan::new(plan.days.clone()).unwrap(), plan);
        assert_eq!(plan.day(DayIndex::new(3).unwrap()).title, "Legs A");
    }

    #[test]
    fn rejects_wrong_day_count() {
        let err = Plan::from_json(r#"{"days": []}"#).unwrap_err();
        assert!(matches!(err, PlanError::DayCount(0)));
    }

    #[test]
    fn rejects_duplicate_item_ids() {
        let mut days = Plan::default().days;
        let first = days[1].items[0].clone();
        days[1].items.push(first);
        assert!(matches!(
            Plan::new(days),
            Err(PlanError::DuplicateItem { day: 2, .. })
        ));
    }

    #[test]
    fn plan_round_trips_through_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(&path, serde_json::to_string(&Plan::default()).unwrap()).unwrap();
        assert_eq!(Plan::load(&path).unwrap(), Plan::default());
    }
}
