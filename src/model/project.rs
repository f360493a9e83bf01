use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::Task;

/// A project grouping tasks, with an optional planned date range.
///
/// The planned range only drives the background "planned window" indicator;
/// tasks are free to fall outside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Untitled Project".to_string(),
            start_date: None,
            end_date: None,
            tasks: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The planned window, if both ends are set. Inverted ranges are
    /// normalized so callers always get start <= end.
    pub fn planned_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_planned_window_requires_both_dates() {
        let mut project = Project::new("Rollout");
        assert_eq!(project.planned_window(), None);

        project.start_date = Some(d(2024, 3, 1));
        assert_eq!(project.planned_window(), None);

        project.end_date = Some(d(2024, 4, 15));
        assert_eq!(project.planned_window(), Some((d(2024, 3, 1), d(2024, 4, 15))));
    }

    #[test]
    fn test_planned_window_normalizes_inverted_range() {
        let mut project = Project::new("Rollout");
        project.start_date = Some(d(2024, 4, 15));
        project.end_date = Some(d(2024, 3, 1));
        assert_eq!(project.planned_window(), Some((d(2024, 3, 1), d(2024, 4, 15))));
    }
}
