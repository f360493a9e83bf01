use chrono::NaiveDate;

use crate::model::{TaskPriority, TaskStatus};

/// Display color and label for a status or priority value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Hex color for the bar or tag fill.
    pub color: &'static str,
    pub label: &'static str,
}

/// Status as shown on screen: the stored status plus the derived `Delayed`.
///
/// `Delayed` is never stored or sent back to a backend; it exists only for
/// coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Blocked,
    Delayed,
}

impl DisplayStatus {
    /// Apply the overdue rule on top of the raw status.
    ///
    /// A task shows as `Delayed` iff it has a due date in the past and its
    /// status is not terminal. The raw status is untouched otherwise.
    pub fn resolve(status: TaskStatus, due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        if let Some(due) = due_date {
            if due < today && !status.is_terminal() {
                return Self::Delayed;
            }
        }
        match status {
            TaskStatus::Pending => Self::Pending,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Completed => Self::Completed,
            TaskStatus::Cancelled => Self::Cancelled,
            TaskStatus::Blocked => Self::Blocked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Blocked => "blocked",
            Self::Delayed => "delayed",
        }
    }

    pub fn style(&self) -> StatusStyle {
        match self {
            Self::Pending => StatusStyle {
                color: "#d9d9d9",
                label: "Pending",
            },
            Self::InProgress => StatusStyle {
                color: "#1890ff",
                label: "In Progress",
            },
            Self::Completed => StatusStyle {
                color: "#52c41a",
                label: "Completed",
            },
            Self::Cancelled => StatusStyle {
                color: "#8c8c8c",
                label: "Cancelled",
            },
            Self::Blocked => StatusStyle {
                color: "#fa8c16",
                label: "Blocked",
            },
            Self::Delayed => StatusStyle {
                color: "#f5222d",
                label: "Delayed",
            },
        }
    }
}

/// Display style for a priority, independent of status.
pub fn priority_style(priority: TaskPriority) -> StatusStyle {
    match priority {
        TaskPriority::Urgent => StatusStyle {
            color: "#f5222d",
            label: "Urgent",
        },
        TaskPriority::High => StatusStyle {
            color: "#fa8c16",
            label: "High",
        },
        TaskPriority::Normal => StatusStyle {
            color: "#1890ff",
            label: "Normal",
        },
        TaskPriority::Low => StatusStyle {
            color: "#52c41a",
            label: "Low",
        },
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
    fn test_overdue_overrides_active_status() {
        let today = d(2024, 5, 10);
        let yesterday = d(2024, 5, 9);
        let resolved = DisplayStatus::resolve(TaskStatus::InProgress, Some(yesterday), today);
        assert_eq!(resolved, DisplayStatus::Delayed);
        assert_eq!(resolved.as_str(), "delayed");
    }

    #[test]
    fn test_terminal_statuses_never_delayed() {
        let today = d(2024, 5, 10);
        let yesterday = d(2024, 5, 9);
        assert_eq!(
            DisplayStatus::resolve(TaskStatus::Completed, Some(yesterday), today),
            DisplayStatus::Completed
        );
        assert_eq!(
            DisplayStatus::resolve(TaskStatus::Cancelled, Some(yesterday), today),
            DisplayStatus::Cancelled
        );
    }

    #[test]
    fn test_due_today_is_not_delayed() {
        let today = d(2024, 5, 10);
        assert_eq!(
            DisplayStatus::resolve(TaskStatus::InProgress, Some(today), today),
            DisplayStatus::InProgress
        );
    }

    #[test]
    fn test_no_due_date_keeps_raw_status() {
        let today = d(2024, 5, 10);
        assert_eq!(
            DisplayStatus::resolve(TaskStatus::Blocked, None, today),
            DisplayStatus::Blocked
        );
    }

    #[test]
    fn test_unknown_status_string_classifies_as_pending() {
        // Unknown enum values collapse to Pending before classification,
        // so classification itself can never fail.
        let today = d(2024, 5, 10);
        let parsed = TaskStatus::parse("bogus-status");
        let resolved = DisplayStatus::resolve(parsed, None, today);
        assert_eq!(resolved, DisplayStatus::resolve(TaskStatus::Pending, None, today));
    }

    #[test]
    fn test_priority_styles() {
        assert_eq!(priority_style(TaskPriority::Urgent).label, "Urgent");
        assert_eq!(priority_style(TaskPriority::Low).color, "#52c41a");
        // Unknown priority strings fall back to Normal.
        assert_eq!(
            priority_style(TaskPriority::parse("whatever")).label,
            "Normal"
        );
    }
}
