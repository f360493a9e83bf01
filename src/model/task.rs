use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state reported by the backend for a task.
///
/// Transitions happen server-side; this crate only displays them. Unknown
/// strings deserialize as `Pending` so a new backend value never breaks
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Blocked,
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl TaskStatus {
    /// Parse a loosely-formatted status string (CSV imports, query params).
    /// Anything unrecognized maps to `Pending`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "in_progress" | "in progress" | "in-progress" | "active" | "started" => {
                Self::InProgress
            }
            "completed" | "complete" | "done" | "finished" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            "blocked" | "on hold" | "on-hold" => Self::Blocked,
            _ => Self::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Blocked => "blocked",
        }
    }

    /// Terminal statuses are never flagged overdue.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Scheduling priority. Unknown strings deserialize as `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TaskPriority {
    Urgent,
    High,
    #[default]
    Normal,
    Low,
}

impl From<String> for TaskPriority {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl TaskPriority {
    /// Parse a loosely-formatted priority string; unrecognized maps to `Normal`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "urgent" | "critical" => Self::Urgent,
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

/// A single task as supplied by the data-fetch layer.
///
/// The layout engine treats this as an immutable projection: it derives
/// geometry and colors from it but never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Planned start; tasks without one are laid out from "today".
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Nominal end; also drives the overdue derivation.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Progress from 0 to 100.
    #[serde(default)]
    pub completion_percentage: u8,
    /// Owning project, if any.
    #[serde(default)]
    pub project_id: Option<Uuid>,
}

impl Task {
    /// Create a task with sensible defaults and no dates.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Normal,
            start_date: None,
            due_date: None,
            completion_percentage: 0,
            project_id: None,
        }
    }

    /// Create a task spanning the given dates.
    pub fn with_dates(title: impl Into<String>, start: NaiveDate, due: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            due_date: Some(due),
            ..Self::new(title)
        }
    }
}
