use chrono::{Duration, NaiveDate};

use crate::layout::classify::{DisplayStatus, StatusStyle};
use crate::layout::window::ViewWindow;
use crate::model::{Project, Task};

/// Floor on rendered bar width so zero-length tasks stay visible and
/// clickable.
pub const MIN_BAR_PX: f32 = 30.0;
/// Horizontal gap subtracted from each bar so adjacent bars read as distinct.
pub const BAR_GAP_PX: f32 = 4.0;

/// Span given to tasks that have a start but no due date.
const DEFAULT_SPAN_DAYS: i64 = 7;

/// Pixel geometry and display status for one bar, derived fresh each render
/// pass and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Offset from the window's left edge, clamped to >= 0.
    pub left: f32,
    /// Rendered width, never below `MIN_BAR_PX`.
    pub width: f32,
    /// False when the span lies entirely outside the window; such bars are
    /// skipped by renderers, the underlying task is untouched.
    pub visible: bool,
    /// Overdue-adjusted status driving the bar color.
    pub status: DisplayStatus,
}

impl BarGeometry {
    /// Lay out a task within the window.
    ///
    /// Missing dates degrade to documented fallbacks instead of failing:
    /// no start date means "today", no due date means start plus
    /// `DEFAULT_SPAN_DAYS`.
    pub fn compute(task: &Task, window: &ViewWindow, today: NaiveDate) -> Self {
        let start = task.start_date.unwrap_or(today);
        let end = task.due_date.unwrap_or(start + Duration::days(DEFAULT_SPAN_DAYS));
        let mut geometry = Self::for_range(start, end, window);
        geometry.status = DisplayStatus::resolve(task.status, task.due_date, today);
        geometry
    }

    /// Lay out an explicit date range within the window.
    ///
    /// Day counting is inclusive: a range with `start == end` is one day
    /// wide. Visibility is judged on the unclamped span, so a bar wholly
    /// left of the window is culled even though its clamped `left` is 0.
    pub fn for_range(start: NaiveDate, end: NaiveDate, window: &ViewWindow) -> Self {
        let end = end.max(start);
        let ppd = window.pixels_per_day;
        let offset_days = (start - window.start).num_days() as f32;
        let duration_days = ((end - start).num_days() + 1) as f32;

        let raw_left = offset_days * ppd;
        let raw_right = raw_left + duration_days * ppd;
        let visible = raw_right > 0.0 && raw_left < window.total_width();

        Self {
            left: raw_left.max(0.0),
            width: (duration_days * ppd - BAR_GAP_PX).max(MIN_BAR_PX),
            visible,
            status: DisplayStatus::Pending,
        }
    }

    /// Background indicator for a project's planned window, if it has one.
    ///
    /// Carries a neutral status; renderers paint it as a muted fill behind
    /// the task rows.
    pub fn planned_window(project: &Project, window: &ViewWindow) -> Option<Self> {
        let (start, end) = project.planned_window()?;
        Some(Self::for_range(start, end, window))
    }

    /// Color and label for this bar's display status.
    pub fn style(&self) -> StatusStyle {
        self.status.style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn window() -> ViewWindow {
        // 30 visible days, 2024-01-01 through 2024-01-30.
        ViewWindow::compute(d(2024, 1, 1), 30.0, 900.0)
    }

    #[test]
    fn test_example_scenario() {
        let mut task = Task::with_dates("Review", d(2024, 1, 5), d(2024, 1, 10));
        task.status = TaskStatus::InProgress;

        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 8));
        assert_eq!(bar.left, 120.0);
        assert_eq!(bar.width, 176.0); // 6 inclusive days * 30px - 4px gap
        assert!(bar.visible);
        assert_eq!(bar.status.as_str(), "in_progress");
    }

    #[test]
    fn test_zero_length_task_gets_minimum_width() {
        let task = Task::with_dates("Kickoff", d(2024, 1, 5), d(2024, 1, 5));
        let window = ViewWindow::compute(d(2024, 1, 1), 10.0, 400.0);
        let bar = BarGeometry::compute(&task, &window, d(2024, 1, 1));
        // One inclusive day at 10px/day is below the floor.
        assert_eq!(bar.width, MIN_BAR_PX);
        assert!(bar.visible);
    }

    #[test]
    fn test_left_clamped_for_partially_visible_bar() {
        let task = Task::with_dates("Spillover", d(2023, 12, 25), d(2024, 1, 5));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 1));
        assert_eq!(bar.left, 0.0);
        assert!(bar.visible);
    }

    #[test]
    fn test_bar_entirely_before_window_is_culled() {
        let task = Task::with_dates("Ancient", d(2023, 11, 20), d(2023, 12, 2));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 1));
        assert!(!bar.visible);
        // Clamped geometry alone would look renderable; the cull must win.
        assert_eq!(bar.left, 0.0);
    }

    #[test]
    fn test_bar_entirely_after_window_is_culled() {
        let task = Task::with_dates("Future", d(2024, 3, 1), d(2024, 3, 10));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 1));
        assert!(!bar.visible);
    }

    #[test]
    fn test_one_day_overlap_is_visible() {
        // Ends on the first visible day.
        let task = Task::with_dates("Tail", d(2023, 12, 20), d(2024, 1, 1));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 1));
        assert!(bar.visible);

        // Starts on the last visible day.
        let task = Task::with_dates("Head", d(2024, 1, 30), d(2024, 2, 10));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 1));
        assert!(bar.visible);
    }

    #[test]
    fn test_missing_start_falls_back_to_today() {
        let mut task = Task::new("Unscheduled");
        task.due_date = Some(d(2024, 1, 12));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 10));
        // Effective span 2024-01-10..=2024-01-12: offset 9 days, 3 days wide.
        assert_eq!(bar.left, 270.0);
        assert_eq!(bar.width, 3.0 * 30.0 - BAR_GAP_PX);
    }

    #[test]
    fn test_missing_due_date_gets_default_span() {
        let mut task = Task::new("Open-ended");
        task.start_date = Some(d(2024, 1, 5));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 1));
        // start + 7 days, inclusive counting: 8 day-cells.
        assert_eq!(bar.width, 8.0 * 30.0 - BAR_GAP_PX);
    }

    #[test]
    fn test_inverted_range_is_treated_as_single_day() {
        let task = Task::with_dates("Backwards", d(2024, 1, 10), d(2024, 1, 5));
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 1));
        assert_eq!(bar.left, 9.0 * 30.0);
        assert_eq!(bar.width, MIN_BAR_PX);
        assert!(bar.visible);
    }

    #[test]
    fn test_overdue_task_colors_as_delayed() {
        let mut task = Task::with_dates("Slipping", d(2024, 1, 2), d(2024, 1, 4));
        task.status = TaskStatus::InProgress;
        let bar = BarGeometry::compute(&task, &window(), d(2024, 1, 10));
        assert_eq!(bar.status, DisplayStatus::Delayed);
        assert_eq!(bar.style().color, "#f5222d");
    }

    #[test]
    fn test_planned_window_indicator() {
        let mut project = Project::new("Rollout");
        assert_eq!(BarGeometry::planned_window(&project, &window()), None);

        project.start_date = Some(d(2024, 1, 3));
        project.end_date = Some(d(2024, 1, 20));
        let bar = BarGeometry::planned_window(&project, &window()).unwrap();
        assert_eq!(bar.left, 2.0 * 30.0);
        assert_eq!(bar.width, 18.0 * 30.0 - BAR_GAP_PX);
        assert!(bar.visible);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let mut task = Task::with_dates("Stable", d(2024, 1, 5), d(2024, 1, 10));
        task.status = TaskStatus::Blocked;
        let window = window();
        let a = BarGeometry::compute(&task, &window, d(2024, 1, 8));
        let b = BarGeometry::compute(&task, &window, d(2024, 1, 8));
        assert_eq!(a, b);
    }
}
