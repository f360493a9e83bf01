use chrono::{Datelike, Duration, NaiveDate};

/// Lowest usable zoom. Guards the day-count division as well.
pub const MIN_PIXELS_PER_DAY: f32 = 10.0;
/// Highest usable zoom.
pub const MAX_PIXELS_PER_DAY: f32 = 80.0;

const ZOOM_STEP: f32 = 1.2;

/// One contiguous run of days sharing a (year, month), for header cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    /// Human-readable header label, e.g. "Jan 2024".
    pub label: String,
    /// Index into `ViewWindow::days` where this run begins.
    pub start_index: usize,
}

/// The visible date range of a timeline.
///
/// Fully derived from `(view start, pixels per day, container width)` and
/// recomputed whole on every pan, zoom, or resize; nothing is patched
/// incrementally.
#[derive(Debug, Clone)]
pub struct ViewWindow {
    /// The leftmost visible date.
    pub start: NaiveDate,
    /// The rightmost visible date.
    pub end: NaiveDate,
    /// Pixels per day, clamped to the usable zoom range.
    pub pixels_per_day: f32,
    /// Width of the rendering container in pixels.
    pub container_width: f32,
    /// Every visible date, one per calendar day, `start` first.
    pub days: Vec<NaiveDate>,
    /// `days` grouped into (year, month) runs.
    pub months: Vec<MonthBucket>,
}

impl ViewWindow {
    /// Compute the window for a view anchor, zoom, and container width.
    ///
    /// The day count is `ceil(container_width / pixels_per_day)`; a
    /// non-positive container width yields an empty window.
    pub fn compute(start: NaiveDate, pixels_per_day: f32, container_width: f32) -> Self {
        let pixels_per_day = pixels_per_day.clamp(MIN_PIXELS_PER_DAY, MAX_PIXELS_PER_DAY);
        let container_width = container_width.max(0.0);
        let day_count = (container_width / pixels_per_day).ceil() as usize;

        let days: Vec<NaiveDate> = (0..day_count)
            .map(|i| start + Duration::days(i as i64))
            .collect();
        let months = month_runs(&days);
        let end = days.last().copied().unwrap_or(start);

        Self {
            start,
            end,
            pixels_per_day,
            container_width,
            days,
            months,
        }
    }

    /// Convert a date to an x-pixel offset from the window start.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        days * self.pixels_per_day
    }

    /// Convert an x-pixel offset back to a date.
    pub fn x_to_date(&self, x: f32) -> NaiveDate {
        let days = (x / self.pixels_per_day).round() as i64;
        self.start + Duration::days(days)
    }

    /// Total width in pixels covered by the visible days.
    pub fn total_width(&self) -> f32 {
        self.days.len() as f32 * self.pixels_per_day
    }

    /// Width in pixels of the month header cell at `index`.
    pub fn month_width(&self, index: usize) -> f32 {
        let Some(bucket) = self.months.get(index) else {
            return 0.0;
        };
        let next_start = self
            .months
            .get(index + 1)
            .map(|m| m.start_index)
            .unwrap_or(self.days.len());
        (next_start - bucket.start_index) as f32 * self.pixels_per_day
    }

    /// Zoom in (increase pixels per day) and recompute.
    pub fn zoom_in(&mut self) {
        let ppd = (self.pixels_per_day * ZOOM_STEP).min(MAX_PIXELS_PER_DAY);
        *self = Self::compute(self.start, ppd, self.container_width);
    }

    /// Zoom out (decrease pixels per day) and recompute.
    pub fn zoom_out(&mut self) {
        let ppd = (self.pixels_per_day / ZOOM_STEP).max(MIN_PIXELS_PER_DAY);
        *self = Self::compute(self.start, ppd, self.container_width);
    }

    /// Pan the window by a number of days and recompute.
    pub fn scroll_days(&mut self, days: i64) {
        *self = Self::compute(
            self.start + Duration::days(days),
            self.pixels_per_day,
            self.container_width,
        );
    }

    /// Recompute for a new container width (window resize).
    pub fn resize(&mut self, container_width: f32) {
        *self = Self::compute(self.start, self.pixels_per_day, container_width);
    }
}

/// Group a day sequence into runs sharing the same (year, month).
fn month_runs(days: &[NaiveDate]) -> Vec<MonthBucket> {
    let mut runs = Vec::new();
    let mut current: Option<(i32, u32)> = None;

    for (i, day) in days.iter().enumerate() {
        let key = (day.year(), day.month());
        if current != Some(key) {
            runs.push(MonthBucket {
                label: day.format("%b %Y").to_string(),
                start_index: i,
            });
            current = Some(key);
        }
    }
    runs
}
