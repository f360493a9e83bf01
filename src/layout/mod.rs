pub mod bar;
pub mod classify;
pub mod window;

pub use bar::{BarGeometry, BAR_GAP_PX, MIN_BAR_PX};
pub use classify::{priority_style, DisplayStatus, StatusStyle};
pub use window::{MonthBucket, ViewWindow, MAX_PIXELS_PER_DAY, MIN_PIXELS_PER_DAY};
