//! Pure timeline/Gantt layout engine.
//!
//! Given a collection of tasks and a view anchor, this crate computes
//! everything a renderer needs to paint a timeline: the visible date window
//! and its month header buckets ([`ViewWindow`]), per-task pixel geometry
//! with overdue-aware coloring ([`BarGeometry`]), and the status/priority
//! style tables ([`layout::classify`]). All of it is synchronous,
//! deterministic, and side-effect-free; "today" is always an explicit
//! parameter, never read from the clock.
//!
//! Rendering, data fetching, and interaction wiring live in the consuming
//! application. The [`io`] module covers loading and saving task data as
//! JSON project files or CSV.

pub mod io;
pub mod layout;
pub mod model;

pub use layout::{BarGeometry, DisplayStatus, MonthBucket, StatusStyle, ViewWindow};
pub use model::{Project, Task, TaskPriority, TaskStatus};
