use std::path::Path;

use crate::io::error::IoError;
use crate::model::Task;

/// Export tasks to a comma-delimited CSV file matching the import format.
///
/// Columns: Title, Start Date, Due Date, Status, Priority, Completion.
/// Dates are ISO (`YYYY-MM-DD`); empty cells stand for missing dates.
/// Returns the number of tasks written.
pub fn export_csv(tasks: &[Task], path: &Path) -> Result<usize, IoError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "Title",
        "Start Date",
        "Due Date",
        "Status",
        "Priority",
        "Completion",
    ])?;

    for task in tasks {
        wtr.write_record([
            task.title.as_str(),
            &task
                .start_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            &task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            task.status.as_str(),
            task.priority.as_str(),
            &task.completion_percentage.to_string(),
        ])?;
    }

    wtr.flush().map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tasks.len())
}
