use std::path::Path;

use chrono::NaiveDate;
use tracing::warn;

use crate::io::error::IoError;
use crate::model::{Task, TaskPriority, TaskStatus};

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &[
        "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d", "%m-%d-%Y",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Parse a completion percentage like "40", "40%", or "40.0"; clamps to 0–100.
fn parse_completion(s: &str) -> Option<u8> {
    let s = s.trim().trim_end_matches('%').trim();
    s.parse::<f64>().ok().map(|v| v.clamp(0.0, 100.0) as u8)
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Title,
    Start,
    Due,
    Status,
    Priority,
    Completion,
}

fn header_to_col(normalized: &str) -> Option<Column> {
    match normalized {
        "title" | "name" | "task" | "taskname" | "tasklabel" | "label" | "activity" => {
            Some(Column::Title)
        }
        "start" | "startdate" | "from" | "begin" | "begindate" => Some(Column::Start),
        "due" | "duedate" | "end" | "enddate" | "to" | "finish" | "finishdate" | "deadline" => {
            Some(Column::Due)
        }
        "status" | "state" | "stage" => Some(Column::Status),
        "priority" | "pri" | "importance" => Some(Column::Priority),
        "completion" | "completionpercentage" | "progress" | "percent" | "percentage" => {
            Some(Column::Completion)
        }
        _ => None,
    }
}

/// Import tasks from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column headers
/// flexibly (e.g. "Task Label", "Due Date"). Only a title column is required;
/// rows with unparseable dates keep the task and drop the date, matching the
/// layout engine's fallback behavior. Returns `(tasks, skipped_count)`.
pub fn import_csv(path: &Path) -> Result<(Vec<Task>, usize), IoError> {
    // Read the whole file up front so the delimiter can be sniffed from the
    // first line.
    let content = std::fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<Column>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    if !col_map.contains(&Some(Column::Title)) {
        return Err(IoError::MissingTitleColumn {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut tasks: Vec<Task> = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(row = i + 2, error = %e, "skipping malformed CSV row");
                skipped += 1;
                continue;
            }
        };

        let mut title = None;
        let mut start = None;
        let mut due = None;
        let mut status = None;
        let mut priority = None;
        let mut completion = None;

        for (col_idx, field) in record.iter().enumerate() {
            match col_map.get(col_idx).copied().flatten() {
                Some(Column::Title) => title = Some(field.to_string()),
                Some(Column::Start) => start = Some(field.to_string()),
                Some(Column::Due) => due = Some(field.to_string()),
                Some(Column::Status) => status = Some(field.to_string()),
                Some(Column::Priority) => priority = Some(field.to_string()),
                Some(Column::Completion) => completion = Some(field.to_string()),
                None => {}
            }
        }

        let title = match title {
            Some(t) if !t.is_empty() => t,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let start_date = match start.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => {
                let parsed = parse_date(s);
                if parsed.is_none() {
                    warn!(row = i + 2, value = s, "unparseable start date, dropping");
                }
                parsed
            }
            None => None,
        };
        let due_date = match due.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => {
                let parsed = parse_date(s);
                if parsed.is_none() {
                    warn!(row = i + 2, value = s, "unparseable due date, dropping");
                }
                parsed
            }
            None => None,
        };

        let mut task = Task::new(title);
        task.start_date = start_date;
        task.due_date = due_date;
        task.status = status.as_deref().map(TaskStatus::parse).unwrap_or_default();
        task.priority = priority
            .as_deref()
            .map(TaskPriority::parse)
            .unwrap_or_default();
        task.completion_percentage = completion
            .as_deref()
            .and_then(parse_completion)
            .unwrap_or(0);

        tasks.push(task);
    }

    if tasks.is_empty() {
        return Err(IoError::EmptyImport { skipped });
    }

    Ok((tasks, skipped))
}
