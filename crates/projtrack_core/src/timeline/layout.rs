//! Timeline layout engine.
//!
//! # Responsibility
//! - Convert an ordered task sequence into positioned, colored, labeled
//!   horizontal bars on a shared serial-day axis.
//!
//! # Invariants
//! - Exactly one bar per input task, in input order; a task with bad dates
//!   degrades to a placeholder span, it never aborts the batch.
//! - Bar span is clamped to >= 0; a zero span renders as a thin marker.
//! - The engine reads the store's rows but never writes anything.

use crate::model::task::Task;
use crate::palette::{task_bar_color, Color};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;

/// Calendar date format accepted from stored rows.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serial day zero.
static UNIX_EPOCH: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date"));

/// Positioned, colored, labeled bar for one task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBar {
    /// Position in the input sequence; also the bar's vertical center.
    pub row: usize,
    /// Task name, carried for axis labeling.
    pub name: String,
    /// Serial day the bar starts on.
    pub start_day: i64,
    /// Bar extent in days, always >= 0.
    pub span_days: i64,
    pub color: Color,
    /// Present if and only if progress > 0.
    pub label: Option<ProgressLabel>,
}

/// In-bar completion annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressLabel {
    /// Serial-day anchor at the horizontal midpoint of the completed
    /// portion: `start + span * (progress/100) / 2`.
    pub anchor_day: f64,
    /// Exactly `"{progress}%"`.
    pub text: String,
}

/// Lays out `tasks` against today's calendar.
///
/// Tasks must arrive pre-sorted by start date (the task repository's project
/// listing already is); the engine does not re-sort. Callers are expected to
/// short-circuit on an empty task list; if one arrives anyway the engine
/// returns an empty layout rather than panicking.
pub fn layout_tasks(tasks: &[Task]) -> Vec<TaskBar> {
    layout_tasks_at(tasks, Local::now().date_naive())
}

/// Deterministic core of [`layout_tasks`]; `today` feeds the placeholder
/// span policy.
pub fn layout_tasks_at(tasks: &[Task], today: NaiveDate) -> Vec<TaskBar> {
    tasks
        .iter()
        .enumerate()
        .map(|(row, task)| bar_for_task(row, task, today))
        .collect()
}

fn bar_for_task(row: usize, task: &Task, today: NaiveDate) -> TaskBar {
    let (start, end) = parse_span(&task.start_date, &task.end_date, today);
    let start_day = serial_day(start);
    let span_days = (serial_day(end) - start_day).max(0);

    TaskBar {
        row,
        name: task.name.clone(),
        start_day,
        span_days,
        color: task_bar_color(task.status),
        label: progress_label(start_day, span_days, task.progress),
    }
}

/// Placeholder span policy: if either date of the pair fails to parse, the
/// whole pair is replaced by `[today, today + 1]`.
fn parse_span(start: &str, end: &str, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) => (start, end),
        _ => (today, today.succ_opt().unwrap_or(today)),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Days since 1970-01-01.
fn serial_day(date: NaiveDate) -> i64 {
    date.signed_duration_since(*UNIX_EPOCH).num_days()
}

fn progress_label(start_day: i64, span_days: i64, progress: u8) -> Option<ProgressLabel> {
    if progress == 0 {
        return None;
    }

    let completed_fraction = f64::from(progress) / 100.0;
    Some(ProgressLabel {
        anchor_day: start_day as f64 + span_days as f64 * completed_fraction / 2.0,
        text: format!("{progress}%"),
    })
}
