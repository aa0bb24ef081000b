// src/extract/error.rs
use thiserror::Error;

/// Any failure while extracting a schedule. Every kind is fatal: a silently
/// wrong schedule is worse than an aborted run, so nothing is skipped,
/// repaired, or retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Date(#[from] DateError),
}

/// The file does not have the structure the extraction relies on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("expected at least two term header rows, found {found}")]
    TooFewTermHeaders { found: usize },

    #[error("term id {id:?} does not embed a two-digit year")]
    TermYear { id: String },

    #[error("no course {course_id:?} in term {term_id}")]
    UnknownCourse { course_id: String, term_id: String },
}

/// A cell holds the wrong shape of value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("week number cell {cell:?} is not an integer")]
    WeekNumber { cell: String },
}

/// A date cell could not be turned back into a calendar date.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("date cell {0:?} is not \"<day> <month>\"")]
    MalformedCell(String),

    #[error("unknown month token {0:?}")]
    UnknownMonth(String),

    #[error("no such date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
