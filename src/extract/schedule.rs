// src/extract/schedule.rs
//
// The grid part of a schedule row is two fixed column spans, each a run of
// [date, marker, marker] triples: five weeknight triples (Mon–Fri) and two
// weekend triples (Sat–Sun). A marker cell naming a course means the course
// meets on the date in the triple's first cell.
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::ops::Range;

use super::dates;
use super::error::{DateError, FormatError};
use crate::load::Row;

/// Header of the week-number column.
pub const WEEK_HEADER: &str = "Vecka";

/// Positional spans of the two grids. Fixed by the export's layout; widths
/// are multiples of 3, one triple per day column.
const WEEKNIGHT_COLUMNS: Range<usize> = 1..16;
const WEEKEND_COLUMNS: Range<usize> = 16..22;

/// The one course labeled with a bare letter. It only matches marker cells
/// equal to it — substring matching would light up on every "GA 1"-style id.
const WILDCARD_COURSE_ID: &str = "A";

/// Keep the rows that are actual schedule lines: those carrying a week
/// number. Rows with a blank week cell are section banners. A non-blank week
/// cell that is not an integer is a format error, not a banner.
pub fn schedule_rows(rows: &[Row]) -> Result<Vec<&Row>, FormatError> {
    let mut lines = Vec::new();
    for row in rows {
        let Some(cell) = row.get(WEEK_HEADER) else {
            continue;
        };
        cell.trim()
            .parse::<u32>()
            .map_err(|_| FormatError::WeekNumber { cell: cell.to_string() })?;
        lines.push(row);
    }
    Ok(lines)
}

/// Every date one course meets, split into weeknight and weekend views.
///
/// Dates are stored; the week views are derived on access so the two stay
/// consistent by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSchedule {
    weeknight_dates: Vec<NaiveDate>,
    weekend_dates: Vec<NaiveDate>,
}

impl CourseSchedule {
    /// Scan the term's schedule rows for grid cells naming `course_id` and
    /// reconstruct the dates they stand for, in row-then-column order.
    pub fn extract(course_id: &str, year: i32, rows: &[&Row]) -> Result<Self, DateError> {
        Ok(Self {
            weeknight_dates: dates_in_window(rows, WEEKNIGHT_COLUMNS, course_id, year)?,
            weekend_dates: dates_in_window(rows, WEEKEND_COLUMNS, course_id, year)?,
        })
    }

    pub fn weeknight_dates(&self) -> &[NaiveDate] {
        &self.weeknight_dates
    }

    pub fn weekend_dates(&self) -> &[NaiveDate] {
        &self.weekend_dates
    }

    /// ISO week numbers of the weeknight dates. Duplicates are kept: a course
    /// can meet twice in one week on different rows, and this view mirrors
    /// the grid.
    pub fn weeknight_weeks(&self) -> Vec<u32> {
        self.weeknight_dates.iter().map(|d| d.iso_week().week()).collect()
    }

    /// ISO week numbers of the weekend dates, deduplicated in first-seen
    /// order: a weekend class spans the Saturday and Sunday columns of the
    /// same calendar week and counts once.
    pub fn weekend_weeks(&self) -> Vec<u32> {
        let mut weeks: Vec<u32> = Vec::new();
        for week in self.weekend_dates.iter().map(|d| d.iso_week().week()) {
            if !weeks.contains(&week) {
                weeks.push(week);
            }
        }
        weeks
    }
}

fn dates_in_window(
    rows: &[&Row],
    window: Range<usize>,
    course_id: &str,
    year: i32,
) -> Result<Vec<NaiveDate>, DateError> {
    let mut out = Vec::new();
    for row in rows {
        out.extend(row_dates(row, window.clone(), course_id, year)?);
    }
    Ok(out)
}

/// One row's matches inside a column window, as a pure function of the row.
///
/// Each triple contributes its date at most once, even when both marker
/// cells name the course. A matching triple whose date cell cannot be
/// reconstructed aborts the extraction: a partially right schedule is worse
/// than a loud failure.
fn row_dates(
    row: &Row,
    window: Range<usize>,
    course_id: &str,
    year: i32,
) -> Result<Vec<NaiveDate>, DateError> {
    let mut out = Vec::new();
    for date_index in window.step_by(3) {
        let matched = [row.field(date_index + 1), row.field(date_index + 2)]
            .into_iter()
            .flatten()
            .any(|marker| matches_course_id(marker, course_id));
        if !matched {
            continue;
        }
        let date_cell = row.field(date_index).unwrap_or("");
        out.push(dates::reconstruct(date_cell, year)?);
    }
    Ok(out)
}

fn matches_course_id(marker: &str, course_id: &str) -> bool {
    if course_id == WILDCARD_COURSE_ID {
        marker == course_id
    } else {
        marker.contains(course_id)
    }
}
