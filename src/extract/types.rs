// src/extract/types.rs
use serde::Serialize;
use std::collections::BTreeMap;

use super::error::StructuralError;
use super::schedule::CourseSchedule;
use crate::load::Row;

/// A season-code token found in a term banner row, e.g. `HT24` at row 5.
/// Anchors come out of the locator in row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermAnchor {
    pub id: String,
    pub row_index: usize,
}

/// Row span claimed by one term.
///
/// The autumn term ends where the next banner begins, but the spring term
/// runs to the end of the table, so the upper bound is part of the type
/// rather than an `Option` bolted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RowRange {
    /// Inclusive on both ends. `end < start` is a valid empty span.
    Bounded { start: usize, end: usize },
    /// Everything from `start` to the last row.
    From { start: usize },
}

impl RowRange {
    pub fn slice<'a>(&self, rows: &'a [Row]) -> &'a [Row] {
        match *self {
            RowRange::Bounded { start, end } => {
                if start > end || start >= rows.len() {
                    &[]
                } else {
                    &rows[start..=end.min(rows.len() - 1)]
                }
            }
            RowRange::From { start } => {
                if start >= rows.len() {
                    &[]
                } else {
                    &rows[start..]
                }
            }
        }
    }
}

/// One term's identity and the rows it owns. `year` is always derived from
/// the digits of `id` with the century prefixed, never supplied separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermWindow {
    pub id: String,
    pub year: i32,
    pub row_range: RowRange,
}

impl TermWindow {
    pub fn new(id: String, row_range: RowRange) -> Result<Self, StructuralError> {
        let year = term_year(&id)?;
        Ok(Self { id, year, row_range })
    }
}

/// `"HT24"` → 2024.
fn term_year(id: &str) -> Result<i32, StructuralError> {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(StructuralError::TermYear { id: id.to_string() });
    }
    format!("20{digits}")
        .parse()
        .map_err(|_| StructuralError::TermYear { id: id.to_string() })
}

/// One academic term with every course discovered inside its row window.
///
/// The mapping is filled by inserting course ids in row order; a course id
/// discovered twice keeps the later entry (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub id: String,
    pub year: i32,
    courses: BTreeMap<String, CourseSchedule>,
}

impl Term {
    pub fn new(id: String, year: i32, courses: BTreeMap<String, CourseSchedule>) -> Self {
        Self { id, year, courses }
    }

    /// Schedule for `course_id`, or a structural error naming the term.
    pub fn course(&self, course_id: &str) -> Result<&CourseSchedule, StructuralError> {
        self.courses.get(course_id).ok_or_else(|| StructuralError::UnknownCourse {
            course_id: course_id.to_string(),
            term_id: self.id.clone(),
        })
    }

    pub fn courses(&self) -> impl Iterator<Item = (&str, &CourseSchedule)> {
        self.courses.iter().map(|(id, schedule)| (id.as_str(), schedule))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// The whole file: an autumn/spring pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terms {
    pub autumn: Term,
    pub spring: Term,
}
