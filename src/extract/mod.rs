// src/extract/mod.rs
pub mod courses;
pub mod dates;
pub mod error;
pub mod schedule;
pub mod terms;
pub mod types;

pub use error::{DateError, FormatError, ScheduleError, StructuralError};
pub use schedule::CourseSchedule;
pub use types::{Term, TermAnchor, TermWindow, Terms};

use std::collections::BTreeMap;
use tracing::info;

use crate::load::Row;

/// Extract both terms from the loaded schedule rows.
///
/// Rows flow strictly downward: banner anchors, then row windows, then per
/// term the course ids and their schedules. Any failure aborts the whole
/// parse; there is no partial result.
pub fn parse_terms(rows: &[Row]) -> Result<Terms, ScheduleError> {
    let anchors = terms::locate_term_headers(rows)?;
    let (autumn_window, spring_window) = terms::term_windows(&anchors)?;

    let autumn = build_term(rows, &autumn_window)?;
    let spring = build_term(rows, &spring_window)?;
    Ok(Terms { autumn, spring })
}

fn build_term(rows: &[Row], window: &TermWindow) -> Result<Term, ScheduleError> {
    let term_rows = window.row_range.slice(rows);
    let schedule_lines = schedule::schedule_rows(term_rows)?;
    let course_ids = courses::course_ids(term_rows);

    // Insertion in row order; a repeated id keeps the later discovery.
    let mut term_courses = BTreeMap::new();
    for course_id in course_ids {
        let course = CourseSchedule::extract(&course_id, window.year, &schedule_lines)?;
        term_courses.insert(course_id, course);
    }

    info!(
        term = %window.id,
        year = window.year,
        courses = term_courses.len(),
        "extracted term"
    );
    Ok(Term::new(window.id.clone(), window.year, term_courses))
}
