// src/extract/terms.rs
//
// Term banner rows carry the hall name followed by a season code, e.g.
// "Stora salen HT24". The first two banners delimit the autumn and spring
// windows; a third banner, when the exporter appends one, is only a parsing
// sentinel and never becomes a window.
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::error::StructuralError;
use super::types::{RowRange, TermAnchor, TermWindow};
use crate::load::Row;

/// Two uppercase season letters then the year digits, e.g. `HT24` / `VT25`.
static TERM_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(HT|VT)\d+").unwrap());

/// A banner cell: the hall name somewhere before a season code.
static TERM_BANNER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Stora.+(HT|VT)\d+").unwrap());

/// Scan every row for banner cells and return the anchors in row order.
/// The first matching cell of a row supplies that row's season code.
///
/// Fewer than two anchors means the file cannot hold an autumn/spring pair
/// and is reported as a structural error, never papered over.
pub fn locate_term_headers(rows: &[Row]) -> Result<Vec<TermAnchor>, StructuralError> {
    let mut anchors = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        let Some(id) = row
            .iter()
            .find(|cell| TERM_BANNER.is_match(cell))
            .and_then(|cell| TERM_ID.find(cell))
            .map(|m| m.as_str().to_string())
        else {
            continue;
        };
        debug!(row = row_index, id = %id, "term banner");
        anchors.push(TermAnchor { id, row_index });
    }

    if anchors.len() < 2 {
        return Err(StructuralError::TooFewTermHeaders { found: anchors.len() });
    }
    Ok(anchors)
}

/// Turn the anchor sequence into the two term windows.
///
/// Autumn spans the rows strictly between the first two anchors; spring is
/// open-ended from just after the second anchor. Adjacent anchors produce an
/// empty autumn span, which is valid and yields a term with no courses.
pub fn term_windows(anchors: &[TermAnchor]) -> Result<(TermWindow, TermWindow), StructuralError> {
    let [autumn, spring, ..] = anchors else {
        return Err(StructuralError::TooFewTermHeaders { found: anchors.len() });
    };

    let autumn_window = TermWindow::new(
        autumn.id.clone(),
        RowRange::Bounded {
            start: autumn.row_index + 1,
            end: spring.row_index.saturating_sub(1),
        },
    )?;
    let spring_window = TermWindow::new(
        spring.id.clone(),
        RowRange::From { start: spring.row_index + 1 },
    )?;

    Ok((autumn_window, spring_window))
}
