// src/extract/dates.rs
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::error::DateError;

/// Month tokens exactly as the export spells them. April appears both
/// abbreviated and written out, depending on the column width the schedule
/// was typed into.
static MONTHS: &[(&str, u32)] = &[
    ("jan.", 1),
    ("feb.", 2),
    ("mars", 3),
    ("apr.", 4),
    ("april", 4),
    ("maj", 5),
    ("juni", 6),
    ("juli", 7),
    ("aug.", 8),
    ("sep.", 9),
    ("okt.", 10),
    ("nov.", 11),
    ("dec.", 12),
];

static MONTH_NUMBERS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| MONTHS.iter().copied().collect());

/// Rebuild the calendar date a `"<day> <month-token>"` grid cell stands for,
/// given the term's year.
///
/// Lookup is exact: token not in the lexicon is an error, never a guess.
/// Leading zeros on the day are accepted; a day that does not exist in the
/// month is rejected by calendar validation.
pub fn reconstruct(cell: &str, year: i32) -> Result<NaiveDate, DateError> {
    let mut parts = cell.split_whitespace();
    let (Some(day), Some(month_token)) = (parts.next(), parts.next()) else {
        return Err(DateError::MalformedCell(cell.to_string()));
    };

    let month = *MONTH_NUMBERS
        .get(month_token)
        .ok_or_else(|| DateError::UnknownMonth(month_token.to_string()))?;
    let day: u32 = day
        .parse()
        .map_err(|_| DateError::MalformedCell(cell.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::InvalidDate { year, month, day })
}
