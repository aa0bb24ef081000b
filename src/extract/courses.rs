// src/extract/courses.rs
use crate::load::Row;

/// Header of the course-label column, byte for byte as the export writes it.
/// Lookup is exact, so the interior whitespace must stay untouched.
pub const COURSES_HEADER: &str = "Kurser       Lindy /Jazz";

/// Banner phrases that share the course-label column but never name a course.
const NON_COURSE_STRINGS: &[&str] = &[
    "Önskekurser",
    "Önske-kurser",
    "Öppet hus",
    "Registreringen stänger",
    "Första kursdag",
];

/// Course ids discovered in a term's rows, in row order.
///
/// Not deduplicated here: the term assembler inserts them into its mapping
/// in this order, so a repeated id keeps the later discovery.
pub fn course_ids(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.get(COURSES_HEADER))
        .filter(|label| !is_banner(label))
        .map(course_id_from_label)
        .collect()
}

fn is_banner(label: &str) -> bool {
    NON_COURSE_STRINGS.iter().any(|banner| label.contains(banner))
}

/// `"GK 1 Mån 18.00"` → `"GK 1"`: keep everything up to and including the
/// first digit. A label with no digit at all is kept whole (trimmed) — in
/// practice the lone wildcard label `"A"`.
fn course_id_from_label(label: &str) -> String {
    match label.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => label[..pos + 1].to_string(),
        None => label.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn label_row(label: &str) -> Row {
        let headers = Arc::new(vec!["Vecka".to_string(), COURSES_HEADER.to_string()]);
        Row::new(headers, vec![String::new(), label.to_string()])
    }

    #[test]
    fn keeps_label_through_first_digit() {
        let rows = vec![label_row("GK 1 Mån 18.00"), label_row("M 2 tema bugg")];
        assert_eq!(course_ids(&rows), vec!["GK 1", "M 2"]);
    }

    #[test]
    fn digitless_label_is_kept_whole_and_trimmed() {
        let rows = vec![label_row("A "), label_row("A")];
        assert_eq!(course_ids(&rows), vec!["A", "A"]);
    }

    #[test]
    fn banner_rows_contribute_nothing() {
        let rows = vec![
            label_row("Önskekurser v. 40"),
            label_row("Önske-kurser"),
            label_row("Öppet hus 12 jan."),
            label_row("Registreringen stänger"),
            label_row("Första kursdag"),
            label_row("GK 2 Tis 19.00"),
        ];
        assert_eq!(course_ids(&rows), vec!["GK 2"]);
    }

    #[test]
    fn rows_without_a_label_cell_are_skipped() {
        let headers = Arc::new(vec!["Vecka".to_string(), COURSES_HEADER.to_string()]);
        let rows = vec![
            Row::new(Arc::clone(&headers), vec!["35".to_string(), String::new()]),
            Row::new(Arc::clone(&headers), vec!["36".to_string()]),
            label_row("GK 1 Mån"),
        ];
        assert_eq!(course_ids(&rows), vec!["GK 1"]);
    }

    #[test]
    fn non_ascii_text_before_the_digit_is_preserved() {
        let rows = vec![label_row("Fortsättning 2 Ons")];
        assert_eq!(course_ids(&rows), vec!["Fortsättning 2"]);
    }
}
