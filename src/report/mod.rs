// src/report/mod.rs
use std::fmt::Write;

use crate::extract::{Term, Terms};

/// Render both terms as the two aligned text views: week numbers first,
/// exact dates second.
pub fn render(terms: &Terms) -> String {
    let mut out = String::new();
    render_term(&mut out, &terms.autumn);
    out.push('\n');
    render_term(&mut out, &terms.spring);
    out
}

fn render_term(out: &mut String, term: &Term) {
    let _ = writeln!(out, "{} ({})", term.id, term.year);

    for (course_id, course) in term.courses() {
        let weeks: Vec<String> = course.weeknight_weeks().iter().map(u32::to_string).collect();
        let weekends: Vec<String> = course.weekend_weeks().iter().map(u32::to_string).collect();
        let _ = writeln!(
            out,
            "{:<10} - {:<26} - {}",
            course_id,
            weeknight_view(&weeks),
            weekend_view(&weekends)
        );
    }

    let _ = writeln!(out, "\n---------------------------\n");

    for (course_id, course) in term.courses() {
        let dates: Vec<String> =
            course.weeknight_dates().iter().map(|d| d.to_string()).collect();
        let weekends: Vec<String> =
            course.weekend_dates().iter().map(|d| d.to_string()).collect();
        let _ = writeln!(
            out,
            "{:<10} - {:<60} - {}",
            course_id,
            weeknight_view(&dates),
            weekend_view(&weekends)
        );
    }
}

fn weeknight_view(items: &[String]) -> String {
    if items.is_empty() {
        return "(no weeknights)".to_string();
    }
    format!("weeks {}", items.join(", "))
}

fn weekend_view(items: &[String]) -> String {
    if items.is_empty() {
        return "(no weekend)".to_string();
    }
    format!("weekend {}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{parse_terms, Terms};
    use crate::load::read_rows;

    fn fixture() -> Terms {
        let csv = "\
Vecka,Mån,,,Tis,,,Ons,,,Tor,,,Fre,,,Lör,,,Sön,,,Kurser       Lindy /Jazz
,Stora salen HT24,,,,,,,,,,,,,,,,,,,,,
36,2 sep.,HK 1,,,,,,,,,,,,,,,,,,,,HK 1 Mån 19.00
,Stora salen VT25,,,,,,,,,,,,,,,,,,,,,
4,20 jan.,GK 1,,,,,,,,,,,,,,25 jan.,GK 1,,26 jan.,GK 1,,GK 1 Mån 18.00
";
        let rows = read_rows(csv.as_bytes()).unwrap();
        parse_terms(&rows).unwrap()
    }

    #[test]
    fn renders_week_and_date_views_for_both_terms() {
        let rendered = render(&fixture());
        assert!(rendered.contains("HT24 (2024)"));
        assert!(rendered.contains("VT25 (2025)"));
        assert!(rendered.contains("HK 1       - weeks 36"));
        assert!(rendered.contains("GK 1       - weeks 4"));
        assert!(rendered.contains("weekend 4"));
        assert!(rendered.contains("2025-01-25, 2025-01-26"));
        assert!(rendered.contains("(no weekend)"));
    }
}
