use std::collections::BTreeMap;

use anyhow::Result;

use crate::scanner::TutorialRecord;

const UNKNOWN_COURSE: &str = "UNKNOWN_COURSE";
const UNKNOWN_YEAR: &str = "UNKNOWN_YEAR";

/// Course -> academic year -> semester grouping; the semester key comes
/// from [`semester_key`]
type Grouping<'a> =
    BTreeMap<String, BTreeMap<String, BTreeMap<(bool, u8), Vec<&'a TutorialRecord>>>>;

/// Straight projection of every record, fields verbatim
pub fn render_json(records: &[TutorialRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Sort key that puts numbered semesters ascending and unknowns last
fn semester_key(semester: Option<u8>) -> (bool, u8) {
    (semester.is_none(), semester.unwrap_or(0))
}

/// Render records grouped course -> academic year -> semester, leaves
/// sorted by file name
pub fn render_markdown(records: &[TutorialRecord]) -> String {
    let mut grouping: Grouping = BTreeMap::new();

    for record in records {
        let course = record
            .course_code
            .clone()
            .unwrap_or_else(|| UNKNOWN_COURSE.to_string());
        let year = record
            .academic_year
            .clone()
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string());
        grouping
            .entry(course)
            .or_default()
            .entry(year)
            .or_default()
            .entry(semester_key(record.semester))
            .or_default()
            .push(record);
    }

    let mut lines: Vec<String> = Vec::new();
    for (course, years) in &grouping {
        lines.push(format!("## {}", course));
        for (year, semesters) in years {
            lines.push(format!("\n### {}", year));
            for (&(unknown, semester), group) in semesters {
                let label = if unknown {
                    "Unknown semester".to_string()
                } else {
                    format!("Sem {}", semester)
                };
                lines.push(format!("\n#### {}", label));

                let mut group = group.clone();
                group.sort_by(|a, b| a.file_name.cmp(&b.file_name));
                for record in group {
                    match &record.course_title {
                        Some(title) => lines.push(format!(
                            "- {} — {} — {}",
                            record.file_name, title, record.relative_path
                        )),
                        None => lines.push(format!(
                            "- {} — {}",
                            record.file_name, record.relative_path
                        )),
                    }
                }
            }
        }
        lines.push("\n---\n".to_string());
    }

    lines.join("\n")
}
