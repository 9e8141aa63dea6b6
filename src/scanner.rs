use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use walkdir::WalkDir;

use crate::colors;
use crate::patterns::{PatternSet, SCAN_EXTENSIONS};

/// Classification of a detected file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Tutorial,
    ProblemSheet,
}

/// One detected tutorial-like file.
///
/// `file_name` and `relative_path` are always populated; everything else is
/// best-effort and absent when the extraction heuristics find nothing.
#[derive(Debug, Clone, Serialize)]
pub struct TutorialRecord {
    pub course_code: Option<String>,
    pub course_title: Option<String>,
    pub doc_type: DocType,
    pub academic_year: Option<String>,
    pub semester: Option<u8>,
    pub file_name: String,
    pub relative_path: String,
    pub size_bytes: u64,
    pub modified: DateTime<Utc>,
}

/// Ordered inclusion predicates; the first true predicate includes the file.
type InclusionCheck = fn(&TutorialScanner, &str, &[String]) -> bool;
const INCLUSION_CHECKS: &[InclusionCheck] = &[
    TutorialScanner::filename_has_indicator,
    TutorialScanner::ancestor_has_indicator,
    TutorialScanner::filename_has_keyword,
];

pub struct TutorialScanner {
    patterns: PatternSet,
}

impl TutorialScanner {
    pub fn new() -> Self {
        Self {
            patterns: PatternSet::new(),
        }
    }

    /// Scan a directory tree for tutorial/problem-sheet files
    pub fn scan(&self, root: &Path) -> Result<Vec<TutorialRecord>> {
        if !root.exists() {
            return Err(anyhow::anyhow!("Directory not found: {}", root.display()));
        }

        println!("{} {}", "🔍 Scanning:".color(colors::HEADER), root.display());

        let candidates = self.collect_candidates(root);
        if candidates.is_empty() {
            println!("{} No tutorial-like files found", "✨".green());
            return Ok(Vec::new());
        }

        println!("Found {} candidate files", candidates.len());

        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")?
                .progress_chars("#>-"),
        );

        let mut records = Vec::new();
        for path in &candidates {
            pb.inc(1);
            // Unreadable stat or a vanished file skips that record only
            if let Some(record) = self.parse_record(path, root) {
                records.push(record);
            }
        }
        pb.finish_and_clear();

        Ok(records)
    }

    /// Collect files whose extension and name/path pass the inclusion checks
    fn collect_candidates(&self, root: &Path) -> Vec<std::path::PathBuf> {
        let mut candidates = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok());

        for entry in walker {
            if !entry.file_type().is_file() {
                continue;
            }

            let extension = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("")
                .to_lowercase();
            if !SCAN_EXTENSIONS.contains(&extension.as_str()) {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            let dir_segments = Self::dir_segments(entry.path(), root);

            if INCLUSION_CHECKS
                .iter()
                .any(|check| check(self, &file_name, &dir_segments))
            {
                candidates.push(entry.path().to_path_buf());
            }
        }

        candidates
    }

    fn filename_has_indicator(&self, file_name: &str, _segments: &[String]) -> bool {
        self.patterns.tutorial_indicator.is_match(file_name)
    }

    fn ancestor_has_indicator(&self, _file_name: &str, segments: &[String]) -> bool {
        segments
            .iter()
            .any(|s| self.patterns.tutorial_indicator.is_match(s))
    }

    fn filename_has_keyword(&self, file_name: &str, _segments: &[String]) -> bool {
        self.patterns
            .fallback_keywords
            .iter()
            .any(|kw| kw.is_match(file_name))
    }

    /// Ancestor directory names between the scan root and the file,
    /// outermost first
    fn dir_segments(path: &Path, root: &Path) -> Vec<String> {
        path.strip_prefix(root)
            .unwrap_or(path)
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Build a record for an included file. Returns None when the file
    /// cannot be stat'd; the scan carries on without it.
    fn parse_record(&self, path: &Path, root: &Path) -> Option<TutorialRecord> {
        let metadata = fs::metadata(path).ok()?;
        let modified: DateTime<Utc> = metadata.modified().ok()?.into();

        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        let dir_segments = Self::dir_segments(path, root);

        // Filename first, then ancestor segments, per extraction order
        let mut candidates = vec![file_name.clone()];
        candidates.extend(dir_segments.iter().cloned());

        let course_code = self.patterns.find_course_code(&candidates);
        let academic_year = self.patterns.find_academic_year(&candidates);
        let semester = self.patterns.find_semester(&candidates);

        let doc_type = if self.filename_has_indicator(&file_name, &dir_segments)
            || self.ancestor_has_indicator(&file_name, &dir_segments)
        {
            DocType::Tutorial
        } else {
            DocType::ProblemSheet
        };

        // Title guess: nearest ancestor directory that is not itself a course
        // code. Only attempted once a course code is known. May be wrong.
        let course_title = course_code.as_ref().and_then(|_| {
            dir_segments
                .iter()
                .rev()
                .find(|segment| !self.patterns.course_code.is_match(segment))
                .map(|segment| segment.replace(['_', '-'], " ").trim().to_string())
                .filter(|title| !title.is_empty())
        });

        Some(TutorialRecord {
            course_code,
            course_title,
            doc_type,
            academic_year,
            semester,
            file_name,
            relative_path,
            size_bytes: metadata.len(),
            modified,
        })
    }
}

impl Default for TutorialScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut f = File::create(path).unwrap();
        f.write_all(b"dummy").unwrap();
    }

    #[test]
    fn detects_tutorial_in_tutorials_directory_only() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Notes");
        touch(&root.join("MH1101/Tutorials/Tut1.pdf"));
        touch(&root.join("MH1101/Notes.pdf"));

        let scanner = TutorialScanner::new();
        let records = scanner.scan(&root).unwrap();

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.file_name, "Tut1.pdf");
        assert_eq!(rec.doc_type, DocType::Tutorial);
        assert_eq!(rec.course_code.as_deref(), Some("MH1101"));
    }

    #[test]
    fn filename_indicator_wins_anywhere() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Notes");
        touch(&root.join("misc/MH1101_Tutorial_3.pdf"));

        let scanner = TutorialScanner::new();
        let records = scanner.scan(&root).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].doc_type, DocType::Tutorial);
    }

    #[test]
    fn problem_sheet_without_tutorial_token() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Notes");
        touch(&root.join("misc/ProblemSheet_4.pdf"));

        let scanner = TutorialScanner::new();
        let records = scanner.scan(&root).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].doc_type, DocType::ProblemSheet);
    }

    #[test]
    fn ignored_extension_is_excluded() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Notes");
        touch(&root.join("Tutorials/Tut1.txt"));

        let scanner = TutorialScanner::new();
        assert!(scanner.scan(&root).unwrap().is_empty());
    }

    #[test]
    fn metadata_extraction_from_ancestors() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Notes");
        touch(&root.join("MH1101_CalculusII_25-26_Sem1/Tutorials/Tutorial 4.pdf"));

        let scanner = TutorialScanner::new();
        let records = scanner.scan(&root).unwrap();

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.course_code.as_deref(), Some("MH1101"));
        assert_eq!(rec.academic_year.as_deref(), Some("25-26"));
        assert_eq!(rec.semester, Some(1));
        assert_eq!(rec.course_title.as_deref(), Some("Tutorials"));
    }

    #[test]
    fn record_emitted_with_all_optional_fields_absent() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Notes");
        touch(&root.join("stuff/practice set.pdf"));

        let scanner = TutorialScanner::new();
        let records = scanner.scan(&root).unwrap();

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert!(rec.course_code.is_none());
        assert!(rec.academic_year.is_none());
        assert!(rec.semester.is_none());
        assert!(rec.course_title.is_none());
        assert_eq!(rec.file_name, "practice set.pdf");
        assert!(!rec.relative_path.is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let scanner = TutorialScanner::new();
        assert!(scanner.scan(&tmp.path().join("nope")).is_err());
    }
}
