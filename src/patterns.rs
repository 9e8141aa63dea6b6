use regex::Regex;

/// Extensions considered by the tutorial scanner
pub const SCAN_EXTENSIONS: &[&str] = &["pdf", "zip", "docx", "doc", "pptx", "ppt"];

/// Extensions considered by the semester/year rename flow
pub const RENAME_EXTENSIONS: &[&str] = &["pdf", "zip"];

/// Tutorial-indicator synonyms, in match order. New naming conventions go
/// here, not into control flow.
pub const TUTORIAL_TOKENS: &[&str] = &[
    "tutorials",
    "tutorial",
    "tut",
    "practice",
    "problem sheets",
    "problem_sheets",
    "problem-sheets",
    "problemsheets",
];

/// Fallback keywords matched as plain substrings of the filename
pub const FALLBACK_KEYWORDS: &[&str] = &["problem", "sheet"];

/// Academic-year patterns in priority order. Each capture group yields the
/// year token; `/` separators are normalized to `-` afterwards.
pub const YEAR_PATTERNS: &[&str] = &[
    r"(\d{2}-\d{2})",
    r"(\d{4}-\d{4})",
    r"(?i)AY\s*(\d{2}[-/]\d{2})",
    r"(?i)AY\s*(\d{4}[-/]\d{4})",
];

const COURSE_CODE_PATTERN: &str = r"([A-Z]{2,4}\d{4})";
const SEMESTER_PATTERN: &str = r"(?i)Sem(?:ester)?[_\s-]*([12])";

/// Semester-before-year token targeted by the rename flow
pub const SEM_YEAR_PATTERN: &str = r"_(Sem[12])_(\d{2}-\d{2})_";
/// Replacement that swaps the two tokens, everything else verbatim
pub const SEM_YEAR_SWAP: &str = "_${2}_${1}_";

/// Number-in-parentheses token used by the sequence rename flow
pub const SEQUENCE_NUMBER_PATTERN: &str = r"\((\d+)\)";

/// Compiled pattern tables shared by the scanner and rename flows.
///
/// All patterns are static, so compilation failures are programmer errors.
pub struct PatternSet {
    pub tutorial_indicator: Regex,
    pub fallback_keywords: Vec<Regex>,
    pub course_code: Regex,
    pub year_patterns: Vec<Regex>,
    pub semester: Regex,
}

impl PatternSet {
    pub fn new() -> Self {
        // Tokens are bounded by non-letters rather than \b: filenames like
        // MH1101_Tutorial_3.pdf separate tokens with underscores, which regex
        // word boundaries treat as word characters.
        let tokens = TUTORIAL_TOKENS
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let tutorial_indicator = Regex::new(&format!(r"(?i)(^|[^a-z])({})([^a-z]|$)", tokens))
            .expect("Invalid tutorial indicator regex");

        let fallback_keywords = FALLBACK_KEYWORDS
            .iter()
            .map(|kw| Regex::new(&format!("(?i){}", kw)).expect("Invalid keyword regex"))
            .collect();

        let year_patterns = YEAR_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("Invalid year regex"))
            .collect();

        Self {
            tutorial_indicator,
            fallback_keywords,
            course_code: Regex::new(COURSE_CODE_PATTERN).expect("Invalid course code regex"),
            year_patterns,
            semester: Regex::new(SEMESTER_PATTERN).expect("Invalid semester regex"),
        }
    }

    /// First course-code match across the candidate strings
    pub fn find_course_code(&self, candidates: &[String]) -> Option<String> {
        candidates
            .iter()
            .find_map(|part| self.course_code.captures(part).map(|c| c[1].to_string()))
    }

    /// First academic-year match across the candidate strings. Year patterns
    /// are tried in priority order within each candidate; the matched token
    /// has `/` normalized to `-`.
    pub fn find_academic_year(&self, candidates: &[String]) -> Option<String> {
        candidates.iter().find_map(|part| {
            self.year_patterns
                .iter()
                .find_map(|pat| pat.captures(part).map(|c| c[1].replace('/', "-")))
        })
    }

    /// First semester match across the candidate strings, parsed to 1 or 2
    pub fn find_semester(&self, candidates: &[String]) -> Option<u8> {
        candidates
            .iter()
            .find_map(|part| self.semester.captures(part).and_then(|c| c[1].parse().ok()))
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tutorial_indicator_matches_separated_tokens() {
        let p = PatternSet::new();
        assert!(p.tutorial_indicator.is_match("MH1101_Tutorial_3.pdf"));
        assert!(p.tutorial_indicator.is_match("Tutorials"));
        assert!(p.tutorial_indicator.is_match("tut 5.pdf"));
        assert!(p.tutorial_indicator.is_match("Practice-Questions.pdf"));
        assert!(p.tutorial_indicator.is_match("problem sheets"));
        assert!(!p.tutorial_indicator.is_match("Lecture_Notes.pdf"));
        // "tutor" is not a tutorial token
        assert!(!p.tutorial_indicator.is_match("Tutor_Feedback.pdf"));
    }

    #[test]
    fn course_code_from_segment_list() {
        let p = PatternSet::new();
        let candidates = parts(&["MH1101_CalculusII_25-26_Sem1", "MH1101"]);
        assert_eq!(p.find_course_code(&candidates), Some("MH1101".to_string()));
        assert_eq!(p.find_course_code(&parts(&["Tutorials", "Notes"])), None);
    }

    #[test]
    fn academic_year_from_segment_list() {
        let p = PatternSet::new();
        let candidates = parts(&["MH1101_CalculusII_25-26_Sem1", "MH1101"]);
        assert_eq!(p.find_academic_year(&candidates), Some("25-26".to_string()));
    }

    #[test]
    fn academic_year_ay_prefix_normalized() {
        let p = PatternSet::new();
        assert_eq!(
            p.find_academic_year(&parts(&["AY24-25"])),
            Some("24-25".to_string())
        );
        assert_eq!(
            p.find_academic_year(&parts(&["AY24/25"])),
            Some("24-25".to_string())
        );
        assert_eq!(
            p.find_academic_year(&parts(&["ay 2024/2025"])),
            Some("2024-2025".to_string())
        );
    }

    #[test]
    fn year_patterns_tried_in_priority_order() {
        let p = PatternSet::new();
        // The 2-digit pattern is tried first, so it wins inside a 4-digit
        // range as well
        assert_eq!(
            p.find_academic_year(&parts(&["2025-2026"])),
            Some("25-20".to_string())
        );
        // First candidate with any match wins over later candidates
        assert_eq!(
            p.find_academic_year(&parts(&["notes 18-19", "AY20-21"])),
            Some("18-19".to_string())
        );
    }

    #[test]
    fn semester_from_segment_list() {
        let p = PatternSet::new();
        assert_eq!(
            p.find_semester(&parts(&["MH1101_CalculusII_25-26_Sem1"])),
            Some(1)
        );
        assert_eq!(p.find_semester(&parts(&["Semester 2"])), Some(2));
        assert_eq!(p.find_semester(&parts(&["sem_1"])), Some(1));
        assert_eq!(p.find_semester(&parts(&["Sem3", "Notes"])), None);
    }

    #[test]
    fn extraction_is_independent_per_field() {
        let p = PatternSet::new();
        let candidates = parts(&["random_folder", "Tutorials"]);
        assert_eq!(p.find_course_code(&candidates), None);
        assert_eq!(p.find_academic_year(&candidates), None);
        assert_eq!(p.find_semester(&candidates), None);
    }
}
