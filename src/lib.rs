//! NoteTidy - course-notes bulk renamer and tutorial report tool

pub mod cli;
pub mod patterns;
pub mod rename;
pub mod report;
pub mod scanner;

// Re-exports for easy access
pub use cli::{Cli, Commands, ReportFormat};
pub use patterns::PatternSet;
pub use rename::{rename_prefix, rename_semester_year, rename_sequence, RenameEntry, RenamePlan};
pub use report::{render_json, render_markdown};
pub use scanner::{DocType, TutorialRecord, TutorialScanner};

pub mod colors {
    use colored::Color;

    pub const SUCCESS: Color = Color::TrueColor { r: 77, g: 255, b: 157 };
    pub const HEADER: Color = Color::TrueColor { r: 157, g: 77, b: 255 };
    pub const PATH: Color = Color::TrueColor { r: 77, g: 195, b: 255 };
    pub const WARNING: Color = Color::TrueColor { r: 255, g: 217, b: 61 };
}

/// Current version of NoteTidy
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
