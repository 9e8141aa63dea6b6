use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "notetidy",
    about = "Course-notes bulk renamer with tutorial/problem-sheet reporting",
    version,
    author,
    long_about = "NoteTidy keeps course-material trees consistent by rewriting\n\
                  filenames to a year-before-semester convention and by building\n\
                  grouped reports of tutorial and problem-sheet files.\n\n\
                  Flows:\n\
                  • rename: swap _Sem[12]_YY-YY_ tokens across a tree\n\
                  • detect: find tutorial-like files and emit a grouped report\n\
                  • sequence: renumber a directory of scans from a template\n\
                  • prefix: replace a fixed filename prefix in a directory"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite _Sem[12]_YY-YY_ filename tokens to year-before-semester
    Rename(RenameArgs),

    /// Detect tutorial/problem-sheet files and emit a grouped report
    Detect(DetectArgs),

    /// Rename numbered scans in one directory sequentially from a template
    Sequence(SequenceArgs),

    /// Replace a fixed filename prefix in one directory
    Prefix(PrefixArgs),
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Do not perform renames; only show what would change
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Md)]
    pub format: ReportFormat,

    /// Optional path to write the report to (stdout otherwise)
    #[arg(long)]
    pub report_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Directory containing the files to renumber
    pub dir: PathBuf,

    /// Filename template; {n} is replaced by the 1-based position
    pub template: String,

    /// File extension to include
    #[arg(long, default_value = "pdf")]
    pub ext: String,

    /// Do not perform renames; only show what would change
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct PrefixArgs {
    /// Directory containing the files to rename
    pub dir: PathBuf,

    /// Prefix to replace
    pub old_prefix: String,

    /// Replacement prefix
    pub new_prefix: String,

    /// Do not perform renames; only show what would change
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Grouped Markdown report
    Md,
    /// JSON dump of every record
    Json,
}
