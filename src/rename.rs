use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use colored::*;
use regex::Regex;
use walkdir::WalkDir;

use crate::colors;
use crate::patterns::{
    RENAME_EXTENSIONS, SEM_YEAR_PATTERN, SEM_YEAR_SWAP, SEQUENCE_NUMBER_PATTERN,
};

/// One planned or performed rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub path: PathBuf,
    pub new_name: String,
}

/// Outcome of a rename flow. Under dry-run, `entries` holds the proposed
/// changes and nothing on disk has moved.
#[derive(Debug, Default)]
pub struct RenamePlan {
    pub entries: Vec<RenameEntry>,
    pub failures: usize,
}

impl RenamePlan {
    fn apply(&mut self, path: &Path, new_name: &str, dry_run: bool) {
        if dry_run {
            self.entries.push(RenameEntry {
                path: path.to_path_buf(),
                new_name: new_name.to_string(),
            });
            return;
        }

        let new_path = path.with_file_name(new_name);
        match fs::rename(path, &new_path) {
            Ok(()) => {
                println!("  {} Renamed successfully", "✓".color(colors::SUCCESS));
                self.entries.push(RenameEntry {
                    path: path.to_path_buf(),
                    new_name: new_name.to_string(),
                });
            }
            Err(e) => {
                // Per-file isolation: report and keep going
                eprintln!("  {} Error: {}", "✗".red(), e);
                self.failures += 1;
            }
        }
    }
}

/// Rewrite `_Sem[12]_YY-YY_` filename tokens to year-before-semester order
/// across a whole directory tree
pub fn rename_semester_year(root: &Path, dry_run: bool) -> Result<RenamePlan> {
    if !root.exists() {
        bail!("Directory not found: {}", root.display());
    }

    let pattern = Regex::new(SEM_YEAR_PATTERN).expect("Invalid sem/year regex");
    let mut plan = RenamePlan::default();

    println!("{} {}", "🔍 Scanning:".color(colors::HEADER), root.display());
    println!(
        "Mode: {}",
        if dry_run {
            "DRY RUN (no changes)".color(colors::WARNING)
        } else {
            "LIVE (files will be renamed)".color(colors::SUCCESS)
        }
    );

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
        if !RENAME_EXTENSIONS.contains(&extension.as_str()) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !pattern.is_match(&file_name) {
            continue;
        }

        let new_name = pattern.replace_all(&file_name, SEM_YEAR_SWAP).into_owned();
        if new_name == file_name {
            continue;
        }

        let parent = entry
            .path()
            .parent()
            .and_then(|p| p.strip_prefix(root).ok())
            .unwrap_or_else(|| Path::new(""));
        println!();
        println!("📁 {}", parent.display().to_string().color(colors::PATH));
        println!("  OLD: {}", file_name);
        println!("  NEW: {}", new_name);

        plan.apply(entry.path(), &new_name, dry_run);
    }

    Ok(plan)
}

/// Rename files in a single directory to sequential names from a template.
///
/// Files are ordered by the first parenthesized number in their name, the
/// way scanned tutorial sets are usually numbered; names without one sort
/// last, then alphabetically. `{n}` in the template is replaced by the
/// 1-based position.
pub fn rename_sequence(dir: &Path, template: &str, ext: &str, dry_run: bool) -> Result<RenamePlan> {
    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }
    if !template.contains("{n}") {
        bail!("Template must contain a {{n}} placeholder");
    }

    let number = Regex::new(SEQUENCE_NUMBER_PATTERN).expect("Invalid sequence regex");
    let wanted_ext = ext.trim_start_matches('.').to_lowercase();

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let extension = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if extension == wanted_ext {
            names.push(name);
        }
    }

    names.sort_by_key(|name| {
        let n = number
            .captures(name)
            .and_then(|c| c[1].parse::<u64>().ok())
            .unwrap_or(u64::MAX);
        (n, name.clone())
    });

    let mut plan = RenamePlan::default();
    println!("{}", "--- Planned Renaming Process ---".color(colors::HEADER));

    for (index, name) in names.iter().enumerate() {
        let new_name = template.replace("{n}", &(index + 1).to_string());
        if new_name == *name {
            continue;
        }

        println!("  OLD: {}", name);
        println!("  NEW: {}", new_name);

        plan.apply(&dir.join(name), &new_name, dry_run);
    }

    Ok(plan)
}

/// Replace a fixed filename prefix in a single directory
pub fn rename_prefix(dir: &Path, old_prefix: &str, new_prefix: &str, dry_run: bool) -> Result<RenamePlan> {
    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }

    let mut plan = RenamePlan::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(rest) = name.strip_prefix(old_prefix) else {
            continue;
        };

        let new_name = format!("{}{}", new_prefix, rest);
        if new_name == name {
            continue;
        }

        println!("  OLD: {}", name);
        println!("  NEW: {}", new_name);

        plan.apply(&entry.path(), &new_name, dry_run);
    }

    Ok(plan)
}
