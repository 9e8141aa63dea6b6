use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use notetidy::cli::{Cli, Commands, DetectArgs, PrefixArgs, RenameArgs, ReportFormat, SequenceArgs};
use notetidy::colors;
use notetidy::rename::{rename_prefix, rename_semester_year, rename_sequence, RenamePlan};
use notetidy::report::{render_json, render_markdown};
use notetidy::scanner::TutorialScanner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Rename(args) => handle_rename(&args)?,
        Commands::Detect(args) => handle_detect(&args, cli.verbose)?,
        Commands::Sequence(args) => handle_sequence(&args)?,
        Commands::Prefix(args) => handle_prefix(&args)?,
    }

    Ok(())
}

fn handle_rename(args: &RenameArgs) -> Result<()> {
    let plan = rename_semester_year(&args.root, args.dry_run)?;
    print_plan_summary(&plan, args.dry_run);

    if plan.entries.is_empty() && plan.failures == 0 {
        println!();
        println!("No files found matching the pattern _Sem[12]_YY-YY_");
        println!("Files may already be in the new format (_YY-YY_Sem[12]_).");
    }

    Ok(())
}

fn handle_detect(args: &DetectArgs, verbose: bool) -> Result<()> {
    let scanner = TutorialScanner::new();
    let records = scanner.scan(&args.root)?;

    if verbose {
        for record in &records {
            println!(
                "  {:?} {} ({})",
                record.doc_type,
                record.file_name.color(colors::PATH),
                record.relative_path
            );
        }
    }

    let output = match args.format {
        ReportFormat::Md => render_markdown(&records),
        ReportFormat::Json => render_json(&records)?,
    };

    match &args.report_file {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Wrote report to {} ({} records)",
                "✓".color(colors::SUCCESS),
                path.display(),
                records.len()
            );
        }
        None => println!("{}", output),
    }

    println!();
    println!("{} Detection complete.", "✨".green());
    Ok(())
}

fn handle_sequence(args: &SequenceArgs) -> Result<()> {
    let plan = rename_sequence(&args.dir, &args.template, &args.ext, args.dry_run)?;
    print_plan_summary(&plan, args.dry_run);
    Ok(())
}

fn handle_prefix(args: &PrefixArgs) -> Result<()> {
    let plan = rename_prefix(&args.dir, &args.old_prefix, &args.new_prefix, args.dry_run)?;
    print_plan_summary(&plan, args.dry_run);
    Ok(())
}

fn print_plan_summary(plan: &RenamePlan, dry_run: bool) {
    println!();
    println!("{}", "=".repeat(60).color(colors::HEADER));
    if dry_run {
        println!(
            "Total files to rename: {}",
            plan.entries.len().to_string().color(colors::SUCCESS)
        );
        println!("This was a DRY RUN. No files were actually renamed.");
        println!("Run again without --dry-run to rename the files.");
    } else {
        println!(
            "Successfully renamed {} files.",
            plan.entries.len().to_string().color(colors::SUCCESS)
        );
        if plan.failures > 0 {
            println!(
                "{} {} file(s) could not be renamed.",
                "⚠️".yellow(),
                plan.failures
            );
        }
    }
}
