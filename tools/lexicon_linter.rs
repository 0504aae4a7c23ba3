/// Lexicon Linter: validates the word pools of RON lexicon files.
///
/// Usage: lexicon_linter <lexicon.ron | lexicon_dir>

use clap::Parser;
use endless_hymn::schema::lexicon::{Lexicon, LintReport};
use std::path::{Path, PathBuf};
use std::process;

/// Check RON lexicons for empty, thin, blank, or repeated pool entries
#[derive(Parser)]
#[command(name = "lexicon_linter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lexicon file, or a directory searched recursively for .ron files
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let target = cli.path.as_path();
    let files = if target.is_file() {
        vec![target.to_path_buf()]
    } else if target.is_dir() {
        let mut files = Vec::new();
        collect_ron_files(target, &mut files);
        files.sort();
        files
    } else {
        eprintln!("ERROR: Path '{}' does not exist", target.display());
        process::exit(1);
    };

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for path in &files {
        println!("\n=== {} ===\n", path.display());
        let report = match Lexicon::load_from_ron(path) {
            Ok(lexicon) => lexicon.lint(),
            Err(e) => LintReport {
                errors: vec![format!("Failed to load lexicon: {}", e)],
                warnings: Vec::new(),
            },
        };
        print_report(&report);
        total_errors += report.errors.len();
        total_warnings += report.warnings.len();
    }

    println!(
        "\nSummary: {} files, {} errors, {} warnings",
        files.len(),
        total_errors,
        total_warnings
    );

    if total_errors == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn collect_ron_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_ron_files(&path, files);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                files.push(path);
            }
        }
    }
}

fn print_report(report: &LintReport) {
    if report.is_clean() {
        println!("All checks passed!");
    }
    for warning in &report.warnings {
        println!("WARNING: {}", warning);
    }
    for error in &report.errors {
        println!("ERROR: {}", error);
    }
}
