//! CLI for pdftriage: triage PDF files or directories and report risk.

#![cfg(feature = "cli")]

use clap::Parser;
use indexmap::IndexMap;
use pdftriage::{analyze, read_document, render_report, AnalysisReport, Severity};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Parser)]
#[command(name = "pdftriage")]
#[command(about = "Static PDF malware triage: suspicious markers, IOCs, risk score", long_about = None)]
struct Args {
    /// Path to a PDF file or directory to scan (use -d/--directory to scan a whole directory)
    path: Option<String>,

    /// Scan a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When scanning a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// File extensions to scan (comma-separated). No-extension files are always scanned. Use --all to ignore the filter.
    #[arg(short, long, default_value = "pdf")]
    extensions: String,

    /// Scan all files regardless of extension
    #[arg(long)]
    all: bool,

    /// Output JSON per result (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only report files scored Medium or above
    #[arg(short, long)]
    quiet: bool,

    /// Save each rendered report to results/<name>_report.txt
    #[arg(long)]
    save: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let exts: HashSet<String> = args
        .extensions
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .collect();

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing path: give a file/directory as argument or use -d/--directory <DIR>")?;
    let path = Path::new(path_str.as_str());

    if path.is_file() {
        if args.directory.is_some() {
            eprintln!("--directory expects a directory, not a file: {}", path.display());
            std::process::exit(1);
        }
        scan_file(path, &args)?;
        return Ok(());
    }

    if path.is_dir() {
        if !args.quiet {
            eprintln!(
                "Scanning directory: {} {}",
                path.display(),
                if args.recursive { "(recursive)" } else { "" }
            );
        }
        scan_dir(path, &args, &exts)?;
        return Ok(());
    }

    // missing input is the one fatal precondition
    eprintln!("Not found: {}", path.display());
    std::process::exit(1);
}

fn scan_file(path: &Path, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = match read_document(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let report = analyze(&bytes);
    print_result(path, &report, args, &bytes, true)?;
    if args.save {
        save_report(path, &report)?;
    }
    Ok(())
}

fn scan_dir(
    dir: &Path,
    args: &Args,
    exts: &HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let mut total = 0u64;
    let mut flagged = 0u64;

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !args.all && !ext.is_empty() && !exts.is_empty() && !exts.contains(&ext) {
            continue;
        }
        total += 1;
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        let report = analyze(&bytes);
        if report.risk.severity >= Severity::Medium {
            flagged += 1;
        }
        print_result(path, &report, args, &bytes, false)?;
        if args.save {
            save_report(path, &report)?;
        }
    }

    if !args.quiet {
        eprintln!("Scanned {} files, {} scored Medium or above", total, flagged);
    }
    Ok(())
}

fn print_result(
    path: &Path,
    report: &AnalysisReport,
    args: &Args,
    bytes: &[u8],
    single_file: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.quiet && report.risk.severity < Severity::Medium {
        return Ok(());
    }

    if args.json {
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert("sha256".to_string(), serde_json::Value::String(sha256_hex(bytes)));
        out.insert(
            "path".to_string(),
            serde_json::Value::String(path.display().to_string()),
        );
        out.insert("score".to_string(), serde_json::to_value(report.risk.score)?);
        out.insert(
            "severity".to_string(),
            serde_json::Value::String(report.risk.severity.label().to_string()),
        );
        out.insert("reasons".to_string(), serde_json::to_value(&report.risk.reasons)?);
        out.insert("signals".to_string(), serde_json::to_value(&report.signals)?);
        out.insert("iocs".to_string(), serde_json::to_value(&report.iocs)?);
        out.insert("keyword_hits".to_string(), serde_json::to_value(&report.keyword_hits)?);
        out.insert("anomalies".to_string(), serde_json::to_value(&report.anomalies)?);
        out.insert("metadata".to_string(), serde_json::to_value(&report.metadata)?);
        out.insert("page_count".to_string(), serde_json::to_value(report.page_count)?);
        out.insert(
            "flagged_objects".to_string(),
            serde_json::to_value(&report.flagged_objects)?,
        );
        out.insert("size_bytes".to_string(), serde_json::to_value(report.size_bytes)?);
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{}", json_str);
        return Ok(());
    }

    if single_file {
        println!("  sha256: {}", sha256_hex(bytes));
        println!("{}", render_report(report));
        return Ok(());
    }

    println!(
        "{} ({}) {} ({} bytes)",
        report.risk.severity.label().to_uppercase(),
        report.risk.score,
        path.display(),
        report.size_bytes,
    );
    Ok(())
}

/// Write the rendered report to `results/<stem>_report.txt` in the working directory.
fn save_report(path: &Path, report: &AnalysisReport) -> Result<(), Box<dyn std::error::Error>> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    fs::create_dir_all("results")?;
    let out_path = Path::new("results").join(format!("{stem}_report.txt"));
    fs::write(&out_path, render_report(report))?;
    eprintln!("Report saved to: {}", out_path.display());
    Ok(())
}
