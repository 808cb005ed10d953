//! compdoc — extract component documentation from markdown and source files.
//!
//! Two modes:
//!
//! - **stdin mode**: `compdoc -e md < button.md`
//! - **file mode**: `compdoc -o docs.json components/*.css README.md`

use anyhow::{Context, Result};
use clap::Parser;
use compdoc::{parser, render, Entry};
use log::LevelFilter;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "compdoc",
    about = "Extract component documentation and examples from markdown and source comments"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Input extension for stdin mode (md, markdown, mdown for whole-file docs)
    #[arg(short = 'e', long)]
    extension: Option<String>,

    /// Output format: json (default) or yaml
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only keep entries in this category. Can be repeated.
    #[arg(short = 'c', long)]
    category: Vec<String>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut entries = if cli.files.is_empty() {
        stdin_entries(cli.extension.as_deref())?
    } else {
        file_entries(&cli.files)?
    };
    filter_categories(&mut entries, &cli.category);

    let renderer = render::create_renderer(&cli.format)?;
    let output = renderer.render(&entries)?;

    match cli.output {
        Some(ref path) => write_output(path, &output),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

/// Logs go to stderr. `RUST_LOG` overrides the default `warn` level.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// stdin mode: parse a single input whose kind comes from `--extension`.
fn stdin_entries(extension: Option<&str>) -> Result<Vec<Entry>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(parser::parse(&input, extension))
}

/// file mode: parse every input file, then merge entries across files.
fn file_entries(patterns: &[String]) -> Result<Vec<Entry>> {
    let input_files = expand_globs(patterns)?;

    let mut entries = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed = parser::parse_file(path, &content);
        log::debug!("{}: {} entries", path.display(), parsed.len());
        entries.extend(parsed);
    }

    Ok(parser::merge::merge(entries))
}

fn write_output(path: &Path, output: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))
}

/// File extensions scanned when a directory is given.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "md", "markdown", "mdown", "css", "scss", "sass", "less", "styl", "js", "jsx", "ts", "tsx",
    "hbs", "handlebars", "html",
];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Keep entries whose category is one of `categories`. No filter keeps all.
fn filter_categories(entries: &mut Vec<Entry>, categories: &[String]) {
    if categories.is_empty() {
        return;
    }
    entries.retain(|entry| {
        entry
            .category
            .as_ref()
            .is_some_and(|c| categories.contains(c))
    });
}
