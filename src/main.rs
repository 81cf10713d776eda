//! Plainly: readability checker CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use plainly::config::{build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME};
use plainly::reporter::{AggregateStats, ConsoleReporter, DocumentReport, JsonReporter};
use plainly::{AnalysisEngine, PlainlyError};
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];
const STDIN_SOURCE: &str = "<stdin>";

/// Plainly: find hard sentences, adverbs, passive voice and wordy phrases
#[derive(Parser, Debug)]
#[command(name = "plainly")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files or directories to analyze (reads stdin when omitted)
    paths: Vec<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one line per document)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (suggestions and debug logging)
    #[arg(long, short)]
    verbose: bool,

    /// Print the annotated markup
    #[arg(long, short)]
    markup: bool,

    /// Exit 1 if any hard or very hard sentence is found
    #[arg(long)]
    fail_on_hard: bool,

    /// Path to config file (default: search .plainlyrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sentences with fewer words are never flagged
    #[arg(long, value_name = "N")]
    min_words: Option<usize>,

    /// Lowest grade counted as hard
    #[arg(long, value_name = "GRADE")]
    hard_grade: Option<u32>,

    /// Lowest grade counted as very hard
    #[arg(long, value_name = "GRADE")]
    very_hard_grade: Option<u32>,

    /// Analyze files in parallel
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .plainlyrc.json with sensible defaults
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(Commands::Init { dir }) = args.command {
        return run_init(dir.as_deref());
    }

    let work_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(
        args.min_words,
        args.hard_grade,
        args.very_hard_grade,
    );
    let engine = AnalysisEngine::from_config(&config);
    tracing::debug!(thresholds = ?engine.thresholds(), rules = ?engine.enabled_rules(), "engine ready");

    let reports = if args.paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| PlainlyError::InputRead {
                path: PathBuf::from(STDIN_SOURCE),
                source,
            })?;
        vec![DocumentReport::new(STDIN_SOURCE, engine.analyze(&text))]
    } else {
        let files = collect_input_files(&args.paths, &config)?;
        if files.is_empty() {
            if !args.quiet {
                eprintln!("{}: No text files found", "Warning".yellow());
            }
            return Ok(ExitCode::SUCCESS);
        }

        let use_parallel = args.parallel || args.jobs.is_some();
        if use_parallel {
            analyze_files_parallel(&engine, &files, args.jobs)?
        } else {
            analyze_files_sequential(&engine, &files)?
        }
    };

    let stats = AggregateStats::from_reports(&reports);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if reports.len() == 1 {
            println!("{}", reporter.report(&reports[0]));
        } else {
            println!("{}", reporter.report_many(&reports, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for report in &reports {
            reporter.report_quiet(report);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        if args.markup {
            reporter = reporter.with_markup();
        }

        if reports.len() == 1 {
            reporter.report(&reports[0]);
        } else {
            reporter.report_many(&reports, &stats);
        }
    }

    if args.fail_on_hard && reports.iter().any(DocumentReport::has_hard_sentences) {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Logs go to stderr so JSON on stdout stays clean
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "plainly=debug" } else { "plainly=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn run_init(dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = serde_json::to_string_pretty(&Config::starter())
        .context("Failed to serialize default config")?;
    std::fs::write(&config_path, format!("{}\n", json))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{} {}", "Created".green(), config_path.display());
    Ok(ExitCode::SUCCESS)
}

fn collect_input_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    // The same file can be named directly and reached through a directory
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for path in paths {
        for file in collect_text_files(path, ignore_set.as_ref())? {
            let key = std::fs::canonicalize(&file).unwrap_or_else(|_| file.clone());
            if seen.insert(key) {
                files.push(file);
            }
        }
    }
    Ok(files)
}

fn collect_text_files(path: &Path, ignore_set: Option<&globset::GlobSet>) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if entry.file_type().is_file() && is_text_file(file_path) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    tracing::debug!(path = %file_path.display(), "ignored");
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            TEXT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn read_document(engine: &AnalysisEngine, path: &Path) -> Result<DocumentReport> {
    let text = std::fs::read_to_string(path).map_err(|source| PlainlyError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "analyzing");
    Ok(DocumentReport::new(
        path.display().to_string(),
        engine.analyze(&text),
    ))
}

fn analyze_files_sequential(engine: &AnalysisEngine, files: &[PathBuf]) -> Result<Vec<DocumentReport>> {
    files.iter().map(|file| read_document(engine, file)).collect()
}

/// Analyze files in parallel. Each document gets its own state inside `analyze`.
fn analyze_files_parallel(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    jobs: Option<usize>,
) -> Result<Vec<DocumentReport>> {
    use rayon::prelude::*;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = jobs {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().context("Failed to build thread pool")?;

    // par_iter + collect keeps input order
    pool.install(|| {
        files
            .par_iter()
            .map(|file| read_document(engine, file))
            .collect()
    })
}
