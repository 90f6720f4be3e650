//! CLI entry point for diver

use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use diver::{DepthLimit, DiveConfig, Diver, Entry, UNLIMITED_DEPTH};
use glob::Pattern;
use tracing::debug;

/// Entry kinds accepted by `--type`
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindFilter {
    /// Regular files
    #[value(alias = "f")]
    File,
    /// Directories
    #[value(alias = "d")]
    Dir,
}

#[derive(Parser, Debug)]
#[command(name = "diver")]
#[command(about = "List a directory tree depth-first, optionally stopping early")]
#[command(version)]
struct Args {
    /// Directory to dive into
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend at most N levels (-1 = unlimited)
    #[arg(short = 'L', long = "level", allow_hyphen_values = true)]
    level: Option<i64>,

    /// Only show entries whose file name matches GLOB (can be used multiple times)
    #[arg(short = 'n', long = "name", value_name = "GLOB")]
    name: Vec<String>,

    /// Only show files or only directories
    #[arg(short = 't', long = "type", value_name = "KIND")]
    kind: Option<KindFilter>,

    /// Stop after printing N entries
    #[arg(long = "max-results", value_name = "N")]
    max_results: Option<NonZeroUsize>,

    /// Visit siblings in name order instead of listing order
    #[arg(long = "sort")]
    sort: bool,

    /// Descend into symlinked directories
    #[arg(long = "follow-links")]
    follow_links: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Which entries get printed.
struct Selection {
    patterns: Vec<Pattern>,
    kind: Option<KindFilter>,
}

impl Selection {
    fn new(names: &[String], kind: Option<KindFilter>) -> Result<Self> {
        let patterns = names
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("invalid --name pattern '{}'", p)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns, kind })
    }

    fn matches(&self, entry: &Entry) -> bool {
        let kind_ok = match self.kind {
            None => true,
            Some(KindFilter::File) => entry.is_file(),
            Some(KindFilter::Dir) => entry.is_dir(),
        };
        if !kind_ok {
            return false;
        }
        if self.patterns.is_empty() {
            return true;
        }
        let name = entry
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.patterns.iter().any(|p| p.matches(&name))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    diver::logging::init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("diver: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let depth_limit = DepthLimit::try_from(args.level.unwrap_or(UNLIMITED_DEPTH))?;
    let selection = Selection::new(&args.name, args.kind)?;

    let diver = Diver::new(
        DiveConfig::default()
            .with_depth_limit(depth_limit)
            .sort_entries(args.sort)
            .follow_links(args.follow_links),
    );

    let root = std::path::absolute(&args.path).unwrap_or_else(|_| args.path.clone());
    let limit = args.max_results.map_or(usize::MAX, NonZeroUsize::get);
    let mut out = BufWriter::new(io::stdout().lock());

    if args.json {
        let mut selected = Vec::new();
        diver
            .dive(&root, |entry| {
                if selection.matches(entry) {
                    selected.push(entry.clone());
                }
                Ok::<_, io::Error>(selected.len() < limit)
            })
            .with_context(|| format!("cannot dive into '{}'", args.path.display()))?;
        serde_json::to_writer_pretty(&mut out, &selected).context("error writing output")?;
        writeln!(out).context("error writing output")?;
    } else {
        let mut printed = 0;
        let outcome = diver
            .dive(&root, |entry| {
                if selection.matches(entry) {
                    writeln!(out, "{}", display_path(&root, entry.path()))?;
                    printed += 1;
                }
                Ok::<_, io::Error>(printed < limit)
            })
            .with_context(|| format!("cannot dive into '{}'", args.path.display()))?;
        debug!(
            visited = outcome.visited,
            printed,
            stopped = outcome.stopped,
            "finished"
        );
    }

    out.flush().context("error writing output")?;
    Ok(())
}

/// Path of `path` relative to `root`, `/`-separated.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
