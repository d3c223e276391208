//! gcm - conventional commits from the terminal
//!
//! Lists the files staged in the current repository, lets the user pick a
//! commit type and type a subject, then runs `git commit` with
//! `"<type>: <subject>"`.
//!
//! # Usage
//!
//! ```bash
//! gcm                        # Commit in the current repository
//! gcm /path/to/repo          # Commit in another repository
//! gcm --page-size 8          # Show the whole type list at once
//! gcm --log-file gcm.log -v  # Write debug logs to a file
//! ```

mod app;
mod catalog;
mod git;
mod input;
mod pager;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::git::GitCli;
use crate::state::Outcome;

/// Write a conventional commit message for the staged changes
#[derive(Parser, Debug)]
#[command(name = "gcm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path inside the repository (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of commit types shown per page
    #[arg(short, long, default_value_t = pager::DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    page_size: usize,

    /// Append diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    verbose: bool,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Send tracing output to `path`
///
/// The terminal belongs to the UI, so logs only ever go to a file.
fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("log file path has no usable file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(format!("gcm={}", default_level));

    // Written synchronously; the app never runs a background thread
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(appender)
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, args.verbose)?;
    }

    let vcs = GitCli::discover(&args.path).context("Error initializing")?;
    tracing::info!(workdir = %vcs.workdir().display(), "starting");
    let Some(mut app) = App::start(vcs, args.page_size).context("Error initializing")? else {
        println!("{}", ui::NOTHING_STAGED);
        return Ok(());
    };

    setup_panic_hook();
    let outcome = app.run()?;
    tracing::info!(?outcome, "finished");

    match outcome {
        Outcome::Success => {
            println!("Commit successful!");
            Ok(())
        }
        Outcome::Cancelled => Ok(()),
        Outcome::Failed => match app.take_error() {
            Some(err) => Err(anyhow::Error::new(err).context("Commit failed")),
            None => Err(anyhow::anyhow!("Commit failed")),
        },
    }
}
