//! Tracing setup for the `irx` binary.
//!
//! Cache hits, misses and failed range fetches are logged at `debug`/`warn`.
//! Output goes to `~/.local/state/irx/irx.log` so it never mixes with the JSON
//! the CLI prints on stdout; stderr is the fallback.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,irx_core=debug,irx=debug";
const LOG_FILE: &str = "irx.log";

/// Hands out clones of the shared log file; a failed clone degrades to stderr.
struct SharedLogFile(fs::File);

enum LogSink {
    File(fs::File),
    Stderr(io::Stderr),
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr(e) => e.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => LogSink::File(f),
            Err(_) => LogSink::Stderr(io::stderr()),
        }
    }
}

/// `RUST_LOG` if set, otherwise debug output for the explorer crates.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Creates `dir` if needed and opens `dir/irx.log` for appending.
fn open_log_file(dir: &Path) -> Result<(fs::File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((file, path))
}

/// Logs to the XDG state dir. Returns Err if the dir or file is unusable,
/// so the caller can switch to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let state_dir = xdg::BaseDirectories::with_prefix("irx")?.get_state_home();
    let (file, path) = open_log_file(&state_dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {}", e))?;

    tracing::info!("irx logging to {}", path.display());
    Ok(())
}

/// Logs to stderr. A subscriber that is already installed is kept.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
