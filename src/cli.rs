use crate::session::Session;
use crate::storage::{self, FileStore, KeyValueStore, MemoryStore, TUTORIAL_SEEN_KEY};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "mindscape",
    version,
    about = "Mood check-in, journal and activity suggestions in your terminal"
)]
pub struct Cli {
    /// Directory holding saved favourites and the tutorial flag
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved
    #[arg(long)]
    pub ephemeral: bool,

    /// Log file (defaults to mindscape.log in the data directory; off with --ephemeral)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "mindscape=debug". RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print saved favourites as JSON and exit (no TUI)
    #[arg(long)]
    pub favorites: bool,

    /// Show the tutorial again on next start
    #[arg(long)]
    pub reset_tutorial: bool,
}

impl Cli {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(storage::default_data_dir)
    }

    /// Where to write logs. `None` means no log sink: an ephemeral run only
    /// touches disk when `--log-file` is given explicitly.
    pub fn log_file(&self) -> Option<PathBuf> {
        match (&self.log_file, self.ephemeral) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => None,
            (None, false) => Some(self.data_dir().join("mindscape.log")),
        }
    }
}

/// Pick the storage backend for this run.
pub fn open_store(args: &Cli) -> Result<Box<dyn KeyValueStore>> {
    if args.ephemeral {
        tracing::info!("using in-memory store");
        return Ok(Box::new(MemoryStore::new()));
    }
    let dir = args.data_dir();
    let store = FileStore::open(&dir)
        .with_context(|| format!("open store in {}", dir.display()))?;
    tracing::info!(path = %store.path().display(), "using file store");
    Ok(Box::new(store))
}

pub fn run(args: Cli) -> Result<()> {
    let _log_guard = match args.log_file() {
        Some(path) => Some(crate::logging::init(&path, &args.log_level)?),
        None => None,
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut store = open_store(&args)?;
    if args.reset_tutorial {
        store
            .remove(TUTORIAL_SEEN_KEY)
            .context("reset tutorial flag")?;
    }

    let session = Session::load(store);

    if args.favorites {
        let out = serde_json::to_string_pretty(session.favorites())?;
        println!("{out}");
        return Ok(());
    }

    #[cfg(feature = "tui")]
    {
        crate::tui::run(session)
    }
    #[cfg(not(feature = "tui"))]
    {
        Err(anyhow::anyhow!(
            "built without the `tui` feature; only --favorites is available"
        ))
    }
}
