use crate::session::Favorites;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc as std_mpsc;
use std::sync::OnceLock;
use std::time::Duration;
use time::macros::format_description;
use time::OffsetDateTime;

// Global clipboard manager channel - initialized once on first use
static CLIPBOARD_SENDER: OnceLock<std_mpsc::Sender<String>> = OnceLock::new();

/// File name for a favourites export taken at `at`.
pub fn export_file_name(at: OffsetDateTime) -> String {
    let fmt = format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = at
        .format(fmt)
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("mindscape-favourites-{stamp}.json")
}

/// Export favourites as JSON into `dir`. Returns the written path.
pub fn export_favorites_to(dir: &Path, favorites: &Favorites) -> Result<PathBuf> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let path = dir.join(export_file_name(now));
    crate::storage::export_json(&path, favorites)?;
    tracing::info!(path = %path.display(), count = favorites.len(), "exported favourites");
    Ok(path)
}

/// Export favourites as JSON into the current directory.
/// Returns the absolute path of the exported file.
pub fn export_favorites(favorites: &Favorites) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("get current directory")?;
    export_favorites_to(&current_dir, favorites)
}

/// Initialize the clipboard manager thread if not already initialized.
/// This creates a background thread that processes clipboard operations sequentially,
/// keeping each clipboard instance alive for a sufficient duration.
fn init_clipboard_manager() -> Result<&'static std_mpsc::Sender<String>> {
    CLIPBOARD_SENDER.get_or_init(|| {
        let (tx, rx) = std_mpsc::channel::<String>();

        std::thread::spawn(move || {
            use arboard::Clipboard;

            for text in rx {
                match Clipboard::new() {
                    Ok(mut clipboard) => {
                        if clipboard.set_text(&text).is_ok() {
                            // Linux clipboard managers read lazily from the owner.
                            std::thread::sleep(Duration::from_secs(2));
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "clipboard unavailable"),
                }
            }
        });

        tx
    });

    CLIPBOARD_SENDER
        .get()
        .ok_or_else(|| anyhow::anyhow!("Failed to initialize clipboard manager"))
}

/// Copy text to the clipboard without blocking the UI thread.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let sender = init_clipboard_manager()?;
    sender
        .send(text.to_string())
        .map_err(|_| anyhow::anyhow!("Clipboard manager channel closed"))?;
    Ok(())
}
