//! Locating the freshest file in the browser's download directory.
//!
//! The export lands wherever the driven browser puts downloads; the only
//! contract is "the newest file is ours".

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use anyhow::{Context, Result, bail};

/// Suffixes browsers use for downloads still in flight.
const IN_PROGRESS_SUFFIXES: &[&str] = &["crdownload", "part", "tmp"];

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Newest regular file in `dir`, by creation time where the platform
/// reports one, else modification time.
pub fn latest_download(dir: &Path) -> Result<PathBuf> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }
        let stamp = meta.created().or_else(|_| meta.modified())?;
        if newest.as_ref().is_none_or(|(best, _)| stamp > *best) {
            newest = Some((stamp, entry.path()));
        }
    }

    newest
        .map(|(_, path)| path)
        .with_context(|| format!("no files in {}", dir.display()))
}

fn is_in_progress(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IN_PROGRESS_SUFFIXES.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Wait until the newest file in `dir` is a finished download, then return
/// it. Errors when nothing finished appears within `timeout`.
pub fn wait_for_export(dir: &Path, timeout: Duration) -> Result<PathBuf> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(path) = latest_download(dir) {
            if !is_in_progress(&path) {
                return Ok(path);
            }
        }
        if Instant::now() >= deadline {
            bail!(
                "no finished download appeared in {} within {}s",
                dir.display(),
                timeout.as_secs()
            );
        }
        thread::sleep(POLL_INTERVAL);
    }
}
