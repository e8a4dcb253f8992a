use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub fn declaro_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".declaro"))
}

pub fn ensure_declaro_home() -> Result<PathBuf> {
    let dir = declaro_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Record of the last submitted declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReceipt {
    pub period: String,
    pub rows: usize,
    pub total: f64,
    pub finished_at_utc: String,
}

pub fn receipt_path() -> Result<PathBuf> {
    Ok(ensure_declaro_home()?.join("receipt.json"))
}

pub fn write_receipt(receipt: &RunReceipt) -> Result<()> {
    let p = receipt_path()?;
    let json = serde_json::to_string_pretty(receipt)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn read_receipt() -> Result<Option<RunReceipt>> {
    let p = receipt_path()?;
    if !p.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(Some(serde_json::from_str(&s)?))
}
