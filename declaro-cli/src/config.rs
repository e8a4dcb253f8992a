use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use declaro_portal::{ExpenseFormSelectors, TravelPortalSelectors};
use serde::{Deserialize, Serialize};

use crate::state::ensure_declaro_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the driven browser drops the export.
    pub downloads_dir: PathBuf,
    /// WebDriver server, e.g. a locally running chromedriver.
    pub webdriver_url: String,
    pub travel_portal: TravelPortalSection,
    pub expense_portal: ExpensePortalSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelPortalSection {
    pub login_url: String,
    pub selectors: TravelPortalSelectors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpensePortalSection {
    pub url: String,
    /// Visible text of the expense category to select.
    pub category: String,
    pub selectors: ExpenseFormSelectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            downloads_dir: default_downloads_dir(),
            webdriver_url: "http://localhost:9515".to_string(),
            travel_portal: TravelPortalSection::default(),
            expense_portal: ExpensePortalSection::default(),
        }
    }
}

impl Default for TravelPortalSection {
    fn default() -> Self {
        Self {
            login_url: "https://www.ns.nl/mijnnszakelijk/login?0".to_string(),
            selectors: TravelPortalSelectors::default(),
        }
    }
}

impl Default for ExpensePortalSection {
    fn default() -> Self {
        Self {
            url: "https://einstein.sogeti.nl/".to_string(),
            category: "Reiskosten YP".to_string(),
            selectors: ExpenseFormSelectors::default(),
        }
    }
}

fn default_downloads_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join("Downloads"),
        Err(_) => PathBuf::from("Downloads"),
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_declaro_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            webdriver_url = "http://localhost:4444"

            [expense_portal]
            category = "Reiskosten OV"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.webdriver_url, "http://localhost:4444");
        assert_eq!(cfg.expense_portal.category, "Reiskosten OV");
        // Untouched sections keep their defaults.
        assert_eq!(
            cfg.travel_portal.login_url,
            "https://www.ns.nl/mijnnszakelijk/login?0"
        );
        assert_eq!(cfg.expense_portal.selectors.continue_button, "verderButton");
    }

    #[test]
    fn test_default_config_roundtrips_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.webdriver_url, cfg.webdriver_url);
        assert_eq!(back.expense_portal.category, "Reiskosten YP");
    }
}
