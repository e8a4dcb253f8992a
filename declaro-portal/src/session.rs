//! Browser session plumbing shared by both portal drivers.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use thirtyfour::common::capabilities::chromium::ChromiumLikeCapabilities;
use thirtyfour::extensions::query::ElementQueryable;
use thirtyfour::{By, DesiredCapabilities, WebDriver, WebElement};
use tracing::{debug, warn};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);
const LOOKUP_INTERVAL: Duration = Duration::from_millis(250);

/// A live WebDriver session against one portal.
pub struct PortalSession {
    driver: WebDriver,
}

impl PortalSession {
    /// Connect to the WebDriver server and start a browser. When
    /// `download_dir` is given, the browser is told to download there
    /// without prompting.
    pub async fn connect(webdriver_url: &str, download_dir: Option<&Path>) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if let Some(dir) = download_dir {
            caps.add_experimental_option(
                "prefs",
                serde_json::json!({
                    "download.default_directory": dir.display().to_string(),
                    "download.prompt_for_download": false,
                }),
            )
            .context("setting browser download preferences")?;
        }

        let driver = WebDriver::new(webdriver_url, caps)
            .await
            .with_context(|| format!("connecting to WebDriver at {webdriver_url}"))?;
        Ok(Self { driver })
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    pub async fn open(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.driver
            .goto(url)
            .await
            .with_context(|| format!("opening {url}"))
    }

    /// Blocking operator prompt; the flow resumes on Enter.
    pub fn pause(&self, message: &str) {
        pause(message);
    }

    /// Look up an element, polling briefly; if it never appears, hand
    /// control to the operator and retry after they fix the page.
    pub async fn find_or_pause(&self, by: By, what: &str) -> Result<WebElement> {
        loop {
            match self
                .driver
                .query(by.clone())
                .wait(LOOKUP_TIMEOUT, LOOKUP_INTERVAL)
                .first()
                .await
            {
                Ok(elem) => {
                    debug!(what, "found element");
                    return Ok(elem);
                }
                Err(err) => {
                    warn!(what, %err, "element lookup failed");
                    println!("Could not find {what} on the page.");
                    pause("Bring the page to the expected state, then press Enter to retry...");
                }
            }
        }
    }

    /// Clear a field and type a value into it.
    pub async fn fill_field(&self, by: By, what: &str, value: &str) -> Result<()> {
        let field = self.find_or_pause(by, what).await?;
        field.clear().await.with_context(|| format!("clearing {what}"))?;
        field
            .send_keys(value)
            .await
            .with_context(|| format!("typing into {what}"))
    }

    /// Find and click.
    pub async fn click(&self, by: By, what: &str) -> Result<()> {
        let elem = self.find_or_pause(by, what).await?;
        elem.click()
            .await
            .with_context(|| format!("clicking {what}"))
    }

    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await.context("closing browser session")
    }
}

/// Print `message` and block until the operator presses Enter.
pub fn pause(message: &str) {
    print!("{message} ");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
}
