//! Driving the operator portal: date-range search, then export download.

use anyhow::Result;
use chrono::Datelike;
use declaro_core::DeclarationPeriod;
use thirtyfour::{By, Key};
use tracing::info;

use crate::selectors::TravelPortalSelectors;
use crate::session::PortalSession;

/// Log in (operator-assisted), search the period and trigger the export
/// download. The file lands in the browser's download directory; locating
/// it is the caller's job.
pub async fn download_travel_export(
    session: &PortalSession,
    selectors: &TravelPortalSelectors,
    login_url: &str,
    period: &DeclarationPeriod,
) -> Result<()> {
    session.open(login_url).await?;
    session.pause("Log in to the travel portal, then press Enter to continue...");

    session
        .click(By::XPath(selectors.history_menu.clone()), "travel history menu")
        .await?;

    let from = period.first_day();
    session
        .fill_field(
            By::Id(selectors.from_day_field.clone()),
            "from-date day field",
            &format!("{:02}", from.day()),
        )
        .await?;
    session
        .fill_field(
            By::Id(selectors.from_month_field.clone()),
            "from-date month field",
            &format!("{:02}", from.month()),
        )
        .await?;
    session
        .fill_field(
            By::Id(selectors.from_year_field.clone()),
            "from-date year field",
            &format!("{:04}", from.year()),
        )
        .await?;

    // The until-date inputs sit two tab stops further; the subfields
    // auto-advance while typing, so one keystroke run fills all three.
    let until = period.last_day();
    let tab = String::from(char::from(Key::Tab));
    let until_day = format!("{:02}", until.day());
    let until_month = format!("{:02}", until.month());
    let until_year = format!("{:04}", until.year());
    session
        .driver()
        .action_chain()
        .send_keys(&tab)
        .send_keys(&tab)
        .send_keys(&until_day)
        .send_keys(&until_month)
        .send_keys(&until_year)
        .perform()
        .await?;

    session
        .click(By::XPath(selectors.search_button.clone()), "search button")
        .await?;
    session
        .click(By::Css(selectors.download_link.clone()), "export download link")
        .await?;

    info!(period = %period.label(), "export download triggered");
    Ok(())
}
