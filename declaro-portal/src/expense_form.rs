//! Driving the expense portal: category, header fields, then one form row
//! per planned expense.

use anyhow::{Result, bail};
use declaro_core::{DeclarationPeriod, ExpenseRow};
use thirtyfour::components::SelectElement;
use thirtyfour::{By, Key};
use tracing::{debug, info};

use crate::selectors::ExpenseFormSelectors;
use crate::session::PortalSession;

/// Third declaration heading on the form; 2 selects public transport.
const TRANSPORT_HEADING_VALUE: &str = "2";

/// Field key of a row's invoice-date input. The markup numbers them
/// unevenly: the first row is `0_2`, every later row is `{index + 1}_2`.
fn invoice_date_key(row_index: usize) -> String {
    match row_index {
        0 => "0_2".to_string(),
        n => format!("{}_2", n + 1),
    }
}

/// The second row's input carries its key in the `name` attribute instead
/// of `id`; all others are found by id.
fn invoice_date_locator(row_index: usize) -> By {
    let key = invoice_date_key(row_index);
    if row_index == 1 {
        By::Name(key)
    } else {
        By::Id(key)
    }
}

/// Fill and save the whole declaration: category, header, every row, then
/// the operator-confirmed uncheck-and-save step.
pub async fn submit_declaration(
    session: &PortalSession,
    selectors: &ExpenseFormSelectors,
    portal_url: &str,
    category: &str,
    period: &DeclarationPeriod,
    expected_total: f64,
    rows: &[ExpenseRow],
) -> Result<()> {
    if rows.is_empty() {
        bail!("nothing to declare: the cleaned export has no rows");
    }

    session.open(portal_url).await?;
    session.pause("Log in to the expense portal, then press Enter to continue...");

    session
        .click(By::XPath(selectors.my_site_menu.clone()), "personal section menu")
        .await?;
    session
        .click(
            By::XPath(selectors.declaration_menu.clone()),
            "declaration form menu",
        )
        .await?;

    let iframe = session
        .find_or_pause(By::XPath(selectors.form_iframe.clone()), "declaration form iframe")
        .await?;
    iframe.enter_frame().await?;

    let dropdown = session
        .find_or_pause(
            By::XPath(selectors.category_dropdown.clone()),
            "expense category dropdown",
        )
        .await?;
    SelectElement::new(&dropdown)
        .await?
        .select_by_exact_text(category)
        .await?;
    session
        .click(By::Id(selectors.continue_button.clone()), "continue button")
        .await?;

    let reference = period.reference();
    session
        .fill_field(
            By::XPath(selectors.reference_field.clone()),
            "reference field",
            &reference,
        )
        .await?;
    let total = format!("{expected_total:.2}");
    session
        .fill_field(By::XPath(selectors.amount_field.clone()), "amount field", &total)
        .await?;
    session
        .click(By::Id(selectors.proceed_button.clone()), "continue-declaration button")
        .await?;

    fill_heading_fields(session, selectors, period).await?;

    let tab = String::from(char::from(Key::Tab));
    for (index, row) in rows.iter().enumerate() {
        debug!(index, date = %row.date_field(), "filling row");

        let date_field = session
            .find_or_pause(invoice_date_locator(index), "row invoice-date field")
            .await?;
        date_field.send_keys(row.date_field()).await?;

        // The remaining row fields follow in tab order: trip number,
        // amount, (skipped column), origin, destination.
        let trip_number = row.trip_number_field();
        let amount = row.amount_field();
        session
            .driver()
            .action_chain()
            .send_keys(&tab)
            .send_keys(&trip_number)
            .send_keys(&tab)
            .send_keys(&amount)
            .send_keys(&tab)
            .send_keys(&tab)
            .send_keys(&row.origin)
            .send_keys(&tab)
            .send_keys(&row.destination)
            .perform()
            .await?;

        if index + 1 < rows.len() {
            session
                .click(By::Css(selectors.add_row_button.clone()), "add-line button")
                .await?;
        } else {
            session
                .click(By::Css(selectors.save_button.clone()), "save-and-check button")
                .await?;
        }
    }

    session.pause("Review the declaration in the browser, then press Enter to finish...");

    // Deselect every row before the final save.
    for row_number in 1..=rows.len() {
        let checkbox_id = format!("{}{}", selectors.row_checkbox_prefix, row_number);
        session
            .click(By::Id(checkbox_id), "row checkbox")
            .await?;
    }
    session
        .click(By::Css(selectors.save_button.clone()), "save-and-check button")
        .await?;

    info!(rows = rows.len(), "declaration submitted");
    Ok(())
}

/// Month, year and declaration-type headings, keyed through tab order the
/// way the form expects.
async fn fill_heading_fields(
    session: &PortalSession,
    selectors: &ExpenseFormSelectors,
    period: &DeclarationPeriod,
) -> Result<()> {
    let month_field = session
        .find_or_pause(
            By::XPath(selectors.month_heading_field.clone()),
            "expense month heading field",
        )
        .await?;
    month_field.send_keys(period.month().to_string()).await?;

    let tab = String::from(char::from(Key::Tab));
    let year = period.year().to_string();
    session
        .driver()
        .action_chain()
        .send_keys(&tab)
        .send_keys(&year)
        .send_keys(&tab)
        .send_keys(TRANSPORT_HEADING_VALUE)
        .perform()
        .await?;
    Ok(())
}
