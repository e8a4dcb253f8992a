//! Element identifiers for both portals.
//!
//! These track the sites' current markup and break whenever the markup
//! changes; the defaults can be overridden per-field from the config file.

use serde::{Deserialize, Serialize};

/// Travel-history search and export on the operator portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelPortalSelectors {
    /// Menu entry opening the travel-history page (XPath).
    pub history_menu: String,
    /// From-date day/month/year inputs (element ids).
    pub from_day_field: String,
    pub from_month_field: String,
    pub from_year_field: String,
    /// Search button (XPath).
    pub search_button: String,
    /// Export download link (CSS).
    pub download_link: String,
}

impl Default for TravelPortalSelectors {
    fn default() -> Self {
        Self {
            history_menu: r#"//*[@id="menuitem.label.hybristravelhistory"]"#.to_string(),
            from_day_field: "dayField".to_string(),
            from_month_field: "monthField".to_string(),
            from_year_field: "yearField".to_string(),
            search_button: "/html/body/main/div/div/div/div/div/div[2]/div[2]/div[1]/form/p/a[1]/span"
                .to_string(),
            download_link: "#ns-app > div.col-3b > div.title.box > ul > li > a".to_string(),
        }
    }
}

/// Multi-step declaration form on the expense portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseFormSelectors {
    /// Site menu entry to the personal section (XPath).
    pub my_site_menu: String,
    /// Menu entry opening the declaration form (XPath).
    pub declaration_menu: String,
    /// The iframe hosting the form (XPath).
    pub form_iframe: String,
    /// Expense category dropdown (XPath).
    pub category_dropdown: String,
    /// "Continue" button after the category step (element id).
    pub continue_button: String,
    /// Reference and total-amount header inputs (XPath).
    pub reference_field: String,
    pub amount_field: String,
    /// "Continue declaration" button after the header step (element id).
    pub proceed_button: String,
    /// First declaration-heading input, the expense month (XPath).
    pub month_heading_field: String,
    /// "Add empty line" control (CSS).
    pub add_row_button: String,
    /// "Save and check" control (CSS).
    pub save_button: String,
    /// Row checkboxes are `{prefix}1`..`{prefix}n` (element ids).
    pub row_checkbox_prefix: String,
}

impl Default for ExpenseFormSelectors {
    fn default() -> Self {
        Self {
            my_site_menu: r#"//*[@id="block-menu-block-2"]/div/div/ul/li[2]/a"#.to_string(),
            declaration_menu: r#"//*[@id="block-menu-block-5"]/div/div/ul/li[5]/ul/li[1]/a"#
                .to_string(),
            form_iframe: r#"//*[@id="node-34"]/div/div/div/div/iframe"#.to_string(),
            category_dropdown: "/html/body/form/table/tbody/tr[4]/td/select".to_string(),
            continue_button: "verderButton".to_string(),
            reference_field: "/html/body/form/table/tbody/tr[8]/td[2]/input".to_string(),
            amount_field: "/html/body/form/table/tbody/tr[10]/td[2]/input".to_string(),
            proceed_button: "bvzm".to_string(),
            month_heading_field: r#"//*[@id="decHeadings[0].decHeadingsValue"]"#.to_string(),
            add_row_button:
                "body > form > table:nth-child(3) > tbody > tr:nth-child(2) > td > input.button"
                    .to_string(),
            save_button:
                "body > form > table:nth-child(3) > tbody > tr:nth-child(2) > td > input:nth-child(13)"
                    .to_string(),
            row_checkbox_prefix: "regelcheck".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let parsed: ExpenseFormSelectors =
            serde_json::from_str(r#"{ "continue_button": "nextButton" }"#).unwrap();
        assert_eq!(parsed.continue_button, "nextButton");
        assert_eq!(parsed.proceed_button, "bvzm");
        assert_eq!(parsed.row_checkbox_prefix, "regelcheck");
    }

    #[test]
    fn test_travel_defaults_roundtrip() {
        let defaults = TravelPortalSelectors::default();
        let json = serde_json::to_string(&defaults).unwrap();
        let back: TravelPortalSelectors = serde_json::from_str(&json).unwrap();
        assert_eq!(back.from_day_field, "dayField");
        assert_eq!(back.download_link, defaults.download_link);
    }
}
