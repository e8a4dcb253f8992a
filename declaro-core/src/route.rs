//! Origin/destination extraction from free-text export descriptions.
//!
//! The export never labels the endpoints; they have to be fished out of
//! descriptions like:
//!   "Trein-uit: Amsterdam Zuid - Utrecht Centraal"
//!   "Bus, halte Vredenburg naar halte Kanaalweg"
//!   "Correctietarief: vergeten uit te checken"
//!
//! Extraction is best-effort. Anything unrecognizable gets the placeholder
//! endpoints so the form can always be filled.

use regex::Regex;

pub const DEFAULT_ORIGIN: &str = "Vanaf halte/station";
pub const DEFAULT_DESTINATION: &str = "Naar halte/station";

const CORRECTION_MARKER: &str = "Correctietarief:";
const CHECKOUT_MARKER: &str = "-uit:";

/// A travel segment's start and end location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEndpoints {
    pub origin: String,
    pub destination: String,
}

impl RouteEndpoints {
    fn placeholder() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
        }
    }
}

/// Extract origin/destination from a transaction description.
///
/// Correction-fare rows get "Correctietarief" for both endpoints. Otherwise
/// the text after a check-out marker (or the whole description) is split on
/// its embedded separator; failing that, the first two stop-name matches are
/// used. Never fails: unparseable input yields the placeholders.
pub fn parse_route(description: &str) -> RouteEndpoints {
    if description.contains(CORRECTION_MARKER) {
        return RouteEndpoints {
            origin: "Correctietarief".to_string(),
            destination: "Correctietarief".to_string(),
        };
    }

    let sliced = after_checkout_marker(description).unwrap_or(description);

    if let Some(route) = split_on_separator(sliced) {
        return route;
    }
    if let Some(route) = stop_name_pair(sliced) {
        return route;
    }
    RouteEndpoints::placeholder()
}

/// Text after the "-uit:" marker, skipping the single separator character
/// that follows it in the export.
fn after_checkout_marker(description: &str) -> Option<&str> {
    let pos = description.find(CHECKOUT_MARKER)?;
    let rest = &description[pos + CHECKOUT_MARKER.len()..];
    let mut chars = rest.chars();
    chars.next();
    Some(chars.as_str())
}

/// Split "A - B" on the first '-'; the separator must not lead the text.
fn split_on_separator(text: &str) -> Option<RouteEndpoints> {
    let sep = text.find('-')?;
    if sep == 0 {
        return None;
    }
    let origin = text[..sep].trim();
    let destination = text[sep + 1..].trim();
    if origin.is_empty() || destination.is_empty() {
        return None;
    }
    Some(RouteEndpoints {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })
}

/// First two "halte <Name>" matches, e.g. bus trips without a separator.
fn stop_name_pair(text: &str) -> Option<RouteEndpoints> {
    let re = Regex::new(r"halte(\s[A-Z]\w+\.?)*").ok()?;
    let mut found = re.find_iter(text);
    let origin = found.next()?.as_str().to_string();
    let destination = found.next()?.as_str().to_string();
    Some(RouteEndpoints {
        origin,
        destination,
    })
}
