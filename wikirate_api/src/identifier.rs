//! Card identifiers and endpoint paths.
//!
//! Wikirate addresses every card either by a numeric id, written with a `~`
//! prefix, or by its name in URL-key form. Compound cards such as answers
//! join the names of their parts with `+`.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_+~]+").expect("valid regex"));
static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").expect("valid regex"));

/// Converts a card name into its URL key.
///
/// Runs of characters other than ASCII letters, digits, `_`, `+` and `~`
/// become a single underscore, and repeated underscores collapse to one.
pub fn normalize_key(input: impl Display) -> String {
    let input = input.to_string();
    let replaced = DISALLOWED.replace_all(&input, "_");
    UNDERSCORES.replace_all(&replaced, "_").into_owned()
}

/// Renders a numeric id as `~<id>` and anything else as a URL key.
pub fn card_identifier(value: impl Display) -> String {
    let value = value.to_string();
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        format!("~{}", value)
    } else {
        normalize_key(value)
    }
}

/// Joins the URL keys of several name parts with `+`.
pub fn compound_name(parts: &[&dyn Display]) -> String {
    parts
        .iter()
        .map(|part| normalize_key(part))
        .collect::<Vec<_>>()
        .join("+")
}

/// Path of a collection endpoint, optionally scoped under a parent card.
pub fn build_endpoint(parent: Option<&dyn Display>, type_name: &str) -> String {
    match parent {
        Some(parent) => format!("{}+{}.json", card_identifier(parent), type_name),
        None => format!("{}.json", type_name),
    }
}

/// Path of a single card.
pub fn card_endpoint(identifier: impl Display) -> String {
    format!("{}.json", card_identifier(identifier))
}
