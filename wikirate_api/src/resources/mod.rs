//! Typed operations on each kind of Wikirate card.
//!
//! Every operation builds its path and parameters locally, validates what it
//! can before touching the network, and hands the request to
//! [`Client::send`](crate::Client::send).

mod read;
mod search;
mod write;

use std::fmt::Display;

use crate::identifier::card_identifier;
use crate::Error;

/// Renders an identifier, rejecting ones that would address no card.
fn require_identifier(identifier: impl Display) -> Result<String, Error> {
    let raw = identifier.to_string();
    let token = card_identifier(&raw);
    if token.trim_matches('_').is_empty() {
        return Err(Error::client(format!("Invalid card identifier '{}'", raw)));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::require_identifier;

    #[test]
    fn identifiers() {
        assert_eq!(require_identifier(12).unwrap(), "~12");
        assert_eq!(require_identifier("Acme Corp").unwrap(), "Acme_Corp");
        assert!(require_identifier("").unwrap_err().is_client());
        assert!(require_identifier("  ").is_err());
    }
}
