use serde::{Deserialize, Serialize};

/// A card document. Wikirate cards have no fixed schema, so they are kept as
/// an ordered map of JSON values.
pub type Card = serde_json::Map<String, serde_json::Value>;

/// Envelope of collection endpoints.
#[derive(Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

/// Envelope of the content view of a card.
#[derive(Serialize, Deserialize)]
pub struct Content {
    pub content: String,
}
