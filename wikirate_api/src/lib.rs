//! Async client for the Wikirate REST API.
//!
//! Cards are addressed by numeric id (`~123`) or by name, collection filters
//! are translated into Wikirate's `filter[...]` query grammar, and HTTP
//! failures surface as typed [`Error`] variants.

mod client;
mod errors;
pub mod identifier;
mod query;
mod resources;
pub mod types;
pub use self::client::{BasicAuth, Client, ClientConfig, HttpMethod, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{params, FilterValue, Filters, ParamSpec};
