//! Error types for the API client.

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when talking to the Wikirate API.
///
/// [`Error::Client`] covers everything that fails before a response is
/// received: invalid arguments, missing required fields, unreadable upload
/// files and network failures. Every other variant is an HTTP status the
/// server answered with, together with the response body.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Local validation, configuration or transport failure.
    #[error("{message}")]
    Client {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
    /// HTTP 400.
    #[error("Bad request (HTTP 400): {body}")]
    BadRequest { body: String },
    /// HTTP 401.
    #[error("Unauthorized (HTTP 401): {body}")]
    Unauthorized { body: String },
    /// HTTP 403.
    #[error("Forbidden (HTTP 403): {body}")]
    Forbidden { body: String },
    /// HTTP 404.
    #[error("Not found (HTTP 404): {body}")]
    NotFound { body: String },
    /// HTTP 429.
    #[error("Too many requests (HTTP 429): {body}")]
    TooManyRequests { body: String },
    /// Any 5xx status.
    #[error("Server error (HTTP {status}): {body}")]
    ServerError { status: u16, body: String },
    /// Any other non-success status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    /// Builds a generic client error without an underlying cause.
    pub fn client(message: impl Into<String>) -> Self {
        Error::Client {
            message: message.into(),
            source: None,
        }
    }

    /// Builds a generic client error wrapping the error that caused it.
    pub fn client_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Client {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Validation error listing every required field that was not supplied.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Error::client(format!(
            "Missing required field(s): {}",
            fields.join(", ")
        ))
    }

    /// Maps a non-success HTTP status onto the matching variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Error::BadRequest { body },
            401 => Error::Unauthorized { body },
            403 => Error::Forbidden { body },
            404 => Error::NotFound { body },
            429 => Error::TooManyRequests { body },
            500..=599 => Error::ServerError { status, body },
            _ => Error::HttpStatus { status, body },
        }
    }

    /// HTTP status carried by the error, `None` for [`Error::Client`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Client { .. } => None,
            Error::BadRequest { .. } => Some(400),
            Error::Unauthorized { .. } => Some(401),
            Error::Forbidden { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::TooManyRequests { .. } => Some(429),
            Error::ServerError { status, .. } | Error::HttpStatus { status, .. } => Some(*status),
        }
    }

    /// Response body text, `None` for [`Error::Client`].
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Client { .. } => None,
            Error::BadRequest { body }
            | Error::Unauthorized { body }
            | Error::Forbidden { body }
            | Error::NotFound { body }
            | Error::TooManyRequests { body }
            | Error::ServerError { body, .. }
            | Error::HttpStatus { body, .. } => Some(body),
        }
    }

    /// True when the error was raised locally, before any response arrived.
    pub fn is_client(&self) -> bool {
        matches!(self, Error::Client { .. })
    }
}
