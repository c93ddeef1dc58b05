//! HTTP client for the Wikirate REST API.

use std::fmt;
use std::str::FromStr;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{types::Attachment, Error};

/// Production root of the Wikirate API.
pub const DEFAULT_BASE_URL: &str = "https://wikirate.org/";

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "X-API-Key";

/// Credentials and endpoint of a [`Client`].
///
/// Deserializable, so applications can keep it in their own config files.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: default_base_url(),
            basic_auth: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("basic_auth", &self.basic_auth)
            .finish()
    }
}

/// HTTP Basic credentials, needed on password-protected Wikirate instances
/// such as staging servers.
#[derive(Clone, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The HTTP methods the API is called with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "delete" => Ok(HttpMethod::Delete),
            _ => Err(Error::client(format!(
                "Invalid HTTP method '{}': expected get, post or delete",
                s
            ))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        })
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// HTTP client for the Wikirate REST API.
///
/// Holds one pooled `reqwest::Client`, so clones are cheap and share
/// connections. No request is retried and no timeout is applied.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    basic_auth: Option<BasicAuth>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("basic_auth", &self.basic_auth)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production Wikirate API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::new(api_key)
        })
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::client_with_source("Failed to build HTTP client", e)
        })?;
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
            basic_auth: config.basic_auth,
        })
    }

    /// Adds HTTP Basic credentials to every request.
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a path against the base URL. Absolute URLs are kept as-is.
    pub fn resolve(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(|e| {
            tracing::error!("Invalid URL constructed from '{}': {}", path, e);
            Error::client_with_source(format!("Invalid path '{}'", path), e)
        })
    }

    /// Sends a request and returns the response if its status is 2xx.
    ///
    /// `method` must be `get`, `post` or `delete`. GET parameters go into the
    /// query string; POST and DELETE parameters are form-encoded, or sent as
    /// multipart when `files` is non-empty (POST only). Non-success statuses
    /// are turned into the matching [`Error`] variant.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(String, String)],
        files: &[Attachment],
    ) -> Result<reqwest::Response, Error> {
        let method: HttpMethod = method.parse()?;
        if !files.is_empty() && method != HttpMethod::Post {
            return Err(Error::client(format!(
                "File uploads require POST, got {}",
                method
            )));
        }
        let mut url = self.resolve(path)?;

        let builder = match method {
            HttpMethod::Get => {
                if !params.is_empty() {
                    url.query_pairs_mut().extend_pairs(params);
                }
                self.http.get(url.clone())
            }
            HttpMethod::Post | HttpMethod::Delete => {
                let builder = self.http.request(method.into(), url.clone());
                if files.is_empty() {
                    builder.form(params)
                } else {
                    builder.multipart(multipart_form(params, files).await?)
                }
            }
        };

        let mut builder = builder.header(API_KEY_HEADER, &self.api_key);
        if let Some(auth) = &self.basic_auth {
            builder = builder.basic_auth(&auth.username, Some(&auth.password));
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        tracing::debug!("{} {}", method, url);
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", method, url, e);
            Error::client_with_source(format!("Request to {} failed", url), e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            });
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::from_status(status.as_u16(), body));
        }

        Ok(resp)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, Error> {
        let resp = self.send("get", path, &[], params, &[]).await?;
        decode(resp).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        files: &[Attachment],
    ) -> Result<T, Error> {
        let resp = self.send("post", path, &[], params, files).await?;
        decode(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.send("delete", path, &[], &[], &[]).await?;
        Ok(())
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url).map_err(|e| {
        tracing::error!("Invalid base URL '{}': {}", base_url, e);
        Error::client_with_source(format!("Invalid base URL '{}'", base_url), e)
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::client(format!("Invalid base URL '{}'", base_url)));
    }
    // Relative paths must join below the base path, not replace its last segment.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

async fn multipart_form(params: &[(String, String)], files: &[Attachment]) -> Result<Form, Error> {
    let mut form = Form::new();
    for (key, value) in params {
        form = form.text(key.clone(), value.clone());
    }
    for file in files {
        let (file_name, bytes) = file.read().await?;
        form = form.part(file.field.clone(), Part::bytes(bytes).file_name(file_name));
    }
    Ok(form)
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::client_with_source("Failed to read response body", e)
    })?;
    serde_json::from_str::<T>(&body).map_err(|e| {
        tracing::error!(
            "Failed to parse response: {} | body: {}",
            e,
            truncate_body(&body)
        );
        Error::client_with_source("Failed to parse response", e)
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_methods_case_insensitively() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("Delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert!("put".parse::<HttpMethod>().unwrap_err().is_client());
    }

    #[test]
    fn resolves_paths_against_the_base_url() {
        let client = Client::with_base_url("https://example.com/api", "key").unwrap();
        assert_eq!(
            client.resolve("Companies.json").unwrap().as_str(),
            "https://example.com/api/Companies.json"
        );
        assert_eq!(
            client.resolve("~123+Companies.json").unwrap().as_str(),
            "https://example.com/api/~123+Companies.json"
        );
        assert_eq!(
            client.resolve("/card/create").unwrap().as_str(),
            "https://example.com/card/create"
        );
        assert_eq!(
            client.resolve("https://other.example/x.json").unwrap().as_str(),
            "https://other.example/x.json"
        );
    }

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(Client::with_base_url("not a url", "key")
            .unwrap_err()
            .is_client());
        assert!(Client::with_base_url("mailto:someone@example.com", "key").is_err());
    }

    #[test]
    fn config_defaults_and_redaction() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_key": "secret", "basic_auth": {"username": "u", "password": "p"}}"#)
                .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("\"p\""));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn truncates_on_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());
        assert_eq!(truncate_body("short"), "short");
    }
}
