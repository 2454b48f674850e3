//! HTTP client for the Fluidinfo REST API.
//!
//! Provides the `FluidinfoClient`, which implements [`TagStore`] with the
//! `/values` and `/about` endpoints.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;

use super::{
    FluidinfoError, TagStore, ABOUT_TAG, DEFAULT_API_URL, ERROR_CLASS_HEADER,
    PRIMITIVE_VALUE_TYPE,
};
use crate::tag::TagName;

/// Error class Fluidinfo reports when a query names a tag nobody created yet.
const NONEXISTENT_TAG_CLASS: &str = "TNonexistentTag";

/// Username and password for a Fluidinfo account.
#[derive(Clone, PartialEq, Eq)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Login {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fluidinfo API client.
pub struct FluidinfoClient {
    /// HTTP client instance.
    client: Client,
    /// Base URL of the Fluidinfo API.
    base_url: String,
    /// Credentials for basic authentication (anonymous if absent).
    login: Option<Login>,
}

impl FluidinfoClient {
    /// Creates an anonymous client for the default endpoint.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL)
    }

    /// Creates an anonymous client for a custom endpoint.
    pub fn with_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            login: None,
        }
    }

    /// Authenticates every subsequent request as `login`.
    pub fn with_login(mut self, login: Login) -> Self {
        self.login = Some(login);
        self
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an API URL from path segments. Each segment is percent-encoded,
    /// so an about value such as `http://x.org/a` stays a single segment.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, FluidinfoError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FluidinfoError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| FluidinfoError::InvalidUrl(self.base_url.clone()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// URL of the `/values` endpoint for a query matching every object
    /// that has `tag`.
    fn values_url(&self, tag: &TagName, wanted: &str) -> Result<Url, FluidinfoError> {
        let mut url = self.endpoint(["values"])?;
        url.query_pairs_mut()
            .append_pair("query", &format!("has {tag}"))
            .append_pair("tag", wanted);
        Ok(url)
    }

    /// URL of `tag` on the object about `about`.
    fn about_url(&self, about: &str, tag: &TagName) -> Result<Url, FluidinfoError> {
        self.endpoint(["about", about].into_iter().chain(tag.segments()))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match &self.login {
            Some(login) => builder.basic_auth(&login.username, Some(&login.password)),
            None => builder,
        }
    }

    /// Sends a request and turns non-success statuses into errors.
    fn send(&self, builder: RequestBuilder) -> Result<Response, FluidinfoError> {
        let response = builder.send()?;
        let status = response.status();
        tracing::debug!("Fluidinfo responded {status}");

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            let user = self
                .login
                .as_ref()
                .map_or("anonymous", |login| login.username.as_str());
            return Err(FluidinfoError::AuthFailed(user.to_string()));
        }

        let error_class = response
            .headers()
            .get(ERROR_CLASS_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = match error_class {
            Some(class) if body.trim().is_empty() => class,
            Some(class) => format!("{class}: {}", body.trim()),
            None if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            None => body.trim().to_string(),
        };

        Err(FluidinfoError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

impl Default for FluidinfoClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an error means the queried tag has never been created, which
/// for lastpage is the same as the tag having no instances.
fn is_nonexistent_tag(err: &FluidinfoError) -> bool {
    matches!(err, FluidinfoError::ServerError { message, .. } if message.starts_with(NONEXISTENT_TAG_CLASS))
}

impl TagStore for FluidinfoClient {
    fn delete_tag(&self, tag: &TagName) -> Result<(), FluidinfoError> {
        let url = self.values_url(tag, tag.as_str())?;
        match self.send(self.request(Method::DELETE, url)) {
            Ok(_) => Ok(()),
            Err(err) if is_nonexistent_tag(&err) => {
                tracing::debug!("Tag {tag} does not exist, nothing to delete");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn get_tag(&self, tag: &TagName) -> Result<Vec<String>, FluidinfoError> {
        let url = self.values_url(tag, ABOUT_TAG)?;
        let response = match self.send(self.request(Method::GET, url)) {
            Ok(response) => response,
            Err(err) if is_nonexistent_tag(&err) => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let body: ValuesResponse = response.json()?;
        let urls = body.abouts();
        tracing::debug!("Found {} instance(s) of {tag}", urls.len());
        Ok(urls)
    }

    fn set_tag(&self, tag: &TagName, url: &str, timestamp: i64) -> Result<(), FluidinfoError> {
        let endpoint = self.about_url(url, tag)?;
        self.send(
            self.request(Method::PUT, endpoint)
                .header(reqwest::header::CONTENT_TYPE, PRIMITIVE_VALUE_TYPE)
                .body(timestamp.to_string()),
        )?;
        Ok(())
    }
}

// ==================== API Types ====================

/// Response from a `GET /values` query.
#[derive(Debug, Deserialize)]
pub struct ValuesResponse {
    pub results: ValuesResults,
}

/// Matching objects, keyed by object id, then by tag path.
#[derive(Debug, Deserialize)]
pub struct ValuesResults {
    pub id: BTreeMap<String, BTreeMap<String, TagValue>>,
}

/// A single tag value on an object.
#[derive(Debug, Deserialize)]
pub struct TagValue {
    pub value: serde_json::Value,
}

impl ValuesResponse {
    /// The about value of every matched object, ordered by object id.
    /// Objects without an about value are skipped.
    pub fn abouts(self) -> Vec<String> {
        self.results
            .id
            .into_values()
            .filter_map(|mut tags| tags.remove(ABOUT_TAG))
            .map(|about| match about.value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect()
    }
}
