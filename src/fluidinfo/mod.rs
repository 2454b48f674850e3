//! Remote tag storage on Fluidinfo.
//!
//! The lastpage tag lives on Fluidinfo objects whose `fluiddb/about`
//! value is the page URL. This module exposes the three operations the
//! CLI needs as the [`TagStore`] capability, and implements it over the
//! Fluidinfo HTTP API.
//!
//! # Submodules
//!
//! - `client` - HTTP client for the Fluidinfo REST API

pub mod client;

pub use client::FluidinfoClient;

use crate::tag::TagName;

/// Default Fluidinfo API endpoint.
pub const DEFAULT_API_URL: &str = "https://fluiddb.fluidinfo.com";

/// Tag holding the "about" string of every Fluidinfo object.
pub const ABOUT_TAG: &str = "fluiddb/about";

/// Content type for primitive tag values.
pub const PRIMITIVE_VALUE_TYPE: &str = "application/vnd.fluiddb.value+json";

/// Response header carrying the Fluidinfo error class.
pub const ERROR_CLASS_HEADER: &str = "X-FluidDB-Error-Class";

/// The remote operations lastpage performs on a tag.
///
/// Implemented over HTTP by [`FluidinfoClient`]; tests substitute an
/// in-memory store.
pub trait TagStore {
    /// Removes every instance of `tag`, on whichever objects carry it.
    /// Succeeds when there are none.
    fn delete_tag(&self, tag: &TagName) -> Result<(), FluidinfoError>;

    /// Returns the URL of every object carrying `tag`, in the order the
    /// store iterates them.
    fn get_tag(&self, tag: &TagName) -> Result<Vec<String>, FluidinfoError>;

    /// Puts `tag` with value `timestamp` (seconds since the epoch, UTC) on
    /// the object about `url`.
    fn set_tag(&self, tag: &TagName, url: &str, timestamp: i64) -> Result<(), FluidinfoError>;
}

/// Errors from talking to Fluidinfo.
#[derive(Debug, thiserror::Error)]
pub enum FluidinfoError {
    /// HTTP request error.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The configured endpoint could not be turned into a request URL.
    #[error("Invalid Fluidinfo URL: {0}")]
    InvalidUrl(String),

    /// Fluidinfo rejected the username or password.
    #[error("Authentication failed for user '{0}'")]
    AuthFailed(String),

    /// Server returned an error response.
    #[error("Fluidinfo error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_auth_failed() {
        let err = FluidinfoError::AuthFailed("alice".to_string());
        assert_eq!(err.to_string(), "Authentication failed for user 'alice'");
    }

    #[test]
    fn test_error_display_server_error() {
        let err = FluidinfoError::ServerError {
            status: 404,
            message: "TNonexistentTag".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("TNonexistentTag"));
    }

    #[test]
    fn test_default_api_url() {
        assert_eq!(DEFAULT_API_URL, "https://fluiddb.fluidinfo.com");
    }
}
