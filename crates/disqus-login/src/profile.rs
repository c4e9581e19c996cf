//! Disqus profile fetching.

use crate::error::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// Default API base for the Disqus REST API.
const DISQUS_API_BASE: &str = "https://disqus.com";

/// Path of the user-details endpoint, relative to the API base.
const DETAILS_PATH: &str = "/api/3.0/users/details.json";

/// Client for the Disqus user-details endpoint.
///
/// Disqus authenticates this call with the application's `api_key` (the
/// client id) and the user's `access_token`, both as query parameters.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    api_base: String,
    http_client: reqwest::Client,
}

impl ProfileClient {
    /// Creates a client against the public Disqus API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_base(DISQUS_API_BASE)
    }

    /// Creates a client against a custom API base.
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self {
            api_base,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetches the authorizing user's raw profile.
    ///
    /// Returns the nested `response` object of the details payload; the
    /// surrounding envelope (status code field etc.) is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProfileFetchFailed`] if the endpoint is
    /// unreachable, answers non-2xx, or the payload has no `response`
    /// object.
    pub async fn fetch(&self, api_key: &str, access_token: &str) -> Result<Value> {
        let url = format!("{}{DETAILS_PATH}", self.api_base);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", api_key), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| Error::ProfileFetchFailed(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::ProfileFetchFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::ProfileFetchFailed(format!("invalid JSON: {e}")))?;

        let profile = extract_profile(body)?;
        debug!("fetched Disqus profile");
        Ok(profile)
    }
}

impl Default for ProfileClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the nested `response` object out of a details payload.
pub(crate) fn extract_profile(mut body: Value) -> Result<Value> {
    match body.get_mut("response").map(Value::take) {
        Some(profile @ Value::Object(_)) => Ok(profile),
        _ => Err(Error::ProfileFetchFailed(
            "payload has no response object".to_string(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_response_object() {
        let body = json!({
            "code": 0,
            "response": { "username": "alice", "email": "a@example.com" }
        });
        let profile = extract_profile(body).unwrap();
        assert_eq!(profile["username"], "alice");
    }

    #[test]
    fn missing_response_key_fails() {
        let body = json!({ "code": 2, "error": "Invalid API key" });
        assert!(matches!(
            extract_profile(body),
            Err(Error::ProfileFetchFailed(_))
        ));
    }

    #[test]
    fn non_object_response_fails() {
        let body = json!({ "code": 0, "response": "nope" });
        assert!(matches!(
            extract_profile(body),
            Err(Error::ProfileFetchFailed(_))
        ));
    }

    #[test]
    fn api_base_trailing_slash_is_trimmed() {
        let client = ProfileClient::with_api_base("https://disqus.example.com/");
        assert_eq!(client.api_base, "https://disqus.example.com");
    }
}
