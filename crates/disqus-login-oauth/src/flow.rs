//! `OAuth2` authorization-code flow.

use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::token::{ErrorResponse, Token, TokenResponse};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use reqwest::Client;
use std::collections::HashMap;
use url::Url;

/// Common `OAuth2` client configuration.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    /// Client ID from provider.
    pub client_id: String,
    /// Client secret.
    pub client_secret: Option<String>,
    /// Redirect URI for authorization code flow.
    pub redirect_uri: Option<String>,
    /// Provider configuration.
    pub provider: Provider,
    /// HTTP client.
    http_client: Client,
}

impl OAuthClient {
    /// Creates a new OAuth client.
    #[must_use]
    pub fn new(client_id: impl Into<String>, provider: Provider) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            redirect_uri: None,
            provider,
            http_client: Client::new(),
        }
    }

    /// Sets the client secret.
    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Sets the redirect URI.
    #[must_use]
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    /// Exchanges an authorization code for a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails.
    pub(crate) async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: Option<&str>,
    ) -> Result<Token> {
        let mut params = HashMap::new();
        params.insert("grant_type", "authorization_code");
        params.insert("code", code);
        params.insert("client_id", self.client_id.as_str());

        if let Some(secret) = self.client_secret.as_deref() {
            params.insert("client_secret", secret);
        }

        if let Some(uri) = redirect_uri.or(self.redirect_uri.as_deref()) {
            params.insert("redirect_uri", uri);
        }

        let response = self
            .http_client
            .post(self.provider.token_url.as_str())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let error: ErrorResponse = response.json().await?;
            return Err(error.into_error());
        }

        let token_response: TokenResponse = response.json().await?;
        Ok(Token::from_response(token_response))
    }
}

/// Authorization Code Flow for `OAuth2`.
///
/// Suitable for applications that redirect the user to the provider and
/// receive the authorization code on a callback URL.
#[derive(Debug)]
pub struct AuthorizationCodeFlow {
    client: OAuthClient,
}

impl AuthorizationCodeFlow {
    /// Creates a new authorization code flow.
    #[must_use]
    pub const fn new(client: OAuthClient) -> Self {
        Self { client }
    }

    /// Builds the authorization URL for user consent.
    ///
    /// The user should be redirected to this URL to authorize the
    /// application.
    ///
    /// # Arguments
    ///
    /// * `scope` - Optional scope string (uses the provider default if None)
    /// * `state` - Optional state parameter for CSRF protection
    ///
    /// # Errors
    ///
    /// Returns an error if the client id is empty or the authorize endpoint
    /// is not a valid URL.
    pub fn authorization_url(&self, scope: Option<&str>, state: Option<&str>) -> Result<Url> {
        if self.client.client_id.is_empty() {
            return Err(Error::InvalidConfig("client_id is empty".into()));
        }

        let mut url = Url::parse(&self.client.provider.auth_url)?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("client_id", &self.client.client_id);

            if let Some(redirect_uri) = &self.client.redirect_uri {
                pairs.append_pair("redirect_uri", redirect_uri);
            }

            let scope_str = scope.unwrap_or(self.client.provider.default_scope.as_str());
            if !scope_str.is_empty() {
                pairs.append_pair("scope", scope_str);
            }

            pairs.append_pair("response_type", "code");

            if let Some(state_val) = state {
                pairs.append_pair("state", state_val);
            }
        }

        Ok(url)
    }

    /// Exchanges the authorization code for an access token.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code from the redirect
    /// * `redirect_uri` - Optional redirect URI (uses client config if None)
    ///
    /// # Errors
    ///
    /// Returns an error if the token exchange fails.
    pub async fn exchange_code(&self, code: &str, redirect_uri: Option<&str>) -> Result<Token> {
        self.client.exchange_code(code, redirect_uri).await
    }
}

/// Generates a random URL-safe state token for CSRF protection.
///
/// Verifying the state on the callback is the caller's responsibility.
#[must_use]
pub fn generate_state() -> String {
    let random_bytes: Vec<u8> = (0..32).map(|_| rand::thread_rng().r#gen::<u8>()).collect();
    URL_SAFE_NO_PAD.encode(random_bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_client() -> OAuthClient {
        OAuthClient::new("test_client", Provider::disqus())
            .with_redirect_uri("https://forum.example.com/auth/disqus/callback")
    }

    #[test]
    fn test_oauth_client_creation() {
        let client = OAuthClient::new("test_client_id", Provider::disqus());
        assert_eq!(client.client_id, "test_client_id");
        assert!(client.client_secret.is_none());
    }

    #[test]
    fn test_oauth_client_with_secret() {
        let client = OAuthClient::new("test_client_id", Provider::disqus())
            .with_client_secret("secret")
            .with_redirect_uri("http://localhost:8080");

        assert_eq!(client.client_secret.as_deref(), Some("secret"));
        assert_eq!(client.redirect_uri.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_authorization_url() {
        let flow = AuthorizationCodeFlow::new(test_client());
        let url = flow.authorization_url(None, None).unwrap();

        assert!(url.as_str().starts_with("https://disqus.com/api/oauth/2.0/authorize/"));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("client_id".to_string(), "test_client".to_string()),
                (
                    "redirect_uri".to_string(),
                    "https://forum.example.com/auth/disqus/callback".to_string()
                ),
                ("scope".to_string(), "read,email".to_string()),
                ("response_type".to_string(), "code".to_string()),
            ]
        );
    }

    #[test]
    fn test_authorization_url_with_state() {
        let flow = AuthorizationCodeFlow::new(test_client());
        let url = flow.authorization_url(None, Some("random_state")).unwrap();

        assert!(url.as_str().contains("state=random_state"));
        assert!(url.as_str().contains("response_type=code"));
    }

    #[test]
    fn test_authorization_url_custom_scope() {
        let flow = AuthorizationCodeFlow::new(test_client());
        let url = flow.authorization_url(Some("read"), None).unwrap();

        assert!(url.as_str().contains("scope=read"));
        assert!(!url.as_str().contains("scope=read%2Cemail"));
    }

    #[test]
    fn test_authorization_url_encodes_redirect_uri() {
        let flow = AuthorizationCodeFlow::new(test_client());
        let url = flow.authorization_url(None, None).unwrap();

        assert!(
            url.as_str()
                .contains("redirect_uri=https%3A%2F%2Fforum.example.com%2Fauth%2Fdisqus%2Fcallback")
        );
    }

    #[test]
    fn test_authorization_url_empty_client_id() {
        let client = OAuthClient::new("", Provider::disqus());
        let flow = AuthorizationCodeFlow::new(client);

        assert!(matches!(
            flow.authorization_url(None, None),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_authorization_url_bad_endpoint() {
        let client = OAuthClient::new("test_client", Provider::new("Broken", "not a url", ""));
        let flow = AuthorizationCodeFlow::new(client);

        assert!(matches!(
            flow.authorization_url(None, None),
            Err(Error::UrlError(_))
        ));
    }

    #[test]
    fn test_generate_state() {
        let state = generate_state();
        assert!(!state.is_empty());
        assert!(state.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_generate_state_unique() {
        assert_ne!(generate_state(), generate_state());
    }
}
