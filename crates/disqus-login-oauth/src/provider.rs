//! `OAuth2` provider configurations.

use crate::error::{Error, Result};
use url::Url;

/// `OAuth2` provider configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    /// Provider name (e.g., "Disqus").
    pub name: String,
    /// Authorization endpoint URL.
    pub auth_url: String,
    /// Token endpoint URL.
    pub token_url: String,
    /// Default scope string, delimited the way the provider expects.
    pub default_scope: String,
}

impl Provider {
    /// Creates a new provider configuration.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        auth_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            auth_url: auth_url.into(),
            token_url: token_url.into(),
            default_scope: String::new(),
        }
    }

    /// Sets the default scope string.
    #[must_use]
    pub fn with_default_scope(mut self, scope: impl Into<String>) -> Self {
        self.default_scope = scope.into();
        self
    }

    /// Disqus `OAuth2` provider configuration.
    ///
    /// Scope `read,email` grants read access to the profile plus the
    /// account's email address. Disqus delimits scopes with commas.
    #[must_use]
    pub fn disqus() -> Self {
        Self::new(
            "Disqus",
            "https://disqus.com/api/oauth/2.0/authorize/",
            "https://disqus.com/api/oauth/2.0/access_token/",
        )
        .with_default_scope("read,email")
    }

    /// Validates that the endpoint URLs are present and parseable.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is empty or not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if self.auth_url.is_empty() {
            return Err(Error::InvalidConfig("auth_url is empty".into()));
        }
        if self.token_url.is_empty() {
            return Err(Error::InvalidConfig("token_url is empty".into()));
        }
        Url::parse(&self.auth_url)?;
        Url::parse(&self.token_url)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_disqus_provider() {
        let provider = Provider::disqus();
        assert_eq!(provider.name, "Disqus");
        assert_eq!(provider.auth_url, "https://disqus.com/api/oauth/2.0/authorize/");
        assert_eq!(provider.token_url, "https://disqus.com/api/oauth/2.0/access_token/");
        assert_eq!(provider.default_scope, "read,email");
        provider.validate().unwrap();
    }

    #[test]
    fn test_custom_provider() {
        let provider = Provider::new(
            "Custom",
            "https://auth.example.com/authorize",
            "https://auth.example.com/token",
        )
        .with_default_scope("email");

        assert_eq!(provider.name, "Custom");
        assert_eq!(provider.default_scope, "email");
        provider.validate().unwrap();
    }

    #[test]
    fn test_validate_empty_auth_url() {
        let provider = Provider::new("Broken", "", "https://auth.example.com/token");
        assert!(matches!(
            provider.validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_unparseable_token_url() {
        let provider = Provider::new("Broken", "https://auth.example.com/authorize", "not a url");
        assert!(matches!(provider.validate(), Err(Error::UrlError(_))));
    }
}
