//! The Disqus authenticator and its host-facing capability trait.

use crate::descriptor::ProviderDescriptor;
use crate::error::{Error, Result};
use crate::identity::{self, CanonicalIdentity};
use crate::profile::ProfileClient;
use crate::settings::{ProviderConfig, SiteSettings};
use async_trait::async_trait;
use disqus_login_oauth::{AuthorizationCodeFlow, OAuthClient, Provider, Token};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// The fixed capability surface a provider adapter exposes to the host's
/// generic login controller.
///
/// One login attempt is one strictly sequential pass through
/// [`authenticate`](Self::authenticate): exchange the code, fetch the
/// profile, normalize. A failed exchange short-circuits before the profile
/// endpoint is contacted.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Registration metadata for the host's login UI.
    fn descriptor(&self) -> &ProviderDescriptor;

    /// Whether the provider is currently enabled.
    ///
    /// Consulted on every login attempt; implementations must re-read the
    /// toggle rather than cache it, and must not require credentials to be
    /// configured to answer.
    fn is_enabled(&self) -> bool;

    /// Builds the provider authorization redirect URL.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error before any network call if the
    /// provider is not fully configured.
    fn authorize_url(&self, state: Option<&str>) -> Result<Url>;

    /// Exchanges a callback authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<Token>;

    /// Fetches the authorizing user's raw profile.
    async fn fetch_profile(&self, token: &Token) -> Result<Value>;

    /// Normalizes the provider payloads into a canonical identity.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingIdentity`] if the token carries no user
    /// id.
    fn normalize(&self, token: &Token, raw_profile: Value) -> Result<CanonicalIdentity> {
        identity::normalize(token, raw_profile)
    }

    /// Runs the whole callback sequence for one login attempt.
    async fn authenticate(&self, code: &str) -> Result<CanonicalIdentity> {
        let token = self.exchange_code(code).await?;
        let raw_profile = self.fetch_profile(&token).await?;
        self.normalize(&token, raw_profile)
    }
}

/// [`Authenticator`] implementation for Disqus.
///
/// Holds no mutable state; each login attempt snapshots the current site
/// settings into a [`ProviderConfig`] and builds its own flow from it.
pub struct DisqusAuthenticator {
    settings: Arc<dyn SiteSettings>,
    descriptor: ProviderDescriptor,
    provider: Provider,
    profile_client: ProfileClient,
}

impl DisqusAuthenticator {
    /// Creates an authenticator over the host's settings.
    #[must_use]
    pub fn new(settings: Arc<dyn SiteSettings>) -> Self {
        Self {
            settings,
            descriptor: ProviderDescriptor::disqus(),
            provider: Provider::disqus(),
            profile_client: ProfileClient::new(),
        }
    }

    /// Overrides the provider endpoints (tests, alternate deployments).
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Overrides the profile client (tests, alternate deployments).
    #[must_use]
    pub fn with_profile_client(mut self, profile_client: ProfileClient) -> Self {
        self.profile_client = profile_client;
        self
    }

    /// Takes the per-request configuration snapshot.
    fn config(&self) -> Result<ProviderConfig> {
        ProviderConfig::from_settings(self.settings.as_ref())
    }

    fn flow(&self, config: &ProviderConfig) -> AuthorizationCodeFlow {
        let client = OAuthClient::new(config.client_id.clone(), self.provider.clone())
            .with_client_secret(config.client_secret.clone())
            .with_redirect_uri(config.redirect_uri.clone());
        AuthorizationCodeFlow::new(client)
    }
}

#[async_trait]
impl Authenticator for DisqusAuthenticator {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn is_enabled(&self) -> bool {
        self.settings.login_enabled()
    }

    fn authorize_url(&self, state: Option<&str>) -> Result<Url> {
        let config = self.config()?;
        self.flow(&config)
            .authorization_url(Some(&config.scope), state)
            .map_err(|e| {
                warn!("failed to build Disqus authorize URL: {e}");
                Error::ConfigMissing("auth_url")
            })
    }

    async fn exchange_code(&self, code: &str) -> Result<Token> {
        let config = self.config()?;
        debug!("exchanging authorization code for Disqus access token");
        self.flow(&config)
            .exchange_code(code, None)
            .await
            .map_err(|e| {
                warn!("Disqus token exchange failed: {e}");
                Error::AuthExchangeFailed(e)
            })
    }

    async fn fetch_profile(&self, token: &Token) -> Result<Value> {
        let config = self.config()?;
        self.profile_client
            .fetch(&config.client_id, &token.access_token)
            .await
    }
}
