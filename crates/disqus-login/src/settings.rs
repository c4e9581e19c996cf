//! Host-supplied configuration access.
//!
//! Settings belong to the host forum, not to this adapter; everything here
//! is read through a trait on every call so that toggling the provider or
//! rotating credentials takes effect on the next login attempt without a
//! restart.

use crate::error::{Error, Result};
use crate::store::PluginStore;
use std::sync::Arc;

/// Setting key for the login on/off toggle.
pub const LOGIN_ENABLED: &str = "disqus_login_enabled";

/// Setting key for the Disqus API key (client id).
pub const CLIENT_ID: &str = "disqus_client_id";

/// Setting key for the Disqus API secret.
pub const CLIENT_SECRET: &str = "disqus_client_secret";

/// Setting key for the externally visible base URL of the forum.
///
/// Kept explicit rather than inferred from request state so deployments
/// behind a reverse proxy or path prefix can override it.
pub const BASE_URL: &str = "base_url";

/// Scope requested from Disqus. Comma-delimited, as Disqus expects.
pub const SCOPE: &str = "read,email";

/// Path the provider redirects back to, relative to the base URL.
const CALLBACK_PATH: &str = "/auth/disqus/callback";

/// Read access to the host's site-wide settings.
///
/// Implementations must reflect the current value on every call; the
/// adapter never caches what it reads here.
pub trait SiteSettings: Send + Sync {
    /// Whether Disqus login is currently enabled.
    fn login_enabled(&self) -> bool;

    /// The Disqus application's client id, if configured.
    fn client_id(&self) -> Option<String>;

    /// The Disqus application's client secret, if configured.
    fn client_secret(&self) -> Option<String>;

    /// The forum's externally visible base URL, if configured.
    fn base_url(&self) -> Option<String>;
}

/// [`SiteSettings`] backed by an injected [`PluginStore`].
pub struct StoreSettings {
    store: Arc<dyn PluginStore>,
}

impl StoreSettings {
    /// Creates settings access over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PluginStore>) -> Self {
        Self { store }
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.store
            .get(key)
            .and_then(|v| v.as_str().map(str::to_owned))
    }
}

impl SiteSettings for StoreSettings {
    fn login_enabled(&self) -> bool {
        self.store
            .get(LOGIN_ENABLED)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn client_id(&self) -> Option<String> {
        self.get_string(CLIENT_ID)
    }

    fn client_secret(&self) -> Option<String> {
        self.get_string(CLIENT_SECRET)
    }

    fn base_url(&self) -> Option<String> {
        self.get_string(BASE_URL)
    }
}

/// Builds the callback URL registered with the provider.
///
/// Must match the redirect URI configured on the Disqus application
/// exactly.
#[must_use]
pub fn callback_url(base_url: &str) -> String {
    format!("{}{CALLBACK_PATH}", base_url.trim_end_matches('/'))
}

/// Per-request snapshot of the provider configuration.
///
/// Taken once at the start of a login attempt and immutable afterwards, so
/// a mid-flight settings change cannot desynchronize the exchange.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Client id registered with Disqus.
    pub client_id: String,
    /// Client secret registered with Disqus.
    pub client_secret: String,
    /// Redirect URI, derived from the base URL.
    pub redirect_uri: String,
    /// Scope to request.
    pub scope: String,
}

impl ProviderConfig {
    /// Snapshots the current settings into a request-scoped config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigMissing`] if the client id, client secret, or
    /// base URL is absent or empty.
    pub fn from_settings(settings: &dyn SiteSettings) -> Result<Self> {
        let client_id = settings
            .client_id()
            .filter(|v| !v.is_empty())
            .ok_or(Error::ConfigMissing(CLIENT_ID))?;
        let client_secret = settings
            .client_secret()
            .filter(|v| !v.is_empty())
            .ok_or(Error::ConfigMissing(CLIENT_SECRET))?;
        let base_url = settings
            .base_url()
            .filter(|v| !v.is_empty())
            .ok_or(Error::ConfigMissing(BASE_URL))?;

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri: callback_url(&base_url),
            scope: SCOPE.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, PluginStore};

    fn configured_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store.set(LOGIN_ENABLED, true.into());
        store.set(CLIENT_ID, "id123".into());
        store.set(CLIENT_SECRET, "secret456".into());
        store.set(BASE_URL, "https://forum.example.com".into());
        store
    }

    #[test]
    fn store_settings_reads_values() {
        let settings = StoreSettings::new(configured_store());
        assert!(settings.login_enabled());
        assert_eq!(settings.client_id().as_deref(), Some("id123"));
        assert_eq!(settings.client_secret().as_deref(), Some("secret456"));
        assert_eq!(settings.base_url().as_deref(), Some("https://forum.example.com"));
    }

    #[test]
    fn login_disabled_when_unset() {
        let settings = StoreSettings::new(Arc::new(MemoryStore::new()));
        assert!(!settings.login_enabled());
    }

    #[test]
    fn login_disabled_independent_of_credentials() {
        let store = configured_store();
        store.set(LOGIN_ENABLED, false.into());
        let settings = StoreSettings::new(store);
        assert!(!settings.login_enabled());
        assert!(settings.client_id().is_some());
    }

    #[test]
    fn callback_url_appends_path() {
        assert_eq!(
            callback_url("https://forum.example.com"),
            "https://forum.example.com/auth/disqus/callback"
        );
    }

    #[test]
    fn callback_url_tolerates_trailing_slash() {
        assert_eq!(
            callback_url("https://forum.example.com/"),
            "https://forum.example.com/auth/disqus/callback"
        );
    }

    #[test]
    fn provider_config_snapshot() {
        let settings = StoreSettings::new(configured_store());
        let config = ProviderConfig::from_settings(&settings).unwrap();
        assert_eq!(config.client_id, "id123");
        assert_eq!(config.client_secret, "secret456");
        assert_eq!(
            config.redirect_uri,
            "https://forum.example.com/auth/disqus/callback"
        );
        assert_eq!(config.scope, "read,email");
    }

    #[test]
    fn provider_config_missing_client_id() {
        let store = configured_store();
        store.remove(CLIENT_ID);
        let settings = StoreSettings::new(store);
        assert!(matches!(
            ProviderConfig::from_settings(&settings),
            Err(Error::ConfigMissing(CLIENT_ID))
        ));
    }

    #[test]
    fn provider_config_empty_secret() {
        let store = configured_store();
        store.set(CLIENT_SECRET, "".into());
        let settings = StoreSettings::new(store);
        assert!(matches!(
            ProviderConfig::from_settings(&settings),
            Err(Error::ConfigMissing(CLIENT_SECRET))
        ));
    }

    #[test]
    fn provider_config_missing_base_url() {
        let store = configured_store();
        store.remove(BASE_URL);
        let settings = StoreSettings::new(store);
        assert!(matches!(
            ProviderConfig::from_settings(&settings),
            Err(Error::ConfigMissing(BASE_URL))
        ));
    }
}
