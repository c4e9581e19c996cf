//! Error types for the login adapter.

use thiserror::Error;

/// Errors that can occur during a login attempt.
///
/// All of these surface through the host's generic auth-failure path; none
/// are retried, and none leave persistent state behind.
#[derive(Debug, Error)]
pub enum Error {
    /// A required setting is absent while Disqus login is enabled.
    #[error("configuration missing: {0}")]
    ConfigMissing(&'static str),

    /// Token exchange was rejected or the token endpoint was unreachable.
    #[error("token exchange failed: {0}")]
    AuthExchangeFailed(#[source] disqus_login_oauth::Error),

    /// Profile endpoint was unreachable or its response was malformed.
    #[error("profile fetch failed: {0}")]
    ProfileFetchFailed(String),

    /// The token response carried no stable user id.
    #[error("provider returned no user id")]
    MissingIdentity,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
