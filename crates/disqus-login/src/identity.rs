//! Canonical identity record and profile normalization.

use crate::error::{Error, Result};
use disqus_login_oauth::Token;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized, provider-agnostic user record the host consumes.
///
/// Constructed once per login attempt and handed to the host's
/// account-linking logic; `uid` is the only durable key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalIdentity {
    /// Stable provider-assigned user id. Never derived from mutable
    /// fields such as email or name.
    pub uid: String,
    /// Display name.
    pub name: Option<String>,
    /// Short handle; Disqus reports one username for both.
    pub nickname: Option<String>,
    /// Email address, when the account's privacy settings expose it.
    pub email: Option<String>,
    /// Free-form location string.
    pub location: Option<String>,
    /// The profile's "about" text.
    pub description: Option<String>,
    /// Small avatar permalink.
    pub image_url: Option<String>,
    /// Link to the Disqus profile page.
    pub profile_url: Option<String>,
    /// The provider profile as received, for host-side auditing.
    pub raw_profile: Value,
}

/// Normalizes a token response and raw profile into a [`CanonicalIdentity`].
///
/// The uid comes from the token response, not the profile body: Disqus
/// includes `user_id` alongside the access token, and that id stays stable
/// while every profile field can change. Absent profile fields become
/// `None`; an absent uid is fatal because the host cannot link the login
/// to an account without it.
///
/// # Errors
///
/// Returns [`Error::MissingIdentity`] if the token carries no user id.
pub fn normalize(token: &Token, raw_profile: Value) -> Result<CanonicalIdentity> {
    let uid = token.user_id.clone().ok_or(Error::MissingIdentity)?;

    let username = text(&raw_profile, "/username");

    Ok(CanonicalIdentity {
        uid,
        name: username.clone(),
        nickname: username,
        email: text(&raw_profile, "/email"),
        location: text(&raw_profile, "/location"),
        description: text(&raw_profile, "/about"),
        image_url: text(&raw_profile, "/avatar/small/permalink"),
        profile_url: text(&raw_profile, "/profileUrl"),
        raw_profile,
    })
}

/// Looks up a string at a JSON pointer, ignoring non-string values.
fn text(raw: &Value, pointer: &str) -> Option<String> {
    raw.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
}
