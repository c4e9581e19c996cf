//! Registration metadata for the host's login controller.

/// How the provider presents itself in the host's login UI and settings.
///
/// Plain data; the host reads it once at registration time. The runtime
/// on/off decision lives in
/// [`Authenticator::is_enabled`](crate::Authenticator::is_enabled), which
/// is consulted on every login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    /// Machine name, also the callback path segment.
    pub name: &'static str,
    /// Name shown in the provider list.
    pub pretty_name: &'static str,
    /// Login button label.
    pub title: &'static str,
    /// Message shown while the login popup is open.
    pub message: &'static str,
    /// Popup width in pixels.
    pub frame_width: u32,
    /// Popup height in pixels.
    pub frame_height: u32,
    /// Site-setting key controlling the on/off toggle.
    pub enabled_setting: &'static str,
    /// Whether emails reported by the provider are trusted as verified.
    pub trusted: bool,
}

impl ProviderDescriptor {
    /// The Disqus registration block.
    #[must_use]
    pub const fn disqus() -> Self {
        Self {
            name: "disqus",
            pretty_name: "Disqus",
            title: "with Disqus",
            message: "Authentication with Disqus (make sure pop up blockers are not enabled)",
            frame_width: 840,
            frame_height: 570,
            enabled_setting: crate::settings::LOGIN_ENABLED,
            trusted: true,
        }
    }
}

impl Default for ProviderDescriptor {
    fn default() -> Self {
        Self::disqus()
    }
}
