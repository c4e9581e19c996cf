//! # disqus-login
//!
//! "Log in with Disqus" for forum applications.
//!
//! The crate adapts the Disqus `OAuth2` authorization-code flow (provided by
//! [`disqus_login_oauth`]) to the shape a host forum's login controller
//! consumes: a [`ProviderDescriptor`] for the login button and popup, an
//! [`Authenticator`] capability trait covering the whole callback sequence,
//! and a [`CanonicalIdentity`] record the host's account-linking logic can
//! key on.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use disqus_login::{
//!     Authenticator, DisqusAuthenticator, MemoryStore, PluginStore, StoreSettings, settings,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     store.set(settings::CLIENT_ID, "your_client_id".into());
//!     store.set(settings::CLIENT_SECRET, "your_secret".into());
//!     store.set(settings::LOGIN_ENABLED, true.into());
//!     store.set(settings::BASE_URL, "https://forum.example.com".into());
//!
//!     let authenticator = DisqusAuthenticator::new(Arc::new(StoreSettings::new(store)));
//!
//!     // Send the user here to log in.
//!     let url = authenticator.authorize_url(None)?;
//!
//!     // On the callback, turn the code into a canonical identity.
//!     let identity = authenticator.authenticate("code_from_callback").await?;
//!     println!("logged in: {} ({})", identity.uid, identity.name.unwrap_or_default());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod authenticator;
mod descriptor;
mod error;
pub mod identity;
pub mod profile;
pub mod settings;
pub mod store;

pub use authenticator::{Authenticator, DisqusAuthenticator};
pub use descriptor::ProviderDescriptor;
pub use error::{Error, Result};
pub use identity::CanonicalIdentity;
pub use profile::ProfileClient;
pub use settings::{ProviderConfig, SiteSettings, StoreSettings};
pub use store::{MemoryStore, PluginStore};
