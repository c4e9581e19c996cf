//! # disqus-login-oauth
//!
//! `OAuth2` authorization-code flow against the Disqus API.
//!
//! ## Features
//!
//! - **Authorization URL construction**: client id, redirect URI, scope and
//!   `response_type=code` assembled into the Disqus authorize endpoint URL
//! - **Code exchange**: authorization code posted to the token endpoint and
//!   parsed into a [`Token`], including the Disqus-specific `user_id` and
//!   `username` fields carried in the token response
//! - **Provider configuration**: pre-configured Disqus endpoints, custom
//!   endpoints for tests or alternate deployments
//!
//! ## Quick Start
//!
//! ```ignore
//! use disqus_login_oauth::{AuthorizationCodeFlow, OAuthClient, Provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OAuthClient::new("your_client_id", Provider::disqus())
//!         .with_client_secret("your_secret")
//!         .with_redirect_uri("https://forum.example.com/auth/disqus/callback");
//!
//!     let flow = AuthorizationCodeFlow::new(client);
//!
//!     // Redirect the user here to authorize.
//!     let auth_url = flow.authorization_url(None, None)?;
//!     println!("Visit: {auth_url}");
//!
//!     // After the provider redirects back, exchange the code.
//!     let code = "authorization_code_from_redirect";
//!     let token = flow.exchange_code(code, None).await?;
//!
//!     println!("Access token: {}", token.access_token);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod flow;
pub mod provider;
pub mod token;

pub use error::{Error, Result};
pub use flow::{AuthorizationCodeFlow, OAuthClient, generate_state};
pub use provider::Provider;
pub use token::Token;
