//! Account model for the Lighthouse integration.
//!
//! This module provides:
//! - `AccountCredentials` / `AuthScheme`: the credential tuple and how the
//!   secret is presented (token header vs legacy basic auth)
//! - `LighthouseAccount`: the account object the host's validation flow
//!   drives

pub mod credentials;
pub mod model;

pub use credentials::{AccountCredentials, AuthScheme};
pub use model::LighthouseAccount;
