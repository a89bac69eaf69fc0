//! Lighthouse account type for the Quick Search Box host.
//!
//! This crate supplies everything the host needs to offer Lighthouse
//! (lighthouseapp.com) as a searchable account: an account model that
//! validates a domain/secret/project-ID tuple against the service, and the
//! setup and edit sheet controllers that collect those fields from the user.
//!
//! The host owns window lifecycle, credential persistence, and the search
//! pipeline; it interacts with this crate only through the traits in
//! [`host`] and the controller entry points in [`ui`].

pub mod account;
pub mod api;
pub mod config;
pub mod host;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use account::{AccountCredentials, AuthScheme, LighthouseAccount};
pub use api::{ApiError, LighthouseApi, Transport};
pub use config::PluginConfig;
pub use host::{Account, AlertSink, AlertStyle, BrowserOpener, SystemBrowser, WindowRef};
pub use ui::{EditAccountController, SetUpAccountController, SheetState};
