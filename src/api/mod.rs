//! HTTP layer for talking to lighthouseapp.com.
//!
//! This module provides:
//! - `LighthouseApi`: authenticated request construction + production transport
//! - `Transport`: the seam tests use to stub out the network
//! - `ApiError`: error taxonomy for logging

pub mod client;
pub mod error;

pub use client::{LighthouseApi, Transport, AUTH_PATH_PATTERN, HOME_PAGE_URL};
pub use error::ApiError;
