//! Sheet controllers the host's UI layer drives.
//!
//! This module provides:
//! - `SetUpAccountController`: first-time account creation
//! - `EditAccountController`: revisiting an existing account
//! - `SheetState`: the shared Editing/Validating/Accepted/Rejected machine

pub mod edit;
pub mod setup;
pub mod sheet;

pub use edit::EditAccountController;
pub use setup::SetUpAccountController;
pub use sheet::SheetState;
