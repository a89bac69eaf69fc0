//! Contract between this plugin and the host search-launcher.
//!
//! The host used to hand plugins a base class to subclass; here the same
//! surface is a set of narrow traits. The host implements [`AlertSink`] and
//! calls [`Account`] during credential validation; the plugin ships the
//! production [`BrowserOpener`].

use tracing::warn;

/// Opaque handle to a host window a sheet is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRef(pub u64);

/// Severity of a sheet alert, mapped by the host onto its native styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStyle {
    Informational,
    Warning,
    Critical,
}

/// The account capability the host's credential-validation flow consumes:
/// field access plus a blocking authenticate entry point.
pub trait Account {
    fn domain_name(&self) -> &str;
    fn set_domain_name(&mut self, domain_name: String);
    fn secret(&self) -> &str;
    fn set_secret(&mut self, secret: String);
    fn project_id(&self) -> &str;
    fn set_project_id(&mut self, project_id: String);

    /// Validate the stored fields against the remote service.
    fn authenticate(&mut self) -> bool;

    /// True once an authentication attempt has completed successfully.
    fn is_authenticated(&self) -> bool;
}

/// Host-provided modal alert attached to a window.
pub trait AlertSink {
    fn present_message_off_window(
        &mut self,
        window: WindowRef,
        summary: &str,
        explanation: &str,
        style: AlertStyle,
    );
}

/// Opens a URL in the user's preferred browser.
pub trait BrowserOpener {
    /// Returns whether the operating environment accepted the request.
    fn open_url(&self, url: &str) -> bool;
}

/// Production opener backed by the platform default-browser mechanism.
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> bool {
        match open::that(url) {
            Ok(()) => true,
            Err(error) => {
                warn!(%url, %error, "Failed to open URL in default browser");
                false
            }
        }
    }
}
