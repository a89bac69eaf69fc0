//! Controller for the sheet that sets up a new Lighthouse account.
//!
//! The host binds the three field accessors to its input controls and wires
//! the sheet's buttons to `accept_setup_account_sheet` and
//! `open_lighthouse_home_page`.

use anyhow::Result;
use tracing::{info, warn};

use crate::account::{AccountCredentials, LighthouseAccount};
use crate::config::PluginConfig;
use crate::host::{Account, AlertSink, AlertStyle, BrowserOpener, WindowRef};

use super::sheet::{
    auth_failed_explanation, missing_fields, missing_fields_explanation, SheetState,
    AUTH_FAILED_SUMMARY, MISSING_FIELDS_SUMMARY,
};

pub struct SetUpAccountController {
    account: LighthouseAccount,
    domain_name: String,
    secret: String,
    project_id: String,
    state: SheetState,
    last_error: Option<String>,
}

impl SetUpAccountController {
    /// Create a controller with an empty account, per the configured scheme.
    pub fn new(config: &PluginConfig) -> Result<Self> {
        let account = LighthouseAccount::new(AccountCredentials::empty(config.auth_scheme))?;
        Ok(Self::with_account(account))
    }

    pub fn with_account(account: LighthouseAccount) -> Self {
        Self {
            account,
            domain_name: String::new(),
            secret: String::new(),
            project_id: String::new(),
            state: SheetState::Editing,
            last_error: None,
        }
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn set_domain_name(&mut self, domain_name: String) {
        self.domain_name = domain_name;
        self.resume_editing();
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn set_secret(&mut self, secret: String) {
        self.secret = secret;
        self.resume_editing();
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn set_project_id(&mut self, project_id: String) {
        self.project_id = project_id;
        self.resume_editing();
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn account(&self) -> &LighthouseAccount {
        &self.account
    }

    /// Consume the controller after a successful setup.
    pub fn into_account(self) -> LighthouseAccount {
        self.account
    }

    /// Validate the form, authenticate, and hand the credentials to `commit`
    /// on success. On any failure an alert is attached to `window` and the
    /// form stays open for correction. Never issues a network request while
    /// a field is empty.
    pub fn accept_setup_account_sheet(
        &mut self,
        window: WindowRef,
        alerts: &mut dyn AlertSink,
        commit: &mut dyn FnMut(&AccountCredentials),
    ) {
        match self.state {
            // Validating is only observable from a host callback re-entering
            // during the blocking submit (e.g. an alert sink that pumps the
            // event loop); such re-entrant submits are ignored.
            SheetState::Validating | SheetState::Accepted => return,
            SheetState::Editing | SheetState::Rejected => self.state = SheetState::Editing,
        }

        let scheme = self.account.credentials().scheme;
        let missing = missing_fields(&self.domain_name, &self.secret, &self.project_id, scheme);
        if !missing.is_empty() {
            warn!(?missing, "Setup sheet submitted with empty fields");
            self.reject(
                window,
                alerts,
                MISSING_FIELDS_SUMMARY,
                &missing_fields_explanation(&missing),
            );
            return;
        }

        self.state = SheetState::Validating;
        self.account.set_domain_name(self.domain_name.trim().to_string());

        if self.account.authenticate_with(&self.secret, &self.project_id) {
            commit(self.account.credentials());
            self.last_error = None;
            self.state = SheetState::Accepted;
            info!(domain = %self.domain_name, "New Lighthouse account accepted");
        } else {
            let explanation = auth_failed_explanation(&self.domain_name, scheme);
            self.reject(window, alerts, AUTH_FAILED_SUMMARY, &explanation);
        }
    }

    /// Open lighthouseapp.com in the user's preferred browser.
    pub fn open_lighthouse_home_page(&self, browser: &dyn BrowserOpener) -> bool {
        LighthouseAccount::open_lighthouse_home_page(browser)
    }

    /// Show a modal alert attached to the given window.
    pub fn present_message_off_window(
        &self,
        alerts: &mut dyn AlertSink,
        window: WindowRef,
        summary: &str,
        explanation: &str,
        style: AlertStyle,
    ) {
        alerts.present_message_off_window(window, summary, explanation, style);
    }

    fn reject(
        &mut self,
        window: WindowRef,
        alerts: &mut dyn AlertSink,
        summary: &str,
        explanation: &str,
    ) {
        self.last_error = Some(summary.to_string());
        self.present_message_off_window(alerts, window, summary, explanation, AlertStyle::Warning);
        self.state = SheetState::Rejected;
    }

    fn resume_editing(&mut self) {
        if self.state == SheetState::Rejected {
            self.state = SheetState::Editing;
            self.last_error = None;
        }
    }
}
