//! Controller for the sheet that edits an existing Lighthouse account.
//!
//! Fields start pre-populated from the account being edited. Accepting the
//! sheet re-authenticates; only a successful check writes the new values
//! back to the account.

use tracing::{debug, info, warn};

use crate::account::LighthouseAccount;
use crate::config::PluginConfig;
use crate::host::{Account, AlertSink, AlertStyle, BrowserOpener, WindowRef};

use super::sheet::{
    auth_failed_explanation, missing_fields, missing_fields_explanation, SheetState,
    AUTH_FAILED_SUMMARY, MISSING_FIELDS_SUMMARY,
};

pub struct EditAccountController {
    account: LighthouseAccount,
    domain_name: String,
    secret: String,
    project_id: String,
    allow_domain_edit: bool,
    state: SheetState,
    last_error: Option<String>,
}

impl EditAccountController {
    pub fn new(account: LighthouseAccount, config: &PluginConfig) -> Self {
        let credentials = account.credentials().clone();
        Self {
            account,
            domain_name: credentials.domain_name,
            secret: credentials.secret,
            project_id: credentials.project_id,
            allow_domain_edit: config.allow_domain_edit,
            state: SheetState::Editing,
            last_error: None,
        }
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Change the domain field. Ignored unless `allow_domain_edit` is set in
    /// the plugin configuration; the host greys the control out accordingly.
    pub fn set_domain_name(&mut self, domain_name: String) {
        if !self.allow_domain_edit {
            debug!("Domain edits are disabled; ignoring change");
            return;
        }
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

    /// Hand the (possibly updated) account back to the host when the sheet
    /// closes.
    pub fn into_account(self) -> LighthouseAccount {
        self.account
    }

    /// Re-validate and re-authenticate the edited fields. On success the
    /// account adopts them and the sheet is accepted; otherwise an alert is
    /// attached to `window` and the sheet stays open.
    pub fn accept_edit_account_sheet(&mut self, window: WindowRef, alerts: &mut dyn AlertSink) {
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
            warn!(?missing, "Edit sheet submitted with empty fields");
            self.reject(
                window,
                alerts,
                MISSING_FIELDS_SUMMARY,
                &missing_fields_explanation(&missing),
            );
            return;
        }

        self.state = SheetState::Validating;

        // The request must be built against the edited domain, but the
        // account adopts it only on success, like secret and project ID.
        let prior_domain = self.account.domain_name().to_string();
        if self.allow_domain_edit {
            self.account.set_domain_name(self.domain_name.trim().to_string());
        }

        if self.account.authenticate_with(&self.secret, &self.project_id) {
            self.last_error = None;
            self.state = SheetState::Accepted;
            info!(domain = %self.account.domain_name(), "Lighthouse account updated");
        } else {
            self.account.set_domain_name(prior_domain);
            let explanation = auth_failed_explanation(self.domain_name.trim(), scheme);
            self.reject(window, alerts, AUTH_FAILED_SUMMARY, &explanation);
        }
    }

    /// Open lighthouseapp.com in the user's preferred browser.
    pub fn open_lighthouse_home_page(&self, browser: &dyn BrowserOpener) -> bool {
        LighthouseAccount::open_lighthouse_home_page(browser)
    }

    fn reject(
        &mut self,
        window: WindowRef,
        alerts: &mut dyn AlertSink,
        summary: &str,
        explanation: &str,
    ) {
        self.last_error = Some(summary.to_string());
        alerts.present_message_off_window(window, summary, explanation, AlertStyle::Warning);
        self.state = SheetState::Rejected;
    }

    fn resume_editing(&mut self) {
        if self.state == SheetState::Rejected {
            self.state = SheetState::Editing;
            self.last_error = None;
        }
    }
}
