//! The Lighthouse account model.
//!
//! Owns one set of credentials and performs the blocking credential check
//! the host's validation flow invokes. The two outcome flags follow the
//! rule that `auth_succeeded` is meaningful only once `auth_completed` is
//! true.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::api::{ApiError, LighthouseApi, Transport, AUTH_PATH_PATTERN, HOME_PAGE_URL};
use crate::host::{Account, BrowserOpener};

use super::AccountCredentials;

pub struct LighthouseAccount {
    credentials: AccountCredentials,
    auth_completed: bool,
    auth_succeeded: bool,
    authenticated_at: Option<DateTime<Utc>>,
    api: LighthouseApi,
    transport: Box<dyn Transport>,
}

impl LighthouseAccount {
    /// Create an account that talks to the real service.
    pub fn new(credentials: AccountCredentials) -> Result<Self> {
        let api = LighthouseApi::new(credentials.scheme)
            .context("Failed to build Lighthouse API client")?;
        let transport = Box::new(api.clone());
        Ok(Self::with_transport(credentials, api, transport))
    }

    /// Create an account with an explicit transport (stubbed in tests).
    pub fn with_transport(
        credentials: AccountCredentials,
        api: LighthouseApi,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            auth_completed: false,
            auth_succeeded: false,
            authenticated_at: None,
            api,
            transport,
        }
    }

    pub fn credentials(&self) -> &AccountCredentials {
        &self.credentials
    }

    pub fn auth_completed(&self) -> bool {
        self.auth_completed
    }

    pub fn auth_succeeded(&self) -> bool {
        self.auth_succeeded
    }

    /// When the most recent successful check happened, if any.
    pub fn authenticated_at(&self) -> Option<DateTime<Utc>> {
        self.authenticated_at
    }

    /// Validate `secret` and `project_id` against the stored domain with one
    /// blocking request. Transport failures count as authentication failure;
    /// there is no retry. On success the account adopts the checked values.
    pub fn authenticate_with(&mut self, secret: &str, project_id: &str) -> bool {
        let outcome = self
            .api
            .create_authenticated_request(
                AUTH_PATH_PATTERN,
                &self.credentials.domain_name,
                secret,
                project_id,
            )
            .and_then(|request| self.transport.execute(request))
            .and_then(ApiError::check_status);

        let succeeded = match outcome {
            Ok(()) => {
                info!(domain = %self.credentials.domain_name, "Lighthouse authentication succeeded");
                true
            }
            Err(error) => {
                warn!(domain = %self.credentials.domain_name, error = %error,
                      "Lighthouse authentication failed");
                false
            }
        };

        if succeeded {
            self.credentials.secret = secret.to_string();
            self.credentials.project_id = project_id.to_string();
            self.authenticated_at = Some(Utc::now());
        }
        self.auth_completed = true;
        self.auth_succeeded = succeeded;
        succeeded
    }

    /// Open lighthouseapp.com in the user's preferred browser. Returns
    /// whether the environment accepted the open request.
    pub fn open_lighthouse_home_page(browser: &dyn BrowserOpener) -> bool {
        let accepted = browser.open_url(HOME_PAGE_URL);
        if accepted {
            debug!(url = HOME_PAGE_URL, "Opened Lighthouse home page");
        } else {
            warn!(url = HOME_PAGE_URL, "Environment refused to open home page");
        }
        accepted
    }
}

impl Account for LighthouseAccount {
    fn domain_name(&self) -> &str {
        &self.credentials.domain_name
    }

    fn set_domain_name(&mut self, domain_name: String) {
        self.credentials.domain_name = domain_name;
    }

    fn secret(&self) -> &str {
        &self.credentials.secret
    }

    fn set_secret(&mut self, secret: String) {
        self.credentials.secret = secret;
    }

    fn project_id(&self) -> &str {
        &self.credentials.project_id
    }

    fn set_project_id(&mut self, project_id: String) {
        self.credentials.project_id = project_id;
    }

    fn authenticate(&mut self) -> bool {
        let secret = self.credentials.secret.clone();
        let project_id = self.credentials.project_id.clone();
        self.authenticate_with(&secret, &project_id)
    }

    fn is_authenticated(&self) -> bool {
        self.auth_completed && self.auth_succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AuthScheme;
    use crate::testing::{FailingTransport, StubTransport};

    fn account_with_status(status: u16) -> (LighthouseAccount, StubTransport) {
        let stub = StubTransport::new(status);
        let credentials = AccountCredentials::new("acme", "", "", AuthScheme::Token);
        let api = LighthouseApi::new(AuthScheme::Token).unwrap();
        let account =
            LighthouseAccount::with_transport(credentials, api, Box::new(stub.clone()));
        (account, stub)
    }

    #[test]
    fn test_authenticate_success_sets_flags() {
        let (mut account, stub) = account_with_status(200);

        assert!(account.authenticate_with("tok123", "42"));
        assert!(account.auth_completed());
        assert!(account.auth_succeeded());
        assert!(account.is_authenticated());
        assert!(account.authenticated_at().is_some());
        assert_eq!(stub.calls(), 1);

        // The checked values are adopted on success.
        assert_eq!(account.credentials().secret, "tok123");
        assert_eq!(account.credentials().project_id, "42");
    }

    #[test]
    fn test_authenticate_rejected_sets_flags() {
        let (mut account, _stub) = account_with_status(401);

        assert!(!account.authenticate_with("bad", "42"));
        assert!(account.auth_completed());
        assert!(!account.auth_succeeded());
        assert!(!account.is_authenticated());
        assert!(account.authenticated_at().is_none());

        // Rejected values are not adopted.
        assert_eq!(account.credentials().secret, "");
    }

    #[test]
    fn test_transport_error_is_plain_failure() {
        let credentials = AccountCredentials::new("acme", "", "", AuthScheme::Token);
        let api = LighthouseApi::new(AuthScheme::Token).unwrap();
        let mut account =
            LighthouseAccount::with_transport(credentials, api, Box::new(FailingTransport));

        assert!(!account.authenticate_with("tok", "42"));
        assert!(account.auth_completed());
        assert!(!account.auth_succeeded());
    }

    #[test]
    fn test_account_trait_authenticates_stored_fields() {
        let (mut account, stub) = account_with_status(200);
        account.set_secret("tok".to_string());
        account.set_project_id("7".to_string());

        assert!(Account::authenticate(&mut account));
        assert_eq!(stub.calls(), 1);
        assert_eq!(account.domain_name(), "acme");
    }

    #[test]
    fn test_open_home_page_reports_opener_verdict() {
        use crate::testing::StubBrowser;

        let accepting = StubBrowser::new(true);
        assert!(LighthouseAccount::open_lighthouse_home_page(&accepting));
        assert_eq!(accepting.opened(), vec![HOME_PAGE_URL.to_string()]);

        let refusing = StubBrowser::new(false);
        assert!(!LighthouseAccount::open_lighthouse_home_page(&refusing));
    }
}
