//! Request construction and transport for the Lighthouse API.
//!
//! `LighthouseApi` builds authenticated requests against
//! `https://{domain}.lighthouseapp.com` and doubles as the production
//! [`Transport`]. Request construction is pure; only `execute` touches the
//! network.

use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use tracing::debug;

use crate::account::AuthScheme;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Every Lighthouse instance is a subdomain of this host.
pub const LIGHTHOUSE_DOMAIN_SUFFIX: &str = "lighthouseapp.com";

/// Marketing home page, opened from the "Learn more" link in the sheets.
pub const HOME_PAGE_URL: &str = "https://lighthouseapp.com/";

/// API path used to validate credentials. Fetching the project's XML
/// description succeeds only when the token/password and project ID are good.
pub const AUTH_PATH_PATTERN: &str = "projects/{id}.xml";

/// Placeholder in path patterns that gets replaced with the project ID.
const PROJECT_ID_PLACEHOLDER: &str = "{id}";

/// Header carrying the access token (token scheme).
const TOKEN_HEADER: &str = "X-LighthouseToken";

/// Sentinel username for the legacy basic-auth scheme; the secret travels
/// as the basic-auth password.
const BASIC_AUTH_USERNAME: &str = "x";

/// HTTP request timeout in seconds.
/// The call blocks the host UI loop, so fail reasonably fast.
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Transport seam
// ============================================================================

/// Sends a request and reports the response status.
///
/// Production code uses [`LighthouseApi`]; tests substitute stubs so no
/// authentication test ever touches the network.
pub trait Transport {
    fn execute(&self, request: Request) -> Result<StatusCode, ApiError>;
}

// ============================================================================
// API client
// ============================================================================

/// Lighthouse API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct LighthouseApi {
    client: Client,
    scheme: AuthScheme,
}

impl LighthouseApi {
    pub fn new(scheme: AuthScheme) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, scheme })
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Build an authenticated GET request for the given path pattern.
    ///
    /// `{id}` in the pattern is replaced with the project ID. The secret is
    /// embedded per the configured scheme (token header or basic auth) and
    /// never appears in the URL. Pure construction, no I/O.
    pub fn create_authenticated_request(
        &self,
        path_pattern: &str,
        domain_name: &str,
        secret: &str,
        project_id: &str,
    ) -> Result<Request, ApiError> {
        if domain_name.is_empty() || domain_name.contains('/') || domain_name.contains('.') {
            return Err(ApiError::InvalidRequest(format!(
                "not a valid Lighthouse subdomain: {:?}",
                domain_name
            )));
        }

        let path = path_pattern.replace(PROJECT_ID_PLACEHOLDER, project_id);
        let url = format!("https://{}.{}/{}", domain_name, LIGHTHOUSE_DOMAIN_SUFFIX, path);
        debug!(%url, scheme = ?self.scheme, "Building authenticated request");

        let builder = self.client.get(&url);
        let builder = match self.scheme {
            AuthScheme::Token => builder.header(TOKEN_HEADER, secret),
            AuthScheme::Password => builder.basic_auth(BASIC_AUTH_USERNAME, Some(secret)),
        };

        Ok(builder.build()?)
    }

    /// Convenience wrapper that pulls domain, secret, and project ID from
    /// stored credentials.
    pub fn request_for_credentials(
        &self,
        path_pattern: &str,
        credentials: &crate::account::AccountCredentials,
    ) -> Result<Request, ApiError> {
        self.create_authenticated_request(
            path_pattern,
            &credentials.domain_name,
            &credentials.secret,
            &credentials.project_id,
        )
    }
}

impl Transport for LighthouseApi {
    fn execute(&self, request: Request) -> Result<StatusCode, ApiError> {
        let response = self.client.execute(request)?;
        Ok(response.status())
    }
}
