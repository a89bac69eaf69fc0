use serde::{Deserialize, Serialize};

/// How the secret is presented to Lighthouse.
///
/// `Token` is the canonical scheme (the secret travels in the
/// `X-LighthouseToken` header). `Password` is kept for legacy accounts that
/// still authenticate with HTTP basic auth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    #[default]
    Token,
    Password,
}

/// The credential tuple identifying one Lighthouse project.
///
/// This is the snapshot handed to the host on commit; actual secure storage
/// is host-owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCredentials {
    /// Subdomain of `{domain_name}.lighthouseapp.com`.
    pub domain_name: String,
    /// Access token or password, depending on `scheme`.
    pub secret: String,
    /// Numeric project identifier, kept as a string as the API presents it.
    pub project_id: String,
    pub scheme: AuthScheme,
}

impl AccountCredentials {
    pub fn new(
        domain_name: impl Into<String>,
        secret: impl Into<String>,
        project_id: impl Into<String>,
        scheme: AuthScheme,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            secret: secret.into(),
            project_id: project_id.into(),
            scheme,
        }
    }

    /// Blank credentials, as created by the setup sheet before user input.
    pub fn empty(scheme: AuthScheme) -> Self {
        Self::new("", "", "", scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let credentials = AccountCredentials::new("acme", "tok123", "42", AuthScheme::Token);
        let json = serde_json::to_string(&credentials).unwrap();
        let parsed: AccountCredentials = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, credentials);
    }

    #[test]
    fn test_scheme_defaults_to_token() {
        assert_eq!(AuthScheme::default(), AuthScheme::Token);
    }
}
