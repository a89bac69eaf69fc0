//! State machine and alert copy shared by the setup and edit sheets.

use crate::account::AuthScheme;

/// Lifecycle of an account sheet.
///
/// `Editing -> Validating -> {Accepted, Rejected}`. `Accepted` is terminal;
/// `Rejected` returns to `Editing` as soon as a field changes or the user
/// resubmits. While `Validating`, further submits are ignored so at most one
/// authentication attempt is in flight per sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    Editing,
    Validating,
    Accepted,
    Rejected,
}

pub(crate) const MISSING_FIELDS_SUMMARY: &str = "Missing information";
pub(crate) const AUTH_FAILED_SUMMARY: &str = "Authentication failed";

/// User-visible label for the secret field under the given scheme.
pub(crate) fn secret_label(scheme: AuthScheme) -> &'static str {
    match scheme {
        AuthScheme::Token => "access token",
        AuthScheme::Password => "password",
    }
}

/// Names of the required fields that are still empty.
pub(crate) fn missing_fields(
    domain_name: &str,
    secret: &str,
    project_id: &str,
    scheme: AuthScheme,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if domain_name.trim().is_empty() {
        missing.push("domain name");
    }
    if secret.trim().is_empty() {
        missing.push(secret_label(scheme));
    }
    if project_id.trim().is_empty() {
        missing.push("project ID");
    }
    missing
}

pub(crate) fn missing_fields_explanation(missing: &[&str]) -> String {
    format!("Please fill in: {}.", missing.join(", "))
}

/// One explanation covers bad credentials and an unreachable service alike.
pub(crate) fn auth_failed_explanation(domain_name: &str, scheme: AuthScheme) -> String {
    format!(
        "Lighthouse did not accept the credentials for \"{}\". \
         Check the domain name, {}, and project ID, then try again.",
        domain_name,
        secret_label(scheme)
    )
}
