use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the Lighthouse API layer.
///
/// The distinction only matters for logging; controllers collapse every
/// variant into a single "authentication failed" message for the user.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - Lighthouse rejected the credentials")]
    Unauthorized,

    #[error("Unexpected HTTP status: {0}")]
    Http(StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Map a response status to Ok for 2xx, or the matching error otherwise.
    pub fn check_status(status: StatusCode) -> Result<(), Self> {
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Unauthorized)
        } else {
            Err(ApiError::Http(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(ApiError::check_status(StatusCode::OK).is_ok());
        assert!(ApiError::check_status(StatusCode::CREATED).is_ok());

        assert!(matches!(
            ApiError::check_status(StatusCode::UNAUTHORIZED),
            Err(ApiError::Unauthorized)
        ));
        assert!(matches!(
            ApiError::check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Http(_))
        ));
    }
}
