//! Tagged result values for call sites that do not want to handle errors.

use crate::error::HttpError;

/// Outcome of a call made through `OutcomeClient`.
///
/// `Outcome<()>` is the payload-less success. The failure message is the
/// description of the underlying `HttpError`, so the error kind is lost;
/// use `ApiClient` when the caller needs to branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure { message: String },
}

impl<T> Outcome<T> {
    pub fn success(payload: T) -> Self {
        Outcome::Success(payload)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Failure message, empty on success.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(_) => "",
            Outcome::Failure { message } => message,
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Outcome::Success(payload) => Some(payload),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Outcome::Success(payload) => Some(payload),
            Outcome::Failure { .. } => None,
        }
    }

    /// Convert into a `Result` whose error is the failure message.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(payload) => Ok(payload),
            Outcome::Failure { message } => Err(message),
        }
    }
}

impl<T> From<Result<T, HttpError>> for Outcome<T> {
    fn from(result: Result<T, HttpError>) -> Self {
        match result {
            Ok(payload) => Outcome::Success(payload),
            Err(err) => Outcome::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::HttpStatusCode;

    #[test]
    fn success_has_empty_message() {
        let outcome = Outcome::success(7);
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "");
        assert_eq!(outcome.payload(), Some(&7));
    }

    #[test]
    fn unit_success() {
        let outcome: Outcome = Outcome::success(());
        assert!(outcome.is_success());
        assert_eq!(outcome.into_result(), Ok(()));
    }

    #[test]
    fn error_becomes_described_failure() {
        let result: Result<u8, HttpError> = Err(HttpError::ServerSide {
            status: HttpStatusCode::NotFound,
            message: "GET http://localhost/api/x".to_string(),
        });
        let outcome = Outcome::from(result);
        assert!(!outcome.is_success());
        assert!(outcome.message().contains("404 Not Found"));
        assert_eq!(outcome.into_payload(), None);
    }
}
