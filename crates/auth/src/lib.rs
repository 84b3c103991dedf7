//! `spendlog-auth` — static shared-secret token check.
//!
//! This crate is intentionally decoupled from HTTP: the api layer extracts
//! the `Authorization` header value and hands it here as a plain string.

use thiserror::Error;

/// Why a token was rejected. The messages are the client-facing bodies.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("unauthorized")]
    Missing,

    #[error("invalid token")]
    Invalid,
}

/// Check a client-supplied token against the configured shared secret.
///
/// An absent or blank token is [`TokenError::Missing`]; anything not equal
/// to the secret is [`TokenError::Invalid`].
pub fn verify_token(provided: Option<&str>, expected: &str) -> Result<(), TokenError> {
    match provided {
        None | Some("") => Err(TokenError::Missing),
        Some(token) if token != expected => Err(TokenError::Invalid),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "a-shared-secret";

    #[test]
    fn matching_token_is_accepted() {
        assert_eq!(verify_token(Some(SECRET), SECRET), Ok(()));
    }

    #[test]
    fn absent_token_is_missing() {
        assert_eq!(verify_token(None, SECRET), Err(TokenError::Missing));
        assert_eq!(verify_token(Some(""), SECRET), Err(TokenError::Missing));
    }

    #[test]
    fn wrong_token_is_invalid() {
        assert_eq!(
            verify_token(Some("something else"), SECRET),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn comparison_is_exact() {
        assert_eq!(
            verify_token(Some("A-SHARED-SECRET"), SECRET),
            Err(TokenError::Invalid)
        );
        assert_eq!(
            verify_token(Some(" a-shared-secret"), SECRET),
            Err(TokenError::Invalid)
        );
    }
}
