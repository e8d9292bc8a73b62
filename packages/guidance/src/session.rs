//! Development login: any non-empty name and password are accepted.

use crate::error::LoginError;

/// Check a login attempt and return the name to sign in with.
///
/// Fields are not trimmed; a single space counts as an entry.
pub fn check_credentials<'a>(name: &'a str, password: &str) -> Result<&'a str, LoginError> {
    if name.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_any_non_empty_pair() {
        assert_eq!(check_credentials("Asha", "x"), Ok("Asha"));
        assert_eq!(check_credentials("Asha", "wrong-password"), Ok("Asha"));
    }

    #[test]
    fn test_rejects_missing_field() {
        assert_eq!(check_credentials("", "secret"), Err(LoginError::MissingCredentials));
        assert_eq!(check_credentials("Asha", ""), Err(LoginError::MissingCredentials));
        assert_eq!(check_credentials("", ""), Err(LoginError::MissingCredentials));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            "Please enter both name and password."
        );
    }
}
