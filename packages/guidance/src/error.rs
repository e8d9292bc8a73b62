use thiserror::Error;

/// Why a login attempt was refused.
///
/// The `Display` text is shown verbatim under the login form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both name and password.")]
    MissingCredentials,
}

/// Failure to read `career-corrector.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
