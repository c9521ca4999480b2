use thiserror::Error;

/// Top-level failure classes, each mapped to a stable process exit code.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required command line options were not supplied.
    /// The message carries one `--<name> is required` line per option.
    #[error("{0}")]
    Validation(String),

    /// The identity service rejected or could not complete the
    /// get-session-token request. Not retried: an MFA code is single-use.
    #[error("Failed to generate session token")]
    TokenRequest(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Backing up, reading or rewriting the credentials/config files failed.
    #[error("Failed to update the default profile")]
    ProfileUpdate(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn token_request(source: anyhow::Error) -> Self {
        Error::TokenRequest(source.into())
    }

    pub fn profile_update(source: anyhow::Error) -> Self {
        Error::ProfileUpdate(source.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_) => 1,
            Error::TokenRequest(_) => 2,
            Error::ProfileUpdate(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_request_keeps_a_fixed_message() {
        let err = Error::token_request(anyhow::anyhow!("the code is expired"));
        assert_eq!(err.to_string(), "Failed to generate session token");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_codes_are_stable_per_class() {
        assert_eq!(Error::Validation("--token is required".into()).exit_code(), 1);
        assert_eq!(Error::profile_update(anyhow::anyhow!("io")).exit_code(), 3);
    }
}
