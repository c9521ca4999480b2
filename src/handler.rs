use crate::credentials::SessionCredential;

pub mod profile_files;

/// What happens to a freshly minted session. The production handler
/// installs it into the AWS profile files; tests substitute their own.
pub trait HandleCredentials {
    fn handle_credentials(&self, credential: &SessionCredential) -> anyhow::Result<()>;
}
