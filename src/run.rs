use tracing::info;

use crate::credentials::SessionCredential;
use crate::error::Error;
use crate::handler::HandleCredentials;
use crate::options::{Args, Options};
use crate::session_token::{IssueSessionToken, SessionTokenRequest};

/// The whole workflow: validate the options, request a session token,
/// install it as the default profile. Stages run strictly in sequence,
/// each stage's output gating the next.
pub struct MfaSession<I, H> {
    issuer: I,
    handler: H,
}

impl<I, H> MfaSession<I, H>
where
    I: IssueSessionToken + Send + Sync + 'static,
    H: HandleCredentials,
{
    pub fn new(issuer: I, handler: H) -> Self {
        Self { issuer, handler }
    }

    pub async fn run(&self, args: Args) -> Result<(), Error> {
        let options = Options::resolve(args)?;

        info!("Generating session token...");
        let request = SessionTokenRequest::from_options(&options);
        let issued = self
            .issuer
            .issue_session_token(&request)
            .await
            .map_err(Error::token_request)?;

        let credential = SessionCredential {
            access_key_id: issued.access_key_id,
            secret_access_key: issued.secret_access_key,
            session_token: issued.session_token,
            expires_at: issued.expires_at,
            region: options.region,
            aws_dir: options.aws_dir,
        };

        self.handler
            .handle_credentials(&credential)
            .map_err(Error::profile_update)?;

        info!("Successfully generated the token and updated the creds file");
        Ok(())
    }
}
