use async_trait::async_trait;

use crate::options::Options;

pub mod aws_sdk;

/// Parameters for one get-session-token call against the identity service.
#[derive(Debug, Clone)]
pub struct SessionTokenRequest {
    /// Profile holding the long-term credentials to authenticate with.
    pub profile_name: String,
    pub region_name: String,
    /// Serial number of the MFA device the token code comes from.
    pub serial_number: String,
    pub token_code: String,
    pub duration_seconds: i32,
}

impl SessionTokenRequest {
    pub fn from_options(options: &Options) -> Self {
        SessionTokenRequest {
            profile_name: options.profile.clone(),
            region_name: options.region.clone(),
            serial_number: mfa_device_arn(options.account, &options.username),
            token_code: options.token.clone(),
            duration_seconds: options.duration_seconds,
        }
    }
}

/// The credential set as returned by the identity service, before it is
/// combined with the invocation context.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expires_at: String,
}

/// Identity service seam. The real AWS SDK client lives in
/// [`aws_sdk::AwsSdkTokenIssuer`]; tests inject stubs.
#[async_trait]
pub trait IssueSessionToken {
    async fn issue_session_token(
        &self,
        request: &SessionTokenRequest,
    ) -> anyhow::Result<IssuedToken>;
}

/// The ARN AWS expects for a virtual MFA device owned by `username`.
pub fn mfa_device_arn(account: u64, username: &str) -> String {
    format!("arn:aws:iam::{}:mfa/{}", account, username)
}
