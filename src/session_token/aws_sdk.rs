use anyhow::Context;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_smithy_types::date_time::Format;
use aws_types::region::Region;

use crate::session_token::{IssueSessionToken, IssuedToken, SessionTokenRequest};

/// Issues session tokens through the AWS SDK, authenticating with the
/// long-term credentials stored under the requested profile.
#[derive(Debug, Default)]
pub struct AwsSdkTokenIssuer;

#[async_trait]
impl IssueSessionToken for AwsSdkTokenIssuer {
    async fn issue_session_token(
        &self,
        request: &SessionTokenRequest,
    ) -> anyhow::Result<IssuedToken> {
        let config = aws_config::defaults(BehaviorVersion::v2024_03_28())
            .profile_name(&request.profile_name)
            .region(Region::new(request.region_name.clone()))
            .load()
            .await;

        let client = aws_sdk_sts::Client::new(&config);
        let output = client
            .get_session_token()
            .duration_seconds(request.duration_seconds)
            .serial_number(&request.serial_number)
            .token_code(&request.token_code)
            .send()
            .await?;

        let creds = output
            .credentials
            .ok_or_else(|| anyhow::anyhow!("get-session-token didn't return a credential"))?;

        // ISO-8601 UTC, the format the STS wire carries.
        let expires_at = creds
            .expiration
            .fmt(Format::DateTime)
            .context("unreadable expiration timestamp")?;

        Ok(IssuedToken {
            access_key_id: creds.access_key_id,
            secret_access_key: creds.secret_access_key,
            session_token: creds.session_token,
            expires_at,
        })
    }
}
