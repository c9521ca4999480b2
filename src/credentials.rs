use std::path::PathBuf;

/// A freshly minted session, combined with the invocation context the
/// profile writer needs. Produced by the token requester, consumed exactly
/// once by the writer.
#[derive(Debug, Clone)]
pub struct SessionCredential {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    /// Expiration timestamp, verbatim as formatted from the identity
    /// service response. Never reformatted downstream.
    pub expires_at: String,
    pub region: String,
    pub aws_dir: PathBuf,
}
