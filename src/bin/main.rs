use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use aws_mfa_session::error::Error;
use aws_mfa_session::handler::profile_files::ProfileFilesHandler;
use aws_mfa_session::options::Args;
use aws_mfa_session::run::MfaSession;
use aws_mfa_session::session_token::aws_sdk::AwsSdkTokenIssuer;

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let session = MfaSession::new(AwsSdkTokenIssuer, ProfileFilesHandler);
    if let Err(err) = session.run(args).await {
        report(&err);
        std::process::exit(err.exit_code());
    }
}

fn report(err: &Error) {
    use std::error::Error as _;

    error!("{}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        error!("caused by: {}", cause);
        source = cause.source();
    }
}
