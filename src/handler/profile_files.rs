use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ini::Ini;
use thiserror::Error;
use tracing::info;

use crate::credentials::SessionCredential;
use crate::handler::HandleCredentials;

pub const CREDENTIALS_FILE: &str = "credentials";
pub const CREDENTIALS_BACKUP_FILE: &str = "credentials.bak";
pub const CONFIG_FILE: &str = "config";

const DEFAULT_SECTION: &str = "default";

/// A profile file lacks the section the writer must mutate.
#[derive(Debug, Error)]
#[error("no `[{section}]` section in {}", .path.display())]
pub struct MissingSection {
    pub section: String,
    pub path: PathBuf,
}

/// Installs the session as the `default` profile of `<aws_dir>/credentials`
/// and sets the region in `<aws_dir>/config`, backing up the credentials
/// file first. Sequential, no rollback.
pub struct ProfileFilesHandler;

impl HandleCredentials for ProfileFilesHandler {
    fn handle_credentials(&self, credential: &SessionCredential) -> Result<()> {
        update_credentials(credential)?;
        update_config(credential)?;
        Ok(())
    }
}

fn update_credentials(credential: &SessionCredential) -> Result<()> {
    info!("Updating credentials...");

    let path = credential.aws_dir.join(CREDENTIALS_FILE);
    let backup_path = credential.aws_dir.join(CREDENTIALS_BACKUP_FILE);

    // Back up before any mutation. A failed copy aborts the stage with
    // both files still untouched.
    fs::copy(&path, &backup_path).with_context(|| {
        format!(
            "failed to back up {} to {}",
            path.display(),
            backup_path.display()
        )
    })?;

    let mut creds = Ini::load_from_file(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // Full replacement: keys from the previous default session must not
    // survive.
    creds.delete(Some(DEFAULT_SECTION));
    creds
        .with_section(Some(DEFAULT_SECTION))
        .set("aws_access_key_id", &credential.access_key_id)
        .set("aws_secret_access_key", &credential.secret_access_key)
        .set("aws_session_token", &credential.session_token)
        .set("expires_at", &credential.expires_at);

    creds
        .write_to_file(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    restrict_permissions(&path)?;

    Ok(())
}

fn update_config(credential: &SessionCredential) -> Result<()> {
    info!("Updating config...");

    let path = credential.aws_dir.join(CONFIG_FILE);
    let mut config = Ini::load_from_file(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let section = config
        .section_mut(Some(DEFAULT_SECTION))
        .ok_or_else(|| MissingSection {
            section: DEFAULT_SECTION.to_string(),
            path: path.clone(),
        })?;
    section.insert("region", credential.region.as_str());

    config
        .write_to_file(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o600);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
