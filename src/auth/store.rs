//! Access token file I/O

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{RcError, Result};

/// Access token plus the endpoint it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    pub api_endpoint: String,
}

/// Reads and writes the two-line token file
pub struct TokenStore {
    token_path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Create a store using the default path (./access_token.txt)
    pub fn new() -> Self {
        Self {
            token_path: PathBuf::from(credentials::FILE_NAME),
        }
    }

    /// Create a store with a custom token path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { token_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.token_path
    }

    /// Whether a token file is present
    pub fn exists(&self) -> bool {
        self.token_path.exists()
    }

    /// Load the stored credential.
    ///
    /// A missing file is [`RcError::NotAuthorized`]. An empty endpoint line
    /// falls back to `default_endpoint`.
    pub fn load(&self, default_endpoint: &str) -> Result<Credential> {
        if !self.exists() {
            return Err(RcError::NotAuthorized(not_authorized_message()));
        }

        let content = fs::read_to_string(&self.token_path).map_err(|e| {
            RcError::Credentials(format!(
                "Failed to read token file {}: {}",
                self.token_path.display(),
                e
            ))
        })?;

        let mut lines = content.lines();
        let access_token = lines.next().unwrap_or_default().trim().to_string();
        let api_endpoint = lines.next().unwrap_or_default().trim().to_string();

        if access_token.is_empty() {
            return Err(RcError::Credentials(format!(
                "Token file {} is malformed: first line must hold the access token. {}",
                self.token_path.display(),
                not_authorized_message()
            )));
        }

        let api_endpoint = if api_endpoint.is_empty() {
            debug!("No endpoint stored, using {}", default_endpoint);
            default_endpoint.to_string()
        } else {
            api_endpoint
        };

        debug!("Loaded access token from {}", self.token_path.display());
        Ok(Credential {
            access_token,
            api_endpoint,
        })
    }

    /// Save the credential, replacing any previous one.
    /// Does nothing for an empty token. Uses atomic write (tmp file + rename).
    pub fn save(&self, credential: &Credential) -> Result<()> {
        let token = credential.access_token.trim();
        if token.is_empty() {
            debug!("Empty access token, nothing saved");
            return Ok(());
        }

        let content = format!("{}\n{}", token, credential.api_endpoint);

        let tmp_path = self.token_path.with_extension("txt.tmp");
        fs::write(&tmp_path, &content).map_err(|e| {
            RcError::Credentials(format!(
                "Failed to write temp token file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Set 0600 permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                RcError::Credentials(format!("Failed to set permissions on token file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.token_path).map_err(|e| {
            RcError::Credentials(format!(
                "Failed to rename temp token file to {}: {}",
                self.token_path.display(),
                e
            ))
        })?;

        debug!("Saved access token to {}", self.token_path.display());
        Ok(())
    }
}

/// Instruction shown when no token has been stored yet
fn not_authorized_message() -> String {
    "You must first call \"rcctl authorize --client-id=YOUR_CLIENT_ID\" \
     in order to get an access code."
        .to_string()
}
