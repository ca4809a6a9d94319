//! Token persistence.
//!
//! The durable store mirrors what the browser client kept in localStorage:
//! a single bearer token, set on login and removed on logout or 401.

use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::error::{ApiError, ApiResult};

const CREDENTIALS_DIR: &str = ".optibots";
const CREDENTIALS_FILE_NAME: &str = "credentials";

pub trait TokenStore: Send + Sync {
    /// Currently stored token, if any. Empty tokens are treated as absent.
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// File-backed store at `~/.optibots/credentials` (or an explicit path).
/// Directory and file are chmod'd to owner-only on unix.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> ApiResult<PathBuf> {
        dirs::home_dir()
            .map(|h| h.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE_NAME))
            .ok_or_else(|| {
                ApiError::Store("home directory not found, cannot store credentials".into())
            })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    fn store(&self, token: &str) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ApiError::Store(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        fs::write(&self.path, token)
            .map_err(|e| ApiError::Store(format!("write {}: {e}", self.path.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", self.path.display());
            }
        }
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| ApiError::Store(format!("remove {}: {e}", self.path.display())))?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral (env-token) sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().clone().filter(|t| !t.is_empty())
    }

    fn store(&self, token: &str) -> ApiResult<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        *self.token.lock() = None;
        Ok(())
    }
}
