use crate::token_store::TokenStore;
use crate::{ClientError, ClientResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// Token kept in a single file, written atomically (temp file, fsync, rename)
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }

    #[cfg(unix)]
    fn restrict_permissions(file: &fs::File) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
    }

    #[cfg(not(unix))]
    fn restrict_permissions(_file: &fs::File) -> std::io::Result<()> {
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::token_store(self.path.clone(), e)),
        }
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::token_store(parent.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| ClientError::token_store(temp_path.clone(), e))?;

            Self::restrict_permissions(&file)
                .map_err(|e| ClientError::token_store(temp_path.clone(), e))?;

            file.write_all(token.as_bytes())
                .map_err(|e| ClientError::token_store(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| ClientError::token_store(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ClientError::token_store(self.path.clone(), e)
        })?;

        debug!("Saved token to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed token at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::token_store(self.path.clone(), e)),
        }
    }
}
