use crate::domain::ports::Storage;
use crate::utils::error::{Result, ToolError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        let data = fs::read_to_string(self.full_path(path))?;
        Ok(data)
    }

    fn write_string(&self, path: &str, contents: &str) -> Result<()> {
        let full_path = self.full_path(path);
        let dir = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&dir)?;

        // Write next to the target, then rename over it.
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        match fs::metadata(&full_path) {
            Ok(metadata) => tmp.as_file().set_permissions(metadata.permissions())?,
            Err(_) => set_new_file_permissions(tmp.as_file())?,
        }
        tmp.persist(&full_path)
            .map_err(|e| ToolError::IoError(e.error))?;

        tracing::debug!("Wrote {} bytes to {}", contents.len(), full_path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn set_new_file_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
