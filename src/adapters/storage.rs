use crate::core::UploadStore;
use crate::utils::error::{IntakeError, Result};
use std::path::Path;

/// Reads uploads from a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl UploadStore for LocalStorage {
    async fn read_upload(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);

        match tokio::fs::read(&full_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(IntakeError::MissingUpload {
                path: full_path.display().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
