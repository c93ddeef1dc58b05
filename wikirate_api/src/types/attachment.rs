use std::path::{Path, PathBuf};

use crate::Error;

/// A file sent as one part of a multipart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// Form field the file is sent under.
    pub field: String,
    /// Local path of the file.
    pub path: PathBuf,
    /// File name reported to the server. Defaults to the path's file name.
    pub file_name: Option<String>,
}

impl Attachment {
    pub fn new(field: &str, path: impl AsRef<Path>) -> Self {
        Self {
            field: field.to_string(),
            path: path.as_ref().to_path_buf(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Reads the whole file. The handle is closed before this returns,
    /// whether or not the read succeeded.
    pub(crate) async fn read(&self) -> Result<(String, Vec<u8>), Error> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!("Failed to read attachment {}: {}", self.path.display(), e);
            Error::client_with_source(
                format!("Failed to read file {}", self.path.display()),
                e,
            )
        })?;
        let file_name = self.file_name.clone().unwrap_or_else(|| {
            self.path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string())
        });
        Ok((file_name, bytes))
    }
}
