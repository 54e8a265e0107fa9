//! File store endpoints

use crewdeck_core::dto::file::{FileDescriptor, FileList};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::info;

use crate::BackendClient;
use crate::error::Result;

impl BackendClient {
    // =============================================================================
    // File Store
    // =============================================================================

    /// List files known to the file store
    pub async fn list_files(&self) -> Result<Vec<FileDescriptor>> {
        let url = self.url("/files");
        let response = self.client.get(&url).send().await?;
        let list: FileList = self.handle_response(response).await?;

        Ok(list.files)
    }

    /// Upload a local file to the file store
    ///
    /// The file is sent as the multipart field `file`.
    pub async fn upload_file(&self, path: &Path) -> Result<()> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let size = bytes.len();
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.clone()));

        let url = self.url("/upload");
        let response = self.client.post(&url).multipart(form).send().await?;
        self.handle_empty_response(response).await?;

        info!(file = %file_name, bytes = size, "file uploaded");

        Ok(())
    }
}
