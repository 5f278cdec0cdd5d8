//! Attachment download with a local save.
//!
//! ERROR HANDLING
//! ==============
//! Both the remote fetch and the local write are logged on failure and the
//! error is returned to the caller unchanged.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use std::path::{Path, PathBuf};

use reqwest::Method;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;

/// Fetch `GET /file/{id}` and save it as `dest_dir/<file_name>`.
///
/// Only the last component of `file_name` is used, so the file always lands
/// directly inside `dest_dir`.
///
/// # Errors
///
/// Propagates API failures; local write failures are
/// [`ApiError::SaveFile`].
pub async fn download(api: &ApiClient, file_id: i64, file_name: &str, dest_dir: &Path) -> Result<PathBuf, ApiError> {
    let result = fetch_and_save(api, file_id, file_name, dest_dir).await;
    if let Err(err) = &result {
        tracing::error!(file_id, error = %err, "파일 다운로드 실패");
    }
    result
}

async fn fetch_and_save(api: &ApiClient, file_id: i64, file_name: &str, dest_dir: &Path) -> Result<PathBuf, ApiError> {
    let bytes = api
        .send_bytes(api.request(Method::GET, &format!("/file/{file_id}")))
        .await?;
    let path = dest_dir.join(save_name(file_id, file_name));
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| ApiError::SaveFile { path: path.clone(), source })?;
    tracing::info!(file_id, path = %path.display(), bytes = bytes.len(), "file saved");
    Ok(path)
}

fn save_name(file_id: i64, file_name: &str) -> String {
    Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map_or_else(|| format!("file-{file_id}"), str::to_owned)
}
