//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binaries can prepare the upload
//! directory through `service::runtime::ensure_env` without depending on `common`.

/// Ensure the upload directory exists before serving.
pub async fn ensure_env(upload_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(upload_dir).await
}
