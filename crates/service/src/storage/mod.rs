//! Storage abstractions for service layer
//!
//! Uploaded file bytes live on the local filesystem, outside the database.

pub mod upload_store;

pub use upload_store::{StoredFile, UploadStore};
