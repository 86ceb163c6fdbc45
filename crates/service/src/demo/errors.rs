use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DemoError {
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("{resource} record {id} not found")]
    NotFound { resource: &'static str, id: String },
    #[error("invalid credentials")]
    Unauthorized,
}
