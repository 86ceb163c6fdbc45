use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        use models::errors::ModelError;
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Conflict(msg) => ServiceError::Conflict(msg),
            other => ServiceError::Model(other),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

/// Parse a path identifier. Anything that is not a uuid cannot name a row,
/// so it is reported as a missing `entity`.
pub fn parse_id(raw: &str, entity: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::not_found(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ids_are_not_found() {
        match parse_id("not-a-uuid", "Article") {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "Article not found"),
            other => panic!("unexpected: {:?}", other),
        }
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Article").unwrap(), id);
    }

    #[test]
    fn model_validation_maps_to_validation() {
        let err: ServiceError = models::errors::ModelError::Validation("pageId required".into()).into();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
