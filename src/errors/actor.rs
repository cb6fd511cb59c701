use thiserror::Error;

/// Actor operation errors
#[derive(Error, Debug)]
pub enum ActorError {
    /// Actor not found by ID
    #[error("Actor {0} not found")]
    NotFound(i32),

    /// Required input field was not supplied
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ActorError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ActorError::NotFound(_))
    }

    /// Check if this is a client error (bad input)
    pub fn is_client_error(&self) -> bool {
        matches!(self, ActorError::MissingField(_))
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ActorError::NotFound(_) => "NOT_FOUND",
            ActorError::MissingField(_) => "VALIDATION_FAILED",
            ActorError::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_not_found() {
        let err = ActorError::NotFound(3);
        assert_eq!(err.to_string(), "Actor 3 not found");
        assert!(err.is_not_found());
        assert!(!err.is_client_error());
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_missing_field() {
        let err = ActorError::MissingField("name".to_string());
        assert_eq!(err.to_string(), "Missing required field: name");
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }

    #[test]
    fn test_database_error_from_db_err() {
        let err: ActorError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert!(err.to_string().contains("boom"));
    }
}
