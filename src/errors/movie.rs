//! Movie error types
//!
//! Movie mutations can fail in two ways that are reported back to the
//! client as `ok: false` rather than as GraphQL errors: the movie itself
//! is missing, or one of the actors it references cannot be resolved.

use thiserror::Error;

/// Movie operation errors
#[derive(Error, Debug)]
pub enum MovieError {
    /// Movie not found by ID
    #[error("Movie {0} not found")]
    NotFound(i32),

    /// A referenced actor does not exist
    #[error("Actor {0} referenced by movie not found")]
    ActorNotFound(i32),

    /// An actor reference that is missing or not an integer id
    #[error("Invalid actor reference: {0}")]
    InvalidActorReference(String),

    /// Required input field was not supplied
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl MovieError {
    /// Check if this is a not found error for the movie itself
    pub fn is_not_found(&self) -> bool {
        matches!(self, MovieError::NotFound(_))
    }

    /// Check if the movie referenced an actor that could not be resolved
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            MovieError::ActorNotFound(_) | MovieError::InvalidActorReference(_)
        )
    }

    /// Check if this is a client error (bad input)
    pub fn is_client_error(&self) -> bool {
        matches!(self, MovieError::MissingField(_))
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            MovieError::NotFound(_) => "NOT_FOUND",
            MovieError::ActorNotFound(_) | MovieError::InvalidActorReference(_) => {
                "ACTOR_NOT_FOUND"
            }
            MovieError::MissingField(_) => "VALIDATION_FAILED",
            MovieError::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_not_found() {
        let err = MovieError::NotFound(42);
        assert_eq!(err.to_string(), "Movie 42 not found");
        assert!(err.is_not_found());
        assert!(!err.is_referential());
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_actor_reference_errors_are_referential() {
        assert!(MovieError::ActorNotFound(9).is_referential());
        assert!(MovieError::InvalidActorReference("abc".to_string()).is_referential());
        assert_eq!(
            MovieError::InvalidActorReference("abc".to_string()).to_string(),
            "Invalid actor reference: abc"
        );
    }

    #[test]
    fn test_missing_field() {
        let err = MovieError::MissingField("title".to_string());
        assert!(err.is_client_error());
        assert!(!err.is_not_found());
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }
}
