use thiserror::Error;

/// Category and ingredient errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A relay global id that does not decode to `<TypeName>:<pk>`
    #[error("Invalid global id: {0}")]
    InvalidGlobalId(String),

    /// A connection cursor that does not decode to an edge offset
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// A global id that decodes to a different node type
    #[error("Expected a {expected} id, got {actual}")]
    WrongNodeType {
        /// Node type the field resolves
        expected: String,
        /// Node type encoded in the id
        actual: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl CatalogError {
    /// Check if this is a client error (bad input)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidGlobalId(_)
                | CatalogError::InvalidCursor(_)
                | CatalogError::WrongNodeType { .. }
        )
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::InvalidGlobalId(_)
            | CatalogError::InvalidCursor(_)
            | CatalogError::WrongNodeType { .. } => "BAD_REQUEST",
            CatalogError::Database(_) => "DATABASE_ERROR",
        }
    }
}
