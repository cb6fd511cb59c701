use async_graphql::*;

/// Structured error builder for failures that are not tied to a domain enum
pub struct StructuredError;

impl StructuredError {
    /// Create a "database error"
    pub fn database(operation: &str, cause: impl std::fmt::Display) -> Error {
        Error::new(format!("Database error during {}: {}", operation, cause)).extend_with(|_, e| {
            e.set("code", "DATABASE_ERROR");
            e.set("operation", operation);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error() {
        let error = StructuredError::database("createMovie", "disk I/O error");
        assert!(error.message.contains("createMovie"));
        assert!(error.message.contains("disk I/O error"));
        let extensions = error.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&Value::from("DATABASE_ERROR"))
        );
    }
}
