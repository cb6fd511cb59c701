//! Common error utilities and GraphQL conversion
//!
//! # Examples
//!
//! ```rust
//! use cookbook::errors::ActorError;
//! use cookbook::errors::common::ToGraphQLError;
//!
//! let err = ActorError::MissingField("name".to_string());
//! let graphql_err = err.to_graphql_error();
//! assert!(graphql_err.message.contains("name"));
//! ```

#[cfg(feature = "graphql")]
use async_graphql::{Error as GraphQLError, ErrorExtensions};

#[cfg(feature = "graphql")]
use super::*;

/// Convert domain errors to GraphQL errors with error codes
#[cfg(feature = "graphql")]
pub trait ToGraphQLError {
    /// Convert to GraphQL error with structured extensions
    fn to_graphql_error(&self) -> GraphQLError;
}

#[cfg(feature = "graphql")]
impl ToGraphQLError for ActorError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            if let ActorError::MissingField(field) = self {
                e.set("field", field.clone());
            }
        })
    }
}

#[cfg(feature = "graphql")]
impl ToGraphQLError for MovieError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            if let MovieError::MissingField(field) = self {
                e.set("field", field.clone());
            }
        })
    }
}

#[cfg(feature = "graphql")]
impl ToGraphQLError for CatalogError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            if let CatalogError::WrongNodeType { expected, actual } = self {
                e.set("expected", expected.clone());
                e.set("actual", actual.clone());
            }
        })
    }
}

#[cfg(all(test, feature = "graphql"))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = MovieError::MissingField("year".to_string()).to_graphql_error();
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_FAILED"))
        );
        assert_eq!(
            extensions.get("field"),
            Some(&async_graphql::Value::from("year"))
        );

        let err = ActorError::MissingField("name".to_string()).to_graphql_error();
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("field"),
            Some(&async_graphql::Value::from("name"))
        );
    }

    #[test]
    fn test_other_errors_carry_only_the_code() {
        let err = MovieError::ActorNotFound(5).to_graphql_error();
        assert_eq!(err.message, "Actor 5 referenced by movie not found");
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("ACTOR_NOT_FOUND"))
        );
        assert_eq!(extensions.get("actorId"), None);

        let err = ActorError::NotFound(3).to_graphql_error();
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
        assert_eq!(extensions.get("actorId"), None);
    }

    #[test]
    fn test_catalog_error_carries_code() {
        let err = CatalogError::InvalidGlobalId("zz".to_string()).to_graphql_error();
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("BAD_REQUEST"))
        );
    }
}
