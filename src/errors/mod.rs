//! Domain-specific error types for the cookbook service
//!
//! Each domain gets its own `thiserror` enum so resolvers can tell the
//! outcomes apart: a lookup that found nothing, a reference to a record
//! that does not exist, bad input, or a store failure.
//!
//! # Error Categories
//!
//! - **ActorError**: Actor create/update
//! - **MovieError**: Movie create/update/delete and actor resolution
//! - **CatalogError**: Category and ingredient lookups and filtered listings
//!
//! # GraphQL Integration
//!
//! When the `graphql` feature is enabled, error types can be converted to GraphQL errors
//! with a structured `code` extension using the `ToGraphQLError` trait.
//!
//! # Examples
//!
//! ```rust
//! use cookbook::errors::MovieError;
//!
//! let err = MovieError::ActorNotFound(7);
//! assert!(err.is_referential());
//! assert_eq!(err.error_code(), "ACTOR_NOT_FOUND");
//! ```

pub mod actor;
pub mod catalog;
pub mod common;
pub mod movie;

pub use actor::ActorError;
pub use catalog::CatalogError;
pub use movie::MovieError;

#[cfg(feature = "graphql")]
pub use common::ToGraphQLError;

/// Result type alias for actor operations
pub type ActorResult<T> = Result<T, ActorError>;

/// Result type alias for movie operations
pub type MovieResult<T> = Result<T, MovieError>;

/// Result type alias for category/ingredient operations
pub type CatalogResult<T> = Result<T, CatalogError>;
