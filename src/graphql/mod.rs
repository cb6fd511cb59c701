#[cfg(feature = "graphql")]
pub mod context;
#[cfg(feature = "graphql")]
pub mod errors;
#[cfg(feature = "graphql")]
pub mod mutations;
#[cfg(feature = "graphql")]
pub mod queries;
#[cfg(feature = "graphql")]
pub mod schema;
#[cfg(feature = "graphql")]
pub mod types;

#[cfg(feature = "graphql")]
pub use context::*;
#[cfg(feature = "graphql")]
pub use schema::*;
