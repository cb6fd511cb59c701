//! GraphQL CRUD service over a small cookbook (categories, ingredients)
//! and film catalogue (actors, movies) stored in SQLite.

#[cfg(feature = "server")]
pub mod database;
#[cfg(feature = "server")]
pub mod errors;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "graphql")]
pub mod graphql;
