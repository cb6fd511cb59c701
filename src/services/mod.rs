pub mod actor_service;
pub mod catalog_service;
pub mod movie_service;

pub use actor_service::*;
pub use catalog_service::*;
pub use movie_service::*;
