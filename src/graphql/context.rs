use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::{ActorService, CatalogService, MovieService};

#[derive(Clone)]
pub struct GraphQLContext {
    pub db: DatabaseConnection,
    pub actor_service: Arc<ActorService>,
    pub movie_service: Arc<MovieService>,
    pub catalog_service: Arc<CatalogService>,
}

impl GraphQLContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            actor_service: Arc::new(ActorService::new(db.clone())),
            movie_service: Arc::new(MovieService::new(db.clone())),
            catalog_service: Arc::new(CatalogService::new(db.clone())),
            db,
        }
    }
}
