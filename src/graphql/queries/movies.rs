use async_graphql::*;
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{Actor, Movie};

#[derive(Default)]
pub struct MovieQuery;

#[Object]
impl MovieQuery {
    /// Get an actor by ID
    async fn actor(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Actor>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let context = ctx.data::<GraphQLContext>()?;
        let actor = context
            .actor_service
            .find(id)
            .await
            .map_err(|e| StructuredError::database("actor", e))?;

        if actor.is_none() {
            debug!("Actor {} not found", id);
        }
        Ok(actor.map(Actor::from))
    }

    /// Get a movie by ID
    async fn movie(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Movie>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let context = ctx.data::<GraphQLContext>()?;
        let movie = context
            .movie_service
            .find(id)
            .await
            .map_err(|e| StructuredError::database("movie", e))?;

        if movie.is_none() {
            debug!("Movie {} not found", id);
        }
        Ok(movie.map(Movie::from))
    }

    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        let context = ctx.data::<GraphQLContext>()?;
        let actors = context
            .actor_service
            .list()
            .await
            .map_err(|e| StructuredError::database("actors", e))?;

        Ok(actors.into_iter().map(Actor::from).collect())
    }

    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;
        let movies = context
            .movie_service
            .list()
            .await
            .map_err(|e| StructuredError::database("movies", e))?;

        Ok(movies.into_iter().map(Movie::from).collect())
    }
}
