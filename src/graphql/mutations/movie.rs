use async_graphql::*;
use tracing::{info, warn};

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{
    DeleteMoviePayload, Movie, MovieInput, MoviePayload, DELETE_FAILURE_MESSAGE,
    DELETE_SUCCESS_MESSAGE,
};

#[derive(Default)]
pub struct MovieMutation;

#[Object]
impl MovieMutation {
    /// Create a movie with exactly the referenced actors.
    ///
    /// If any actor reference cannot be resolved nothing is written and the
    /// payload carries `ok: false`.
    async fn create_movie(&self, ctx: &Context<'_>, input: MovieInput) -> Result<MoviePayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let draft = input.into_draft().map_err(|e| e.to_graphql_error())?;

        match context.movie_service.create(draft).await {
            Ok(movie) => {
                info!("Created movie {} ({})", movie.id, movie.title);
                Ok(MoviePayload::success(Movie::from(movie)))
            }
            Err(err) if err.is_referential() => {
                warn!("createMovie: {}", err);
                Ok(MoviePayload::failure())
            }
            Err(err) => Err(StructuredError::database("createMovie", err)),
        }
    }

    /// Overwrite title, year and cast. The new cast replaces the old one.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: MovieInput,
    ) -> Result<MoviePayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let draft = input.into_draft().map_err(|e| e.to_graphql_error())?;

        match context.movie_service.update(id, draft).await {
            Ok(movie) => {
                info!("Updated movie {}", movie.id);
                Ok(MoviePayload::success(Movie::from(movie)))
            }
            Err(err) if err.is_not_found() || err.is_referential() => {
                warn!("updateMovie: {}", err);
                Ok(MoviePayload::failure())
            }
            Err(err) => Err(StructuredError::database("updateMovie", err)),
        }
    }

    async fn delete_movie(&self, ctx: &Context<'_>, id: i32) -> Result<DeleteMoviePayload> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.movie_service.delete(id).await {
            Ok(()) => {
                info!("Deleted movie {}", id);
                Ok(DeleteMoviePayload {
                    ok: true,
                    response: DELETE_SUCCESS_MESSAGE.to_string(),
                })
            }
            Err(err) if err.is_not_found() => {
                warn!("deleteMovie: {}", err);
                Ok(DeleteMoviePayload {
                    ok: false,
                    response: DELETE_FAILURE_MESSAGE.to_string(),
                })
            }
            Err(err) => Err(StructuredError::database("deleteMovie", err)),
        }
    }
}
