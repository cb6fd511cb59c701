use async_graphql::*;

use crate::database::entities::movies;
use crate::errors::MovieResult;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{Actor, ActorInput};
use crate::services::{ActorRef, MovieDraft};

pub const DELETE_SUCCESS_MESSAGE: &str = "Successfully deleted";
// Spelling is part of the client contract
pub const DELETE_FAILURE_MESSAGE: &str = "An error occured while deleting movie";

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: i32,
}

impl From<movies::Model> for Movie {
    fn from(model: movies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            year: model.year,
        }
    }
}

#[ComplexObject]
impl Movie {
    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        let context = ctx.data::<GraphQLContext>()?;
        let actors = context
            .movie_service
            .actors_for(self.id)
            .await
            .map_err(|e| StructuredError::database("Movie.actors", e))?;

        Ok(actors.into_iter().map(Actor::from).collect())
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct MovieInput {
    pub id: Option<ID>,
    pub title: Option<String>,
    pub actors: Option<Vec<ActorInput>>,
    pub year: Option<i32>,
}

impl MovieInput {
    /// Validate into a draft. Only the `id` of each referenced actor is read.
    pub fn into_draft(self) -> MovieResult<MovieDraft> {
        let actors = self.actors.map(|actors| {
            actors
                .iter()
                .map(|actor| ActorRef::parse(actor.id.as_ref().map(|id| id.as_str())))
                .collect()
        });

        MovieDraft::from_parts(self.title, self.year, actors)
    }
}

#[derive(SimpleObject, Debug)]
pub struct MoviePayload {
    pub ok: bool,
    pub movie: Option<Movie>,
}

impl MoviePayload {
    pub fn success(movie: Movie) -> Self {
        Self {
            ok: true,
            movie: Some(movie),
        }
    }

    pub fn failure() -> Self {
        Self {
            ok: false,
            movie: None,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct DeleteMoviePayload {
    pub ok: bool,
    pub response: String,
}
