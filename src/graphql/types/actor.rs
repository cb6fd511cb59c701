use async_graphql::*;

use crate::database::entities::actors;
use crate::errors::ActorResult;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Movie;
use crate::services::NewActor;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Actor {
    pub id: i32,
    pub name: String,
}

impl From<actors::Model> for Actor {
    fn from(model: actors::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[ComplexObject]
impl Actor {
    /// Movies this actor appears in
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;
        let movies = context
            .actor_service
            .movies_for(self.id)
            .await
            .map_err(|e| StructuredError::database("Actor.movies", e))?;

        Ok(movies.into_iter().map(Movie::from).collect())
    }
}

/// Actor fields as sent by clients. Also used to reference an actor from a movie.
#[derive(InputObject, Clone, Debug, Default)]
pub struct ActorInput {
    pub id: Option<ID>,
    pub name: Option<String>,
}

impl ActorInput {
    pub fn into_request(self) -> ActorResult<NewActor> {
        NewActor::from_parts(self.name)
    }
}

#[derive(SimpleObject, Debug)]
pub struct ActorPayload {
    pub ok: bool,
    pub actor: Option<Actor>,
}

impl ActorPayload {
    pub fn success(actor: Actor) -> Self {
        Self {
            ok: true,
            actor: Some(actor),
        }
    }

    pub fn failure() -> Self {
        Self {
            ok: false,
            actor: None,
        }
    }
}
