use async_graphql::*;
use tracing::{info, warn};

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{Actor, ActorInput, ActorPayload};

#[derive(Default)]
pub struct ActorMutation;

#[Object]
impl ActorMutation {
    /// Create a new actor
    async fn create_actor(&self, ctx: &Context<'_>, input: ActorInput) -> Result<ActorPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let request = input.into_request().map_err(|e| e.to_graphql_error())?;

        let actor = context
            .actor_service
            .create(request)
            .await
            .map_err(|e| StructuredError::database("createActor", e))?;

        info!("Created actor {} ({})", actor.id, actor.name);
        Ok(ActorPayload::success(Actor::from(actor)))
    }

    /// Rename an existing actor. An unknown id yields `ok: false`.
    async fn update_actor(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: ActorInput,
    ) -> Result<ActorPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let request = input.into_request().map_err(|e| e.to_graphql_error())?;

        match context.actor_service.update(id, request).await {
            Ok(actor) => {
                info!("Updated actor {}", actor.id);
                Ok(ActorPayload::success(Actor::from(actor)))
            }
            Err(err) if err.is_not_found() => {
                warn!("updateActor: {}", err);
                Ok(ActorPayload::failure())
            }
            Err(err) => Err(StructuredError::database("updateActor", err)),
        }
    }
}
