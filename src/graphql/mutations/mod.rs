use async_graphql::*;

pub mod actor;
pub mod movie;

pub use actor::ActorMutation;
pub use movie::MovieMutation;

#[derive(MergedObject, Default)]
pub struct Mutation(ActorMutation, MovieMutation);
