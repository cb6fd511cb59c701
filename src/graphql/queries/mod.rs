use async_graphql::*;

pub mod ingredients;
pub mod movies;

pub use ingredients::IngredientQuery;
pub use movies::MovieQuery;

#[derive(MergedObject, Default)]
pub struct Query(MovieQuery, IngredientQuery);
