pub mod actors;
pub mod categories;
pub mod ingredients;
pub mod movie_actors;
pub mod movies;
