use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, warn};

use crate::database::entities::{actors, movie_actors, movies};
use crate::errors::{MovieError, MovieResult};

/// An actor as referenced from a movie request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRef {
    Id(i32),
    /// Reference without a usable integer id
    Invalid(String),
}

impl ActorRef {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(id) => ActorRef::Id(id),
                Err(_) => ActorRef::Invalid(raw.to_string()),
            },
            None => ActorRef::Invalid("<missing id>".to_string()),
        }
    }
}

/// Validated movie create/update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub actors: Vec<ActorRef>,
}

impl MovieDraft {
    pub fn from_parts(
        title: Option<String>,
        year: Option<i32>,
        actors: Option<Vec<ActorRef>>,
    ) -> MovieResult<Self> {
        let title = title.ok_or_else(|| MovieError::MissingField("title".to_string()))?;
        let year = year.ok_or_else(|| MovieError::MissingField("year".to_string()))?;

        Ok(Self {
            title,
            year,
            actors: actors.unwrap_or_default(),
        })
    }
}

pub struct MovieService {
    db: DatabaseConnection,
}

impl MovieService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, id: i32) -> MovieResult<Option<movies::Model>> {
        Ok(movies::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list(&self) -> MovieResult<Vec<movies::Model>> {
        Ok(movies::Entity::find().all(&self.db).await?)
    }

    /// Create a movie and attach exactly the referenced actors.
    ///
    /// Every actor is resolved before anything is written, and the movie row
    /// plus its association rows share one transaction.
    pub async fn create(&self, draft: MovieDraft) -> MovieResult<movies::Model> {
        let txn = self.db.begin().await?;

        let actor_ids = resolve_actors(&txn, &draft.actors).await?;

        let movie = movies::ActiveModel {
            title: Set(draft.title),
            year: Set(draft.year),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        replace_cast(&txn, movie.id, &actor_ids).await?;
        txn.commit().await?;

        debug!("Created movie {} with {} actors", movie.id, actor_ids.len());
        Ok(movie)
    }

    /// Overwrite title, year and the full actor set of an existing movie.
    pub async fn update(&self, id: i32, draft: MovieDraft) -> MovieResult<movies::Model> {
        let txn = self.db.begin().await?;

        let movie = movies::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(MovieError::NotFound(id))?;

        let actor_ids = resolve_actors(&txn, &draft.actors).await?;

        let mut movie: movies::ActiveModel = movie.into();
        movie.title = Set(draft.title);
        movie.year = Set(draft.year);
        let movie = movie.update(&txn).await?;

        replace_cast(&txn, movie.id, &actor_ids).await?;
        txn.commit().await?;

        debug!("Updated movie {} with {} actors", movie.id, actor_ids.len());
        Ok(movie)
    }

    pub async fn delete(&self, id: i32) -> MovieResult<()> {
        let movie = movies::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(MovieError::NotFound(id))?;

        movie.delete(&self.db).await?;
        Ok(())
    }

    pub async fn actors_for(&self, movie_id: i32) -> MovieResult<Vec<actors::Model>> {
        Ok(actors::Entity::find()
            .inner_join(movie_actors::Entity)
            .filter(movie_actors::Column::MovieId.eq(movie_id))
            .order_by_asc(actors::Column::Id)
            .all(&self.db)
            .await?)
    }
}

/// Resolve every reference to an existing actor id, failing on the first one
/// that cannot be resolved. Duplicates collapse.
async fn resolve_actors<C>(conn: &C, refs: &[ActorRef]) -> MovieResult<BTreeSet<i32>>
where
    C: ConnectionTrait,
{
    let mut wanted = BTreeSet::new();
    for actor_ref in refs {
        match actor_ref {
            ActorRef::Id(id) => {
                wanted.insert(*id);
            }
            ActorRef::Invalid(raw) => {
                warn!("Rejecting movie with invalid actor reference {:?}", raw);
                return Err(MovieError::InvalidActorReference(raw.clone()));
            }
        }
    }

    if wanted.is_empty() {
        return Ok(wanted);
    }

    let found: BTreeSet<i32> = actors::Entity::find()
        .filter(actors::Column::Id.is_in(wanted.iter().copied()))
        .all(conn)
        .await?
        .into_iter()
        .map(|actor| actor.id)
        .collect();

    if let Some(missing) = wanted.difference(&found).next() {
        warn!("Rejecting movie referencing unknown actor {}", missing);
        return Err(MovieError::ActorNotFound(*missing));
    }

    Ok(wanted)
}

async fn replace_cast<C>(conn: &C, movie_id: i32, actor_ids: &BTreeSet<i32>) -> MovieResult<()>
where
    C: ConnectionTrait,
{
    movie_actors::Entity::delete_many()
        .filter(movie_actors::Column::MovieId.eq(movie_id))
        .exec(conn)
        .await?;

    if actor_ids.is_empty() {
        return Ok(());
    }

    let rows = actor_ids.iter().map(|actor_id| movie_actors::ActiveModel {
        movie_id: Set(movie_id),
        actor_id: Set(*actor_id),
    });
    movie_actors::Entity::insert_many(rows).exec(conn).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use sea_orm::{DatabaseConnection, PaginatorTrait};

    async fn create_actor(db: &DatabaseConnection, name: &str) -> actors::Model {
        actors::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    fn draft(title: &str, year: i32, actors: Vec<ActorRef>) -> MovieDraft {
        MovieDraft {
            title: title.to_string(),
            year,
            actors,
        }
    }

    fn names(actors: Vec<actors::Model>) -> BTreeSet<String> {
        actors.into_iter().map(|a| a.name).collect()
    }

    #[test]
    fn test_actor_ref_parse() {
        assert_eq!(ActorRef::parse(Some("12")), ActorRef::Id(12));
        assert_eq!(
            ActorRef::parse(Some("twelve")),
            ActorRef::Invalid("twelve".to_string())
        );
        assert!(matches!(ActorRef::parse(None), ActorRef::Invalid(_)));
    }

    #[test]
    fn test_draft_requires_title_and_year() {
        let err = MovieDraft::from_parts(None, Some(1999), None).unwrap_err();
        assert!(matches!(err, MovieError::MissingField(ref f) if f == "title"));

        let err = MovieDraft::from_parts(Some("Heat".to_string()), None, None).unwrap_err();
        assert!(matches!(err, MovieError::MissingField(ref f) if f == "year"));

        let ok = MovieDraft::from_parts(Some("Heat".to_string()), Some(1995), None).unwrap();
        assert!(ok.actors.is_empty());
    }

    #[tokio::test]
    async fn test_create_movie_attaches_exact_cast() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let hanks = create_actor(&db, "Tom Hanks").await;
        let ryan = create_actor(&db, "Meg Ryan").await;

        let movie = service
            .create(draft(
                "Sleepless in Seattle",
                1993,
                vec![
                    ActorRef::Id(ryan.id),
                    ActorRef::Id(hanks.id),
                    ActorRef::Id(ryan.id),
                ],
            ))
            .await
            .unwrap();

        let cast = names(service.actors_for(movie.id).await.unwrap());
        assert_eq!(
            cast,
            BTreeSet::from(["Meg Ryan".to_string(), "Tom Hanks".to_string()])
        );
    }

    #[tokio::test]
    async fn test_create_movie_with_unknown_actor_writes_nothing() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let hanks = create_actor(&db, "Tom Hanks").await;

        let err = service
            .create(draft(
                "Big",
                1988,
                vec![ActorRef::Id(hanks.id), ActorRef::Id(hanks.id + 100)],
            ))
            .await
            .unwrap_err();

        assert!(err.is_referential());
        assert_eq!(movies::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(movie_actors::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_movie_with_invalid_reference_writes_nothing() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());

        let err = service
            .create(draft(
                "Big",
                1988,
                vec![ActorRef::Invalid("abc".to_string())],
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, MovieError::InvalidActorReference(_)));
        assert_eq!(movies::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_movie_replaces_cast() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let a = create_actor(&db, "Helen Hunt").await;
        let b = create_actor(&db, "Bill Paxton").await;

        let movie = service
            .create(draft("Twister", 1995, vec![ActorRef::Id(a.id)]))
            .await
            .unwrap();
        let updated = service
            .update(movie.id, draft("Twister", 1996, vec![ActorRef::Id(b.id)]))
            .await
            .unwrap();

        assert_eq!(updated.year, 1996);
        let cast = names(service.actors_for(updated.id).await.unwrap());
        assert_eq!(cast, BTreeSet::from(["Bill Paxton".to_string()]));
    }

    #[tokio::test]
    async fn test_update_with_unknown_actor_keeps_previous_state() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let a = create_actor(&db, "Helen Hunt").await;

        let movie = service
            .create(draft("Twister", 1996, vec![ActorRef::Id(a.id)]))
            .await
            .unwrap();
        let err = service
            .update(movie.id, draft("Renamed", 2000, vec![ActorRef::Id(777)]))
            .await
            .unwrap_err();
        assert!(matches!(err, MovieError::ActorNotFound(777)));

        let stored = service.find(movie.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Twister");
        let cast = names(service.actors_for(stored.id).await.unwrap());
        assert_eq!(cast, BTreeSet::from(["Helen Hunt".to_string()]));
    }

    #[tokio::test]
    async fn test_update_missing_movie() {
        let db = setup_test_db().await;
        let service = MovieService::new(db);

        let err = service
            .update(5, draft("Ghost", 1990, vec![]))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_movie() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let a = create_actor(&db, "Tom Hanks").await;

        let movie = service
            .create(draft("Big", 1988, vec![ActorRef::Id(a.id)]))
            .await
            .unwrap();
        service.delete(movie.id).await.unwrap();

        assert!(service.find(movie.id).await.unwrap().is_none());
        assert_eq!(movie_actors::Entity::find().count(&db).await.unwrap(), 0);
        // the actor outlives the movie
        assert!(actors::Entity::find_by_id(a.id)
            .one(&db)
            .await
            .unwrap()
            .is_some());

        let err = service.delete(movie.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
