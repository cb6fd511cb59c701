use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::debug;

use crate::database::entities::{actors, movie_actors, movies};
use crate::errors::{ActorError, ActorResult};

/// Validated actor create/update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActor {
    pub name: String,
}

impl NewActor {
    /// Build from an optional wire value; the name is required.
    pub fn from_parts(name: Option<String>) -> ActorResult<Self> {
        match name {
            Some(name) => Ok(Self { name }),
            None => Err(ActorError::MissingField("name".to_string())),
        }
    }
}

pub struct ActorService {
    db: DatabaseConnection,
}

impl ActorService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, id: i32) -> ActorResult<Option<actors::Model>> {
        Ok(actors::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list(&self) -> ActorResult<Vec<actors::Model>> {
        Ok(actors::Entity::find().all(&self.db).await?)
    }

    pub async fn create(&self, request: NewActor) -> ActorResult<actors::Model> {
        let actor = actors::ActiveModel {
            name: Set(request.name),
            ..Default::default()
        };

        let actor = actor.insert(&self.db).await?;
        debug!("Created actor {}", actor.id);
        Ok(actor)
    }

    /// Rename an existing actor. A missing id is reported as `ActorError::NotFound`.
    pub async fn update(&self, id: i32, request: NewActor) -> ActorResult<actors::Model> {
        let actor = actors::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ActorError::NotFound(id))?;

        let mut actor: actors::ActiveModel = actor.into();
        actor.name = Set(request.name);

        Ok(actor.update(&self.db).await?)
    }

    /// Movies the actor appears in
    pub async fn movies_for(&self, actor_id: i32) -> ActorResult<Vec<movies::Model>> {
        Ok(movies::Entity::find()
            .inner_join(movie_actors::Entity)
            .filter(movie_actors::Column::ActorId.eq(actor_id))
            .order_by_asc(movies::Column::Id)
            .all(&self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;

    #[test]
    fn test_new_actor_requires_name() {
        let err = NewActor::from_parts(None).unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(
            NewActor::from_parts(Some("Meg Ryan".to_string())).unwrap().name,
            "Meg Ryan"
        );
    }

    #[tokio::test]
    async fn test_create_and_find_actor() {
        let db = setup_test_db().await;
        let service = ActorService::new(db);

        let created = service
            .create(NewActor {
                name: "Tom Hanks".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Tom Hanks");

        let found = service.find(created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_missing_actor_is_none() {
        let db = setup_test_db().await;
        let service = ActorService::new(db);

        assert!(service.find(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_actor() {
        let db = setup_test_db().await;
        let service = ActorService::new(db);

        let created = service
            .create(NewActor {
                name: "Tom Hank".to_string(),
            })
            .await
            .unwrap();
        let updated = service
            .update(
                created.id,
                NewActor {
                    name: "Tom Hanks".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Tom Hanks");
    }

    #[tokio::test]
    async fn test_update_missing_actor_is_not_found() {
        let db = setup_test_db().await;
        let service = ActorService::new(db);

        let err = service
            .update(
                99,
                NewActor {
                    name: "Nobody".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ActorError::NotFound(99)));
    }
}
