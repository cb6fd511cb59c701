use anyhow::Result;
use sea_orm::*;
use tracing::info;

use crate::database::entities::{actors, categories, ingredients, movie_actors, movies};

/// Populate an empty database with a small cookbook and film catalogue.
/// Does nothing when categories already exist.
pub async fn create_example_data(db: &DatabaseConnection) -> Result<()> {
    let existing = categories::Entity::find().count(db).await?;
    if existing > 0 {
        info!("Example data already present, skipping seed data creation");
        return Ok(());
    }

    let txn = db.begin().await?;
    create_example_ingredients(&txn).await?;
    create_example_movies(&txn).await?;
    txn.commit().await?;

    info!("Successfully created example data");
    Ok(())
}

async fn create_example_ingredients(db: &DatabaseTransaction) -> Result<()> {
    info!("Creating example categories and ingredients...");

    let catalogue = [
        ("Dairy", vec![("Eggs", ""), ("Milk", "")]),
        ("Meat", vec![("Beef", ""), ("Chicken", "Free range")]),
    ];

    let mut ingredient_count = 0;
    for (category_name, items) in catalogue {
        let category = categories::ActiveModel {
            name: Set(category_name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let models = items.into_iter().map(|(name, notes)| ingredients::ActiveModel {
            name: Set(name.to_string()),
            notes: Set(notes.to_string()),
            category_id: Set(category.id),
            ..Default::default()
        });
        let models: Vec<_> = models.collect();
        ingredient_count += models.len();

        ingredients::Entity::insert_many(models).exec(db).await?;
    }

    info!("Created {} ingredients", ingredient_count);
    Ok(())
}

async fn create_example_movies(db: &DatabaseTransaction) -> Result<()> {
    info!("Creating example actors and movies...");

    let films = [
        ("Big", 1988, vec!["Tom Hanks"]),
        ("Cast Away", 2000, vec!["Tom Hanks", "Helen Hunt"]),
        ("Twister", 1996, vec!["Helen Hunt", "Bill Paxton"]),
    ];

    let mut actor_ids = std::collections::BTreeMap::new();
    for (title, year, cast) in films {
        let movie = movies::ActiveModel {
            title: Set(title.to_string()),
            year: Set(year),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for name in cast {
            let actor_id = match actor_ids.get(name) {
                Some(id) => *id,
                None => {
                    let actor = actors::ActiveModel {
                        name: Set(name.to_string()),
                        ..Default::default()
                    }
                    .insert(db)
                    .await?;
                    actor_ids.insert(name, actor.id);
                    actor.id
                }
            };

            movie_actors::ActiveModel {
                movie_id: Set(movie.id),
                actor_id: Set(actor_id),
            }
            .insert(db)
            .await?;
        }
    }

    info!("Created {} actors", actor_ids.len());
    Ok(())
}
