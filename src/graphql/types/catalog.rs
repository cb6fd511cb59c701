use async_graphql::*;

use crate::database::entities::{categories, ingredients};
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::services::IngredientWithCategory;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[ComplexObject]
impl Category {
    async fn ingredients(&self, ctx: &Context<'_>) -> Result<Vec<Ingredient>> {
        let context = ctx.data::<GraphQLContext>()?;
        let ingredients = context
            .catalog_service
            .ingredients_of(self.id)
            .await
            .map_err(|e| StructuredError::database("Category.ingredients", e))?;

        Ok(ingredients
            .into_iter()
            .map(|ingredient| Ingredient {
                loaded_category: Some(self.clone()),
                ..Ingredient::from(ingredient)
            })
            .collect())
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub notes: String,
    #[graphql(skip)]
    pub category_id: i32,
    /// Category loaded together with the ingredient, if any
    #[graphql(skip)]
    pub loaded_category: Option<Category>,
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            notes: model.notes,
            category_id: model.category_id,
            loaded_category: None,
        }
    }
}

impl From<IngredientWithCategory> for Ingredient {
    fn from((ingredient, category): IngredientWithCategory) -> Self {
        Self {
            loaded_category: category.map(Category::from),
            ..Ingredient::from(ingredient)
        }
    }
}

#[ComplexObject]
impl Ingredient {
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<Category>> {
        if let Some(category) = &self.loaded_category {
            return Ok(Some(category.clone()));
        }

        let context = ctx.data::<GraphQLContext>()?;
        let category = context
            .catalog_service
            .find_category(self.category_id)
            .await
            .map_err(|e| StructuredError::database("Ingredient.category", e))?;

        Ok(category.map(Category::from))
    }
}
