//! Relay-style nodes for the category/ingredient listings
//!
//! Node ids are global: base64 of `<TypeName>:<pk>`. Edge cursors are base64
//! of `arrayconnection:<offset>` into the filtered, id-ordered listing.

use async_graphql::connection::CursorType;
use async_graphql::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::database::entities::{categories, ingredients};
use crate::errors::{CatalogError, CatalogResult};
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::services::IngredientWithCategory;

pub const CATEGORY_NODE: &str = "CategoryNode";
pub const INGREDIENT_NODE: &str = "IngredientNode";

const CURSOR_PREFIX: &str = "arrayconnection:";

pub fn to_global_id(type_name: &str, pk: i32) -> ID {
    ID(STANDARD.encode(format!("{}:{}", type_name, pk)))
}

/// Split a global id into its type name and primary key.
pub fn from_global_id(global_id: &str) -> CatalogResult<(String, i32)> {
    let invalid = || CatalogError::InvalidGlobalId(global_id.to_string());

    let bytes = STANDARD.decode(global_id.trim()).map_err(|_| invalid())?;
    let decoded = String::from_utf8(bytes).map_err(|_| invalid())?;
    let (type_name, pk) = decoded.split_once(':').ok_or_else(invalid)?;
    let pk = pk.parse::<i32>().map_err(|_| invalid())?;

    Ok((type_name.to_string(), pk))
}

/// Primary key of a global id that must name `expected`.
pub fn node_pk(global_id: &str, expected: &str) -> CatalogResult<i32> {
    let (type_name, pk) = from_global_id(global_id)?;
    if type_name != expected {
        return Err(CatalogError::WrongNodeType {
            expected: expected.to_string(),
            actual: type_name,
        });
    }
    Ok(pk)
}

/// Filter arguments accept a raw primary key as well as a global id.
pub fn node_reference(raw: &str, expected: &str) -> CatalogResult<i32> {
    match raw.trim().parse::<i32>() {
        Ok(pk) => Ok(pk),
        Err(_) => node_pk(raw, expected),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetCursor(pub usize);

impl CursorType for OffsetCursor {
    type Error = CatalogError;

    fn decode_cursor(s: &str) -> std::result::Result<Self, Self::Error> {
        let invalid = || CatalogError::InvalidCursor(s.to_string());

        let bytes = STANDARD.decode(s.trim()).map_err(|_| invalid())?;
        let decoded = String::from_utf8(bytes).map_err(|_| invalid())?;
        let offset = decoded
            .strip_prefix(CURSOR_PREFIX)
            .and_then(|offset| offset.parse::<usize>().ok())
            .ok_or_else(invalid)?;

        Ok(OffsetCursor(offset))
    }

    fn encode_cursor(&self) -> String {
        STANDARD.encode(format!("{}{}", CURSOR_PREFIX, self.0))
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct CategoryNode {
    pub id: ID,
    pub name: String,
    #[graphql(skip)]
    pub pk: i32,
}

impl From<categories::Model> for CategoryNode {
    fn from(model: categories::Model) -> Self {
        Self {
            id: to_global_id(CATEGORY_NODE, model.id),
            name: model.name,
            pk: model.id,
        }
    }
}

#[ComplexObject]
impl CategoryNode {
    async fn ingredients(&self, ctx: &Context<'_>) -> Result<Vec<IngredientNode>> {
        let context = ctx.data::<GraphQLContext>()?;
        let ingredients = context
            .catalog_service
            .ingredients_of(self.pk)
            .await
            .map_err(|e| StructuredError::database("CategoryNode.ingredients", e))?;

        Ok(ingredients
            .into_iter()
            .map(|ingredient| IngredientNode {
                loaded_category: Some(self.clone()),
                ..IngredientNode::from(ingredient)
            })
            .collect())
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct IngredientNode {
    pub id: ID,
    pub name: String,
    pub notes: String,
    #[graphql(skip)]
    pub pk: i32,
    #[graphql(skip)]
    pub category_id: i32,
    #[graphql(skip)]
    pub loaded_category: Option<CategoryNode>,
}

impl From<ingredients::Model> for IngredientNode {
    fn from(model: ingredients::Model) -> Self {
        Self {
            id: to_global_id(INGREDIENT_NODE, model.id),
            name: model.name,
            notes: model.notes,
            pk: model.id,
            category_id: model.category_id,
            loaded_category: None,
        }
    }
}

impl From<IngredientWithCategory> for IngredientNode {
    fn from((ingredient, category): IngredientWithCategory) -> Self {
        Self {
            loaded_category: category.map(CategoryNode::from),
            ..IngredientNode::from(ingredient)
        }
    }
}

#[ComplexObject]
impl IngredientNode {
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<CategoryNode>> {
        if let Some(category) = &self.loaded_category {
            return Ok(Some(category.clone()));
        }

        let context = ctx.data::<GraphQLContext>()?;
        let category = context
            .catalog_service
            .find_category(self.category_id)
            .await
            .map_err(|e| StructuredError::database("IngredientNode.category", e))?;

        Ok(category.map(CategoryNode::from))
    }
}
