use async_graphql::connection::{query, Connection, Edge};
use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{
    node_pk, node_reference, Category, CategoryNode, Ingredient, IngredientNode, OffsetCursor,
    CATEGORY_NODE, INGREDIENT_NODE,
};
use crate::services::{slice_window, CategoryFilter, IngredientFilter};

#[derive(Default)]
pub struct IngredientQuery;

#[Object]
impl IngredientQuery {
    async fn all_categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let context = ctx.data::<GraphQLContext>()?;
        let categories = context
            .catalog_service
            .list_categories()
            .await
            .map_err(|e| StructuredError::database("allCategories", e))?;

        Ok(categories.into_iter().map(Category::from).collect())
    }

    /// All ingredients with their categories loaded in the same query
    async fn all_ingredients(&self, ctx: &Context<'_>) -> Result<Vec<Ingredient>> {
        let context = ctx.data::<GraphQLContext>()?;
        let ingredients = context
            .catalog_service
            .list_ingredients()
            .await
            .map_err(|e| StructuredError::database("allIngredients", e))?;

        Ok(ingredients.into_iter().map(Ingredient::from).collect())
    }

    /// Get a category by global ID
    async fn category(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CategoryNode>> {
        let context = ctx.data::<GraphQLContext>()?;
        let pk = node_pk(&id, CATEGORY_NODE).map_err(|e| e.to_graphql_error())?;

        let category = context
            .catalog_service
            .find_category(pk)
            .await
            .map_err(|e| StructuredError::database("category", e))?;

        Ok(category.map(CategoryNode::from))
    }

    /// Get an ingredient by global ID
    async fn ingredient(&self, ctx: &Context<'_>, id: ID) -> Result<Option<IngredientNode>> {
        let context = ctx.data::<GraphQLContext>()?;
        let pk = node_pk(&id, INGREDIENT_NODE).map_err(|e| e.to_graphql_error())?;

        let ingredient = context
            .catalog_service
            .find_ingredient(pk)
            .await
            .map_err(|e| StructuredError::database("ingredient", e))?;

        Ok(ingredient.map(IngredientNode::from))
    }

    /// Categories ordered by id, as a cursor connection
    async fn category_nodes(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
        name: Option<String>,
        #[graphql(desc = "Global or raw id of an ingredient the category owns")]
        ingredient: Option<ID>,
    ) -> Result<Connection<OffsetCursor, CategoryNode>> {
        let context = ctx.data::<GraphQLContext>()?;
        let filter = CategoryFilter {
            name,
            ingredient_id: ingredient
                .map(|id| node_reference(&id, INGREDIENT_NODE))
                .transpose()
                .map_err(|e| e.to_graphql_error())?,
        };
        let service = context.catalog_service.clone();

        query(
            after,
            before,
            first,
            last,
            |after: Option<OffsetCursor>, before: Option<OffsetCursor>, first, last| async move {
                let total = service
                    .count_categories(&filter)
                    .await
                    .map_err(|e| StructuredError::database("categoryNodes", e))?;
                let (start, end) =
                    slice_window(total, after.map(|c| c.0), before.map(|c| c.0), first, last);

                let rows = service
                    .category_window(&filter, start, end - start)
                    .await
                    .map_err(|e| StructuredError::database("categoryNodes", e))?;

                let mut connection = Connection::new(start > 0, end < total);
                connection.edges.extend(
                    rows.into_iter()
                        .enumerate()
                        .map(|(i, row)| Edge::new(OffsetCursor(start + i), CategoryNode::from(row))),
                );
                Ok::<_, Error>(connection)
            },
        )
        .await
    }

    /// Ingredients ordered by id, as a cursor connection
    #[allow(clippy::too_many_arguments)]
    async fn ingredient_nodes(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
        name: Option<String>,
        name_icontains: Option<String>,
        name_istartswith: Option<String>,
        notes: Option<String>,
        notes_icontains: Option<String>,
        #[graphql(desc = "Global or raw id of the owning category")]
        category: Option<ID>,
        category_name: Option<String>,
    ) -> Result<Connection<OffsetCursor, IngredientNode>> {
        let context = ctx.data::<GraphQLContext>()?;
        let filter = IngredientFilter {
            name,
            name_icontains,
            name_istartswith,
            notes,
            notes_icontains,
            category_id: category
                .map(|id| node_reference(&id, CATEGORY_NODE))
                .transpose()
                .map_err(|e| e.to_graphql_error())?,
            category_name,
        };
        let service = context.catalog_service.clone();

        query(
            after,
            before,
            first,
            last,
            |after: Option<OffsetCursor>, before: Option<OffsetCursor>, first, last| async move {
                let total = service
                    .count_ingredients(&filter)
                    .await
                    .map_err(|e| StructuredError::database("ingredientNodes", e))?;
                let (start, end) =
                    slice_window(total, after.map(|c| c.0), before.map(|c| c.0), first, last);

                let rows = service
                    .ingredient_window(&filter, start, end - start)
                    .await
                    .map_err(|e| StructuredError::database("ingredientNodes", e))?;

                let mut connection = Connection::new(start > 0, end < total);
                connection.edges.extend(rows.into_iter().enumerate().map(|(i, row)| {
                    Edge::new(OffsetCursor(start + i), IngredientNode::from(row))
                }));
                Ok::<_, Error>(connection)
            },
        )
        .await
    }
}
