use sea_orm::sea_query::{Expr, Func, LikeExpr, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::database::entities::{categories, ingredients};
use crate::errors::CatalogResult;

/// Ingredient row with its category fetched in the same query
pub type IngredientWithCategory = (ingredients::Model, Option<categories::Model>);

/// Filters accepted by the ingredient listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientFilter {
    pub name: Option<String>,
    pub name_icontains: Option<String>,
    pub name_istartswith: Option<String>,
    pub notes: Option<String>,
    pub notes_icontains: Option<String>,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

impl IngredientFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &self.name {
            condition = condition.add(ingredients::Column::Name.eq(name.as_str()));
        }
        if let Some(fragment) = &self.name_icontains {
            condition = condition.add(lower_like(ingredients::Column::Name, contains(fragment)));
        }
        if let Some(prefix) = &self.name_istartswith {
            condition = condition.add(lower_like(ingredients::Column::Name, starts_with(prefix)));
        }
        if let Some(notes) = &self.notes {
            condition = condition.add(ingredients::Column::Notes.eq(notes.as_str()));
        }
        if let Some(fragment) = &self.notes_icontains {
            condition = condition.add(lower_like(ingredients::Column::Notes, contains(fragment)));
        }
        if let Some(category_id) = self.category_id {
            condition = condition.add(ingredients::Column::CategoryId.eq(category_id));
        }
        if let Some(category_name) = &self.category_name {
            condition = condition.add(
                ingredients::Column::CategoryId.in_subquery(
                    Query::select()
                        .column(categories::Column::Id)
                        .from(categories::Entity)
                        .and_where(categories::Column::Name.eq(category_name.as_str()))
                        .to_owned(),
                ),
            );
        }

        condition
    }
}

/// Filters accepted by the category listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub name: Option<String>,
    /// Only the category that owns this ingredient
    pub ingredient_id: Option<i32>,
}

impl CategoryFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &self.name {
            condition = condition.add(categories::Column::Name.eq(name.as_str()));
        }
        if let Some(ingredient_id) = self.ingredient_id {
            condition = condition.add(
                categories::Column::Id.in_subquery(
                    Query::select()
                        .column(ingredients::Column::CategoryId)
                        .from(ingredients::Entity)
                        .and_where(ingredients::Column::Id.eq(ingredient_id))
                        .to_owned(),
                ),
            );
        }

        condition
    }
}

/// Half-open `[start, end)` slice of a listing selected by relay arguments.
///
/// `after`/`before` are offsets of existing edges; `first` trims from the
/// front of the remaining range and `last` from the back.
pub fn slice_window(
    total: usize,
    after: Option<usize>,
    before: Option<usize>,
    first: Option<usize>,
    last: Option<usize>,
) -> (usize, usize) {
    let mut start = after.map(|a| a.saturating_add(1)).unwrap_or(0).min(total);
    let mut end = before.unwrap_or(total).min(total).max(start);

    if let Some(first) = first {
        end = end.min(start.saturating_add(first));
    }
    if let Some(last) = last {
        start = start.max(end.saturating_sub(last));
    }

    (start, end)
}

pub struct CatalogService {
    db: DatabaseConnection,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_categories(&self) -> CatalogResult<Vec<categories::Model>> {
        Ok(categories::Entity::find().all(&self.db).await?)
    }

    /// All ingredients, each joined with its category in one query.
    pub async fn list_ingredients(&self) -> CatalogResult<Vec<IngredientWithCategory>> {
        Ok(ingredients::Entity::find()
            .find_also_related(categories::Entity)
            .all(&self.db)
            .await?)
    }

    pub async fn find_category(&self, id: i32) -> CatalogResult<Option<categories::Model>> {
        Ok(categories::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_ingredient(&self, id: i32) -> CatalogResult<Option<IngredientWithCategory>> {
        Ok(ingredients::Entity::find_by_id(id)
            .find_also_related(categories::Entity)
            .one(&self.db)
            .await?)
    }

    pub async fn ingredients_of(&self, category_id: i32) -> CatalogResult<Vec<ingredients::Model>> {
        Ok(ingredients::Entity::find()
            .filter(ingredients::Column::CategoryId.eq(category_id))
            .order_by_asc(ingredients::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn count_ingredients(&self, filter: &IngredientFilter) -> CatalogResult<usize> {
        let count = ingredients::Entity::find()
            .filter(filter.condition())
            .count(&self.db)
            .await?;
        Ok(count as usize)
    }

    /// Filtered ingredients ordered by id, `limit` rows starting at `offset`.
    pub async fn ingredient_window(
        &self,
        filter: &IngredientFilter,
        offset: usize,
        limit: usize,
    ) -> CatalogResult<Vec<IngredientWithCategory>> {
        Ok(ingredients::Entity::find()
            .filter(filter.condition())
            .find_also_related(categories::Entity)
            .order_by_asc(ingredients::Column::Id)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await?)
    }

    pub async fn count_categories(&self, filter: &CategoryFilter) -> CatalogResult<usize> {
        let count = categories::Entity::find()
            .filter(filter.condition())
            .count(&self.db)
            .await?;
        Ok(count as usize)
    }

    /// Filtered categories ordered by id, `limit` rows starting at `offset`.
    pub async fn category_window(
        &self,
        filter: &CategoryFilter,
        offset: usize,
        limit: usize,
    ) -> CatalogResult<Vec<categories::Model>> {
        Ok(categories::Entity::find()
            .filter(filter.condition())
            .order_by_asc(categories::Column::Id)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await?)
    }
}

fn lower_like(column: ingredients::Column, pattern: LikeExpr) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((ingredients::Entity, column)))).like(pattern)
}

fn contains(fragment: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(&fragment.to_lowercase()))).escape('\\')
}

fn starts_with(prefix: &str) -> LikeExpr {
    LikeExpr::new(format!("{}%", escape_like(&prefix.to_lowercase()))).escape('\\')
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
