use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::WriterAuth;
use crate::api::state::AppState;
use crate::domain::category::{Category, CategoryDraft, CategoryListParams};

/// Request body for creating a category
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub url_handle: String,
}

/// Request body for replacing a category's fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: String,
    pub url_handle: String,
}

/// Query string accepted by the listing endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesQuery {
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
}

impl From<ListCategoriesQuery> for CategoryListParams {
    fn from(q: ListCategoriesQuery) -> Self {
        Self {
            query: q.query,
            sort_by: q.sort_by,
            sort_direction: q.sort_direction,
            page_number: q.page_number,
            page_size: q.page_size,
        }
    }
}

/// Category as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    pub url_handle: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            url_handle: category.url_handle,
        }
    }
}

fn category_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Category not found: {}", id))
}

/// Create a category
///
/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    WriterAuth(_claims): WriterAuth,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<CategoryDto>, ApiError> {
    let category = state
        .categories
        .create(CategoryDraft::new(req.name, req.url_handle))
        .await?;

    Ok(Json(category.into()))
}

/// List categories with optional filter, sort and paging
///
/// GET /api/categories?query=html&sortBy=name&sortDirection=desc&pageNumber=1&pageSize=10
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let params = CategoryListParams::from(query);
    let categories = state.categories.list(&params).await?;

    Ok(Json(categories.into_iter().map(CategoryDto::from).collect()))
}

/// Get a category by ID
///
/// GET /api/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryDto>, ApiError> {
    let category = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    Ok(Json(category.into()))
}

/// Replace a category's name and url handle
///
/// PUT /api/categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    WriterAuth(_claims): WriterAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryDto>, ApiError> {
    let replacement = Category::from_draft(id, CategoryDraft::new(req.name, req.url_handle));

    let category = state
        .categories
        .update(&replacement)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    Ok(Json(category.into()))
}

/// Delete a category, echoing the removed record
///
/// DELETE /api/categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    WriterAuth(_claims): WriterAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryDto>, ApiError> {
    let category = state
        .categories
        .delete(id)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    Ok(Json(category.into()))
}

/// Total number of categories
///
/// GET /api/categories/count
pub async fn count_categories(State(state): State<AppState>) -> Result<Json<i64>, ApiError> {
    let total = state.categories.count().await?;
    Ok(Json(total))
}
