use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::{Category, CategoryDraft, CategoryListParams};
use crate::domain::repositories::RepositoryResult;

/// Repository trait for the Category entity
///
/// The only way categories are created, fetched, listed, updated, deleted
/// and counted. Addressed operations report a missing record as `Ok(None)`;
/// `Err` is reserved for storage failures, which are passed through as-is.
///
/// Calls are independent. Nothing here locks, so concurrent updates to the
/// same id race at the store's isolation level.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category under a freshly generated id
    async fn create(&self, draft: CategoryDraft) -> RepositoryResult<Category>;

    /// Find a category by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Category>>;

    /// Lists categories: filter by name, then sort, then page
    ///
    /// Pagination always applies to the filtered and sorted sequence.
    async fn list(&self, params: &CategoryListParams) -> RepositoryResult<Vec<Category>>;

    /// Replaces `name` and `url_handle` of the category with `category.id`
    ///
    /// Returns `None` without inserting anything when the id is unknown.
    async fn update(&self, category: &Category) -> RepositoryResult<Option<Category>>;

    /// Removes a category, returning its last known value
    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Category>>;

    /// Total number of stored categories, ignoring any listing parameters
    async fn count(&self) -> RepositoryResult<i64>;
}
