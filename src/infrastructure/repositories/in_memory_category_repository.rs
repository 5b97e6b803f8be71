use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::category::{Category, CategoryDraft, CategoryListParams};
use crate::domain::repositories::{CategoryRepository, RepositoryResult};

/// In-process implementation of CategoryRepository
///
/// Records live in a `Vec` kept in insertion order, which is the natural
/// order the listing pipeline starts from. Used by tests and local runs
/// without a database.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `categories`, in order
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, draft: CategoryDraft) -> RepositoryResult<Category> {
        let category = Category::from_draft(Uuid::new_v4(), draft);
        self.categories.write().await.push(category.clone());

        tracing::debug!(id = %category.id, "category created");
        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, params: &CategoryListParams) -> RepositoryResult<Vec<Category>> {
        let snapshot = self.categories.read().await.clone();
        Ok(params.normalize().apply(snapshot))
    }

    async fn update(&self, category: &Category) -> RepositoryResult<Option<Category>> {
        let mut categories = self.categories.write().await;

        let Some(existing) = categories.iter_mut().find(|c| c.id == category.id) else {
            tracing::debug!(id = %category.id, "update skipped, category not found");
            return Ok(None);
        };

        existing.overwrite_from(category);
        tracing::debug!(id = %category.id, "category updated");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Category>> {
        let mut categories = self.categories.write().await;

        let Some(position) = categories.iter().position(|c| c.id == id) else {
            tracing::debug!(%id, "delete skipped, category not found");
            return Ok(None);
        };

        let removed = categories.remove(position);
        tracing::debug!(%id, "category deleted");
        Ok(Some(removed))
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let total = self.categories.read().await.len();
        Ok(i64::try_from(total).unwrap_or(i64::MAX))
    }
}
