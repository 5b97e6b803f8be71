use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::category::{
    Category, CategoryDraft, CategoryListParams, CategoryQuery, SortDirection, SortKey,
};
use crate::domain::repositories::{CategoryRepository, RepositoryResult};

/// Collation used on both sides of the name filter's `lower()`
const FOLD_COLLATION: &str = "\"und-x-icu\"";

/// Row shape of the `categories` table
///
/// `created_at` exists only in storage and is not read back.
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    url_handle: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            url_handle: row.url_handle,
        }
    }
}

/// PostgreSQL implementation of CategoryRepository
///
/// Listing compiles the normalised query into a single statement so the
/// database filters, sorts and pages in one pass. Case folding for the
/// filter uses the ICU root collation so it does not follow the database
/// locale. String ordering uses the `"C"` collation to stay ordinal; natural
/// order is insertion time.
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new PostgresCategoryRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds the SELECT for a normalised listing query
    fn list_statement(query: &CategoryQuery) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new("SELECT id, name, url_handle FROM categories");

        if let Some(filter) = &query.filter {
            builder
                .push(" WHERE strpos(lower(name COLLATE ")
                .push(FOLD_COLLATION)
                .push("), lower(")
                .push_bind(filter.needle())
                .push(" COLLATE ")
                .push(FOLD_COLLATION)
                .push(")) > 0");
        }

        builder.push(" ORDER BY ");
        if let Some(sort) = &query.sort {
            let column = match sort.key {
                SortKey::Name => "name",
                SortKey::UrlHandle => "url_handle",
            };
            let direction = match sort.direction {
                SortDirection::Ascending => "ASC",
                SortDirection::Descending => "DESC",
            };
            builder
                .push(column)
                .push(" COLLATE \"C\" ")
                .push(direction)
                .push(", ");
        }
        builder.push("created_at, id");

        builder
            .push(" OFFSET ")
            .push_bind(query.page.skip)
            .push(" LIMIT ")
            .push_bind(query.page.take);

        builder
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    #[tracing::instrument(skip(self))]
    async fn create(&self, draft: CategoryDraft) -> RepositoryResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (id, name, url_handle)
            VALUES ($1, $2, $3)
            RETURNING id, name, url_handle
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .bind(&draft.url_handle)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = %row.id, "category created");
        Ok(row.into())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, url_handle
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, params: &CategoryListParams) -> RepositoryResult<Vec<Category>> {
        let query = params.normalize();

        let mut statement = Self::list_statement(&query);
        let rows = statement
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(returned = rows.len(), "categories listed");
        Ok(rows.into_iter().map(Category::from).collect())
    }

    #[tracing::instrument(skip(self), fields(id = %category.id))]
    async fn update(&self, category: &Category) -> RepositoryResult<Option<Category>> {
        let Some(mut existing) = self.find_by_id(category.id).await? else {
            tracing::debug!("update skipped, category not found");
            return Ok(None);
        };

        existing.overwrite_from(category);

        // Zero rows means a concurrent delete won; report it as not found
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories
            SET name = $2, url_handle = $3
            WHERE id = $1
            RETURNING id, name, url_handle
            "#,
        )
        .bind(existing.id)
        .bind(&existing.name)
        .bind(&existing.url_handle)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Category>> {
        let Some(existing) = self.find_by_id(id).await? else {
            tracing::debug!("delete skipped, category not found");
            return Ok(None);
        };

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Some(existing))
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(params: CategoryListParams) -> String {
        let query = params.normalize();
        PostgresCategoryRepository::list_statement(&query)
            .sql()
            .to_string()
    }

    #[test]
    fn plain_listing_uses_natural_order() {
        let sql = sql_for(CategoryListParams::default());

        assert_eq!(
            sql,
            "SELECT id, name, url_handle FROM categories ORDER BY created_at, id OFFSET $1 LIMIT $2"
        );
    }

    #[test]
    fn filter_comes_before_order_and_window() {
        let sql = sql_for(CategoryListParams::default().search("an").sort("Name", "asc"));

        assert_eq!(
            sql,
            "SELECT id, name, url_handle FROM categories \
             WHERE strpos(lower(name COLLATE \"und-x-icu\"), lower($1 COLLATE \"und-x-icu\")) > 0 \
             ORDER BY name COLLATE \"C\" ASC, created_at, id OFFSET $2 LIMIT $3"
        );
    }

    #[test]
    fn url_descending_orders_by_name_column() {
        let sql = sql_for(CategoryListParams::default().sort("URL", "desc"));

        assert!(sql.contains("ORDER BY name COLLATE \"C\" DESC"));
        assert!(!sql.contains("url_handle COLLATE"));
    }

    #[test]
    fn url_ascending_orders_by_handle_column() {
        let sql = sql_for(CategoryListParams::default().sort("url", "ASC"));

        assert!(sql.contains("ORDER BY url_handle COLLATE \"C\" ASC"));
    }

    #[test]
    fn filter_folds_both_sides_with_icu_collation() {
        let sql = sql_for(CategoryListParams::default().search("É"));

        assert!(sql.contains("lower(name COLLATE \"und-x-icu\")"));
        assert!(sql.contains("lower($1 COLLATE \"und-x-icu\")"));
    }

    #[test]
    fn blank_query_adds_no_where_clause() {
        let sql = sql_for(CategoryListParams::default().search("   "));

        assert!(!sql.contains("WHERE"));
    }
}
