// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_category_repository;
pub mod postgres_category_repository;

pub use in_memory_category_repository::InMemoryCategoryRepository;
pub use postgres_category_repository::PostgresCategoryRepository;
