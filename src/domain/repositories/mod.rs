// Repository contracts (ports)
// Implemented by adapters in the infrastructure layer

pub mod category_repository;
pub mod errors;

pub use category_repository::CategoryRepository;
pub use errors::{RepositoryError, RepositoryResult};
