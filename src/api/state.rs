use std::sync::Arc;

use crate::domain::repositories::CategoryRepository;

/// Shared state handed to every handler
///
/// Cloning is cheap: both fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(categories: Arc<dyn CategoryRepository>, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            categories,
            jwt_secret: jwt_secret.into(),
        }
    }
}
