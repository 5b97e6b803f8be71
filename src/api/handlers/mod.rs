pub mod categories;
pub mod health;
