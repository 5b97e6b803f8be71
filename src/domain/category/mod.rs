// Category domain module
// Contains the category entity and the listing query pipeline

#![allow(clippy::module_inception)]

pub mod category;
pub mod query;

// Re-export main types for convenience
pub use category::{Category, CategoryDraft};
pub use query::{
    CategoryListParams, CategoryQuery, CategorySort, NameFilter, PageWindow, SortDirection,
    SortKey,
};
