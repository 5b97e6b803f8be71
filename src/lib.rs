//! Blog Categories API Library
//!
//! CRUD over blog post categories: domain types and the listing query
//! pipeline, repository adapters for PostgreSQL and memory, and the HTTP
//! layer that exposes them.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
