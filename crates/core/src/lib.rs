//! Domain model, repository contracts and services for the task backend.

pub mod repository;
pub mod service;
pub mod types;

pub use repository::{CategoryRepository, RepoResult, RepositoryError, TodoRepository};
pub use service::{CategoryService, TodoService};
