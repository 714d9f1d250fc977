use thiserror::Error;

use crate::types::{Category, Todo};

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{entity} store is unavailable after a panicked write")]
    Poisoned { entity: &'static str },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Returns `true` when the error reports a missing identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Storage contract for todos.
///
/// Implementations must be safe to share across request workers. Records
/// returned from reads are owned copies; mutating them never affects stored
/// state.
pub trait TodoRepository: Send + Sync {
    /// Returns every stored todo. Ordering is unspecified.
    fn get_all(&self) -> RepoResult<Vec<Todo>>;

    fn get_by_id(&self, id: &str) -> RepoResult<Todo>;

    /// Inserts or overwrites the todo stored under `todo.id`.
    fn create(&self, todo: Todo) -> RepoResult<()>;

    /// Overwrites an existing todo, failing with `NotFound` when `todo.id`
    /// is not stored.
    fn update(&self, todo: Todo) -> RepoResult<()>;

    /// Removes the todo if present. Deleting a missing id succeeds.
    fn delete(&self, id: &str) -> RepoResult<()>;

    fn count(&self) -> RepoResult<usize>;
}

/// Storage contract for categories. Categories are immutable once created,
/// so there is no update operation.
pub trait CategoryRepository: Send + Sync {
    /// Returns every stored category. Ordering is unspecified.
    fn get_all(&self) -> RepoResult<Vec<Category>>;

    fn get_by_id(&self, id: &str) -> RepoResult<Category>;

    /// Inserts or overwrites the category stored under `category.id`.
    fn create(&self, category: Category) -> RepoResult<()>;

    /// Removes the category if present. Deleting a missing id succeeds.
    fn delete(&self, id: &str) -> RepoResult<()>;

    fn count(&self) -> RepoResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_entity_only() {
        let err = RepositoryError::not_found("todo", "42");
        assert_eq!(err.to_string(), "todo not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn poisoned_is_not_a_missing_record() {
        let err = RepositoryError::Poisoned { entity: "category" };
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("category store"));
    }
}
