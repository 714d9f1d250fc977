use uuid::Uuid;

use crate::repository::{CategoryRepository, RepoResult, TodoRepository};
use crate::types::{Category, Todo};

/// Todo use cases exposed to the transport layer.
///
/// Every operation delegates to the repository; failures are returned
/// unchanged.
#[derive(Debug)]
pub struct TodoService<R> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn get_todos(&self) -> RepoResult<Vec<Todo>> {
        self.repo.get_all()
    }

    pub fn get_todo(&self, id: &str) -> RepoResult<Todo> {
        self.repo.get_by_id(id)
    }

    /// Stores the todo, overwriting any record with the same id, and returns
    /// the stored value. An empty id is replaced by a generated UUID.
    pub fn create_todo(&self, mut todo: Todo) -> RepoResult<Todo> {
        if todo.id.is_empty() {
            todo.id = generate_id();
        }
        self.repo.create(todo.clone())?;
        Ok(todo)
    }

    /// Replaces the todo stored under `id`. The path id always wins over the
    /// id carried in the payload.
    pub fn update_todo(&self, id: &str, mut todo: Todo) -> RepoResult<()> {
        todo.id = id.to_string();
        self.repo.update(todo)
    }

    pub fn delete_todo(&self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }
}

/// Category use cases exposed to the transport layer.
#[derive(Debug)]
pub struct CategoryService<R> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn get_categories(&self) -> RepoResult<Vec<Category>> {
        self.repo.get_all()
    }

    pub fn get_category(&self, id: &str) -> RepoResult<Category> {
        self.repo.get_by_id(id)
    }

    /// Stores the category with upsert semantics and returns the stored value.
    /// An empty id is replaced by a generated UUID.
    pub fn create_category(&self, mut category: Category) -> RepoResult<Category> {
        if category.id.is_empty() {
            category.id = generate_id();
        }
        self.repo.create(category.clone())?;
        Ok(category)
    }

    pub fn delete_category(&self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
