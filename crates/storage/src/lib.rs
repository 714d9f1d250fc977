use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use taskmaster_core::repository::{
    CategoryRepository, RepoResult, RepositoryError, TodoRepository,
};
use taskmaster_core::types::{Category, Todo};

/// Top-level store handle that owns one collection per entity type.
///
/// Clones share the same collections, so a single store can be constructed at
/// startup and handed to every service that needs it.
#[derive(Clone, Default)]
pub struct MemoryStore {
    todos: Arc<Collection<Todo>>,
    categories: Arc<Collection<Category>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to interact with stored todos.
    pub fn todos(&self) -> TodoStore {
        TodoStore {
            collection: self.todos.clone(),
        }
    }

    /// Returns a handle to interact with stored categories.
    pub fn categories(&self) -> CategoryStore {
        CategoryStore {
            collection: self.categories.clone(),
        }
    }
}

/// Records that can be kept in a [`Collection`].
trait Keyed: Clone {
    const ENTITY: &'static str;

    fn key(&self) -> &str;
}

impl Keyed for Todo {
    const ENTITY: &'static str = "todo";

    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Category {
    const ENTITY: &'static str = "category";

    fn key(&self) -> &str {
        &self.id
    }
}

/// Keyed map guarded by a reader/writer lock.
///
/// Reads share the lock; writes hold it exclusively. Records are cloned on
/// the way in and out so no caller ever holds a reference into the map.
struct Collection<T> {
    records: RwLock<HashMap<String, T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Keyed> Collection<T> {
    fn read(&self) -> RepoResult<RwLockReadGuard<'_, HashMap<String, T>>> {
        self.records
            .read()
            .map_err(|_| RepositoryError::Poisoned { entity: T::ENTITY })
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, HashMap<String, T>>> {
        self.records
            .write()
            .map_err(|_| RepositoryError::Poisoned { entity: T::ENTITY })
    }

    fn all(&self) -> RepoResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get(&self, id: &str) -> RepoResult<T> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(T::ENTITY, id))
    }

    fn upsert(&self, record: T) -> RepoResult<()> {
        let key = record.key().to_string();
        self.write()?.insert(key, record);
        Ok(())
    }

    fn replace(&self, record: T) -> RepoResult<()> {
        let mut records = self.write()?;
        match records.get_mut(record.key()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::not_found(T::ENTITY, record.key())),
        }
    }

    fn remove(&self, id: &str) -> RepoResult<()> {
        self.write()?.remove(id);
        Ok(())
    }

    fn count(&self) -> RepoResult<usize> {
        Ok(self.read()?.len())
    }
}

/// Todo repository backed by the shared in-memory collection.
#[derive(Clone)]
pub struct TodoStore {
    collection: Arc<Collection<Todo>>,
}

impl TodoRepository for TodoStore {
    fn get_all(&self) -> RepoResult<Vec<Todo>> {
        self.collection.all()
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Todo> {
        self.collection.get(id)
    }

    fn create(&self, todo: Todo) -> RepoResult<()> {
        self.collection.upsert(todo)
    }

    fn update(&self, todo: Todo) -> RepoResult<()> {
        self.collection.replace(todo)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        self.collection.remove(id)
    }

    fn count(&self) -> RepoResult<usize> {
        self.collection.count()
    }
}

/// Category repository backed by the shared in-memory collection.
#[derive(Clone)]
pub struct CategoryStore {
    collection: Arc<Collection<Category>>,
}

impl CategoryRepository for CategoryStore {
    fn get_all(&self) -> RepoResult<Vec<Category>> {
        self.collection.all()
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Category> {
        self.collection.get(id)
    }

    fn create(&self, category: Category) -> RepoResult<()> {
        self.collection.upsert(category)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        self.collection.remove(id)
    }

    fn count(&self) -> RepoResult<usize> {
        self.collection.count()
    }
}
