//! Ordered in-memory todo collection.
//!
//! # Design
//! Records live in a `Vec` in insertion order. `find_index` is the only scan
//! over the sequence; fetch, toggle and delete all go through it so they agree
//! on which record wins when ids collide.

use crate::error::TodoError;
use crate::types::{seed_todos, Todo};

/// Owned, ordered collection of todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TodoStore {
    /// A collection holding the three seed records.
    pub fn seeded() -> Self {
        Self::from_todos(seed_todos())
    }

    /// A collection holding exactly `todos`, in the given order.
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Append `todo` as received and return a copy of it.
    pub fn create(&mut self, todo: Todo) -> Todo {
        self.todos.push(todo.clone());
        todo
    }

    /// Every record in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &str) -> Result<&Todo, TodoError> {
        let index = self.find_index(id)?;
        Ok(&self.todos[index])
    }

    /// Flip `completed` on the first record with `id` and return it.
    pub fn toggle_completed(&mut self, id: &str) -> Result<&Todo, TodoError> {
        let index = self.find_index(id)?;
        let todo = &mut self.todos[index];
        todo.completed = !todo.completed;
        Ok(todo)
    }

    /// Remove the first record with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: &str) -> Result<Todo, TodoError> {
        let index = self.find_index(id)?;
        Ok(self.todos.remove(index))
    }

    fn find_index(&self, id: &str) -> Result<usize, TodoError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }
}
