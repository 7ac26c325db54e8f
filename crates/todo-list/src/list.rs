//! The todo list container.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::todo::Todo;

/// A titled, ordered, mutable sequence of todos.
///
/// Insertion order is significant and preserved across all operations.
/// Positional operations take 0-based indices and fail with
/// [`Error::IndexOutOfRange`] when the index is not within `[0, len)`;
/// a failed call leaves the list unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// The title of the list.
    title: String,

    /// The todos, in insertion order.
    #[serde(default)]
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates a new, empty list with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Returns the title of the list.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a todo to the end of the list.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Returns the number of todos in the list.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the list contains no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the first todo, or `None` if the list is empty.
    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    /// Returns the last todo, or `None` if the list is empty.
    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Returns the todo at `index`.
    pub fn item_at(&self, index: usize) -> Result<&Todo> {
        self.todos
            .get(index)
            .ok_or(Error::index_out_of_range(index, self.todos.len()))
    }

    /// Removes and returns the first todo, or `None` if the list is empty.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            None
        } else {
            Some(self.todos.remove(0))
        }
    }

    /// Removes and returns the last todo, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    /// Removes and returns the todo at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        if index >= self.todos.len() {
            return Err(Error::index_out_of_range(index, self.todos.len()));
        }
        Ok(self.todos.remove(index))
    }

    /// Marks the todo at `index` as done.
    pub fn mark_done_at(&mut self, index: usize) -> Result<()> {
        let len = self.todos.len();
        self.todos
            .get_mut(index)
            .ok_or(Error::index_out_of_range(index, len))?
            .mark_done();
        Ok(())
    }

    /// Marks the todo at `index` as not done.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<()> {
        let len = self.todos.len();
        self.todos
            .get_mut(index)
            .ok_or(Error::index_out_of_range(index, len))?
            .mark_undone();
        Ok(())
    }

    /// Marks every todo in the list as done.
    pub fn mark_all_done(&mut self) {
        for todo in &mut self.todos {
            todo.mark_done();
        }
    }

    /// Marks every todo in the list as not done.
    pub fn mark_all_undone(&mut self) {
        for todo in &mut self.todos {
            todo.mark_undone();
        }
    }

    /// Returns true if every todo is done.
    /// An empty list counts as done.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Returns a snapshot of the todos, in list order.
    ///
    /// The result is independent of the list; mutating it does not
    /// affect the list.
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.to_vec()
    }

    /// Calls `f` once per todo, in list order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Todo),
    {
        self.todos.iter().for_each(f);
    }

    /// Returns a new list with the same title, containing clones of the
    /// todos for which `predicate` returns true, in their original
    /// relative order.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        TodoList {
            title: self.title.clone(),
            todos: self
                .todos
                .iter()
                .filter(|todo| predicate(todo))
                .cloned()
                .collect(),
        }
    }

    /// Returns an iterator over the todos, in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}

impl fmt::Display for TodoList {
    /// Renders a `---- title ----` header followed by one line per todo,
    /// newline-joined, with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            write!(f, "\n{}", todo)?;
        }
        Ok(())
    }
}
