//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types so library consumers can import
//! everything they need with a single use statement.
//!
//! # Example
//!
//! ```
//! use todo_list_rs::prelude::*;
//!
//! // Now you have access to:
//! // - Todo (a single task)
//! // - TodoList (a titled, ordered sequence of todos)
//! // - Error, Result (error handling)
//! ```

pub use crate::error::{Error, Result};
pub use crate::list::TodoList;
pub use crate::todo::Todo;
