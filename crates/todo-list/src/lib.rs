//! In-memory todo list library.
//!
//! A [`Todo`](todo::Todo) is a single task with a description and a
//! completion flag. A [`TodoList`](list::TodoList) is a titled, ordered,
//! mutable sequence of todos supporting indexed access, removal, bulk state
//! changes, filtering, iteration, and text rendering.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use todo_list_rs::prelude::*;
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk"));
//! list.add(Todo::new("Clean room"));
//!
//! list.mark_done_at(0)?;
//! assert!(list.item_at(0)?.is_done());
//! assert!(!list.is_done());
//! # Ok::<(), todo_list_rs::error::Error>(())
//! ```

pub mod error;
pub mod list;
pub mod prelude;
pub mod todo;
