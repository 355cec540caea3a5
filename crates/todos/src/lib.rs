//! Todo list domain module: a second reducer behind the same dispatcher.

pub mod todo;

pub use todo::{Todo, TodoAction, TodoReducer, TodoState, apply, try_apply};
