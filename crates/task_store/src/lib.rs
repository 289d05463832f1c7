//! Task storage for the task manager.
//!
//! This crate provides the [`TaskStore`] abstraction and an in-memory
//! implementation that keeps tasks in insertion order for the lifetime of
//! the process.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
