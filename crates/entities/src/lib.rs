//! Core entity definitions for the task manager.
//!
//! This crate defines the data types shared by the server and its clients:
//! the [`Task`] record and the request shapes used to create and update it.

mod task;

pub use task::*;
