//! Phonebook contact store.
//!
//! Holds an ordered list of contacts (newest first), writes it through a
//! key-value storage port on every change, rehydrates it on startup and
//! derives a case-insensitive filtered view by name.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod storage;
pub mod validation;
