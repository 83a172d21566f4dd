pub mod contact;
pub mod shared;
pub mod store;

use crate::errors::AppError;
use crate::storage::{KeyValueStorage, STORAGE_KEY};

pub use contact::{Contact, seed_contacts};
pub use shared::SharedContactStore;
pub use store::{ContactStore, filter_contacts, parse_contacts};
