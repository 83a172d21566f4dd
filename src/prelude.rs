pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    Contact, ContactStore, SharedContactStore, contact, filter_contacts, parse_contacts,
    seed_contacts,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    FileStorage, KeyValueStorage, MemoryStorage, STORAGE_KEY, StorageMedium, open_storage,
};
pub use crate::validation::validate_contact_input;
