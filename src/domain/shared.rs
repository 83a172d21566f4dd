use std::sync::{Arc, Mutex, RwLock};

use super::*;

/// Thread-safe handle over a [`ContactStore`].
///
/// Writers are serialized through one mutex. Readers work on the last
/// published snapshot and never wait on a writer that is persisting.
pub struct SharedContactStore<S: KeyValueStorage> {
    writer: Arc<Mutex<ContactStore<S>>>,
    snapshot: Arc<RwLock<Arc<[Contact]>>>,
}

impl<S: KeyValueStorage> Clone for SharedContactStore<S> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}

impl<S: KeyValueStorage> SharedContactStore<S> {
    pub fn new(store: ContactStore<S>) -> Self {
        let snapshot: Arc<[Contact]> = Arc::from(store.contacts());
        Self {
            writer: Arc::new(Mutex::new(store)),
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub fn initialize(storage: S) -> Result<Self, AppError> {
        Ok(Self::new(ContactStore::initialize(storage)?))
    }

    pub fn add_contact(
        &self,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Contact, AppError> {
        let mut store = self.writer.lock()?;
        let contact = store.add_contact(name, number)?;
        self.publish(store.contacts())?;
        Ok(contact)
    }

    pub fn delete_contact(&self, id: &str) -> Result<Option<Contact>, AppError> {
        let mut store = self.writer.lock()?;
        let removed = store.delete_contact(id)?;
        if removed.is_some() {
            self.publish(store.contacts())?;
        }
        Ok(removed)
    }

    /// The contact list as of the last completed mutation.
    pub fn snapshot(&self) -> Result<Arc<[Contact]>, AppError> {
        Ok(Arc::clone(&*self.snapshot.read()?))
    }

    pub fn visible_contacts(&self, filter: &str) -> Result<Vec<Contact>, AppError> {
        let snapshot = self.snapshot()?;
        Ok(filter_contacts(&snapshot, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    // Called with the writer lock held so snapshots publish in mutation order.
    fn publish(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.snapshot.write()? = Arc::from(contacts);
        Ok(())
    }
}
