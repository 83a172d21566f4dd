use std::collections::HashSet;

use super::*;

/// Owner of the canonical contact list and the current filter.
///
/// Every successful mutation is written through to the storage port under
/// [`STORAGE_KEY`]. A mutation whose write fails is rolled back, so the
/// in-memory list never runs ahead of what was persisted.
pub struct ContactStore<S: KeyValueStorage> {
    contacts: Vec<Contact>,
    filter: String,
    storage: S,
}

impl<S: KeyValueStorage> ContactStore<S> {
    /// Rehydrates from storage, or falls back to the seed contacts when
    /// nothing has been stored yet.
    pub fn initialize(storage: S) -> Result<Self, AppError> {
        let contacts = match storage.get_item(STORAGE_KEY)? {
            Some(data) => {
                let contacts = parse_contacts(&data)?;
                tracing::debug!(
                    count = contacts.len(),
                    medium = storage.medium(),
                    "loaded stored contacts"
                );
                contacts
            }
            None => {
                tracing::debug!(medium = storage.medium(), "no stored contacts, using seed list");
                seed_contacts()
            }
        };

        Ok(Self {
            contacts,
            filter: String::new(),
            storage,
        })
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Prepends a new contact unless one with the same name (ignoring case)
    /// already exists.
    pub fn add_contact(
        &mut self,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Contact, AppError> {
        let name = name.into();

        if self.contacts.iter().any(|c| c.has_name(&name)) {
            tracing::warn!(%name, "rejected duplicate contact name");
            return Err(AppError::DuplicateName(name));
        }

        let contact = Contact::new(name, number);
        self.contacts.insert(0, contact.clone());

        if let Err(e) = self.persist() {
            self.contacts.remove(0);
            return Err(e);
        }

        tracing::info!(id = %contact.id, name = %contact.name, "contact added");
        Ok(contact)
    }

    /// Removes the contact with `id`. Unknown ids are a no-op and return `Ok(None)`.
    pub fn delete_contact(&mut self, id: &str) -> Result<Option<Contact>, AppError> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            tracing::debug!(%id, "delete ignored, no such contact");
            return Ok(None);
        };

        let removed = self.contacts.remove(index);

        if let Err(e) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(e);
        }

        tracing::info!(%id, name = %removed.name, "contact deleted");
        Ok(Some(removed))
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn visible_contacts(&self) -> Vec<&Contact> {
        filter_contacts(&self.contacts, &self.filter)
    }

    fn persist(&mut self) -> Result<(), AppError> {
        let data = serde_json::to_string(&self.contacts)
            .map_err(|e| AppError::StorageWrite(e.into()))?;
        self.storage.set_item(STORAGE_KEY, &data)
    }
}

/// Contacts whose name contains `filter`, ignoring case, in list order.
pub fn filter_contacts<'a>(contacts: &'a [Contact], filter: &str) -> Vec<&'a Contact> {
    let normalized = filter.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name_contains(&normalized))
        .collect()
}

/// Parses a stored contact list, rejecting data that breaks id or name uniqueness.
pub fn parse_contacts(data: &str) -> Result<Vec<Contact>, AppError> {
    let contacts: Vec<Contact> = serde_json::from_str(data)?;

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for contact in &contacts {
        if !ids.insert(contact.id.as_str()) {
            return Err(AppError::MalformedStorage(format!(
                "duplicate contact id '{}'",
                contact.id
            )));
        }
        if !names.insert(contact.name.to_lowercase()) {
            return Err(AppError::MalformedStorage(format!(
                "duplicate contact name '{}'",
                contact.name
            )));
        }
    }

    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn seeded_store() -> Result<ContactStore<MemoryStorage>, AppError> {
        ContactStore::initialize(MemoryStorage::new())
    }

    fn names(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn starts_from_seed_list_without_writing() -> Result<(), AppError> {
        let store = seeded_store()?;

        assert_eq!(store.contacts(), seed_contacts().as_slice());
        assert_eq!(store.storage().get_item(STORAGE_KEY)?, None);
        Ok(())
    }

    #[test]
    fn adding_prepends_and_persists() -> Result<(), AppError> {
        let mut store = seeded_store()?;

        let added = store.add_contact("Alice Doe", "+380 501234567")?;

        assert_eq!(store.contacts()[0], added);
        assert_eq!(store.len(), 5);

        let stored = store.storage().get_item(STORAGE_KEY)?.unwrap_or_default();
        assert_eq!(parse_contacts(&stored)?, store.contacts());
        Ok(())
    }

    #[test]
    fn duplicate_names_are_rejected_ignoring_case() -> Result<(), AppError> {
        let mut store = seeded_store()?;

        let err = store.add_contact("rosie simpson", "111-11-11").unwrap_err();

        assert!(err.is_duplicate_name());
        assert_eq!(store.contacts(), seed_contacts().as_slice());
        assert_eq!(store.storage().get_item(STORAGE_KEY)?, None);
        Ok(())
    }

    #[test]
    fn deleting_unknown_id_changes_nothing() -> Result<(), AppError> {
        let mut store = seeded_store()?;

        assert_eq!(store.delete_contact("no-such-id")?, None);
        assert_eq!(store.contacts(), seed_contacts().as_slice());
        Ok(())
    }

    #[test]
    fn deleting_removes_and_persists() -> Result<(), AppError> {
        let mut store = seeded_store()?;

        let removed = store.delete_contact("id-2")?;

        assert_eq!(removed.map(|c| c.name), Some("Hermione Kline".to_string()));
        assert!(store.find("id-2").is_none());

        let stored = store.storage().get_item(STORAGE_KEY)?.unwrap_or_default();
        assert_eq!(parse_contacts(&stored)?.len(), 3);
        Ok(())
    }

    #[test]
    fn filter_matches_substring_ignoring_case() -> Result<(), AppError> {
        let mut store = seeded_store()?;

        store.set_filter("kline");
        assert_eq!(names(&store.visible_contacts()), vec!["Hermione Kline"]);

        store.set_filter("N C");
        assert_eq!(names(&store.visible_contacts()), vec!["Eden Clements"]);

        store.set_filter("");
        assert_eq!(store.visible_contacts().len(), 4);
        Ok(())
    }

    #[test]
    fn filter_changes_are_not_persisted() -> Result<(), AppError> {
        let mut store = seeded_store()?;

        store.set_filter("on");
        store.set_filter("on");

        assert_eq!(store.filter(), "on");
        assert_eq!(
            names(&store.visible_contacts()),
            vec!["Rosie Simpson", "Hermione Kline"]
        );
        assert_eq!(store.storage().get_item(STORAGE_KEY)?, None);
        Ok(())
    }

    #[test]
    fn failed_write_rolls_back_add() -> Result<(), AppError> {
        let mut store = ContactStore::initialize(MemoryStorage::new().fail_writes())?;

        let err = store.add_contact("Alice Doe", "+380 501234567").unwrap_err();

        assert!(matches!(err, AppError::StorageWrite(_)));
        assert_eq!(store.contacts(), seed_contacts().as_slice());
        Ok(())
    }

    #[test]
    fn failed_write_rolls_back_delete_in_place() -> Result<(), AppError> {
        let mut store = ContactStore::initialize(MemoryStorage::new().fail_writes())?;

        assert!(store.delete_contact("id-3").is_err());
        assert_eq!(store.contacts(), seed_contacts().as_slice());
        Ok(())
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let data = r#"[
            {"id":"x","name":"A","number":"1"},
            {"id":"x","name":"B","number":"2"}
        ]"#;

        assert!(matches!(
            parse_contacts(data),
            Err(AppError::MalformedStorage(_))
        ));
    }

    #[test]
    fn parse_rejects_names_repeated_ignoring_case() -> Result<(), AppError> {
        let data = r#"[
            {"id":"a","name":"Jo March","number":"555-12-34"},
            {"id":"b","name":"JO MARCH","number":"555-43-21"}
        ]"#;

        assert!(matches!(
            parse_contacts(data),
            Err(AppError::MalformedStorage(ref msg)) if msg.contains("JO MARCH")
        ));

        let storage = MemoryStorage::new().with_item(STORAGE_KEY, data);
        assert!(matches!(
            ContactStore::initialize(storage),
            Err(AppError::MalformedStorage(_))
        ));
        Ok(())
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert!(parse_contacts(r#"{"contacts":[]}"#).is_err());
        assert!(parse_contacts(r#"[{"id":1,"name":"A","number":"1"}]"#).is_err());
        assert!(parse_contacts("").is_err());
    }
}
