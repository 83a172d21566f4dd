use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl Contact {
    /// Creates a contact with a freshly generated id.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Contact {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// `normalized_query` must already be lower-cased.
    pub fn name_contains(&self, normalized_query: &str) -> bool {
        self.name.to_lowercase().contains(normalized_query)
    }
}

/// The contacts a fresh phonebook starts with.
pub fn seed_contacts() -> Vec<Contact> {
    [
        ("id-1", "Rosie Simpson", "459-12-56"),
        ("id-2", "Hermione Kline", "443-89-12"),
        ("id-3", "Eden Clements", "645-17-79"),
        ("id-4", "Annie Copeland", "227-91-26"),
    ]
    .into_iter()
    .map(|(id, name, number)| Contact {
        id: id.to_string(),
        name: name.to_string(),
        number: number.to_string(),
    })
    .collect()
}
