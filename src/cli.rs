pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

pub fn display_contact(index: usize, contact: &Contact) -> String {
    format!(
        "{index:>3}. {:<20} {:15} {}",
        contact.name, contact.number, contact.id
    )
}
