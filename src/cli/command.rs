use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DATA_DIR_ENV, STORAGE_ENV};
use crate::storage::StorageMedium;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Phonebook: add, filter and delete contacts")]
pub struct Cli {
    /// Storage medium (mem, file)
    #[arg(long, env = STORAGE_ENV)]
    pub storage: Option<StorageMedium>,

    /// Directory holding the stored contact list
    #[arg(long, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name, unique ignoring case
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },
    /// List contacts, newest first
    List {
        /// Only show contacts whose name contains this text (ignoring case)
        #[arg(long, short)]
        filter: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete, as shown by `list`
        #[arg(long)]
        id: String,
    },
}
