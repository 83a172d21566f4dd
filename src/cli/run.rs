use std::env;

use clap::Parser;

use crate::{
    cli::{
        command::{Cli, Commands},
        display_contact,
    },
    config::{Config, STORAGE_ENV},
    domain::ContactStore,
    errors::AppError,
    storage::{KeyValueStorage, open_storage},
    validation::validate_contact_input,
};

pub fn run_app() -> Result<(), AppError> {
    // Before parsing, so clap's `env` fallbacks see `.env` values too.
    Config::load_dotenv();

    let cli = Cli::parse();
    let config = resolve_config(&cli, |key| env::var(key).ok())?;

    tracing::debug!(?config, "resolved configuration");

    let storage = open_storage(&config);
    let mut store = ContactStore::initialize(storage)?;

    execute(cli.command, &mut store)
}

/// Layers CLI flags over the environment. A flag wins before the
/// environment value is parsed, so a bad value it replaces is never read.
pub fn resolve_config<F>(cli: &Cli, lookup: F) -> Result<Config, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::from_lookup(|key| match cli.storage {
        Some(storage) if key == STORAGE_ENV => Some(storage.to_string()),
        _ => lookup(key),
    })?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

pub fn execute<S: KeyValueStorage>(
    command: Commands,
    store: &mut ContactStore<S>,
) -> Result<(), AppError> {
    match command {
        Commands::Add { name, number } => {
            let (name, number) = validate_contact_input(&name, &number)?;
            let contact = store.add_contact(name, number)?;

            println!("Contact added successfully");
            println!("{}", display_contact(1, &contact));
            Ok(())
        }

        Commands::List { filter } => {
            if let Some(filter) = filter {
                store.set_filter(filter);
            }

            let visible = store.visible_contacts();
            if visible.is_empty() {
                println!("No contacts found");
                return Ok(());
            }

            for (i, contact) in visible.iter().enumerate() {
                println!("{}", display_contact(i + 1, contact));
            }
            Ok(())
        }

        Commands::Delete { id } => {
            match store.delete_contact(&id)? {
                Some(_) => println!("Contact deleted successfully"),
                None => eprintln!("No contact with id {}", id),
            }
            Ok(())
        }
    }
}
