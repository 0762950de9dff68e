//! appnotes - quick text notes in a local SQLite database

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_delete, handle_edit, handle_list, handle_path,
        handle_show,
    },
    logging::init_logging,
};
use store::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // `completions` never touches storage
    let open_store = || -> Result<NoteStore> {
        let config = Config::load()?;
        let store = NoteStore::new(config.store_config(cli.dir.as_ref())?);
        debug!("event=store_ready path={}", store.storage_path().display());
        Ok(store)
    };

    match command {
        Command::Add(args) => handle_add(args, &open_store()?),
        Command::List(args) => handle_list(args, &open_store()?),
        Command::Show(args) => handle_show(args, &open_store()?),
        Command::Edit(args) => handle_edit(args, &open_store()?),
        Command::Delete(args) => handle_delete(args, &open_store()?),
        Command::Path => {
            handle_path(&open_store()?);
            Ok(())
        }
        Command::Completions(args) => handle_completions(args),
    }
}
