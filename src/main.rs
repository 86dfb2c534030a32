use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use glossary::browser::{SystemClipboard, SystemLauncher};
use glossary::cli::{
    handle_config, handle_contact, handle_init, handle_list, handle_open, handle_search,
    handle_show, run_line_session, OutputFormat,
};
use glossary::config::{GlossaryPaths, Settings};
use glossary::logging;
use glossary::storage::EntryStore;
use glossary::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "glossary",
    version,
    about = "Browse a glossary of word roots, prefixes and suffixes",
    long_about = "A terminal glossary browser. Search terms, meanings and usage \
                  examples, narrow by category, and open a web search for any \
                  entry. Runs the full-screen interface when no command is given."
)]
struct Cli {
    /// Glossary data file (JSON or YAML)
    #[arg(long, global = true, env = "GLOSSARY_DATA", value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Interactive line-mode session on stdin/stdout
    Browse,

    /// List entries, optionally for one category
    List {
        /// Category (root, prefix, suffix)
        #[arg(short, long)]
        category: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Search terms, meanings and usage examples
    Search {
        /// Search text
        query: String,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show details of one entry
    Show {
        /// Term, with or without hyphens
        term: String,
    },

    /// Open a web search for an entry
    Open {
        /// Term, with or without hyphens
        term: String,
        /// Print the URL instead of opening a browser
        #[arg(long)]
        print: bool,
    },

    /// Copy the contact email address to the clipboard
    Contact,

    /// Write the starter glossary to the data file
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Show configuration
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

/// Load the store for an interactive session; a failure becomes a notice
fn load_for_session(path: &Path) -> (Option<EntryStore>, Option<String>) {
    match EntryStore::load(path) {
        Ok(store) => (Some(store), None),
        Err(e) => (None, Some(e.to_string())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let paths = GlossaryPaths::new()?;

    // The TUI owns the terminal, so its logs go to a file or nowhere
    if matches!(command, Commands::Tui) {
        let _ = logging::init_file(&paths.log_file());
    } else {
        logging::init_stderr();
    }

    let settings = Settings::load_or_create(&paths)?;
    let data_file = settings.resolve_data_file(&paths, cli.data);
    debug!(path = %data_file.display(), "resolved data file");

    match command {
        Commands::Tui => {
            let (store, load_error) = load_for_session(&data_file);
            run_tui(store.as_ref(), &settings, load_error)?;
        }
        Commands::Browse => {
            let (store, load_error) = load_for_session(&data_file);
            run_line_session(store.as_ref(), &settings, load_error.as_deref())?;
        }
        Commands::List { category, format } => {
            let store = EntryStore::load(&data_file)?;
            handle_list(&store, category.as_deref(), format)?;
        }
        Commands::Search { query, format } => {
            let store = EntryStore::load(&data_file)?;
            handle_search(&store, &query, format)?;
        }
        Commands::Show { term } => {
            let store = EntryStore::load(&data_file)?;
            handle_show(&store, &settings, &term)?;
        }
        Commands::Open { term, print } => {
            let store = EntryStore::load(&data_file)?;
            handle_open(&store, &settings, &term, print, &mut SystemLauncher)?;
        }
        Commands::Contact => {
            handle_contact(&settings, &mut SystemClipboard::waiting())?;
        }
        Commands::Init { force } => {
            handle_init(&data_file, force)?;
        }
        Commands::Config { init } => {
            handle_config(&paths, &settings, &data_file, init)?;
        }
    }

    Ok(())
}
