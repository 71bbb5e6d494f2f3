use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use checklist::config::Config;
use checklist::logging::{self, LogTarget};

mod cli_exec;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Single-list task tracker", long_about = None)]
struct Cli {
    /// Directory holding the stored lists (defaults to ./.checklist)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Storage key of the list to open
    #[arg(long, global = true, value_name = "NAME")]
    namespace: Option<String>,

    /// Log file for the interactive UI (defaults to <DATA_DIR>/checklist.log)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the list
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an item
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Flip an item between active and completed
    Toggle {
        /// Item id or unique id prefix
        id: String,
    },

    /// Change an item's title (a blank title deletes the item)
    Edit {
        /// Item id or unique id prefix
        id: String,
        title: Vec<String>,
    },

    /// Delete an item
    Rm {
        /// Item id or unique id prefix
        id: String,
    },

    /// Delete every completed item
    ClearCompleted,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.data_dir, cli.namespace, cli.log_file)?;

    match cli.command {
        None => {
            logging::init(LogTarget::File(&config.log_path()))?;
            checklist::tui::run(&config)
        }
        Some(command) => {
            logging::init(LogTarget::Stderr)?;
            cli_exec::handle_command(&config, command)
        }
    }
}
