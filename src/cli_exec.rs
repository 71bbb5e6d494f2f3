use anyhow::{Context, Result};

use checklist::config::Config;
use checklist::controller::{Controller, EditOutcome};
use checklist::model::pluralize;
use checklist::store::KeyValueStore;

use crate::Commands;

pub(crate) fn handle_command(config: &Config, command: Commands) -> Result<()> {
    let store = config.open_store()?;
    let mut ctl = Controller::start(store, config.namespace.clone());

    match command {
        Commands::List { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(ctl.items()).context("serialize items json")?
                );
            } else {
                print_list(&ctl);
            }
        }

        Commands::Add { title } => match ctl.create(&title.join(" "))? {
            Some(item) => println!("{}", item.id),
            None => anyhow::bail!("title must not be blank"),
        },

        Commands::Toggle { id } => {
            let id = ctl.resolve_id(&id)?;
            ctl.toggle(&id)?;
            let state = match ctl.item(&id) {
                Some(item) if item.completed => "completed",
                _ => "active",
            };
            println!("{} {}", id.short(), state);
        }

        Commands::Edit { id, title } => {
            let id = ctl.resolve_id(&id)?;
            match ctl.edit(&id, &title.join(" "))? {
                EditOutcome::Saved => println!("Updated {}", id.short()),
                EditOutcome::Deleted => println!("Deleted {} (blank title)", id.short()),
            }
        }

        Commands::Rm { id } => {
            let id = ctl.resolve_id(&id)?;
            ctl.delete(&id)?;
            println!("Deleted {}", id.short());
        }

        Commands::ClearCompleted => {
            let n = ctl.clear_completed()?;
            println!("Cleared {} completed {}", n, pluralize(n, "item"));
        }
    }

    Ok(())
}

fn print_list<S: KeyValueStore>(ctl: &Controller<S>) {
    if ctl.items().is_empty() {
        println!("(nothing to do)");
        return;
    }
    for item in ctl.items() {
        let marker = if item.completed { "x" } else { " " };
        println!("[{}] {} {}", marker, item.id.short(), item.title);
    }
    let footer = ctl.footer();
    if footer.is_visible() {
        println!("{}", footer.count_label());
    }
}
