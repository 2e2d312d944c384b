mod config;
mod desktop;
mod index;
mod matchers;
mod model;
mod query;

use crate::config::load_config;
use crate::model::Entry;
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query string, as typed in the launcher input
    query: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config()?;

    let entries = if config.categories.apps {
        index::build()
    } else {
        Vec::new()
    };

    if config.categories.apps {
        print_category("Applications", &matchers::app::search(&args.query, &entries));
    }
    if config.categories.files {
        print_category("Files", &matchers::file::search(&args.query));
    }
    if config.categories.commands {
        print_category("Commands", &matchers::command::search(&args.query));
    }

    Ok(())
}

fn print_category(title: &str, entries: &[Entry]) {
    if entries.is_empty() {
        return;
    }
    println!("{title}:");
    for entry in entries {
        println!("  [{}] {}  ->  {}", entry.icon, entry.label.markup(), entry.completion);
    }
}
