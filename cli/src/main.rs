use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use todo_core::{Filter, TodoClient, TodoStore};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod render;
mod transport;

use render::{render, render_line};
use transport::UreqTransport;

/// Manage todos stored behind a REST backend.
#[derive(Parser)]
#[command(name = "todo", version)]
struct Cli {
    /// Base URL of the todo API, without the `/todos` suffix.
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Which todos to show: all, active or completed.
    #[arg(long, global = true, default_value_t = Filter::All)]
    filter: Filter,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the todo list (the default).
    List,
    /// Add a todo.
    Add {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Change a todo's text.
    Edit {
        id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Flip a todo between active and completed.
    Toggle { id: String },
    /// Mark every todo completed, or active with --undo.
    ToggleAll {
        #[arg(long)]
        undo: bool,
    },
    /// Delete a todo.
    Remove { id: String },
    /// List todos whose text contains the term, ignoring case.
    Search { term: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!(base_url = %cli.base_url, filter = %cli.filter, "starting");

    let store = TodoStore::new(TodoClient::new(&cli.base_url), UreqTransport::new());
    if !store.list() {
        bail!("could not load todos from {}", cli.base_url);
    }
    store.set_filter(cli.filter);

    match cli.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add { text } => {
            if store.add(&text.join(" ")).is_none() {
                bail!("todo was not added");
            }
        }
        Command::Edit { id, text } => {
            if store.change_text(&id, &text.join(" ")).is_none() {
                bail!("todo {id} was not changed");
            }
        }
        Command::Toggle { id } => {
            if store.toggle(&id).with_context(|| format!("toggle {id}"))?.is_none() {
                bail!("todo {id} was not toggled");
            }
        }
        Command::ToggleAll { undo } => {
            let total = store.counts().total;
            let updated = store.toggle_all(!undo);
            if updated < total {
                eprintln!("{} of {total} todos were not updated", total - updated);
            }
        }
        Command::Remove { id } => {
            if !store.remove(&id) {
                bail!("todo {id} was not removed");
            }
        }
        Command::Search { term } => {
            for todo in store.search(&term) {
                println!("{}", render_line(&todo));
            }
            return Ok(());
        }
    }

    print!("{}", render(&store.visible(), store.counts(), store.filter()));
    Ok(())
}
