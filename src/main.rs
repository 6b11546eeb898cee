use clap::{Parser, Subcommand};
use jobdeck_core::config::Config;

use jobdeck::commands;

#[derive(Parser)]
#[command(name = "jobdeck", about = "Terminal client for remote job listings")]
struct Cli {
    /// Log at debug level to stderr (RUST_LOG overrides).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search job listings.
    Search {
        /// Free-text search term.
        query: Option<String>,
        /// Category slug or name (e.g. "software-dev").
        #[arg(long)]
        category: Option<String>,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size (defaults to the configured per_page).
        #[arg(long)]
        per_page: Option<u32>,
        /// Print canonical records as pretty JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the available category filter values.
    Categories {
        /// Print categories as pretty JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show a single job by id.
    Show {
        id: String,
        /// Print the canonical record as pretty JSON.
        #[arg(long)]
        json: bool,
    },
    /// Manage the favorites list.
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorited jobs.
    List {
        /// Print canonical records as pretty JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add a job to favorites.
    Add { id: String },
    /// Remove a job from favorites.
    Remove { id: String },
    /// Toggle a job's favorite state.
    Toggle { id: String },
    /// Check whether a job is favorited.
    Check { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let cfg = Config::load()?;

    match cli.command {
        Command::Search {
            query,
            category,
            page,
            per_page,
            json,
        } => commands::search(&cfg, query, category, page, per_page, json).await,
        Command::Categories { json } => commands::categories(&cfg, json).await,
        Command::Show { id, json } => commands::show(&cfg, &id, json).await,
        Command::Favorites { action } => match action {
            FavoritesAction::List { json } => commands::favorites_list(&cfg, json).await,
            FavoritesAction::Add { id } => commands::favorites_add(&cfg, &id).await,
            FavoritesAction::Remove { id } => commands::favorites_remove(&cfg, &id).await,
            FavoritesAction::Toggle { id } => commands::favorites_toggle(&cfg, &id).await,
            FavoritesAction::Check { id } => commands::favorites_check(&cfg, &id).await,
        },
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}
