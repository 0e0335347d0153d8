//! Partner logo CLI — the main entry point.
//!
//! Commands:
//! - `onboard`  — Write the default config
//! - `status`   — Show configuration and backend status
//! - `catalog`  — List catalog assets for a category
//! - `controls` — Print the inspector property controls
//! - `resolve`  — Mount a component, resolve its asset, print the render
//! - `cache`    — Inspect cached entries

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "partnerlogo",
    about = "Partner logo resolver with a persistent asset cache",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Onboard,

    /// Show configuration and backend status
    Status,

    /// List catalog assets for a category
    Catalog {
        /// Airline, OTA, Hotel or Payment
        #[arg(default_value = "Airline")]
        category: String,
    },

    /// Print the inspector property controls as JSON
    Controls,

    /// Resolve a component's asset and print its render description
    Resolve(ResolveArgs),

    /// Inspect the asset cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Host-assigned component id
    component_id: String,

    /// Full component props as JSON; replaces the flags below. The
    /// positional component id always wins over an `id` in the JSON
    #[arg(long)]
    props: Option<String>,

    /// Airline, OTA, Hotel or Payment
    #[arg(short, long)]
    category: Option<String>,

    #[arg(long)]
    airline: Option<String>,

    #[arg(long)]
    ota: Option<String>,

    #[arg(long)]
    hotel: Option<String>,

    #[arg(long)]
    card: Option<String>,

    /// 0 = colour, 1 = white
    #[arg(long, default_value_t = 0)]
    variant: u8,

    /// Use the thumbnail instead of the full logo
    #[arg(long)]
    thumb: bool,

    /// Paint the accent color behind the logo
    #[arg(long)]
    fill: bool,

    #[arg(long, default_value_t = 0.0)]
    radius: f64,
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Show the cached entry for a component
    Show {
        /// Host-assigned component id
        component_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Status => commands::status::run().await?,
        Commands::Catalog { category } => commands::catalog::list(&category).await?,
        Commands::Controls => commands::catalog::controls().await?,
        Commands::Resolve(args) => commands::resolve::run(args).await?,
        Commands::Cache { command } => match command {
            CacheCommands::Show { component_id } => commands::cache::show(&component_id).await?,
        },
    }

    Ok(())
}
