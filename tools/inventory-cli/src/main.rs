//! Inventory CLI - Terminal front-end for the inventory backend.
//!
//! Commands:
//! - `inventory products` - List, add, edit and delete products
//! - `inventory suppliers` - List, add, edit and delete suppliers
//! - `inventory orders` - List, add, edit and delete orders
//! - `inventory session` - Interactive session over one or all pages
//! - `inventory config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use inventory_console::ConsoleError;

use commands::{ConfigArgs, OrdersArgs, ProductsArgs, SessionArgs, SuppliersArgs};

/// Inventory CLI - Manage products, suppliers and orders
#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Backend base URL (overrides INVENTORY_API_BASE and the config file)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Named environment from the config file
    #[arg(short, long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage products
    Products(ProductsArgs),

    /// Manage suppliers
    Suppliers(SuppliersArgs),

    /// Manage orders
    Orders(OrdersArgs),

    /// Start an interactive session
    Session(SessionArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(
        cli.config.as_deref(),
        cli.env.as_deref(),
        cli.api_base.as_deref(),
        output,
    )?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Suppliers(args) => commands::suppliers::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        // Controller failures have already been shown to the user.
        if e.downcast_ref::<ConsoleError>().is_none() {
            ctx.output.error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}
