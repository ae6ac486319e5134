mod commands;
mod destination;
mod format;
mod logging;
mod schema;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{render::RenderArgs, schema::SchemaArgs};

#[derive(Parser)]
#[command(name = "bqrender", about = "Render BigQuery result rows in various formats")]
struct Cli {
    /// Log more (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render newline-delimited JSON rows as table/markdown/json/json-lines/csv
    Render(RenderArgs),
    /// Print a schema and the columns it flattens to
    Schema(SchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Render(args) => args.run().await,
        Commands::Schema(args) => args.run().await,
    }
}
