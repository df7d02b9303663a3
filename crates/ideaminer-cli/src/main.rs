mod mine;
mod search;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ideaminer")]
#[command(about = "Mine Reddit pain points into AI product ideas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, collect, and analyze — prints ideas as they complete.
    Mine(RunArgs),
    /// Collect only — prints the filtered posts as JSON.
    Search(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Search keyword, passed through to Reddit verbatim (quote for exact
    /// phrases).
    #[arg(default_value = "\"I hate\"")]
    keyword: String,

    /// Minimum upvotes a post needs to be considered.
    #[arg(long, default_value_t = 5)]
    min_ups: i64,

    /// Maximum number of posts to collect.
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ideaminer_core::load_app_config_from_env()?;

    match cli.command {
        Commands::Mine(args) => mine::run(&config, &args.keyword, args.min_ups, args.limit).await,
        Commands::Search(args) => {
            search::run(&config, &args.keyword, args.min_ups, args.limit).await
        }
    }
}
