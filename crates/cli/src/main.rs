use clap::{Parser, Subcommand};

mod commands;

use commands::{FetchDataArgs, LiquidityArgs, ScreenArgs};

#[derive(Parser)]
#[command(name = "pairscan")]
#[command(about = "Pairs-trading candidate screener", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen the ticker universe and write the pair metrics table
    Screen(ScreenArgs),
    /// Fetch historical klines for one symbol and dump them to CSV
    FetchData(FetchDataArgs),
    /// Print the yearly liquidity score for one symbol
    Liquidity(LiquidityArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Screen(args) => {
            commands::run_screen(args).await?;
        }
        Commands::FetchData(args) => {
            commands::run_fetch_data(args).await?;
        }
        Commands::Liquidity(args) => {
            commands::run_liquidity(args).await?;
        }
    }

    Ok(())
}
