//! Command Line Interface for the Raydium LP extractor.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use raydium_lp_data::Database;
use raydium_lp_protocols::RpcProvider;
use raydium_lp_protocols::raydium::{LpTransactionExtractor, RAYDIUM_AMM_V4_PROGRAM_ID};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "raydium-lp-cli")]
#[command(about = "Raydium AMM pool-creation transaction extractor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one transaction and extract its pool-creation record
    Extract {
        /// Transaction signature (base58)
        signature: String,
    },
    /// Look up a stored record by its AMM pool address
    Show {
        /// AMM pool address (base58)
        amm_id: String,
    },
    /// Show recently stored pool records
    List {
        /// Maximum number of records to print
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mongo_uri =
        env::var("MONGO_URI").context("MONGO_URI must be set in .env or environment")?;
    let database = Database::connect(&mongo_uri).await?;
    info!("connected to MongoDB");

    match &cli.command {
        Commands::Extract { signature } => {
            let rpc_url = env::var("SOLANA_RPC_URL")
                .context("SOLANA_RPC_URL must be set in .env or environment")?;
            let program_id = env::var("RAYDIUM_AMM_PROGRAM_ID")
                .unwrap_or_else(|_| RAYDIUM_AMM_V4_PROGRAM_ID.to_string());
            let program_id = Pubkey::from_str(&program_id)
                .context("RAYDIUM_AMM_PROGRAM_ID is not a valid pubkey")?;
            let signature =
                Signature::from_str(signature).context("signature is not valid base58")?;

            let extractor = LpTransactionExtractor::new(
                RpcProvider::new(rpc_url),
                program_id,
                Arc::new(database.lp_transactions()),
            );
            match extractor.process_transaction(&signature).await? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("No pool-creation instruction found for {signature}"),
            }
        }
        Commands::Show { amm_id } => {
            match database.lp_transactions().find_by_amm_id(amm_id).await? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("No stored record for {amm_id}"),
            }
        }
        Commands::List { limit } => {
            let records = database.lp_transactions().find_recent(*limit).await?;
            if records.is_empty() {
                println!("No stored pool records.");
            }
            for record in records {
                println!(
                    "{}  coin={}  pc={}  deployer={}",
                    record.amm_id, record.coin_mint, record.pc_mint, record.deployer
                );
            }
        }
    }

    Ok(())
}
