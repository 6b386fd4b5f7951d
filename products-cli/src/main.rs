//! Products CLI
//!
//! Command-line interface for the product catalog API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use products_client::ProductsClient;

#[derive(Parser)]
#[command(name = "products")]
#[command(author, version, about = "Product catalog API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the products API
    #[arg(
        long,
        env = "PRODUCTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new product
    Create {
        /// Unique 10-character product code
        #[arg(long)]
        code: String,
        /// Product name
        #[arg(long)]
        name: String,
        /// Price in EUR, e.g. 19.99
        #[arg(long)]
        price_eur: Decimal,
        /// Mark the product as available
        #[arg(long)]
        available: bool,
    },
    /// Get a product by code
    Get {
        /// Product code
        code: String,
    },
    /// List all products
    List,
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ProductsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }
        Commands::Create {
            code,
            name,
            price_eur,
            available,
        } => {
            let product = client
                .create_product(&code, &name, price_eur, available)
                .await?;
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        Commands::Get { code } => {
            let product = client.get_product(&code).await?;
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        Commands::List => {
            let products = client.list_products().await?;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
    }

    Ok(())
}
