use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "cropmatch")]
#[command(about = "Cropmatch CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a crop name or NFT ID against the product catalog
    Match {
        /// Crop name or NFT ID, e.g. "tomato" or "Tomato #124"
        input: String,
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Show catalog metadata and the supported crop types
    Info {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// List all catalog products
    Products {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { input, server } => {
            match_crop(&server, &input).await?;
        }
        Commands::Info { server } => {
            info(&server).await?;
        }
        Commands::Products { server } => {
            products(&server).await?;
        }
    }

    Ok(())
}

async fn match_crop(server: &str, input: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{server}/api/match-crop"))
        .json(&serde_json::json!({ "cropInput": input }))
        .send()
        .await
        .context("match request failed")?;

    print_json(response).await
}

async fn info(server: &str) -> Result<()> {
    let response = reqwest::get(format!("{server}/api/match-crop"))
        .await
        .context("info request failed")?;

    print_json(response).await
}

async fn products(server: &str) -> Result<()> {
    let response = reqwest::get(format!("{server}/api/products"))
        .await
        .context("products request failed")?;

    print_json(response).await
}

/// Print the response body as pretty JSON, failing on non-2xx statuses
/// after showing the server's error body.
async fn print_json(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .context("server returned invalid JSON")?;

    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        bail!("server returned {status}");
    }

    Ok(())
}
