use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use copysmith::config::Config;
use copysmith::generation::generator::{generate_copy, CopyRequest};
use copysmith::generation::render::{export_text, format_console};
use copysmith::generation::tone::ToneCategory;
use copysmith::llm_client::OpenAiClient;

/// Generate marketing ad copy from the command line.
#[derive(Debug, Parser)]
#[command(name = "copysmith", version, about = "AI marketing copy generator")]
struct Cli {
    /// Brand name
    #[arg(long)]
    brand: String,

    /// Product or service description
    #[arg(long)]
    product: String,

    /// Target audience description
    #[arg(long)]
    audience: String,

    /// Tone of voice; auto-detected from the inputs when omitted
    #[arg(long, value_enum)]
    tone: Option<ToneCategory>,

    /// Write the generated copy to a plain-text file
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let llm = OpenAiClient::new(config.openai_api_key);

    let request = CopyRequest {
        brand: cli.brand,
        product: cli.product,
        audience: cli.audience,
        tone: cli.tone,
    };

    info!("generating copy for brand '{}'", request.brand);

    let outcome = generate_copy(&llm, &request).await?;

    if outcome.tone_detected {
        println!("Detected tone: {}", outcome.tone);
    }

    println!("{}", format_console(&outcome.copy));

    if let Some(path) = cli.out {
        std::fs::write(&path, export_text(&outcome.copy))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}
