//! Reddit post sentiment client
//!
//! Submits a Reddit post URL to the analysis service and renders the
//! sentiment summary from the controller's view state.

use anyhow::Context;
use clap::{Parser, Subcommand};
use reddit_vibes::{
    client::AnalysisClient,
    clipboard::SystemClipboard,
    config::Config,
    controller::{InteractionState, SessionController},
    types::AnalysisResult,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reddit-vibes")]
#[command(about = "Sentiment summary client for Reddit posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Analysis service base URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Reddit post
    Analyze {
        /// URL of the Reddit post
        url: String,

        /// Also print the raw response payload
        #[arg(long)]
        raw: bool,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Check that the analysis service is reachable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = if std::path::Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        Config::load_default().unwrap_or_else(|_| {
            tracing::debug!("no configuration file found, using defaults");
            Config::default()
        })
    };
    if let Some(endpoint) = cli.endpoint {
        config.service.base_url = endpoint;
    }

    let client = AnalysisClient::new(
        &config.service.base_url,
        Duration::from_secs(config.service.timeout_secs),
    )
    .context("failed to build analysis client")?;

    match cli.command {
        Commands::Analyze { url, raw, copy } => analyze(client, &url, raw, copy).await,
        Commands::Health => health(client).await,
    }
}

async fn analyze(client: AnalysisClient, url: &str, raw: bool, copy: bool) -> anyhow::Result<()> {
    let mut controller = SessionController::new(Box::new(client), Box::new(SystemClipboard));
    controller.submit(url).await;

    if raw {
        controller.toggle_raw_view();
    }

    let view = controller.view();
    let result = match &view.state {
        InteractionState::Success(result) => result,
        InteractionState::Failed(message) => anyhow::bail!("{message}"),
        InteractionState::Idle {
            notice: Some(notice),
        } => anyhow::bail!("{notice}"),
        InteractionState::Idle { notice: None } | InteractionState::Loading => {
            anyhow::bail!("analysis did not complete")
        }
    };

    print_summary(result);

    if view.raw_view_visible {
        println!("\n--- raw response ---");
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    if copy {
        controller.copy_result();
        if controller.view().copy_acknowledged {
            println!("\nCopied analysis result to clipboard");
        }
    }

    Ok(())
}

async fn health(client: AnalysisClient) -> anyhow::Result<()> {
    client.health().await?;
    println!("Analysis service is healthy");
    Ok(())
}

fn print_summary(result: &AnalysisResult) {
    println!("{}", result.post_title);
    println!("Overall sentiment: {}", result.overall_sentiment.as_str());
    println!("Controversy: {:.2}", result.controversy);

    println!();
    for group in &result.groups {
        println!(
            "  {:<8} {:>5} comments ({:>5.1}%)",
            group.label.as_str(),
            group.count,
            group.proportion * 100.0
        );
    }
    println!("  {} comments classified", result.total_comments());

    if !result.keywords.is_empty() {
        println!("\nKeywords: {}", result.keywords.join(", "));
    }

    if !result.notable_comments.is_empty() {
        println!("\nNotable comments:");
        for comment in &result.notable_comments {
            println!(
                "  [{:+}] ({}) {}",
                comment.score,
                comment.sentiment.as_str(),
                comment.snippet
            );
        }
    }
}
