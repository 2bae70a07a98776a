use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod auth;
mod config;
mod llm;
mod prompt;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Categorize bank-statement PDFs into a transaction CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a statement, categorize it via Claude, and export the CSV
    Analyze {
        /// Path to the statement PDF
        statement: PathBuf,

        /// Output CSV path (overwritten if present)
        #[arg(long, default_value = "categorized_transactions.csv")]
        out: PathBuf,

        /// Override the configured model id
        #[arg(long)]
        model: Option<String>,
    },

    /// Write a default ~/.tally/config.toml
    Init,

    /// Credential management
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Store an Anthropic API key in ~/.tally/auth.json
    PasteApiKey,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // One diagnostic line on failure, nothing partial on disk from the
    // stages that come before the write.
    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { statement, out, model } => analyze(&statement, &out, model).await,
        Command::Init => config::init_config(),
        Command::Auth { command } => match command {
            AuthCommand::PasteApiKey => auth::paste_api_key(),
        },
    }
}

async fn analyze(statement: &Path, out: &Path, model: Option<String>) -> Result<()> {
    let mut cfg = config::load_config()?;
    if let Some(model) = model {
        cfg.llm.model = model;
    }

    // Resolve the credential up front so a missing key fails before any
    // extraction or network work.
    let api_key = auth::resolve_api_key()?;

    log::info!("reading {}", statement.display());
    let text = tally_ingest::extract_statement_text(statement)?;

    let prompt = prompt::categorization_prompt(&text);
    let client = llm::ClaudeClient::new(&cfg.llm, api_key);
    log::info!("requesting categorization from {}", cfg.llm.model);
    let reply = client.categorize(&prompt).await?;

    let mut table = tally_table::parse_reply(&reply)?;
    table.sort_by_date();
    tally_table::write_table(&table, out)?;

    let summary = tally_core::validate(&table);

    println!("\nAnalysis complete");
    println!("{}", "-".repeat(50));
    println!("Total transactions processed: {}", summary.total_transactions);
    println!(
        "Date range: {}",
        summary.date_range().unwrap_or_else(|| "(none)".to_string())
    );
    println!("Categories found: {}", summary.categories_found.join(", "));
    if !summary.unknown_categories.is_empty() {
        println!(
            "Categories outside the canonical set: {}",
            summary.unknown_categories.join(", ")
        );
    }
    println!("Total amount: {:.2}", summary.total_amount);
    println!("\nResults have been exported to: {}", out.display());

    Ok(())
}
