//! Command-line client for the URL shortening service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL when omitted)
//! url-shortener-client shorten https://example.com/some/long/page
//!
//! # Request a custom path, show a QR code
//! url-shortener-client shorten https://example.com --custom promo2024 --qr
//!
//! # Pick a random path locally, retrying on collisions
//! url-shortener-client shorten https://example.com --random
//!
//! # Show statistics of a short link and save its QR code
//! url-shortener-client stats promo2024 --output promo.svg
//!
//! # Generate identifiers offline
//! url-shortener-client generate --count 5
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (required for `shorten` and `stats`)
//! - `HTTP_TIMEOUT_SECONDS`, `RUST_LOG`, `LOG_FORMAT` (optional)

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use rand::SeedableRng;
use rand::rngs::StdRng;

use url_shortener_client::config;
use url_shortener_client::domain::entities::LinkStatistics;
use url_shortener_client::domain::form::CreateLinkForm;
use url_shortener_client::error::AppError;
use url_shortener_client::qr::{self, QrFormat};
use url_shortener_client::state::AppState;
use url_shortener_client::telemetry::init_tracing;
use url_shortener_client::utils::identifier::IdentifierGenerator;

/// Client for a URL shortening service.
#[derive(Parser)]
#[command(name = "url-shortener-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a shortened URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Request a custom path (5-128 alphanumeric characters)
        #[arg(short, long, conflicts_with = "random")]
        custom: Option<String>,

        /// Generate a random path locally and retry on collisions
        #[arg(short, long)]
        random: bool,

        /// Print a QR code of the short link
        #[arg(long)]
        qr: bool,

        /// Save a QR code of the short link (SVG for `*.svg`, text otherwise)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show usage statistics of a short link
    Stats {
        /// Path of the short link
        path: String,

        /// Print a QR code of the short link
        #[arg(long)]
        qr: bool,

        /// Save a QR code of the short link (SVG for `*.svg`, text otherwise)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate random identifiers without contacting the service
    Generate {
        /// Number of identifiers
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render any value as a QR code
    Qr {
        /// Value to encode
        value: String,

        /// Save to this file (SVG for `*.svg`, text otherwise) instead of printing
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Generate { count, seed } => {
            handle_generate(count, seed);
            Ok(())
        }
        Commands::Qr { value, output } => handle_qr(&value, output.as_deref()),
        Commands::Shorten {
            url,
            custom,
            random,
            qr,
            output,
        } => {
            let state = connect()?;
            let url = match url {
                Some(url) => url,
                None => prompt_url()?,
            };
            handle_shorten(&state, url, custom, random, qr, output.as_deref()).await
        }
        Commands::Stats { path, qr, output } => {
            let state = connect()?;
            handle_stats(&state, &path, qr, output.as_deref()).await
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            report_error(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Loads configuration, installs logging and wires the services.
fn connect() -> Result<AppState> {
    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    AppState::from_config(&config).context("Failed to initialize API client")
}

fn prompt_url() -> Result<String> {
    let url = Input::<String>::new()
        .with_prompt("Original URL")
        .allow_empty(true)
        .interact_text()?;
    Ok(url)
}

async fn handle_shorten(
    state: &AppState,
    url: String,
    custom: Option<String>,
    random: bool,
    qr: bool,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let link = if random {
        state.link_service.create_with_generated_path(url).await?
    } else {
        let mut form = CreateLinkForm::new(url);
        form.custom_url_path = custom;
        state.link_service.create_short_link(form).await?
    };

    println!("{}", "This is your shortened URL".bright_white().bold());
    println!("  {}", link.shortened_url.bright_cyan());

    show_qr(&link.shortened_url, qr, output)
}

async fn handle_stats(
    state: &AppState,
    path: &str,
    qr: bool,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let stats = state.stats_service.get_statistics(path).await?;

    println!(
        "{} {}",
        "Statistics of".bright_white().bold(),
        state.stats_service.short_url(path).bright_blue().bold()
    );
    print_statistics(&stats);

    show_qr(&stats.short_url, qr, output)
}

fn print_statistics(stats: &LinkStatistics) {
    let created_at = stats
        .created_at_utc()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| stats.created_at.clone());

    println!("  Created At:   {}", created_at.cyan());
    println!(
        "  Custom URL:   {}",
        (if stats.is_custom { "Yes" } else { "No" }).cyan()
    );
    println!("  Original URL: {}", stats.original_url.cyan());
    println!("  Short URL:    {}", stats.short_url.cyan());
    println!(
        "  Visit Count:  {}",
        stats.visit_count.to_string().bright_yellow().bold()
    );
}

fn handle_generate(count: usize, seed: Option<u64>) {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = IdentifierGenerator::with_rng(rng);

    for _ in 0..count {
        println!("{}", generator.generate());
    }
}

fn handle_qr(value: &str, output: Option<&Path>) -> Result<(), AppError> {
    show_qr(value, output.is_none(), output)
}

/// Prints and/or saves a QR code of `value`.
fn show_qr(value: &str, print: bool, output: Option<&Path>) -> Result<(), AppError> {
    if print {
        println!();
        println!("{}", qr::render(value, QrFormat::Terminal)?);
    }

    if let Some(path) = output {
        let rendered = qr::render(value, QrFormat::from_path(path))?;
        std::fs::write(path, rendered)
            .map_err(|e| AppError::Qr(format!("cannot write {}: {e}", path.display())))?;
        println!("{} {}", "QR code saved to".green(), path.display());
    }

    Ok(())
}

/// Prints an error the way the forms display it: field errors inline,
/// everything else as one message.
fn report_error(err: &AppError) {
    if let Some(fields) = err.field_errors() {
        if let Some(e) = &fields.original_url {
            eprintln!("{} {}", "originalUrl:".red().bold(), e.to_string().red());
        }
        if let Some(e) = &fields.custom_url_path {
            eprintln!("{} {}", "customUrlPath:".red().bold(), e.to_string().red());
        }
        return;
    }

    if let AppError::InvalidPath(e) = err {
        eprintln!("{} {}", "path:".red().bold(), e.to_string().red());
        return;
    }

    tracing::debug!(error = %err, "Request failed");
    eprintln!(
        "{} {}",
        "An error occurred:".red().bold(),
        err.user_message().red()
    );
}
