use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use baby_guess_backend::config::AppConfig;
use baby_guess_backend::io::{get_results, submit_guess};
use baby_guess_backend::initialize_backend;
use shared::{GuessEntry, GuessForm, ResultsRequest, ResultsResponse, SubmitGuessResponse};

/// Baby shower guess book
#[derive(Parser, Debug)]
#[command(name = "baby-guess")]
#[command(about = "Record guesses about the baby and reveal them behind a password")]
struct Args {
    /// YAML config file (environment variables still override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the response as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the guess book if it does not exist yet
    Init,
    /// Record one guess
    Submit {
        #[arg(long, default_value = "")]
        guest_name: String,
        #[arg(long, default_value = "")]
        baby_name: String,
        /// boy, girl or empty for not sure
        #[arg(long, default_value = "")]
        gender: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        due_date: String,
        /// HH:MM, 24 hour clock
        #[arg(long, default_value = "")]
        due_time: String,
        /// Weight in kilograms
        #[arg(long, default_value = "")]
        weight: String,
    },
    /// Show every guess (needs the password unless SHOW_RESULTS=true)
    Results {
        #[arg(long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays a clean table
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let app_state = initialize_backend(&config).await?;

    let exit_code = match args.command {
        Command::Init => {
            let access = if app_state.results_gate.is_public() { "public" } else { "password protected" };
            info!("Guess book ready in {} (results {})", config.data_dir.display(), access);
            ExitCode::SUCCESS
        }
        Command::Submit {
            guest_name,
            baby_name,
            gender,
            due_date,
            due_time,
            weight,
        } => {
            let form = GuessForm {
                guest_name,
                baby_name,
                gender,
                due_date,
                due_time,
                weight,
            };
            let response = submit_guess(&app_state, form).await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                exit_code(response.success)
            } else {
                print_submission(&response)
            }
        }
        Command::Results { password } => {
            let response = get_results(&app_state, ResultsRequest { password }).await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                exit_code(response.unlocked)
            } else {
                print_results(&response)
            }
        }
    };

    Ok(exit_code)
}

fn exit_code(accepted: bool) -> ExitCode {
    if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_submission(response: &SubmitGuessResponse) -> ExitCode {
    if let Some(entry) = response.entry.as_ref().filter(|_| response.success) {
        println!("Thanks {}, your guess was saved.", entry.guest_name);
        return ExitCode::SUCCESS;
    }

    for field_error in &response.errors {
        eprintln!("{}: {}", field_error.field, field_error.message);
    }
    if let Some(message) = &response.storage_error {
        eprintln!("{}", message);
    }
    ExitCode::FAILURE
}

fn print_results(response: &ResultsResponse) -> ExitCode {
    if !response.unlocked {
        match &response.error {
            Some(message) => eprintln!("{}", message),
            None => eprintln!("Results are locked. Pass --password to see them."),
        }
        return ExitCode::FAILURE;
    }

    let rows: Vec<[&str; 7]> = response.rows.iter().map(GuessEntry::cells).collect();
    let mut widths: Vec<usize> = response.headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<&str> = response.headers.iter().map(String::as_str).collect();
    println!("{}", format_row(&headers, &widths));
    println!("{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    for row in &rows {
        println!("{}", format_row(row, &widths));
    }
    println!("{} guess(es)", rows.len());
    ExitCode::SUCCESS
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
