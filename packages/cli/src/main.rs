#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the Tapak location analytics engine.
//!
//! ```text
//! tapak_cli analyze <FILE> [--pretty | --summary]
//! tapak_cli score <FILE>
//! tapak_cli demand <FILE> [--base-score N]
//! tapak_cli kpis <FILE> [--success-score N]
//! tapak_cli briefing <FILE>
//! tapak_cli serve
//! ```
//!
//! `<FILE>` holds one set of analysis inputs as JSON, or as TOML when the
//! file name ends in `.toml`. Running with no subcommand enters interactive
//! mode.

mod interactive;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tapak_analytics::input::load_file;
use tapak_analytics::{
    analyze, build_briefing, compute_kpis, compute_success_score, generate_seasonal_demand,
    score_breakdown,
};

#[derive(Parser)]
#[command(
    name = "tapak_cli",
    about = "Score locations and build seasonal demand curves from analysis inputs"
)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis (score, demand curve and KPIs)
    Analyze {
        /// Analysis inputs file (JSON or TOML)
        file: PathBuf,
        /// Print a readable summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
    /// Show the success score and how each signal contributed
    Score {
        /// Analysis inputs file (JSON or TOML)
        file: PathBuf,
    },
    /// Generate the 12-month seasonal demand curve
    Demand {
        /// Analysis inputs file (JSON or TOML)
        file: PathBuf,
        /// Score used to scale the curve (defaults to the computed score)
        #[arg(long)]
        base_score: Option<u8>,
    },
    /// Compute the KPI summary
    Kpis {
        /// Analysis inputs file (JSON or TOML)
        file: PathBuf,
        /// Score the KPIs are derived from (defaults to the computed score)
        #[arg(long)]
        success_score: Option<u8>,
    },
    /// Print the chat assistant briefing for the analysis
    Briefing {
        /// Analysis inputs file (JSON or TOML)
        file: PathBuf,
    },
    /// Start the HTTP API server
    Serve,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run();
    };

    match command {
        Commands::Analyze { file, summary } => {
            let inputs = load_file(&file)?;
            let report = analyze(&inputs);
            if summary {
                println!("{}", output::summarize(&report));
            } else {
                output::print_json(&report, cli.pretty)?;
            }
        }
        Commands::Score { file } => {
            let inputs = load_file(&file)?;
            output::print_json(&score_breakdown(&inputs), cli.pretty)?;
        }
        Commands::Demand { file, base_score } => {
            let inputs = load_file(&file)?;
            let base_score =
                base_score.unwrap_or_else(|| compute_success_score(&inputs).value());
            output::print_json(&generate_seasonal_demand(&inputs, base_score), cli.pretty)?;
        }
        Commands::Kpis {
            file,
            success_score,
        } => {
            let inputs = load_file(&file)?;
            let success_score =
                success_score.unwrap_or_else(|| compute_success_score(&inputs).value());
            let kpis = compute_kpis(&inputs.businesses, success_score, inputs.ndvi.as_ref());
            output::print_json(&kpis, cli.pretty)?;
        }
        Commands::Briefing { file } => {
            let inputs = load_file(&file)?;
            print!("{}", build_briefing(&inputs, compute_success_score(&inputs)));
        }
        Commands::Serve => {
            actix_web::rt::System::new().block_on(tapak_server::run_server())?;
        }
    }

    Ok(())
}
