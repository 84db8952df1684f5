//! Interactive mode for the CLI.
//!
//! Lets the user pick a tool and prompts for the inputs file or server
//! settings.

use std::path::PathBuf;

use dialoguer::{Input, Select};
use tapak_analytics::input::load_file;
use tapak_analytics::{analyze, build_briefing, compute_success_score};

use crate::output;

/// Tools offered in interactive mode.
enum Tool {
    Analyze,
    Briefing,
    Server,
}

impl Tool {
    const ALL: &[Self] = &[Self::Analyze, Self::Briefing, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Analyze => "Analyze a location",
            Self::Briefing => "Print assistant briefing",
            Self::Server => "Start server",
        }
    }
}

fn prompt_inputs_path() -> Result<PathBuf, dialoguer::Error> {
    let path: String = Input::new()
        .with_prompt("Analysis inputs file (JSON or TOML)")
        .interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

/// Runs the interactive tool picker.
///
/// # Errors
///
/// Returns an error if a prompt fails, the inputs file cannot be loaded, or
/// the server fails to start.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Tapak Location Analytics");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Analyze => {
            let inputs = load_file(&prompt_inputs_path()?)?;
            println!();
            println!("{}", output::summarize(&analyze(&inputs)));
        }
        Tool::Briefing => {
            let inputs = load_file(&prompt_inputs_path()?)?;
            println!();
            print!("{}", build_briefing(&inputs, compute_success_score(&inputs)));
        }
        Tool::Server => {
            actix_web::rt::System::new().block_on(tapak_server::interactive::run())?;
        }
    }

    Ok(())
}
