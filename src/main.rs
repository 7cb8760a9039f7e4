//! regis CLI
//!
//! Interactive terminal portfolio, plus plain-text access to the same
//! content for scripts and the curious.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use regis_portfolio::config;
use regis_portfolio::content::{PROFILE, PROJECTS};
use regis_portfolio::platform;
use regis_portfolio::report::{format_profile, format_projects};
use regis_portfolio::tui;
use regis_portfolio::types::{OutputFormat, Theme};

#[derive(Parser)]
#[command(name = "regis")]
#[command(about = "Igirimbabazi Kayumba Regis — portfolio, in your terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive portfolio (the default)
    Tui,

    /// Print the bio
    About {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print the project catalog
    Projects {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Open the resume in the default browser
    Resume,

    /// Show or change the saved theme preference
    Theme {
        /// `light`, `dark`, or `clear`; omit to show the current value
        value: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => cmd_tui(),
        Commands::About { format } => cmd_about(format.into()),
        Commands::Projects { format } => cmd_projects(format.into()),
        Commands::Resume => cmd_resume(),
        Commands::Theme { value } => cmd_theme(value),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn cmd_tui() -> Result<(), String> {
    tui::run().map_err(|e| e.to_string())
}

fn cmd_about(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_profile(&PROFILE, format));
    Ok(())
}

fn cmd_projects(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_projects(PROJECTS, format));
    Ok(())
}

fn cmd_resume() -> Result<(), String> {
    if PROFILE.resume_url.is_empty() {
        return Err("no resume link configured".into());
    }
    platform::open_link(PROFILE.resume_url).map_err(|e| e.to_string())?;
    println!("Opening {}", PROFILE.resume_url);
    Ok(())
}

fn cmd_theme(value: Option<String>) -> Result<(), String> {
    let path = config::default_preferences_path();

    match value.as_deref() {
        None => {
            let prefs = config::load_preferences(&path);
            match prefs.theme {
                Some(theme) => println!("{}", theme.name()),
                None => println!("not set (following the terminal)"),
            }
            Ok(())
        }
        Some("clear") => {
            config::clear_theme(&path).map_err(|e| e.to_string())?;
            println!("Theme preference cleared");
            Ok(())
        }
        Some(name) => match Theme::from_name(name) {
            Some(theme) => {
                config::store_theme(&path, theme).map_err(|e| e.to_string())?;
                println!("Theme set to {}", theme.name());
                Ok(())
            }
            None => Err(format!(
                "unknown theme '{}' (expected light, dark, or clear)",
                name
            )),
        },
    }
}
