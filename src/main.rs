use clap::{Parser, Subcommand};
use git_status_tracker::commands::*;
use git_status_tracker::core::{
    error::{Result, TrackerError},
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-status-tracker")]
#[command(about = "Background git status tracking for file browsers")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the root of the repository enclosing PATH
    Resolve {
        /// Path to resolve (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Show the changed files of the repository enclosing PATH
    Status {
        /// Path inside the repository (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Track visited paths read from stdin, one per line
    Watch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Resolve { path } => execute_resolve(path),
        Commands::Status { path } => execute_status(path),
        Commands::Watch => execute_watch(),
    };

    if let Err(e) = result {
        if let TrackerError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
