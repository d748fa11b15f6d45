pub mod doctor;
pub mod list;
pub mod up;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stackup", version, about = "Local dev-stack launcher: opens docker, scraper, and frontend in their own terminal windows")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open every task group in its own terminal window (the default)
    Up {
        /// Launch without asking about missing directories
        #[arg(long, short = 'y')]
        yes: bool,
        /// Print each window's compound command without opening anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the configured task groups and their compound commands
    List,
    /// Check that the tools and directories the stack needs are present
    Doctor,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        // Bare `stackup` behaves like `stackup up`.
        None => up::run(false, false),
        Some(Commands::Up { yes, dry_run }) => up::run(yes, dry_run),
        Some(Commands::List) => list::run(),
        Some(Commands::Doctor) => doctor::run(),
        Some(Commands::Completions { shell }) => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "stackup", &mut std::io::stdout());
            Ok(())
        }
    }
}
