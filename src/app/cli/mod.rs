//! CLI Adapter.

mod verify_proposal;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::logging::init_logging;
use crate::domain::AppError;
use crate::domain::constants::{
    TOOL_NAME, VERIFY_PROPOSAL_CMD_NAME, VERIFY_PROPOSAL_SHORT_DESC, verify_proposal_example,
    verify_proposal_long_desc, verify_proposal_usage,
};

#[derive(Parser)]
#[command(name = TOOL_NAME)]
#[command(version)]
#[command(
    about = "Verify interchain-security consumer chain proposals against their genesis inputs",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Settings file (defaults to ./consumer-chain-tool.toml when present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = VERIFY_PROPOSAL_CMD_NAME,
        about = VERIFY_PROPOSAL_SHORT_DESC,
        long_about = verify_proposal_long_desc(),
        override_usage = verify_proposal_usage(),
        after_help = format!("Example:\n  {}", verify_proposal_example()),
    )]
    VerifyProposal {
        /// Validate the arguments and print the script invocation without running it
        #[arg(long)]
        dry_run: bool,
        /// The six positional arguments, in the order shown in the usage line
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::VerifyProposal { dry_run, args } => {
            verify_proposal::run_verify_proposal(args, dry_run, cli.config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
