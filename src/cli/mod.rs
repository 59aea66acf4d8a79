use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::{SessionConfig, SessionOutcome, run_session};
use crate::domain::{AccountNumber, format_cents};

/// Bank Session - single account teller
#[derive(Parser)]
#[command(name = "bank-session")]
#[command(about = "An in-memory, menu-driven bank account session on the console")]
#[command(version)]
pub struct Cli {
    /// Account number to open the session with (skips the prompt)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub account_number: Option<AccountNumber>,

    /// Account holder name (skips the prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);

        let config = SessionConfig {
            account_number: self.account_number,
            name: self.name,
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        let report =
            run_session(stdin.lock(), stdout.lock(), config).context("Console session failed")?;

        if let Some(account) = &report.account {
            tracing::debug!(
                account = account.number(),
                balance = %format_cents(account.balance()),
                closed_by_user = report.outcome == SessionOutcome::Exited,
                "session closed"
            );
        }
        Ok(())
    }
}

/// Diagnostics go to stderr so stdout only carries the console dialogue.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
