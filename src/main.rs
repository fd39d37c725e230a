use brewlog::application::ReviewSession;
use brewlog::cli::{repl, Cli, Terminal};
use brewlog::error::BrewlogError;
use brewlog::infrastructure::Config;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never mix with session output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brewlog=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BrewlogError> {
    let config = Config::resolve(cli.config.as_deref())?;

    let mut session = ReviewSession::new();
    if !cli.no_seed {
        session.seed(config.seed_drafts()?);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut term = Terminal {
        input: stdin.lock(),
        output: io::stdout().lock(),
        errors: io::stderr().lock(),
        interactive,
    };

    tracing::info!(interactive, title = %config.title, "session started");
    repl::run(&mut session, &config, &mut term)
}
