//! CLI entry point - the composition root.
//!
//! Parses arguments, initializes logging and configuration, then routes to
//! handlers. Infrastructure is composed in `bootstrap` only.

use clap::{CommandFactory, Parser};

use dailykit_cli::{Cli, CliConfig, CliError, Commands, handlers, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = match command {
        Commands::Launch {
            target,
            venv,
            no_pause,
        } => {
            let config = CliConfig::from_args(cli.dir, Some(&venv), !no_pause);
            let code = handlers::launch::execute(&config, target).await;
            std::process::exit(code);
        }
        Commands::Todo => handlers::todo::execute(&CliConfig::from_args(cli.dir, None, false)),
        Commands::Habits => handlers::habits::execute(&CliConfig::from_args(cli.dir, None, false)),
        Commands::Paths => handlers::paths::execute(&CliConfig::from_args(cli.dir, None, true)),
    };

    if let Err(err) = result {
        let err = CliError::from_handler(&err);
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
