//! CLI entry point.
//!
//! Infrastructure is wired together via bootstrap (the composition root);
//! command dispatch routes to handlers which delegate to the composed
//! context.

use std::process::ExitCode;

use clap::Parser;

use srcpin_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use srcpin_core::ports::SyncPolicy;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command()
            .print_help()
            .map_err(|e| CliError::Io(e.to_string()))?;
        return Ok(());
    };

    match command {
        // check-deps diagnoses a missing git binary, so it runs without a
        // composed context
        Commands::CheckDeps => handlers::check_deps::execute().await,
        command => {
            let sync_policy = match &command {
                Commands::Build {
                    always_sync: true, ..
                } => SyncPolicy::AlwaysSync,
                _ => SyncPolicy::SkipIfSynced,
            };

            let ctx = bootstrap(CliConfig {
                vendor_dir: cli.vendor_dir,
                manifest: cli.manifest,
                sync_policy,
            })?;

            match command {
                Commands::Build { names, .. } => handlers::build::execute(&ctx, &names).await,
                Commands::Clean { names } => handlers::clean::execute(&ctx, &names).await,
                Commands::List => handlers::list::execute(&ctx),
                Commands::Paths => handlers::paths::execute(&ctx),
                Commands::CheckDeps => unreachable!("handled above"),
            }
        }
    }
}
