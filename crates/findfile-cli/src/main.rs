//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use findfile_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Find {
            class,
            basename,
            dirs,
        } => {
            let ctx = bootstrap(CliConfig::with_defaults(&cli.data_dir_var).with_dirs(dirs))?;
            handlers::find::execute(&ctx, &class, &basename)?;
        }
        Commands::Locations { dirs, json } => {
            let ctx = bootstrap(CliConfig::with_defaults(&cli.data_dir_var).with_dirs(dirs))?;
            handlers::locations::execute(&ctx, json)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables before the finder reads GDAL_DATA
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            eprintln!("Error: {err}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
