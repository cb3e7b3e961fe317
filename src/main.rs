mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;
mod payload;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use env_logger::Env;

use cli::{Cli, Commands};
use config::Config;
use error::{MediaError, Result};
use output::OutputFormat;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose {
        "warn,twmedia=debug"
    } else {
        "warn"
    }))
    .init();

    if let Err(e) = run(cli) {
        report_error(&e, verbose);
        std::process::exit(1);
    }
}

fn report_error(e: &MediaError, verbose: bool) {
    eprintln!("Error: {e}");

    if verbose {
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("Caused by: {cause}");
            source = cause.source();
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "twmedia", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        command => {
            let config = Config::load()?;

            output::set_format(if cli.json {
                OutputFormat::Json
            } else {
                config.output_format()?
            });

            match command {
                Commands::List(args) => {
                    commands::list::list(&config, args)?;
                }
                Commands::Urls(args) => {
                    commands::urls::urls(args)?;
                }
                Commands::Check(args) => {
                    commands::check::check(args)?;
                }
                Commands::Normalize(args) => {
                    commands::normalize::normalize(args)?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
