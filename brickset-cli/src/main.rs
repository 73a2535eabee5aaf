//! brickset CLI
//!
//! Command-line interface for querying the LEGO set catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::demo::run_demo;
use commands::open_catalog;
use commands::query::{
    run_count_tag, run_largest, run_names, run_packaging, run_pieces, run_show, run_themes,
};
pub(crate) use error::CliError;

/// Emit an empty line through the logger so it respects `--quiet`.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let data = cli.data;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(&open_catalog(data)?)?,
        Commands::CountTag { tag } => run_count_tag(&open_catalog(data)?, &tag),
        Commands::Names { under } => run_names(&open_catalog(data)?, under),
        Commands::Packaging => run_packaging(&open_catalog(data)?),
        Commands::Themes => run_themes(&open_catalog(data)?),
        Commands::Pieces { theme } => run_pieces(&open_catalog(data)?, theme.as_deref()),
        Commands::Largest { theme } => run_largest(&open_catalog(data)?, &theme)?,
        Commands::Show { number } => run_show(&open_catalog(data)?, &number)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(data),
            ConfigAction::Path => run_config_path(),
        },
    }

    Ok(())
}
