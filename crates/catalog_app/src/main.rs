mod cli;
mod platform;

use std::io;

use anyhow::Context;
use catalog_engine::EngineHandle;
use catalog_logging::catalog_info;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::platform::app::{App, SearchRequest};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log_dest.into(), cli.log_level.into(), &cli.log_file);

    let mut config = platform::config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    let rows = cli.viewport_rows(&config);

    match cli.command {
        Command::Config => {
            println!("{}", config.to_ron()?);
        }
        Command::Search(args) => {
            let engine =
                EngineHandle::new(config.fetch_settings()).context("starting search engine")?;
            let mut app = App::new(&config, rows, engine, io::stdout().lock());
            app.run_once(SearchRequest {
                query: args.query.join(" "),
                field: args.field.into(),
                page: args.page,
                isbn_filter: args.isbn_filter,
            })?;
        }
        Command::Shell => {
            let engine =
                EngineHandle::new(config.fetch_settings()).context("starting search engine")?;
            catalog_info!("Shell started with endpoint {}", config.endpoint);
            let mut app = App::new(&config, rows, engine, io::stdout().lock());
            app.run_shell(io::stdin().lock())?;
        }
    }

    Ok(())
}
