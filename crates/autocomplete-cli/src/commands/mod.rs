use std::io;

use anyhow::{Context, Result};
use autocomplete_core::{StoreConfig, TermStore};
use tracing::info;

use crate::cli::{Cli, Commands};

mod repl;
mod support;


use self::repl::run_repl;
use self::support::{OutputMode, apply_overrides, print_json, select_matches, write_matches};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = apply_overrides(
        StoreConfig::from_env().context("invalid environment configuration")?,
        &cli,
    );
    let store = TermStore::from_path(&cli.database, &config.build).with_context(|| {
        format!("failed to load term database {}", cli.database.display())
    })?;
    info!(
        database = %cli.database.display(),
        terms = store.len(),
        parse_policy = config.build.parse_policy.as_str(),
        header_check = config.build.header_check.as_str(),
        "term database loaded"
    );

    let mode = OutputMode::from_json_flag(cli.json);
    run_loaded(&store, &config, mode, cli.command.unwrap_or(Commands::Repl))
}

fn run_loaded(
    store: &TermStore,
    config: &StoreConfig,
    mode: OutputMode,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Repl => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            run_repl(store, config.limit(), mode, stdin, stdout)?;
        }
        Commands::Query(args) => {
            let found = select_matches(store, &args.prefix, config.limit());
            let mut stdout = io::stdout().lock();
            write_matches(&mut stdout, &found, mode)?;
        }
        Commands::Stats => {
            print_json(store.report())?;
        }
    }
    Ok(())
}
