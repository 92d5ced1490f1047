// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use finboard::{cli, commands, config};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FINBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("import", sub)) => commands::importer::handle(sub)?,
        Some(("tx", sub)) => commands::transactions::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(&config::load()?, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&config::load()?, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("config", sub)) => commands::config::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
