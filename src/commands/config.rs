// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, Settings};
use anyhow::{Result, anyhow};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = config::config_path()?;
    match m.subcommand() {
        Some(("path", _)) => println!("{}", path.display()),
        Some(("show", _)) => {
            let settings = config::load_from(&path)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Some(("init", sub)) => {
            if path.exists() && !sub.get_flag("force") {
                return Err(anyhow!(
                    "Settings already exist at {} (use --force to overwrite)",
                    path.display()
                ));
            }
            config::save_to(&path, &Settings::default())?;
            println!("Settings written to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}
