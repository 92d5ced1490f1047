// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TxKind};
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let kinds = match m.get_one::<String>("type") {
        Some(raw) => vec![raw.parse::<TxKind>().map_err(|e| anyhow!(e))?],
        None => vec![TxKind::Expense, TxKind::Income],
    };
    let mut data = Vec::new();
    for kind in kinds {
        for cat in Category::allowed_for(kind) {
            data.push(vec![kind.to_string(), cat.to_string()]);
        }
    }
    println!("{}", pretty_table(&["Type", "Category"], data));
    Ok(())
}
