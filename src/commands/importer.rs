// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::transaction_rows;
use crate::models::Transaction;
use crate::utils::{maybe_print_json, pretty_table, read_csv_file};
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(sub),
        _ => Ok(()),
    }
}

fn import_transactions(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = import_rows(sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &txs)? {
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Type", "Amount"],
                transaction_rows(&txs),
            )
        );
        println!("Imported {} transactions", txs.len());
    }
    Ok(())
}

/// Parses every `--path` in order. One bad file aborts the whole import.
pub fn import_rows(sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();
    if let Some(paths) = sub.get_many::<String>("path") {
        for path in paths {
            let txs = read_csv_file(path)
                .with_context(|| format!("Import {}", path.trim()))?;
            out.extend(txs);
        }
    }
    Ok(out)
}
