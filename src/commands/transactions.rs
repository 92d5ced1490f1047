// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::format::format_currency;
use crate::ingest::TransactionForm;
use crate::models::{Transaction, TxKind};
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, anyhow};
use tracing::info;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let tx = add(sub)?;
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &tx)? {
                println!(
                    "Recorded {} {} on {} for '{}' ({})",
                    tx.kind,
                    format_currency(tx.amount),
                    tx.date,
                    tx.description,
                    tx.category
                );
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn form_from_args(sub: &clap::ArgMatches) -> Result<TransactionForm> {
    let date = match sub.get_one::<String>("date") {
        Some(raw) => parse_date(raw.trim())?,
        None => chrono::Local::now().date_naive(),
    };
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TxKind>())
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or(TxKind::Expense);
    let text = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    Ok(TransactionForm {
        date: date.to_string(),
        description: text("description"),
        category: text("category"),
        amount: text("amount"),
        kind,
    })
}

pub fn add(sub: &clap::ArgMatches) -> Result<Transaction> {
    let tx = form_from_args(sub)?.submit()?;
    info!(id = %tx.id, kind = %tx.kind, "recorded manual transaction");
    Ok(tx)
}

/// `+$4,000` for income, `-$1,200` for an expense.
pub fn signed_amount(tx: &Transaction) -> String {
    let sign = match tx.kind {
        TxKind::Income => "+",
        TxKind::Expense => "-",
    };
    format!("{}{}", sign, format_currency(tx.amount))
}

pub fn transaction_rows<'a>(txs: impl IntoIterator<Item = &'a Transaction>) -> Vec<Vec<String>> {
    txs.into_iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.description.clone(),
                t.category.to_string(),
                t.kind.to_string(),
                signed_amount(t),
            ]
        })
        .collect()
}
