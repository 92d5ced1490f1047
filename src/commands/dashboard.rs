// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::reports::{breakdown_rows, goal_rows, portfolio_rows};
use crate::commands::transactions::transaction_rows;
use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::format::{format_currency, format_percentage, format_signed_currency};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table, read_csv_args, today_arg};
use anyhow::{Context, Result, anyhow};
use tracing::warn;

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let board = load_board(settings, sub)?;
    let summary = board.summary(today_arg(sub)?);
    if maybe_print_json(sub.get_flag("json"), false, &summary)? {
        return Ok(());
    }

    let cards = vec![
        vec!["Net Worth".into(), format_currency(summary.net_worth)],
        vec!["Income".into(), format_currency(summary.cash_flow.income)],
        vec!["Expenses".into(), format_currency(summary.cash_flow.expenses)],
        vec!["Net Cash Flow".into(), format_signed_currency(summary.cash_flow.net)],
        vec!["Savings Rate".into(), format_percentage(summary.savings_rate)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], cards));
    println!(
        "{}",
        pretty_table(
            &["Expense Category", "Total"],
            breakdown_rows(&summary.expenses_by_category)
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Income Category", "Total"],
            breakdown_rows(&summary.income_by_category)
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Symbol", "Name", "Shares", "Price", "Value", "Gain/Loss", "%"],
            portfolio_rows(&summary.portfolio)
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Goal", "Saved", "Target", "Progress", "Deadline"],
            goal_rows(&summary.goals)
        )
    );
    if summary.recent_transactions.is_empty() {
        println!("No transactions yet");
    } else {
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Type", "Amount"],
                transaction_rows(&summary.recent_transactions)
            )
        );
    }
    Ok(())
}

/// Builds the dashboard for one invocation: settings first, then every
/// `--csv` file, then any `--price` overrides.
pub fn load_board(settings: &Settings, sub: &clap::ArgMatches) -> Result<Dashboard> {
    let mut board = Dashboard::from_settings(settings);
    if has_arg(sub, "csv") {
        board.extend(read_csv_args(sub)?);
    }
    if has_arg(sub, "price") {
        if let Some(prices) = sub.get_many::<String>("price") {
            for raw in prices {
                let (symbol, price) = raw
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Invalid price '{}', expected SYMBOL=PRICE", raw))?;
                let price = parse_decimal(price.trim())
                    .with_context(|| format!("Price for {}", symbol.trim()))?;
                if !board.update_price(symbol.trim(), price) {
                    warn!(symbol = symbol.trim(), "price override for unknown position");
                }
            }
        }
    }
    Ok(board)
}

// Not every report command defines every argument.
fn has_arg(sub: &clap::ArgMatches, id: &str) -> bool {
    matches!(sub.try_contains_id(id), Ok(true))
}
