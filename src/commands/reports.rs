// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::dashboard::load_board;
use crate::commands::transactions::transaction_rows;
use crate::config::Settings;
use crate::format::{format_change, format_currency, format_percentage, format_signed_currency};
use crate::metrics::{self, CategoryTotal, GoalProgress, PortfolioSummary};
use crate::models::TxKind;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table, today_arg};
use anyhow::{Result, anyhow};
use serde_json::json;

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("cashflow", sub)) => cashflow(settings, sub)?,
        Some(("categories", sub)) => categories(settings, sub)?,
        Some(("networth", sub)) => networth(settings, sub)?,
        Some(("portfolio", sub)) => portfolio(settings, sub)?,
        Some(("goals", sub)) => goals(settings, sub)?,
        Some(("transactions", sub)) => transactions(settings, sub)?,
        _ => {}
    }
    Ok(())
}

fn cashflow(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let board = load_board(settings, sub)?;
    let flow = metrics::cash_flow(&board.transactions);
    let rate = metrics::savings_rate(&flow);
    let out = json!({ "income": flow.income, "expenses": flow.expenses, "net": flow.net, "savings_rate": rate });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        let rows = vec![vec![
            format_currency(flow.income),
            format_currency(flow.expenses),
            format_signed_currency(flow.net),
            format_percentage(rate),
        ]];
        println!(
            "{}",
            pretty_table(&["Income", "Expenses", "Net", "Savings Rate"], rows)
        );
    }
    Ok(())
}

fn categories(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TxKind>())
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or(TxKind::Expense);
    let board = load_board(settings, sub)?;
    let data = metrics::category_breakdown(&board.transactions, kind);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let hdr = match kind {
            TxKind::Income => "Earned",
            TxKind::Expense => "Spent",
        };
        println!(
            "{}",
            pretty_table(&["Category", hdr], breakdown_rows(&data))
        );
    }
    Ok(())
}

fn networth(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let mut board = load_board(settings, sub)?;
    if let Some(raw) = sub.get_one::<String>("assets") {
        board.assets = parse_decimal(raw.trim())?;
    }
    if let Some(raw) = sub.get_one::<String>("liabilities") {
        board.liabilities = parse_decimal(raw.trim())?;
    }
    let worth = metrics::net_worth(board.assets, board.liabilities, &board.investments);
    let held = metrics::portfolio_summary(&board.investments).total_value;
    let out = json!({
        "assets": board.assets,
        "investments": held,
        "liabilities": board.liabilities,
        "net_worth": worth,
    });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        let rows = vec![vec![
            format_currency(board.assets),
            format_currency(held),
            format_currency(board.liabilities),
            format_currency(worth),
        ]];
        println!(
            "{}",
            pretty_table(&["Assets", "Investments", "Liabilities", "Net Worth"], rows)
        );
    }
    Ok(())
}

fn portfolio(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let board = load_board(settings, sub)?;
    let summary = metrics::portfolio_summary(&board.investments);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        if summary.positions.is_empty() {
            println!("No investments tracked yet");
            return Ok(());
        }
        println!(
            "{}",
            pretty_table(
                &["Symbol", "Name", "Shares", "Price", "Value", "Gain/Loss", "%"],
                portfolio_rows(&summary)
            )
        );
        println!(
            "Total {} ({}, {})",
            format_currency(summary.total_value),
            format_signed_currency(summary.gain_loss),
            format_change(summary.gain_loss_pct)
        );
    }
    Ok(())
}

fn goals(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let today = today_arg(sub)?;
    let data: Vec<GoalProgress> = settings
        .goals
        .iter()
        .map(|g| metrics::goal_progress(g, today))
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No goals set yet");
            return Ok(());
        }
        println!(
            "{}",
            pretty_table(
                &["Goal", "Saved", "Target", "Progress", "Deadline"],
                goal_rows(&data)
            )
        );
    }
    Ok(())
}

fn transactions(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let board = load_board(settings, sub)?;
    let recent = board.recent_transactions();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &recent)? {
        if recent.is_empty() {
            println!("No transactions yet");
            return Ok(());
        }
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Type", "Amount"],
                transaction_rows(recent)
            )
        );
    }
    Ok(())
}

pub fn breakdown_rows(data: &[CategoryTotal]) -> Vec<Vec<String>> {
    data.iter()
        .map(|c| vec![c.category.to_string(), format_currency(c.total)])
        .collect()
}

pub fn portfolio_rows(summary: &PortfolioSummary) -> Vec<Vec<String>> {
    summary
        .positions
        .iter()
        .map(|p| {
            vec![
                p.symbol.clone(),
                p.name.clone(),
                p.shares.to_string(),
                format!("{:.2}", p.current_price),
                format_currency(p.value),
                format_signed_currency(p.gain_loss),
                p.gain_loss_pct
                    .map(format_change)
                    .unwrap_or_else(|| "-".into()),
            ]
        })
        .collect()
}

pub fn goal_rows(data: &[GoalProgress]) -> Vec<Vec<String>> {
    data.iter()
        .map(|g| {
            let deadline = if g.overdue {
                "Overdue".to_string()
            } else {
                format!("{} days left", g.days_remaining)
            };
            vec![
                g.name.clone(),
                format_currency(g.current_amount),
                format_currency(g.target_amount),
                g.progress
                    .map(format_percentage)
                    .unwrap_or_else(|| "-".into()),
                deadline,
            ]
        })
        .collect()
}
