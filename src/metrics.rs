// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ratio, Category, FinancialGoal, Investment, Transaction, TxKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CashFlow {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRow {
    pub symbol: String,
    pub name: String,
    pub shares: Decimal,
    pub current_price: Decimal,
    pub value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_pct: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_pct: Decimal,
    pub positions: Vec<PositionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub name: String,
    pub current_amount: Decimal,
    pub target_amount: Decimal,
    pub progress: Option<Decimal>,
    pub days_remaining: i64,
    pub overdue: bool,
}

// Sums saturate at the `Decimal` bounds instead of overflowing.
pub fn cash_flow(txs: &[Transaction]) -> CashFlow {
    let (income, expenses) = txs
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| match t.kind {
            TxKind::Income => (inc.saturating_add(t.amount), exp),
            TxKind::Expense => (inc, exp.saturating_add(t.amount)),
        });
    CashFlow {
        income,
        expenses,
        net: income.saturating_sub(expenses),
    }
}

/// Assets plus the market value of every position, less liabilities.
pub fn net_worth(assets: Decimal, liabilities: Decimal, investments: &[Investment]) -> Decimal {
    let held = investments
        .iter()
        .map(Investment::market_value)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    assets.saturating_add(held).saturating_sub(liabilities)
}

/// Totals per category for one transaction type, in order of first
/// appearance. Categories with no matching transaction are absent.
pub fn category_breakdown(txs: &[Transaction], kind: TxKind) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    for t in txs.iter().filter(|t| t.kind == kind) {
        match out.iter_mut().find(|c| c.category == t.category) {
            Some(slot) => slot.total = slot.total.saturating_add(t.amount),
            None => out.push(CategoryTotal {
                category: t.category,
                total: t.amount,
            }),
        }
    }
    out
}

pub fn savings_rate(flow: &CashFlow) -> Decimal {
    if flow.income > Decimal::ZERO {
        ratio(flow.net, flow.income).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

pub fn portfolio_summary(investments: &[Investment]) -> PortfolioSummary {
    let mut summary = PortfolioSummary::default();
    for inv in investments {
        summary.total_value = summary.total_value.saturating_add(inv.market_value());
        summary.total_cost = summary.total_cost.saturating_add(inv.cost_basis());
        summary.positions.push(PositionRow {
            symbol: inv.symbol.clone(),
            name: inv.name.clone(),
            shares: inv.shares,
            current_price: inv.current_price,
            value: inv.market_value(),
            gain_loss: inv.gain_loss(),
            gain_loss_pct: inv.gain_loss_pct(),
        });
    }
    summary.gain_loss = summary.total_value.saturating_sub(summary.total_cost);
    if summary.total_cost > Decimal::ZERO {
        summary.gain_loss_pct = ratio(summary.gain_loss, summary.total_cost)
            .unwrap_or(Decimal::ZERO)
            .saturating_mul(Decimal::ONE_HUNDRED);
    }
    summary
}

/// Transactions newest first. Equal dates keep their entry order and rows
/// whose date is not `YYYY-MM-DD` sort after every dated row.
pub fn recent_transactions(txs: &[Transaction]) -> Vec<&Transaction> {
    let mut out: Vec<&Transaction> = txs.iter().collect();
    out.sort_by_key(|t| Reverse(NaiveDate::parse_from_str(t.date.trim(), "%Y-%m-%d").ok()));
    out
}

pub fn goal_progress(goal: &FinancialGoal, today: NaiveDate) -> GoalProgress {
    let days_remaining = goal.days_remaining(today);
    GoalProgress {
        name: goal.name.clone(),
        current_amount: goal.current_amount,
        target_amount: goal.target_amount,
        progress: goal.progress(),
        days_remaining,
        overdue: days_remaining <= 0,
    }
}
