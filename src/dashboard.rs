// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::metrics::{self, CashFlow, CategoryTotal, GoalProgress, PortfolioSummary};
use crate::models::{FinancialGoal, Investment, Transaction, TxKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Owner of every collection the dashboard shows. Metrics are derived on
/// demand and never cached here.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub transactions: Vec<Transaction>,
    pub investments: Vec<Investment>,
    pub goals: Vec<FinancialGoal>,
    pub assets: Decimal,
    pub liabilities: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub net_worth: Decimal,
    pub cash_flow: CashFlow,
    pub savings_rate: Decimal,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_by_category: Vec<CategoryTotal>,
    pub portfolio: PortfolioSummary,
    pub goals: Vec<GoalProgress>,
    pub recent_transactions: Vec<Transaction>,
}

impl Dashboard {
    pub fn from_settings(settings: &Settings) -> Self {
        Dashboard {
            transactions: Vec::new(),
            investments: settings.investments.clone(),
            goals: settings.goals.clone(),
            assets: settings.assets,
            liabilities: settings.liabilities,
        }
    }

    pub fn add_transaction(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    pub fn extend(&mut self, txs: Vec<Transaction>) {
        self.transactions.extend(txs);
    }

    /// Replaces the quoted price of `symbol`; false if no such position.
    pub fn update_price(&mut self, symbol: &str, price: Decimal) -> bool {
        match self
            .investments
            .iter_mut()
            .find(|inv| inv.symbol.eq_ignore_ascii_case(symbol))
        {
            Some(inv) => {
                inv.current_price = price;
                true
            }
            None => false,
        }
    }

    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        metrics::recent_transactions(&self.transactions)
    }

    pub fn summary(&self, today: NaiveDate) -> DashboardSummary {
        let cash_flow = metrics::cash_flow(&self.transactions);
        DashboardSummary {
            net_worth: metrics::net_worth(self.assets, self.liabilities, &self.investments),
            savings_rate: metrics::savings_rate(&cash_flow),
            cash_flow,
            expenses_by_category: metrics::category_breakdown(
                &self.transactions,
                TxKind::Expense,
            ),
            income_by_category: metrics::category_breakdown(&self.transactions, TxKind::Income),
            portfolio: metrics::portfolio_summary(&self.investments),
            goals: self
                .goals
                .iter()
                .map(|g| metrics::goal_progress(g, today))
                .collect(),
            recent_transactions: self.recent_transactions().into_iter().cloned().collect(),
        }
    }
}
