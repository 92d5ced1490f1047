// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::format::format_percentage;
use finboard::ingest::parse_csv;
use finboard::metrics::{
    cash_flow, category_breakdown, goal_progress, net_worth, portfolio_summary, savings_rate,
    CashFlow,
};
use finboard::models::{ratio, Category, FinancialGoal, Investment, Transaction, TxKind};
use rust_decimal::Decimal;

fn tx(category: Category, cents: i64, kind: TxKind) -> Transaction {
    Transaction {
        id: format!("t-{}-{}", category, cents),
        date: "2024-01-01".into(),
        description: category.to_string(),
        category,
        amount: Decimal::new(cents, 2),
        kind,
    }
}

fn position(symbol: &str, shares: i64, bought: i64, now: i64) -> Investment {
    Investment {
        id: symbol.to_lowercase(),
        symbol: symbol.into(),
        name: symbol.into(),
        shares: Decimal::new(shares, 0),
        purchase_price: Decimal::new(bought, 0),
        current_price: Decimal::new(now, 0),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(Category::Salary, 300_000, TxKind::Income),
        tx(Category::Housing, 120_000, TxKind::Expense),
        tx(Category::FoodAndDining, 4_599, TxKind::Expense),
        tx(Category::Housing, 5_000, TxKind::Expense),
        tx(Category::Freelance, 80_000, TxKind::Income),
        // Inferred categories can cross the income/expense split.
        tx(Category::Shopping, 2_500, TxKind::Income),
    ]
}

#[test]
fn cash_flow_of_empty_list_is_zero() {
    let flow = cash_flow(&[]);
    assert_eq!(flow, CashFlow::default());
    assert!(flow.income.is_zero() && flow.expenses.is_zero() && flow.net.is_zero());
}

#[test]
fn cash_flow_partitions_by_type() {
    let flow = cash_flow(&sample());
    assert_eq!(flow.income, Decimal::new(382_500, 2));
    assert_eq!(flow.expenses, Decimal::new(129_599, 2));
    assert_eq!(flow.income - flow.expenses, flow.net);
    assert!(flow.income >= Decimal::ZERO && flow.expenses >= Decimal::ZERO);
}

#[test]
fn cash_flow_ignores_order() {
    let mut txs = sample();
    let forward = cash_flow(&txs);
    txs.reverse();
    assert_eq!(cash_flow(&txs), forward);
}

#[test]
fn net_worth_without_investments_is_assets_minus_liabilities() {
    let worth = net_worth(Decimal::new(25_000, 0), Decimal::new(5_000, 0), &[]);
    assert_eq!(worth, Decimal::new(20_000, 0));
}

#[test]
fn net_worth_adds_market_value() {
    let held = [position("AAPL", 10, 150, 175), position("GOOGL", 5, 2800, 2950)];
    let worth = net_worth(Decimal::new(25_000, 0), Decimal::new(5_000, 0), &held);
    assert_eq!(worth, Decimal::new(36_500, 0));
}

#[test]
fn breakdown_groups_in_first_seen_order() {
    let data = category_breakdown(&sample(), TxKind::Expense);
    let cats: Vec<Category> = data.iter().map(|c| c.category).collect();
    assert_eq!(cats, [Category::Housing, Category::FoodAndDining]);
    assert_eq!(data[0].total, Decimal::new(125_000, 2));
    assert_eq!(data[1].total, Decimal::new(4_599, 2));
}

#[test]
fn breakdown_omits_absent_categories_and_sums_to_type_total() {
    let txs = sample();
    for kind in [TxKind::Income, TxKind::Expense] {
        let data = category_breakdown(&txs, kind);
        assert!(data.iter().all(|c| !c.total.is_zero()));
        let sum: Decimal = data.iter().map(|c| c.total).sum();
        let flow = cash_flow(&txs);
        let expected = match kind {
            TxKind::Income => flow.income,
            TxKind::Expense => flow.expenses,
        };
        assert_eq!(sum, expected);
    }
    assert!(category_breakdown(&[], TxKind::Expense).is_empty());
}

#[test]
fn savings_rate_is_zero_without_income() {
    let flow = cash_flow(&[tx(Category::Housing, 1_000, TxKind::Expense)]);
    assert_eq!(savings_rate(&flow), Decimal::ZERO);
}

#[test]
fn savings_rate_is_net_over_income() {
    let flow = cash_flow(&[
        tx(Category::Salary, 400_000, TxKind::Income),
        tx(Category::Housing, 100_000, TxKind::Expense),
    ]);
    assert_eq!(savings_rate(&flow), Decimal::new(75, 2));
}

#[test]
fn portfolio_summary_totals_and_percentages() {
    let held = [position("AAPL", 10, 150, 175), position("GOOGL", 5, 2800, 2950)];
    let summary = portfolio_summary(&held);
    assert_eq!(summary.total_value, Decimal::new(16_500, 0));
    assert_eq!(summary.total_cost, Decimal::new(15_500, 0));
    assert_eq!(summary.gain_loss, Decimal::new(1_000, 0));
    assert_eq!(summary.gain_loss_pct.round_dp(2), Decimal::new(645, 2));
    assert_eq!(summary.positions.len(), 2);
    assert_eq!(summary.positions[0].value, Decimal::new(1_750, 0));
    assert_eq!(summary.positions[0].gain_loss, Decimal::new(250, 0));
    assert_eq!(
        summary.positions[0].gain_loss_pct.map(|p| p.round_dp(1)),
        Some(Decimal::new(167, 1))
    );
}

#[test]
fn portfolio_summary_of_nothing_is_flat() {
    let summary = portfolio_summary(&[]);
    assert!(summary.total_value.is_zero());
    assert!(summary.gain_loss_pct.is_zero());
    assert!(summary.positions.is_empty());
}

#[test]
fn position_with_zero_cost_has_no_percentage() {
    let gift = position("FREE", 3, 0, 10);
    assert_eq!(gift.gain_loss(), Decimal::new(30, 0));
    assert_eq!(gift.gain_loss_pct(), None);
}

fn goal(target: i64, current: i64, deadline: (i32, u32, u32)) -> FinancialGoal {
    FinancialGoal {
        id: "g".into(),
        name: "Emergency Fund".into(),
        target_amount: Decimal::new(target, 0),
        current_amount: Decimal::new(current, 0),
        deadline: NaiveDate::from_ymd_opt(deadline.0, deadline.1, deadline.2).unwrap(),
    }
}

#[test]
fn goal_progress_before_deadline() {
    let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
    let p = goal_progress(&goal(10_000, 6_500, (2024, 12, 31)), today);
    assert_eq!(p.progress, Some(Decimal::new(65, 2)));
    assert_eq!(p.days_remaining, 30);
    assert!(!p.overdue);
}

#[test]
fn goal_progress_overdue_and_overfunded() {
    let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let p = goal_progress(&goal(5_000, 6_000, (2024, 12, 31)), today);
    assert_eq!(p.days_remaining, -5);
    assert!(p.overdue);
    assert_eq!(p.progress, Some(Decimal::new(12, 1)));

    let due_today = goal_progress(&goal(5_000, 1_000, (2025, 1, 5)), today);
    assert_eq!(due_today.days_remaining, 0);
    assert!(due_today.overdue);
}

#[test]
fn goal_with_zero_target_has_no_progress() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(goal_progress(&goal(0, 100, (2024, 6, 1)), today).progress, None);
}

#[test]
fn cash_flow_saturates_at_decimal_max() {
    let txs = parse_csv(
        "2024-01-01,Big,79228162514264337593543950335\n2024-01-02,Big2,79228162514264337593543950335",
    );
    assert_eq!(txs.len(), 2);
    let flow = cash_flow(&txs);
    assert_eq!(flow.income, Decimal::MAX);
    assert!(flow.expenses.is_zero());
    assert_eq!(flow.net, Decimal::MAX);
    assert_eq!(savings_rate(&flow), Decimal::ONE);

    let spent = parse_csv("2024-01-01,Rent,-79228162514264337593543950335\n2024-01-02,Rent,-1");
    let housing = category_breakdown(&spent, TxKind::Expense);
    assert_eq!(housing[0].total, Decimal::MAX);
    assert_eq!(cash_flow(&spent).net, Decimal::MIN);
}

#[test]
fn savings_rate_saturates_for_tiny_income() {
    let txs = parse_csv("2024-01-01,Tip,0.0000000000000000000000000001\n2024-01-02,Rent,-1000");
    let rate = savings_rate(&cash_flow(&txs));
    assert_eq!(rate, Decimal::MIN);
    let shown = format_percentage(rate);
    assert!(shown.starts_with('-') && shown.ends_with('%'));
}

#[test]
fn oversized_positions_saturate() {
    let huge = |symbol: &str| Investment {
        id: symbol.to_lowercase(),
        symbol: symbol.into(),
        name: symbol.into(),
        shares: Decimal::MAX,
        purchase_price: Decimal::ONE,
        current_price: Decimal::new(2, 0),
    };
    let held = [huge("BIG"), huge("BIGGER")];
    assert_eq!(held[0].market_value(), Decimal::MAX);
    assert_eq!(net_worth(Decimal::new(1, 0), Decimal::ZERO, &held), Decimal::MAX);
    assert_eq!(
        net_worth(Decimal::ZERO, Decimal::MAX, &held),
        Decimal::ZERO
    );

    let summary = portfolio_summary(&held);
    assert_eq!(summary.total_value, Decimal::MAX);
    assert_eq!(summary.total_cost, Decimal::MAX);
    assert!(summary.gain_loss.is_zero());
    assert!(summary.gain_loss_pct.is_zero());
}

#[test]
fn ratio_handles_zero_and_out_of_range_quotients() {
    assert_eq!(ratio(Decimal::ONE, Decimal::ZERO), None);
    assert_eq!(ratio(Decimal::new(3, 0), Decimal::new(4, 0)), Some(Decimal::new(75, 2)));
    let tiny = Decimal::new(1, 28);
    assert_eq!(ratio(Decimal::MAX, tiny), Some(Decimal::MAX));
    assert_eq!(ratio(Decimal::MAX, -tiny), Some(Decimal::MIN));
    assert_eq!(ratio(Decimal::MIN, -tiny), Some(Decimal::MAX));
}
