// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Transportation,
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Shopping,
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    Healthcare,
    Education,
    Travel,
    Salary,
    Freelance,
    Investments,
    Business,
    Rental,
    Other,
}

pub const EXPENSE_CATEGORIES: [Category; 10] = [
    Category::Housing,
    Category::Transportation,
    Category::FoodAndDining,
    Category::Shopping,
    Category::Entertainment,
    Category::BillsAndUtilities,
    Category::Healthcare,
    Category::Education,
    Category::Travel,
    Category::Other,
];

pub const INCOME_CATEGORIES: [Category; 6] = [
    Category::Salary,
    Category::Freelance,
    Category::Investments,
    Category::Business,
    Category::Rental,
    Category::Other,
];

// Ordered: the first group whose pattern matches decides the category.
const KEYWORD_GROUPS: [(Category, &[&str]); 9] = [
    (Category::Housing, &["rent", "mortgage"]),
    (Category::Transportation, &["uber", "gas", "parking"]),
    (Category::FoodAndDining, &["restaurant", "food", "grocery"]),
    (Category::Shopping, &["amazon", "store"]),
    (Category::Entertainment, &["netflix", "spotify", "movie"]),
    (Category::BillsAndUtilities, &["electric", "water", "internet"]),
    (Category::Healthcare, &["doctor", "pharmacy", "hospital"]),
    (Category::Education, &["tuition", "course", "school"]),
    (Category::Travel, &["flight", "hotel", "airbnb"]),
];

static KEYWORD_RULES: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    KEYWORD_GROUPS
        .iter()
        .filter_map(|(cat, words)| {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            RegexBuilder::new(&alternation)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|re| (*cat, re))
        })
        .collect()
});

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Transportation => "Transportation",
            Category::FoodAndDining => "Food & Dining",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investments => "Investments",
            Category::Business => "Business",
            Category::Rental => "Rental",
            Category::Other => "Other",
        }
    }

    /// Keyword-based category for a free-text description. Never fails;
    /// descriptions that match no keyword group land in `Other`.
    pub fn infer(description: &str) -> Category {
        let hay = description.to_lowercase();
        KEYWORD_RULES
            .iter()
            .find(|(_, re)| re.is_match(&hay))
            .map(|(cat, _)| *cat)
            .unwrap_or(Category::Other)
    }

    pub fn allowed_for(kind: TxKind) -> &'static [Category] {
        match kind {
            TxKind::Income => &INCOME_CATEGORIES,
            TxKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    pub fn is_allowed_for(&self, kind: TxKind) -> bool {
        Category::allowed_for(kind).contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EXPENSE_CATEGORIES
            .iter()
            .chain(INCOME_CATEGORIES.iter())
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("Unknown category '{}'", wanted))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: String, // YYYY-MM-DD, CSV dates are kept verbatim
    pub description: String,
    pub category: Category,
    pub amount: Decimal, // magnitude; the sign lives in `kind`
    #[serde(rename = "type")]
    pub kind: TxKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub shares: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
}

impl Investment {
    pub fn market_value(&self) -> Decimal {
        self.shares.saturating_mul(self.current_price)
    }

    pub fn cost_basis(&self) -> Decimal {
        self.shares.saturating_mul(self.purchase_price)
    }

    pub fn gain_loss(&self) -> Decimal {
        self.market_value().saturating_sub(self.cost_basis())
    }

    /// Gain or loss as a percentage of cost; `None` when nothing was paid.
    pub fn gain_loss_pct(&self) -> Option<Decimal> {
        ratio(self.gain_loss(), self.cost_basis())
            .map(|r| r.saturating_mul(Decimal::ONE_HUNDRED))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
}

impl FinancialGoal {
    pub fn progress(&self) -> Option<Decimal> {
        ratio(self.current_amount, self.target_amount)
    }

    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

/// `num / den`, or `None` for a zero denominator. A quotient outside the
/// `Decimal` range saturates at `Decimal::MAX` or `Decimal::MIN`.
pub fn ratio(num: Decimal, den: Decimal) -> Option<Decimal> {
    if den.is_zero() {
        return None;
    }
    Some(num.checked_div(den).unwrap_or(
        if num.is_sign_negative() == den.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        },
    ))
}
