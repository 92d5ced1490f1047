// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-dollar USD with thousands separators, e.g. `$1,235` or `-$45`.
/// Negative amounts keep their sign even when they round to zero (`-$0`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&digits))
}

pub fn format_signed_currency(amount: Decimal) -> String {
    if amount >= Decimal::ZERO {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

/// A fraction rendered as a percentage with one decimal, e.g. `0.256` → `25.6%`.
pub fn format_percentage(fraction: Decimal) -> String {
    let pct = fraction
        .saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", pct)
}

/// A value already in percent with an explicit sign, e.g. `+16.7%`.
pub fn format_change(pct: Decimal) -> String {
    let pct = pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let sign = if pct >= Decimal::ZERO { "+" } else { "" };
    format!("{}{:.1}%", sign, pct)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
