// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns CSV text and form input into [`Transaction`] records.
//!
//! Rows are positional: `date,description,amount[,ignored...]`. A first line
//! containing `date` (any case) is treated as a header. Rows with fewer than
//! three fields or an amount that is not a number are skipped, never reported.

use crate::error::IngestError;
use crate::models::{Category, Transaction, TxKind};
use chrono::Utc;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

static FORM_SEQ: AtomicU64 = AtomicU64::new(0);

pub fn categorize(description: &str) -> Category {
    Category::infer(description)
}

pub fn parse_csv(text: &str) -> Vec<Transaction> {
    parse_csv_at(text, Utc::now().timestamp_millis())
}

/// Same as [`parse_csv`] with the id timestamp supplied by the caller.
pub fn parse_csv_at(text: &str, stamp: i64) -> Vec<Transaction> {
    let lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    let start = match lines.first() {
        Some(first) if first.to_lowercase().contains("date") => 1,
        _ => 0,
    };

    let mut out = Vec::with_capacity(lines.len().saturating_sub(start));
    for (idx, line) in lines.iter().enumerate().skip(start) {
        let Some(rec) = split_fields(line) else {
            debug!(line = idx, "skipping unreadable row");
            continue;
        };
        let (Some(date), Some(description), Some(amount_raw)) =
            (rec.get(0), rec.get(1), rec.get(2))
        else {
            debug!(line = idx, fields = rec.len(), "skipping short row");
            continue;
        };
        let Some(signed) = parse_signed_amount(amount_raw) else {
            debug!(line = idx, amount = amount_raw, "skipping row with invalid amount");
            continue;
        };

        out.push(Transaction {
            id: format!("txn-{}-{}", stamp, idx),
            date: date.to_string(),
            description: description.to_string(),
            category: categorize(description),
            amount: signed.abs(),
            kind: if signed > Decimal::ZERO {
                TxKind::Income
            } else {
                TxKind::Expense
            },
        });
    }
    out
}

/// Upload entry point: checks the file name before parsing and refuses an
/// upload that yields nothing.
pub fn import_file(name: &str, text: &str) -> Result<Vec<Transaction>, IngestError> {
    if !name.trim().to_ascii_lowercase().ends_with(".csv") {
        return Err(IngestError::UnsupportedFile(name.to_string()));
    }
    let parsed = parse_csv(text);
    if parsed.is_empty() {
        return Err(IngestError::NoValidTransactions(name.to_string()));
    }
    info!(file = name, count = parsed.len(), "imported transactions");
    Ok(parsed)
}

// One record per physical line keeps an unbalanced quote from swallowing
// the rows after it.
fn split_fields(line: &str) -> Option<StringRecord> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    let mut rec = StringRecord::new();
    match rdr.read_record(&mut rec) {
        Ok(true) => Some(rec),
        _ => None,
    }
}

fn parse_signed_amount(raw: &str) -> Option<Decimal> {
    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Manual entry. The chosen category and type are taken as given.
#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
    pub kind: TxKind,
}

impl TransactionForm {
    pub fn submit(&self) -> Result<Transaction, IngestError> {
        let description = self.description.trim();
        let category_raw = self.category.trim();
        let amount_raw = self.amount.trim();
        if description.is_empty() {
            return Err(IngestError::IncompleteForm("description"));
        }
        if category_raw.is_empty() {
            return Err(IngestError::IncompleteForm("category"));
        }
        if amount_raw.is_empty() {
            return Err(IngestError::IncompleteForm("amount"));
        }

        let category = category_raw
            .parse::<Category>()
            .ok()
            .filter(|c| c.is_allowed_for(self.kind))
            .ok_or_else(|| IngestError::UnknownCategory {
                category: category_raw.to_string(),
                kind: self.kind,
            })?;
        let amount = amount_raw
            .parse::<Decimal>()
            .ok()
            .filter(|a| *a >= Decimal::ZERO)
            .ok_or_else(|| IngestError::InvalidAmount(amount_raw.to_string()))?;

        let seq = FORM_SEQ.fetch_add(1, Ordering::Relaxed);
        Ok(Transaction {
            id: format!("txn-{}-m{}", Utc::now().timestamp_millis(), seq),
            date: self.date.trim().to_string(),
            description: description.to_string(),
            category,
            amount,
            kind: self.kind,
        })
    }
}
