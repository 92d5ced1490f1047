// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;
use thiserror::Error;

/// Rejections surfaced by the ingestion paths. None of them are fatal; the
/// user fixes the input and tries again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("Please upload a CSV file (got '{0}')")]
    UnsupportedFile(String),
    #[error("No valid transactions found in {0}")]
    NoValidTransactions(String),
    #[error("Please fill in all fields: '{0}' is empty")]
    IncompleteForm(&'static str),
    #[error("Category '{category}' is not valid for {kind} transactions")]
    UnknownCategory { category: String, kind: TxKind },
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
}
