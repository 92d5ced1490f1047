// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::IngestError;
use crate::ingest;
use crate::models::Transaction;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// `--today` if given, otherwise the local calendar date.
pub fn today_arg(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("today") {
        Some(raw) => parse_date(raw.trim()),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn read_csv_file(path: &str) -> Result<Vec<Transaction>> {
    let path = path.trim();
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    // Reject by name before touching the file, same as the upload surface.
    if !name.to_ascii_lowercase().ends_with(".csv") {
        return Err(IngestError::UnsupportedFile(name).into());
    }
    let text = fs::read_to_string(path).with_context(|| format!("Open CSV {}", path))?;
    let txs = ingest::import_file(&name, &text)?;
    Ok(txs)
}

/// Every `--csv` file, in argument order.
pub fn read_csv_args(sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();
    if let Some(paths) = sub.get_many::<String>("csv") {
        for p in paths {
            out.extend(read_csv_file(p)?);
        }
    }
    Ok(out)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
