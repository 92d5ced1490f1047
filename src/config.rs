// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FinancialGoal, Investment};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Finboard", "finboard"));

pub const CONFIG_ENV: &str = "FINBOARD_CONFIG";

/// Balance-sheet inputs the dashboard does not derive from transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets: Decimal,
    pub liabilities: Decimal,
    pub investments: Vec<Investment>,
    pub goals: Vec<FinancialGoal>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            assets: Decimal::new(25_000, 0),
            liabilities: Decimal::new(5_000, 0),
            investments: vec![
                sample_position("inv-1", "AAPL", "Apple Inc.", 10, 150, 175),
                sample_position("inv-2", "GOOGL", "Alphabet Inc.", 5, 2800, 2950),
            ],
            goals: vec![
                sample_goal("goal-1", "Emergency Fund", 10_000, 6_500, (2024, 12, 31)),
                sample_goal("goal-2", "Vacation Fund", 5_000, 2_000, (2024, 6, 30)),
                sample_goal("goal-3", "Down Payment", 50_000, 15_000, (2025, 12, 31)),
            ],
        }
    }
}

fn sample_position(
    id: &str,
    symbol: &str,
    name: &str,
    shares: i64,
    bought: i64,
    now: i64,
) -> Investment {
    Investment {
        id: id.into(),
        symbol: symbol.into(),
        name: name.into(),
        shares: Decimal::new(shares, 0),
        purchase_price: Decimal::new(bought, 0),
        current_price: Decimal::new(now, 0),
    }
}

fn sample_goal(
    id: &str,
    name: &str,
    target: i64,
    current: i64,
    (y, m, d): (i32, u32, u32),
) -> FinancialGoal {
    FinancialGoal {
        id: id.into(),
        name: name.into(),
        target_amount: Decimal::new(target, 0),
        current_amount: Decimal::new(current, 0),
        deadline: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        let p = p.trim();
        if !p.is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("finboard.json"))
}

pub fn load() -> Result<Settings> {
    load_from(&config_path()?)
}

/// Reads settings from `path`, falling back to the defaults when the file
/// does not exist.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read settings {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    Ok(settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).context("Failed to create config dir")?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("Write settings {}", path.display()))?;
    Ok(())
}
