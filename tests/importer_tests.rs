// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::{cli, commands::importer, models::TxKind};
use std::fs;
use tempfile::tempdir;

fn import_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["finboard", "import", "transactions"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("import", import_m)) => match import_m.subcommand() {
            Some(("transactions", sub)) => sub.clone(),
            _ => panic!("no transactions subcommand"),
        },
        _ => panic!("no import subcommand"),
    }
}

#[test]
fn importer_reads_every_path_in_order() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("january.csv");
    let second = dir.path().join("february.csv");
    fs::write(
        &first,
        "Date,Description,Amount\n2024-01-15,Grocery Store,-45.99\n2024-01-31,Paycheck,3000\n",
    )
    .unwrap();
    fs::write(&second, "2024-02-01,Electric bill,-80\n").unwrap();

    let sub = import_matches(&[
        "--path",
        first.to_str().unwrap(),
        "--path",
        second.to_str().unwrap(),
    ]);
    let txs = importer::import_rows(&sub).unwrap();
    assert_eq!(txs.len(), 3);
    assert_eq!(txs[0].description, "Grocery Store");
    assert_eq!(txs[1].kind, TxKind::Income);
    assert_eq!(txs[2].description, "Electric bill");
}

#[test]
fn importer_trims_cli_path_argument() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bank.csv");
    fs::write(&path, "2025-02-03,Shop,-5.00\n").unwrap();

    let padded = format!("  {}  ", path.to_str().unwrap());
    let sub = import_matches(&["--path", &padded]);
    let txs = importer::import_rows(&sub).unwrap();
    assert_eq!(txs.len(), 1);
}

#[test]
fn importer_rejects_non_csv_before_reading() {
    let sub = import_matches(&["--path", "/definitely/missing/statement.pdf"]);
    let err = importer::import_rows(&sub).unwrap_err();
    assert!(format!("{:#}", err).contains("Please upload a CSV file"));
}

#[test]
fn importer_fails_when_file_has_no_valid_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Date,Description,Amount\nnot,enough\n").unwrap();

    let sub = import_matches(&["--path", path.to_str().unwrap()]);
    let err = importer::import_rows(&sub).unwrap_err();
    assert!(format!("{:#}", err).contains("No valid transactions found"));
}

#[test]
fn importer_handle_prints_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bank.csv");
    fs::write(&path, "2024-01-01,Rent,-1200\n").unwrap();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "finboard",
        "import",
        "transactions",
        "--path",
        path.to_str().unwrap(),
        "--jsonl",
    ]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }
}
