// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn csv_arg() -> Arg {
    Arg::new("csv")
        .long("csv")
        .action(ArgAction::Append)
        .help("CSV file with date,description,amount rows (repeatable)")
}

fn today_arg() -> Arg {
    Arg::new("today")
        .long("today")
        .help("Reference date for goal deadlines (YYYY-MM-DD)")
}

fn price_arg() -> Arg {
    Arg::new("price")
        .long("price")
        .action(ArgAction::Append)
        .value_name("SYMBOL=PRICE")
        .help("Override the current price of a position (repeatable)")
}

fn type_arg(default: &'static str) -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense"])
        .default_value(default)
}

pub fn build_cli() -> Command {
    command!()
        .name("finboard")
        .about("Personal finance dashboard: CSV import, cash flow, portfolio and goals")
        .subcommand_required(false)
        .subcommand(
            Command::new("import")
                .about("Import transactions from CSV")
                .subcommand(json_args(
                    Command::new("transactions").arg(
                        Arg::new("path")
                            .long("path")
                            .required(true)
                            .action(ArgAction::Append)
                            .help("CSV file (repeatable)"),
                    ),
                )),
        )
        .subcommand(
            Command::new("tx").about("Manual transaction entry").subcommand(json_args(
                Command::new("add")
                    .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                    .arg(Arg::new("description").long("description").required(true))
                    .arg(Arg::new("category").long("category").required(true))
                    .arg(Arg::new("amount").long("amount").required(true))
                    .arg(type_arg("expense")),
            )),
        )
        .subcommand(
            Command::new("report")
                .about("Derived metrics")
                .subcommand(json_args(
                    Command::new("cashflow").arg(csv_arg()),
                ))
                .subcommand(json_args(
                    Command::new("categories")
                        .arg(csv_arg())
                        .arg(type_arg("expense")),
                ))
                .subcommand(json_args(
                    Command::new("networth")
                        .arg(price_arg())
                        .arg(Arg::new("assets").long("assets"))
                        .arg(Arg::new("liabilities").long("liabilities")),
                ))
                .subcommand(json_args(Command::new("portfolio").arg(price_arg())))
                .subcommand(json_args(Command::new("goals").arg(today_arg())))
                .subcommand(json_args(
                    Command::new("transactions")
                        .about("Transactions, newest first")
                        .arg(csv_arg()),
                )),
        )
        .subcommand(
            Command::new("dashboard")
                .about("All metrics at once")
                .arg(csv_arg())
                .arg(price_arg())
                .arg(today_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("List allowed categories")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["income", "expense"]),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings file")
                .subcommand(Command::new("path"))
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("init").arg(
                        Arg::new("force")
                            .long("force")
                            .action(ArgAction::SetTrue)
                            .help("Overwrite an existing file"),
                    ),
                ),
        )
}
