//! Line-oriented demo driver for the classic shopping-street session.
//!
//! One command per stdin line, plain text out. The session runs on a
//! manual clock that only the `tick` command advances and mints counter
//! ids, so transcripts are deterministic end to end.

use std::env;
use std::io::{self, BufRead};
use std::path::Path;

use chrono::{TimeZone, Utc};
use thiserror::Error;

use crate::catalog::{classic_catalog, recruitment_board, Catalog};
use crate::errors::LedgerError;
use crate::ids::CounterIds;
use crate::ledger::{AssetKind, LedgerPolicy, Player};
use crate::services::DEFAULT_HIRE_COST;
use crate::session::{default_tick_interval, GameSession};
use crate::time::ManualClock;
use crate::utils::build_info;

/// Env var naming a catalog JSON file to use instead of the built-in one.
pub const CATALOG_ENV: &str = "SHOTENGAI_CATALOG";

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Runs the scripted demo session over stdin/stdout until `exit` or EOF.
pub fn run_cli() -> Result<(), CliError> {
    let catalog = active_catalog()?;
    let clock = ManualClock::starting_at(session_epoch());
    let mut session = GameSession::with_parts(
        Player::standard_seed("player1", "You"),
        LedgerPolicy::new(AssetKind::Current),
        Box::new(CounterIds::new()),
        Box::new(clock.clone()),
    );
    session.start_passive_income(default_tick_interval());

    println!(
        "Shotengai Core {}. Type `help` for the command list.",
        build_info::VERSION
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => continue,
        };

        match command {
            "help" => print_help(),
            "version" => print_version(),
            "status" => print_status(&session),
            "shops" => print_shops(&catalog),
            "shop" => match parts.next() {
                Some(shop_id) => print_shop(&catalog, shop_id),
                None => println!("Usage: shop <shop id>"),
            },
            "buy" => match (parts.next(), parts.next()) {
                (Some(shop_id), Some(product_id)) => {
                    match catalog.find_product(shop_id, product_id) {
                        Some(product) => {
                            let _ = session.purchase(product);
                            println!("{}", session.message());
                        }
                        None => println!("No product `{product_id}` in shop `{shop_id}`."),
                    }
                }
                _ => println!("Usage: buy <shop id> <product id>"),
            },
            "sell" => match parts.next() {
                Some(asset_id) => {
                    let _ = session.sell(asset_id);
                    println!("{}", session.message());
                }
                None => println!("Usage: sell <asset id>"),
            },
            "assets" => print_assets(&session),
            "bs" => print_balance_sheet(&session),
            "pl" => print_profit_loss(&session),
            "candidates" => print_candidates(),
            "team" => print_team(&session),
            "hire" => match parts.next() {
                Some(candidate_id) => {
                    match recruitment_board()
                        .iter()
                        .find(|candidate| candidate.id == candidate_id)
                    {
                        Some(candidate) => {
                            let _ = session.hire(candidate.clone(), DEFAULT_HIRE_COST);
                            println!("{}", session.message());
                        }
                        None => println!("No candidate `{candidate_id}` on the board."),
                    }
                }
                None => println!("Usage: hire <candidate id>"),
            },
            "dismiss" => match parts.next() {
                Some(member_id) => {
                    let _ = session.dismiss(member_id);
                    println!("{}", session.message());
                }
                None => println!("Usage: dismiss <member id>"),
            },
            "tick" => {
                clock.advance(default_tick_interval());
                let credited = session.poll_passive_income();
                if credited > 0 {
                    println!("{}", session.message());
                } else {
                    println!("No passive income due.");
                }
            }
            "exit" | "quit" => break,
            _ => println!("Unknown command `{command}`. Type `help` for the list."),
        }
    }

    session.stop_passive_income();
    Ok(())
}

fn active_catalog() -> Result<Catalog, CliError> {
    match env::var_os(CATALOG_ENV) {
        Some(path) => Ok(Catalog::load_from_path(Path::new(&path))?),
        None => Ok(classic_catalog().clone()),
    }
}

/// All demo sessions start at the same instant so scripted transcripts
/// never vary with the wall clock.
fn session_epoch() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap()
}

fn print_help() {
    println!("Available commands:");
    println!("  help                        this list");
    println!("  version                     build metadata");
    println!("  status                      money, net worth, banner message");
    println!("  shops                       list the street's shops");
    println!("  shop <id>                   list a shop's products");
    println!("  buy <shop> <product>        purchase a catalog product");
    println!("  sell <asset>                resell an owned asset at 70%");
    println!("  assets                      list owned assets");
    println!("  bs                          balance sheet");
    println!("  pl                          profit and loss");
    println!("  candidates                  recruitment board");
    println!("  team                        current roster");
    println!("  hire <candidate>            hire from the board");
    println!("  dismiss <member>            remove a roster member");
    println!("  tick                        advance one income interval");
    println!("  exit                        quit");
}

fn print_version() {
    let meta = build_info::current();
    println!(
        "shotengai_core_cli {} ({}-{})",
        meta.version, meta.git_hash, meta.git_status
    );
    println!(
        "built {} for {} [{}]",
        meta.timestamp, meta.target, meta.profile
    );
}

fn print_status(session: &GameSession) {
    let totals = session.totals();
    println!("Money: {}", format_money(totals.money));
    println!("Net worth: {}", format_money(totals.net_worth));
    println!("Team: {} member(s)", session.roster().len());
    println!("Message: {}", session.message());
}

fn print_shops(catalog: &Catalog) {
    for shop in &catalog.shops {
        println!(
            "  {:<12} {:<22} {} product(s)",
            shop.id,
            shop.name,
            shop.products.len()
        );
    }
}

fn print_shop(catalog: &Catalog, shop_id: &str) {
    match catalog.shop(shop_id) {
        Some(shop) => {
            println!("{} ({})", shop.name, shop.id);
            for product in &shop.products {
                println!(
                    "  {:<12} {:<18} {:>12}  {}",
                    product.id,
                    product.name,
                    format_money(product.price),
                    product.kind.label()
                );
            }
        }
        None => println!("No shop `{shop_id}` on the street."),
    }
}

fn print_assets(session: &GameSession) {
    for asset in &session.player().assets {
        println!(
            "  {:<16} {:<18} {:>12}  {}",
            asset.id,
            asset.name,
            format_money(asset.value),
            asset.kind.label()
        );
    }
}

fn print_balance_sheet(session: &GameSession) {
    let sheet = session.balance_sheet();
    println!("Assets:");
    for line in &sheet.assets {
        println!("  {:<24} {:>12}", line.name, format_money(line.amount));
    }
    println!(
        "  {:<24} {:>12}",
        "Total assets",
        format_money(sheet.total_assets)
    );
    println!("Liabilities:");
    for line in &sheet.liabilities {
        println!("  {:<24} {:>12}", line.name, format_money(line.amount));
    }
    println!(
        "  {:<24} {:>12}",
        "Total liabilities",
        format_money(sheet.total_liabilities)
    );
    println!("Net worth: {}", format_money(sheet.net_worth));
}

fn print_profit_loss(session: &GameSession) {
    let statement = session.profit_loss();
    println!("Expenses:");
    for line in &statement.expenses {
        println!("  {:<24} {:>12}", line.name, format_money(line.amount));
    }
    println!(
        "  {:<24} {:>12}",
        "Total expenses",
        format_money(statement.total_expenses)
    );
}

fn print_candidates() {
    for candidate in recruitment_board() {
        println!(
            "  {:<12} {:<8} {:<12} earns {} per tick",
            candidate.id,
            candidate.name,
            candidate.role,
            format_money(candidate.contribution)
        );
    }
    println!("Hiring fee: {}", format_money(DEFAULT_HIRE_COST));
}

fn print_team(session: &GameSession) {
    if session.roster().is_empty() {
        println!("The roster is empty.");
        return;
    }
    for member in session.roster() {
        println!(
            "  {:<12} {:<8} {:<12} earns {} per tick",
            member.id,
            member.name,
            member.role,
            format_money(member.contribution)
        );
    }
    let per_tick: i64 = session
        .roster()
        .iter()
        .map(|member| member.contribution)
        .sum();
    println!("Income per tick: {}", format_money(per_tick));
}

/// Money rendering stays in this layer: the library core never formats.
fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if amount < 0 {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
