use std::io::{self, BufRead};
use std::str::SplitWhitespace;

use anyhow::Result;
use orderbook::{MatchingEngine, OrderId, Quantity, Side};
use tracing::{debug, info};

mod price;
mod printer;

use price::parse_price;

const DEFAULT_BOOK_DEPTH: usize = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderbook_cli=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let depth = book_depth_from_env();
    let mut engine = MatchingEngine::new();

    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };

        match cmd {
            "quit" | "q" => break,
            "help" | "h" => print_help(),
            "buy" => submit(&mut engine, Side::Buy, "buy", &mut parts),
            "sell" => submit(&mut engine, Side::Sell, "sell", &mut parts),
            "cancel" => cancel(&mut engine, &mut parts),
            "modify" => modify(&mut engine, &mut parts),
            "book" => {
                let levels = parts.next().and_then(|s| s.parse().ok()).unwrap_or(depth);
                printer::print_book(engine.book(), levels);
            }
            "top" => printer::print_top_of_book(engine.book()),
            _ => println!("Unknown command. Type 'help'."),
        }
    }

    Ok(())
}

fn submit(engine: &mut MatchingEngine, side: Side, cmd: &str, parts: &mut SplitWhitespace) {
    let (Some(price_str), Some(qty_str)) = (parts.next(), parts.next()) else {
        println!("  Usage: {cmd} <price> <qty>");
        return;
    };
    let Ok(qty) = qty_str.parse::<Quantity>() else {
        println!("  Usage: {cmd} <price> <qty>");
        return;
    };
    let price = match parse_price(price_str) {
        Ok(price) => price,
        Err(err) => {
            println!("  Error: {err:#}");
            return;
        }
    };

    match engine.submit_order(side, price, qty) {
        Ok(trades) => {
            let id = engine.last_order_id();
            info!(id, ?side, price, qty, fills = trades.len(), "order submitted");
            if trades.is_empty() {
                println!("  Order #{id} resting in book ({cmd} ${price_str} x{qty})");
            } else {
                printer::print_trades(&trades);
                if engine.book().has_order(id) {
                    println!("  Order #{id} partially filled, remainder resting.");
                } else {
                    println!("  Order #{id} fully filled.");
                }
            }
        }
        Err(err) => println!("  Error: {err}"),
    }
}

fn cancel(engine: &mut MatchingEngine, parts: &mut SplitWhitespace) {
    let Some(Ok(id)) = parts.next().map(str::parse::<OrderId>) else {
        println!("  Usage: cancel <id>");
        return;
    };
    if engine.cancel_order(id) {
        info!(id, "order cancelled");
        println!("  Order #{id} cancelled.");
    } else {
        debug!(id, "cancel of unknown order");
        println!("  Order #{id} not found.");
    }
}

fn modify(engine: &mut MatchingEngine, parts: &mut SplitWhitespace) {
    let (Some(id_str), Some(price_str), Some(qty_str)) = (parts.next(), parts.next(), parts.next())
    else {
        println!("  Usage: modify <id> <new_price> <qty>");
        return;
    };
    let (Ok(id), Ok(qty)) = (id_str.parse::<OrderId>(), qty_str.parse::<Quantity>()) else {
        println!("  Usage: modify <id> <new_price> <qty>");
        return;
    };
    let new_price = match parse_price(price_str) {
        Ok(price) => price,
        Err(err) => {
            println!("  Error: {err:#}");
            return;
        }
    };

    let last_before = engine.last_order_id();
    match engine.modify_order(id, new_price, qty) {
        Ok(trades) => {
            let last_after = engine.last_order_id();
            if last_after != last_before {
                // Price change went through cancel + resubmit
                info!(id, new_id = last_after, "order repriced");
                println!("  Order #{id} repriced as order #{last_after}.");
            } else {
                info!(id, qty, "order reduced");
                println!("  Order #{id} modified.");
            }
            printer::print_trades(&trades);
        }
        Err(err) => println!("  Error: {err}"),
    }
}

fn book_depth_from_env() -> usize {
    std::env::var("BOOK_DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_BOOK_DEPTH)
}

fn print_help() {
    println!(
        r#"
Commands:
    buy  <price> <qty>              Submit a limit buy order
    sell <price> <qty>              Submit a limit sell order
    cancel <id>                     Cancel an order by ID
    modify <id> <new_price> <qty>   Modify order (price change = cancel+resubmit)
    book [levels]                   Print order book (default {DEFAULT_BOOK_DEPTH} levels)
    top                             Print best bid/ask, spread, mid
    help                            Show this menu
    quit                            Exit

Prices are in dollars (e.g. 99.50). Stored internally as fixed-point cents.
"#
    )
}
