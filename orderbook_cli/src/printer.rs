use orderbook::{OrderBook, Trade};
use rust_decimal::Decimal;

use crate::price::dollars;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Box-drawn view of the top `levels` of each side. Asks print worst-first
/// so the best ask sits next to the spread row; bids print best-first.
pub fn print_book(book: &OrderBook, levels: usize) {
    let asks = book.ask_levels(levels);
    let bids = book.bid_levels(levels);

    println!();
    println!("╔══════════════════════════════════════════╗");
    println!("║            LIMIT ORDER BOOK              ║");
    println!("╠══════════════════════╦═══════════════════╣");
    println!("║   Price       Qty    ║  Side             ║");
    println!("╠══════════════════════╬═══════════════════╣");

    for (price, qty) in asks.iter().rev() {
        println!(
            "║  {RED}{:>8}   {:>6}{RESET}    ║  ASK              ║",
            dollars(*price).to_string(),
            qty
        );
    }

    println!("╠══════════════════════╬═══════════════════╣");
    if let (Some(spread), Some(mid)) = (book.spread(), book.mid_price()) {
        println!(
            "║  spread: ${:<9} ║  mid: ${:<10} ║",
            dollars(spread).to_string(),
            (mid / Decimal::from(100)).to_string()
        );
        println!("╠══════════════════════╬═══════════════════╣");
    }

    for (price, qty) in &bids {
        println!(
            "║  {GREEN}{:>8}   {:>6}{RESET}    ║  BID              ║",
            dollars(*price).to_string(),
            qty
        );
    }

    println!("╚══════════════════════╩═══════════════════╝");
}

pub fn print_trades(trades: &[Trade]) {
    if trades.is_empty() {
        return;
    }
    println!("\nTrades executed:");
    for trade in trades {
        println!(
            "     [FILL] maker=#{} taker=#{}  price=${}  qty={}",
            trade.maker_order_id,
            trade.taker_order_id,
            dollars(trade.price),
            trade.quantity
        );
    }
}

pub fn print_top_of_book(book: &OrderBook) {
    print!("  Top-of-book -> ");
    match book.best_bid() {
        Some(bid) => print!("BID ${}", dollars(bid)),
        None => print!("BID [empty]"),
    }
    print!("  |  ");
    match book.best_ask() {
        Some(ask) => print!("ASK ${}", dollars(ask)),
        None => print!("ASK [empty]"),
    }
    if let (Some(spread), Some(mid)) = (book.spread(), book.mid_price()) {
        print!(
            "  |  spread ${}  mid ${}",
            dollars(spread),
            mid / Decimal::from(100)
        );
    }
    println!("  |  {} resting", book.order_count());
}
