use orderbook::{MatchingEngine, Result, Side};

fn main() -> Result<()> {
    let mut engine = MatchingEngine::new();

    engine.submit_order(Side::Buy, 10000, 50)?;

    // Sell 100 against a 50-lot bid: half fills, half rests as the new ask
    let trades = engine.submit_order(Side::Sell, 10000, 100)?;
    let sell_id = engine.last_order_id();

    println!("trades: {trades:?}");
    println!("resting remainder: {:?}", engine.order(sell_id));

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].quantity, 50);
    assert!(engine.book().has_order(sell_id));
    assert_eq!(engine.book().ask_levels(1), vec![(10000, 50)]);

    Ok(())
}
