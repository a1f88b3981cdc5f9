use orderbook::{MatchingEngine, Quantity, Result, Side};

fn main() -> Result<()> {
    let mut engine = MatchingEngine::new();

    // Resting asks at three levels
    engine.submit_order(Side::Sell, 10000, 50)?;
    engine.submit_order(Side::Sell, 10100, 50)?;
    engine.submit_order(Side::Sell, 10200, 50)?;

    // An aggressive buy that sweeps all of them
    let trades = engine.submit_order(Side::Buy, 10200, 150)?;

    for trade in &trades {
        println!(
            "fill: maker=#{} taker=#{} price={} qty={}",
            trade.maker_order_id, trade.taker_order_id, trade.price, trade.quantity
        );
    }

    assert_eq!(trades.len(), 3);
    assert_eq!(trades.iter().map(|t| t.quantity).sum::<Quantity>(), 150);
    assert_eq!(engine.book().best_ask(), None);

    Ok(())
}
