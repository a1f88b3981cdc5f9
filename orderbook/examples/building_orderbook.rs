use orderbook::{MatchingEngine, Result, Side};

fn main() -> Result<()> {
    let mut engine = MatchingEngine::new();

    engine.submit_order(Side::Buy, 9900, 100)?;
    engine.submit_order(Side::Buy, 9800, 150)?;
    engine.submit_order(Side::Buy, 9700, 200)?;

    engine.submit_order(Side::Sell, 10100, 100)?;
    engine.submit_order(Side::Sell, 10200, 150)?;
    engine.submit_order(Side::Sell, 10300, 200)?;

    println!("Best bid: {:?}", engine.book().best_bid());
    println!("Best ask: {:?}", engine.book().best_ask());
    println!("Spread:   {:?}", engine.book().spread());
    println!("Mid:      {:?}", engine.book().mid_price());
    println!("Resting:  {}", engine.book().order_count());

    assert_eq!(engine.book().best_bid(), Some(9900));
    assert_eq!(engine.book().best_ask(), Some(10100));
    assert_eq!(engine.book().spread(), Some(200));
    assert_eq!(engine.book().order_count(), 6);

    Ok(())
}
