use orderbook::{MatchingEngine, Result, Side};

fn main() -> Result<()> {
    let mut engine = MatchingEngine::new();

    engine.submit_order(Side::Buy, 9900, 100)?;
    let id = engine.last_order_id();

    println!("resting: {}", engine.book().has_order(id));
    assert!(engine.cancel_order(id));
    println!("after cancel: {}", engine.book().has_order(id));

    // Cancel is idempotent: a second attempt reports not-live
    assert!(!engine.cancel_order(id));
    assert_eq!(engine.book().best_bid(), None);

    Ok(())
}
