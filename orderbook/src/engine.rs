use std::time::Instant;

use crate::arena::OrderArena;
use crate::book::OrderBook;
use crate::error::{EngineError, Result};
use crate::types::{Order, OrderId, Price, Quantity, Side, Timestamp, Trade};

/// Price-time priority matching engine.
///
/// Owns the order arena and the book. A new order first walks the opposite
/// side of the book in best-first order, filling against resting liquidity
/// at each crossing level; any remainder rests. Fills always execute at the
/// maker's resting price, and a taker never jumps ahead of resting orders
/// at its own price.
pub struct MatchingEngine {
    arena: OrderArena,
    book: OrderBook,
    epoch: Instant,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self {
            arena: OrderArena::new(),
            book: OrderBook::new(),
            epoch: Instant::now(),
        }
    }

    /// Submits a limit order. Returns the trades generated by matching, in
    /// execution order; the assigned id is available via
    /// [`last_order_id`](Self::last_order_id).
    pub fn submit_order(&mut self, side: Side, price: Price, qty: Quantity) -> Result<Vec<Trade>> {
        if price <= 0 {
            return Err(EngineError::InvalidArgument("price must be positive"));
        }
        if qty == 0 {
            return Err(EngineError::InvalidArgument("quantity must be positive"));
        }

        let timestamp = self.now();
        let id = self.arena.alloc(side, price, qty, timestamp);

        let mut trades = Vec::new();
        self.match_order(id, &mut trades);

        if self.arena.get(id).is_some_and(|o| !o.is_filled()) {
            self.book.add_order(&self.arena, id);
        }
        Ok(trades)
    }

    /// Cancels a resting order. False when the id is not live; cancel is
    /// idempotent.
    pub fn cancel_order(&mut self, id: OrderId) -> bool {
        self.book.cancel_order(&self.arena, id)
    }

    /// Modifies a resting order.
    ///
    /// At the same price the change is reduce-only and keeps the order's
    /// queue position. A price change cancels and resubmits: the order
    /// loses time priority and receives a new id (see
    /// [`last_order_id`](Self::last_order_id)); the resubmission's trades
    /// are returned.
    pub fn modify_order(
        &mut self,
        id: OrderId,
        new_price: Price,
        new_qty: Quantity,
    ) -> Result<Vec<Trade>> {
        // Validate before any mutation so a rejected modify never costs the
        // caller their resting order.
        if new_price <= 0 {
            return Err(EngineError::InvalidArgument("price must be positive"));
        }
        if new_qty == 0 {
            return Err(EngineError::InvalidArgument("quantity must be positive"));
        }
        if !self.book.has_order(id) {
            return Err(EngineError::NotFound { id });
        }

        let order = self.arena.get(id).expect("resting order must exist in arena");
        let (side, price, remaining) = (order.side, order.price, order.remaining_quantity);

        if new_price == price {
            if new_qty >= remaining {
                return Err(EngineError::InvalidModify {
                    current: remaining,
                    requested: new_qty,
                });
            }
            let reduced = self.book.modify_quantity(&mut self.arena, id, new_qty);
            debug_assert!(reduced);
            return Ok(Vec::new());
        }

        self.book.cancel_order(&self.arena, id);
        self.submit_order(side, new_price, new_qty)
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Resolves any id assigned this session, resting or not. Historical
    /// records keep their final remaining quantity; liveness is
    /// [`OrderBook::has_order`].
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.arena.get(id)
    }

    /// The most recently assigned order id; 0 before the first submission.
    pub fn last_order_id(&self) -> OrderId {
        self.arena.last_id()
    }

    /// Walks the opposite side best-first while the taker still crosses.
    fn match_order(&mut self, taker_id: OrderId, trades: &mut Vec<Trade>) {
        let taker = self.arena.get(taker_id).expect("taker must exist in arena");
        let (side, limit) = (taker.side, taker.price);
        let maker_side = side.opposite();

        loop {
            let remaining = self.arena.get(taker_id).map_or(0, |o| o.remaining_quantity);
            if remaining == 0 {
                break;
            }
            let Some(level_price) = self.book.best_price(maker_side) else {
                break;
            };
            let crosses = match side {
                Side::Buy => level_price <= limit,
                Side::Sell => level_price >= limit,
            };
            if !crosses {
                break;
            }

            self.fill_level(taker_id, maker_side, level_price, trades);
            self.book.clean_level(maker_side, level_price);
        }
    }

    /// Fills as much as possible against one level, oldest maker first.
    fn fill_level(
        &mut self,
        taker_id: OrderId,
        maker_side: Side,
        level_price: Price,
        trades: &mut Vec<Trade>,
    ) {
        loop {
            let taker_remaining = self.arena.get(taker_id).map_or(0, |o| o.remaining_quantity);
            if taker_remaining == 0 {
                break;
            }
            let Some(maker_id) = self
                .book
                .level_mut(maker_side, level_price)
                .and_then(|level| level.front())
            else {
                break;
            };

            let maker = self.arena.get_mut(maker_id).expect("maker must exist in arena");
            let fill = taker_remaining.min(maker.remaining_quantity);
            maker.remaining_quantity -= fill;
            let maker_price = maker.price;
            let maker_filled = maker.is_filled();

            let taker = self.arena.get_mut(taker_id).expect("taker must exist in arena");
            taker.remaining_quantity -= fill;

            trades.push(Trade {
                maker_order_id: maker_id,
                taker_order_id: taker_id,
                price: maker_price,
                quantity: fill,
            });

            if let Some(level) = self.book.level_mut(maker_side, level_price) {
                level.adjust_total(fill);
                if maker_filled {
                    // Remaining quantity is zero, so the pop subtracts nothing.
                    level.pop_front(&self.arena);
                }
            }
            if maker_filled {
                self.book.remove_from_index(maker_id);
            }
        }
    }

    fn now(&self) -> Timestamp {
        self.epoch.elapsed().as_nanos() as Timestamp
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_rejects_non_positive_price_and_quantity() {
        let mut engine = MatchingEngine::new();

        assert_eq!(
            engine.submit_order(Side::Buy, 0, 10),
            Err(EngineError::InvalidArgument("price must be positive"))
        );
        assert_eq!(
            engine.submit_order(Side::Buy, -100, 10),
            Err(EngineError::InvalidArgument("price must be positive"))
        );
        assert_eq!(
            engine.submit_order(Side::Sell, 10000, 0),
            Err(EngineError::InvalidArgument("quantity must be positive"))
        );
        // Nothing was allocated
        assert_eq!(engine.last_order_id(), 0);
    }

    #[test]
    fn test_order_ids_are_monotonic_from_one() {
        let mut engine = MatchingEngine::new();
        engine.submit_order(Side::Buy, 9900, 10).unwrap();
        engine.submit_order(Side::Sell, 10100, 10).unwrap();
        assert_eq!(engine.last_order_id(), 2);
        assert_eq!(engine.order(1).unwrap().side, Side::Buy);
        assert_eq!(engine.order(2).unwrap().side, Side::Sell);
    }

    #[test]
    fn test_timestamps_never_decrease() {
        let mut engine = MatchingEngine::new();
        engine.submit_order(Side::Buy, 9900, 10).unwrap();
        engine.submit_order(Side::Buy, 9900, 10).unwrap();
        let (a, b) = (engine.order(1).unwrap().timestamp, engine.order(2).unwrap().timestamp);
        assert!(a <= b);
    }

    #[test]
    fn test_filled_orders_stay_resolvable() {
        let mut engine = MatchingEngine::new();
        engine.submit_order(Side::Buy, 10000, 100).unwrap();
        engine.submit_order(Side::Sell, 10000, 100).unwrap();

        assert!(!engine.book().has_order(1));
        let maker = engine.order(1).unwrap();
        assert!(maker.is_filled());
        assert_eq!(maker.original_quantity, 100);
    }
}
