use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::arena::OrderArena;
use crate::level::PriceLevel;
use crate::types::{OrderId, Price, Quantity, Side};

/// The two-sided resting book.
///
/// Price levels live in a `BTreeMap` per side: the best bid is the maximum
/// key, the best ask the minimum. A hash index holds the ids of all resting
/// orders for O(1) liveness checks and cancel/modify routing; the order
/// records themselves live in the engine's arena.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BTreeMap<Price, PriceLevel>,
    asks: BTreeMap<Price, PriceLevel>,
    index: HashSet<OrderId>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rests an order at the level for its `(side, price)`, creating the
    /// level if needed. The order must be live and not already resting.
    pub(crate) fn add_order(&mut self, arena: &OrderArena, id: OrderId) {
        let order = arena.get(id).expect("resting order must exist in arena");
        debug_assert!(order.remaining_quantity > 0);
        debug_assert!(!self.index.contains(&id));

        let price = order.price;
        self.side_mut(order.side)
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .add(arena, id);
        self.index.insert(id);
    }

    /// Removes a resting order. Returns false when the id is not resting;
    /// cancelling twice is not an error.
    pub(crate) fn cancel_order(&mut self, arena: &OrderArena, id: OrderId) -> bool {
        if !self.index.contains(&id) {
            return false;
        }
        let order = arena.get(id).expect("indexed order must exist in arena");
        let (side, price) = (order.side, order.price);

        let levels = self.side_mut(side);
        if let Some(level) = levels.get_mut(&price) {
            level.remove(arena, id);
            if level.is_empty() {
                levels.remove(&price);
            }
        }
        self.index.remove(&id);
        true
    }

    /// Reduce-only quantity change, preserving the order's place in its
    /// level. Returns false when the id is not resting or `new_qty` does
    /// not strictly reduce the remaining quantity to a positive amount.
    pub(crate) fn modify_quantity(
        &mut self,
        arena: &mut OrderArena,
        id: OrderId,
        new_qty: Quantity,
    ) -> bool {
        if new_qty == 0 || !self.index.contains(&id) {
            return false;
        }
        let order = arena.get_mut(id).expect("indexed order must exist in arena");
        if new_qty >= order.remaining_quantity {
            return false;
        }
        let delta = order.remaining_quantity - new_qty;
        order.remaining_quantity = new_qty;

        let (side, price) = (order.side, order.price);
        if let Some(level) = self.level_mut(side, price) {
            level.adjust_total(delta);
        }
        true
    }

    /// Drops the named level if it exists and is empty. Idempotent.
    pub(crate) fn clean_level(&mut self, side: Side, price: Price) {
        let levels = self.side_mut(side);
        if levels.get(&price).is_some_and(PriceLevel::is_empty) {
            levels.remove(&price);
        }
    }

    /// Unlinks an id from the index without touching any level. Matcher
    /// path for fully filled makers whose level entry is popped separately.
    pub(crate) fn remove_from_index(&mut self, id: OrderId) {
        self.index.remove(&id);
    }

    pub(crate) fn best_price(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.bids.keys().next_back().copied(),
            Side::Sell => self.asks.keys().next().copied(),
        }
    }

    pub(crate) fn level_mut(&mut self, side: Side, price: Price) -> Option<&mut PriceLevel> {
        self.side_mut(side).get_mut(&price)
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.best_price(Side::Buy)
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.best_price(Side::Sell)
    }

    /// Best ask minus best bid, in cents.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_ask(), self.best_bid()) {
            (Some(ask), Some(bid)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Exact midpoint of the touch, in cents. Decimal so a half-cent
    /// midpoint is represented exactly; display conversion is the caller's
    /// concern.
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(Decimal::from(bid + ask) / Decimal::from(2)),
            _ => None,
        }
    }

    /// True iff the order is currently resting.
    pub fn has_order(&self, id: OrderId) -> bool {
        self.index.contains(&id)
    }

    /// Top `depth` bid levels as `(price, total_quantity)`, best first.
    pub fn bid_levels(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.bids
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Top `depth` ask levels as `(price, total_quantity)`, best first.
    pub fn ask_levels(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.asks
            .iter()
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Number of resting orders across both sides.
    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    fn side_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}
