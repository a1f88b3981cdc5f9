use serde::{Deserialize, Serialize};

pub type OrderId = u64;

/// Price in minor units (cents). Signed so that spreads and deltas stay in
/// the same type; the engine rejects non-positive prices at the boundary.
pub type Price = i64;
pub type Quantity = u64;

/// Monotonic nanoseconds since engine start. A debug tiebreaker hint only;
/// time priority within a level is FIFO admission order.
pub type Timestamp = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Strictly positive while the order is live; zero exactly when fully
    /// filled, at which point the order leaves the book.
    pub remaining_quantity: Quantity,
    pub original_quantity: Quantity,
    pub timestamp: Timestamp,
}

impl Order {
    pub fn new(
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            side,
            price,
            remaining_quantity: quantity,
            original_quantity: quantity,
            timestamp,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }
}

/// A fill record. `price` is always the maker's resting price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}
