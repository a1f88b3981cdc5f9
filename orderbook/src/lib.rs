//! Single-instrument limit order book with a price-time priority matching
//! engine.
//!
//! Prices are integer minor units (cents); the matching path is exact
//! integer arithmetic throughout. The engine is synchronous and
//! single-threaded: submission order is matching order, and a given call
//! sequence always produces the same trades and the same final book.

mod arena;
mod book;
mod engine;
mod error;
mod level;
mod types;

pub use book::OrderBook;
pub use engine::MatchingEngine;
pub use error::{EngineError, Result};
pub use types::{Order, OrderId, Price, Quantity, Side, Timestamp, Trade};
