use thiserror::Error;

use crate::types::{OrderId, Quantity};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("order {id} not found")]
    NotFound { id: OrderId },

    #[error("modify at the same price can only reduce quantity: remaining {current}, requested {requested}")]
    InvalidModify {
        current: Quantity,
        requested: Quantity,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, EngineError>;
