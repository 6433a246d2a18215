//! Parsed input to the matching engine.
//!
//! An [`OrderRequest`] is what the text protocol produces: plain fields,
//! no timestamp. The book turns it into an internal
//! [`Order`](crate::order::Order) and stamps time priority from its own
//! sequencer, so parsing never influences matching order.

use crate::side::Side;

/// A request to place one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Buy or Sell.
    pub side: Side,

    /// Participant-assigned identifier. Uniqueness is not enforced.
    pub id: u32,

    /// Limit price in integer minor currency units.
    pub price: u32,

    /// Total quantity to trade.
    pub volume: u32,

    /// Maximum visible slice for an iceberg order; 0 means a plain limit
    /// order with its whole volume on display.
    pub peak: u32,
}

impl OrderRequest {
    /// True when this request describes an iceberg order.
    pub fn is_iceberg(&self) -> bool {
        self.peak > 0
    }
}
