//! Error types for the matching core.
//!
//! These are not input errors: bad command text never reaches this crate
//! (the protocol layer filters it out). A `BookError` means the engine
//! itself broke an invariant, so callers should stop driving the book
//! rather than continue on corrupt state.

use thiserror::Error;

use crate::side::Side;

/// Invariant violation inside the matching engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A fill was requested for more than the order's visible volume.
    #[error("fill of {requested} exceeds visible volume {visible} on order {id}")]
    FillExceedsVisible {
        id: u32,
        requested: u32,
        visible: u32,
    },

    /// Priority comparison between orders on different sides.
    #[error("priority comparison between a {lhs:?} order and a {rhs:?} order")]
    SideMismatch { lhs: Side, rhs: Side },

    /// Two trades for the same counterparty pair disagreed on price.
    #[error(
        "aggregated trades for pair ({buy_id}, {sell_id}) disagree on price: {existing} vs {incoming}"
    )]
    TradePriceMismatch {
        buy_id: u32,
        sell_id: u32,
        existing: u32,
        incoming: u32,
    },
}
