//! Trade records and per-order aggregation.

use crate::error::BookError;

/// One fill between a buy order and a sell order at one price.
///
/// Immutable once aggregation is done; ids are assigned by side, not by
/// which order was the aggressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    pub buy_id: u32,
    pub sell_id: u32,
    pub price: u32,
    pub volume: u32,
}

impl Trade {
    pub fn new(buy_id: u32, sell_id: u32, price: u32, volume: u32) -> Self {
        Trade {
            buy_id,
            sell_id,
            price,
            volume,
        }
    }

    /// Same `(buy_id, sell_id)` counterparty pair.
    fn pairs_with(&self, other: &Trade) -> bool {
        self.buy_id == other.buy_id && self.sell_id == other.sell_id
    }
}

/// Accumulates the trades produced while processing one incoming order.
///
/// Fills against the same counterparty pair (an iceberg refresh can
/// produce several) merge into a single record; distinct pairs keep their
/// first-seen order. One `TradeList` per aggressive insert, drained at the
/// end and then discarded.
#[derive(Debug, Default)]
pub struct TradeList {
    trades: Vec<Trade>,
}

impl TradeList {
    pub fn new() -> Self {
        TradeList::default()
    }

    /// Record one fill, merging with an earlier fill for the same pair.
    ///
    /// Fills for one pair within a single aggressive insert always happen
    /// at the resting order's limit price, so a price mismatch here means
    /// the engine produced inconsistent fills.
    pub fn submit(&mut self, trade: Trade) -> Result<(), BookError> {
        if let Some(existing) = self.trades.iter_mut().find(|t| t.pairs_with(&trade)) {
            if existing.price != trade.price {
                return Err(BookError::TradePriceMismatch {
                    buy_id: trade.buy_id,
                    sell_id: trade.sell_id,
                    existing: existing.price,
                    incoming: trade.price,
                });
            }
            existing.volume += trade.volume;
        } else {
            self.trades.push(trade);
        }
        Ok(())
    }

    /// Merged trades in the order each pair was first seen.
    pub fn into_trades(self) -> Vec<Trade> {
        self.trades
    }
}
