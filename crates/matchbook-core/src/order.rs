//! Internal order representation used inside the order book.
//!
//! An order's true remaining quantity is `visible_volume + hidden_volume`.
//! Plain limit orders keep everything visible (`peak_size == 0`,
//! `hidden_volume == 0`). An iceberg order resting in the book shows at
//! most `peak_size` and refills that slice from `hidden_volume` whenever
//! it empties; each refill takes a new priority timestamp.

use crate::error::BookError;
use crate::messages::OrderRequest;
use crate::sequence::Sequencer;
use crate::side::Side;

/// Outcome of a successful fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillEvent {
    /// True when the fill emptied the visible slice and the order
    /// replenished it from its hidden reserve. The order now carries a
    /// later timestamp and belongs at the back of its price level.
    pub refreshed: bool,
}

/// A single order, either incoming (aggressor) or resting in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    side: Side,
    id: u32,
    price: u32,
    visible_volume: u32,
    hidden_volume: u32,
    peak_size: u32,
    priority: u64,
}

impl Order {
    /// Build an order from a parsed request, stamping its time priority.
    ///
    /// The whole requested volume starts visible, even for icebergs: an
    /// aggressor trades with its full quantity and only splits off a
    /// hidden reserve if it ends up resting (see [`Order::make_passive`]).
    pub fn new(request: &OrderRequest, clock: &mut Sequencer) -> Self {
        Order {
            side: request.side,
            id: request.id,
            price: request.price,
            visible_volume: request.volume,
            hidden_volume: 0,
            peak_size: request.peak,
            priority: clock.next(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    /// Quantity currently eligible to trade.
    pub fn visible_volume(&self) -> u32 {
        self.visible_volume
    }

    /// Quantity held in reserve behind the iceberg peak.
    pub fn hidden_volume(&self) -> u32 {
        self.hidden_volume
    }

    /// Maximum visible slice; 0 for a plain limit order.
    pub fn peak_size(&self) -> u32 {
        self.peak_size
    }

    /// Logical timestamp used for time priority at equal price.
    pub fn priority(&self) -> u64 {
        self.priority
    }

    /// True remaining quantity, visible and hidden.
    pub fn remaining(&self) -> u32 {
        self.visible_volume + self.hidden_volume
    }

    /// Fully filled, reserve included.
    pub fn is_fulfilled(&self) -> bool {
        self.visible_volume == 0 && self.hidden_volume == 0
    }

    fn is_iceberg(&self) -> bool {
        self.peak_size > 0
    }

    /// Whether this order is willing to trade at a counterparty's price.
    pub fn can_trade_at(&self, price: u32) -> bool {
        match self.side {
            Side::Buy => self.price >= price,
            Side::Sell => self.price <= price,
        }
    }

    /// Consume `volume` from the visible slice.
    ///
    /// If this empties an iceberg's visible slice while reserve remains,
    /// the slice is replenished to at most `peak_size` and the order takes
    /// a fresh timestamp from `clock`. A request beyond the visible volume
    /// is an engine defect and comes back as an error; the order is left
    /// untouched.
    pub fn fill(&mut self, volume: u32, clock: &mut Sequencer) -> Result<FillEvent, BookError> {
        if volume > self.visible_volume {
            return Err(BookError::FillExceedsVisible {
                id: self.id,
                requested: volume,
                visible: self.visible_volume,
            });
        }

        self.visible_volume -= volume;

        let mut refreshed = false;
        if self.is_iceberg() && self.visible_volume == 0 && self.hidden_volume > 0 {
            self.visible_volume = self.hidden_volume.min(self.peak_size);
            self.hidden_volume -= self.visible_volume;
            self.priority = clock.next();
            refreshed = true;
        }

        Ok(FillEvent { refreshed })
    }

    /// Convert an unfilled aggressor remainder into resting form.
    ///
    /// Called once, just before the order is inserted into the book. An
    /// iceberg whose remainder exceeds its peak splits it into a visible
    /// slice and a hidden reserve; anything else rests as-is.
    pub fn make_passive(&mut self) {
        if self.is_iceberg() && self.visible_volume > self.peak_size {
            self.hidden_volume = self.visible_volume - self.peak_size;
            self.visible_volume = self.peak_size;
        }
    }

    /// Price-time priority comparison within one side.
    ///
    /// Better price wins outright; at equal price the earlier timestamp
    /// wins. An order never has priority over itself. Comparing across
    /// sides is meaningless and reported as an error.
    pub fn has_priority_over(&self, other: &Order) -> Result<bool, BookError> {
        if self.side != other.side {
            return Err(BookError::SideMismatch {
                lhs: self.side,
                rhs: other.side,
            });
        }

        if self.price != other.price {
            return Ok(match self.side {
                Side::Buy => self.price > other.price,
                Side::Sell => self.price < other.price,
            });
        }

        Ok(self.priority < other.priority)
    }
}
