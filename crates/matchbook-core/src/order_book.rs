//! Single-market order book with price-time priority.
//!
//! - Bids: best = highest price.
//! - Asks: best = lowest price.
//! - FIFO (time priority) within each price level.
//!
//! Each side keeps a `BTreeMap` from price to a FIFO queue of orders at
//! that price. Orders always enter a level at the back, and an iceberg
//! refresh moves the refreshed order to the back of its level, so queue
//! position stays consistent with the orders' priority timestamps without
//! ever re-sorting a level.

use std::collections::{BTreeMap, VecDeque};

use crate::error::BookError;
use crate::messages::OrderRequest;
use crate::order::Order;
use crate::sequence::Sequencer;
use crate::side::Side;
use crate::trade::{Trade, TradeList};

/// One side of the book: price -> FIFO queue of resting orders.
#[derive(Debug)]
struct BookSide {
    side: Side,
    levels: BTreeMap<u32, VecDeque<Order>>,
}

impl BookSide {
    fn new(side: Side) -> Self {
        BookSide {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Best price on this side: highest for bids, lowest for asks.
    fn best_price(&self) -> Option<u32> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// The resting order with priority over every other on this side.
    fn front_mut(&mut self) -> Option<&mut Order> {
        let price = self.best_price()?;
        self.levels.get_mut(&price)?.front_mut()
    }

    /// Remove and return the best order, dropping its level if emptied.
    fn pop_best(&mut self) -> Option<Order> {
        let price = self.best_price()?;
        let queue = self.levels.get_mut(&price)?;
        let order = queue.pop_front();
        if queue.is_empty() {
            self.levels.remove(&price);
        }
        order
    }

    /// Move the best order to the back of its price level.
    ///
    /// Used after an iceberg refresh: the replenished slice keeps its
    /// price but carries a later timestamp, so it queues behind everything
    /// already resting there.
    fn requeue_best(&mut self) {
        let Some(price) = self.best_price() else {
            return;
        };
        if let Some(queue) = self.levels.get_mut(&price) {
            if queue.len() > 1 {
                if let Some(order) = queue.pop_front() {
                    queue.push_back(order);
                }
            }
        }
    }

    /// Add a resting order at the back of its price level.
    fn insert(&mut self, order: Order) {
        self.levels.entry(order.price()).or_default().push_back(order);
    }

    /// All resting orders in priority order, best first.
    fn orders(&self) -> Vec<&Order> {
        let mut out = Vec::new();
        match self.side {
            Side::Buy => {
                for queue in self.levels.values().rev() {
                    out.extend(queue.iter());
                }
            }
            Side::Sell => {
                for queue in self.levels.values() {
                    out.extend(queue.iter());
                }
            }
        }
        out
    }
}

/// Single-market order book.
///
/// Owns its own [`Sequencer`], so a fresh book replaying the same request
/// stream reproduces identical timestamps and identical matching.
#[derive(Debug)]
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
    clock: Sequencer,
}

impl Default for OrderBook {
    fn default() -> Self {
        OrderBook::new()
    }
}

impl OrderBook {
    /// Create an empty book.
    pub fn new() -> Self {
        OrderBook {
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            clock: Sequencer::new(),
        }
    }

    /// Place an incoming order, matching it against the opposite side
    /// until it is filled or no longer crosses, then resting any
    /// remainder on its own side.
    ///
    /// Returns the resulting trades, merged per counterparty pair in
    /// first-match order. An `Err` means the engine violated one of its
    /// own invariants; the book should not be used further.
    pub fn insert_aggressive(&mut self, request: &OrderRequest) -> Result<Vec<Trade>, BookError> {
        let mut incoming = Order::new(request, &mut self.clock);
        let mut fills = TradeList::new();

        let (own, opposite) = match incoming.side() {
            Side::Buy => (&mut self.bids, &mut self.asks),
            Side::Sell => (&mut self.asks, &mut self.bids),
        };

        Self::match_incoming(&mut incoming, opposite, &mut self.clock, &mut fills)?;

        if !incoming.is_fulfilled() {
            incoming.make_passive();
            own.insert(incoming);
        }

        Ok(fills.into_trades())
    }

    /// Resting bids in priority order, best first.
    pub fn buy_ledger(&self) -> Vec<&Order> {
        self.bids.orders()
    }

    /// Resting asks in priority order, best first.
    pub fn sell_ledger(&self) -> Vec<&Order> {
        self.asks.orders()
    }

    /// Best bid price, if any bid is resting.
    pub fn best_bid_price(&self) -> Option<u32> {
        self.bids.best_price()
    }

    /// Best ask price, if any ask is resting.
    pub fn best_ask_price(&self) -> Option<u32> {
        self.asks.best_price()
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Match `incoming` against the opposite side until it is fulfilled,
    /// the side empties, or prices no longer cross.
    fn match_incoming(
        incoming: &mut Order,
        opposite: &mut BookSide,
        clock: &mut Sequencer,
        fills: &mut TradeList,
    ) -> Result<(), BookError> {
        while !incoming.is_fulfilled() {
            let best_price = match opposite.best_price() {
                Some(price) => price,
                None => break,
            };
            if !incoming.can_trade_at(best_price) {
                break;
            }

            let resting = match opposite.front_mut() {
                Some(order) => order,
                None => break,
            };

            // Both visible volumes are positive here: fulfilled orders
            // never rest, so the fill volume is never zero and every
            // iteration strictly shrinks someone's remainder.
            let fill_volume = incoming.visible_volume().min(resting.visible_volume());

            // Execution happens at the resting order's limit, not the
            // aggressor's: price improvement for the incoming order.
            let price = resting.price();
            let (buy_id, sell_id) = match incoming.side() {
                Side::Buy => (incoming.id(), resting.id()),
                Side::Sell => (resting.id(), incoming.id()),
            };

            let event = resting.fill(fill_volume, clock)?;
            let resting_done = resting.is_fulfilled();

            incoming.fill(fill_volume, clock)?;
            fills.submit(Trade::new(buy_id, sell_id, price, fill_volume))?;

            if resting_done {
                opposite.pop_best();
            } else if event.refreshed {
                opposite.requeue_best();
            }
        }

        Ok(())
    }
}
