//! matchbook-core
//!
//! Pure matching logic:
//! - order and trade types
//! - per-order trade aggregation
//! - price-time priority order book with iceberg support
//! - logical sequencer for time priority

pub mod error;
pub mod messages;
pub mod order;
pub mod order_book;
pub mod sequence;
pub mod side;
pub mod trade;

pub use error::BookError;
pub use messages::OrderRequest;
pub use order::{FillEvent, Order};
pub use order_book::OrderBook;
pub use sequence::Sequencer;
pub use side::Side;
pub use trade::{Trade, TradeList};
