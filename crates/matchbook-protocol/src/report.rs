//! Human-readable output: trade lines and the order-book table.

use matchbook_core::{OrderBook, OrderRequest, Side, Trade};

const TABLE_RULE: &str = "+-----------------------------------------------------------------+";
const TABLE_TITLES: &str = "| BUY                            | SELL                           |";
const TABLE_COLUMNS: &str = "| Id       | Volume      | Price | Price | Volume      | Id       |";
const TABLE_HEADER_RULE: &str = "+----------+-------------+-------+-------+-------------+----------+";

/// Group an integer's digits with commas, e.g. `1001` -> `"1,001"`.
pub fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + (digits.len() - 1) / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render one trade as `<buy_id>,<sell_id>,<price>,<volume>`.
///
/// Plain integers: trade lines are the machine-readable part of the
/// output, so no digit grouping here.
pub fn format_trade(trade: &Trade) -> String {
    format!(
        "{},{},{},{}",
        trade.buy_id, trade.sell_id, trade.price, trade.volume
    )
}

/// Render an order-placement echo line, e.g.
/// `Buy 10,000 units with peaks of 1,000 @ 99p`.
pub fn format_order(request: &OrderRequest) -> String {
    let side = match request.side {
        Side::Buy => "Buy",
        Side::Sell => "Sell",
    };
    let mut out = format!("{} {} units ", side, thousands(request.volume));
    if request.is_iceberg() {
        out.push_str(&format!("with peaks of {} ", thousands(request.peak)));
    }
    out.push_str(&format!("@ {}p", thousands(request.price)));
    out
}

/// Render the fixed-width two-column book table.
///
/// One row per depth level down to the deeper side; the shallower side's
/// cells are left blank. Ids print plain; volumes (visible only) and
/// prices are digit-grouped. All cells are right-aligned.
pub fn render_book(book: &OrderBook) -> String {
    let buys = book.buy_ledger();
    let sells = book.sell_ledger();

    let mut out = String::new();
    out.push_str(TABLE_RULE);
    out.push('\n');
    out.push_str(TABLE_TITLES);
    out.push('\n');
    out.push_str(TABLE_COLUMNS);
    out.push('\n');
    out.push_str(TABLE_HEADER_RULE);
    out.push('\n');

    let depth = buys.len().max(sells.len());
    for i in 0..depth {
        let (buy_id, buy_volume, buy_price) = match buys.get(i) {
            Some(order) => (
                order.id().to_string(),
                thousands(order.visible_volume()),
                thousands(order.price()),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        let (sell_price, sell_volume, sell_id) = match sells.get(i) {
            Some(order) => (
                thousands(order.price()),
                thousands(order.visible_volume()),
                order.id().to_string(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        out.push_str(&format!(
            "|{:>10}|{:>13}|{:>7}|{:>7}|{:>13}|{:>10}|\n",
            buy_id, buy_volume, buy_price, sell_price, sell_volume, sell_id
        ));
    }

    out.push_str(TABLE_RULE);
    out.push('\n');
    out
}
