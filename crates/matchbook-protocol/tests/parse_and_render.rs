// crates/matchbook-protocol/tests/parse_and_render.rs

use matchbook_core::{OrderBook, OrderRequest, Side, Trade};
use matchbook_protocol::{
    format_order, format_trade, parse_command, render_book, thousands, Command,
};

fn parsed(line: &str) -> OrderRequest {
    match parse_command(line) {
        Ok(Command::Place(request)) => request,
        other => panic!("expected an order from {line:?}, got {other:?}"),
    }
}

#[test]
fn parses_plain_order() {
    assert_eq!(
        parsed("B,1,100,50"),
        OrderRequest {
            side: Side::Buy,
            id: 1,
            price: 100,
            volume: 50,
            peak: 0,
        }
    );
}

#[test]
fn parses_iceberg_order() {
    let request = parsed("S,4,100,100,10");
    assert_eq!(request.side, Side::Sell);
    assert_eq!(request.peak, 10);
    assert!(request.is_iceberg());
}

#[test]
fn tolerates_whitespace_around_commas() {
    assert_eq!(
        parsed("  S , 42 ,\t99 , 1000 , 25  "),
        OrderRequest {
            side: Side::Sell,
            id: 42,
            price: 99,
            volume: 1000,
            peak: 25,
        }
    );
}

#[test]
fn zero_peak_means_plain_order() {
    let request = parsed("B,1,100,50,0");
    assert_eq!(request.peak, 0);
    assert!(!request.is_iceberg());
}

#[test]
fn classifies_comments_and_blanks() {
    assert_eq!(parse_command("# resting order setup"), Ok(Command::Comment));
    assert_eq!(parse_command("   # indented too"), Ok(Command::Comment));
    assert_eq!(parse_command(""), Ok(Command::Blank));
    assert_eq!(parse_command("   \t  "), Ok(Command::Blank));
}

#[test]
fn rejects_malformed_lines() {
    let malformed = [
        "X,1,100,50",      // unknown side
        "BB,1,100,50",     // side must be a single char
        "B,1,100",         // too few fields
        "B,1,100,50,10,9", // too many fields
        "B,one,100,50",    // non-numeric id
        "B,1,100,-5",      // negative volume
        "B,1,100,0",       // zero volume
        "buy 50 at 100",   // free text
    ];
    for line in malformed {
        let err = parse_command(line).unwrap_err();
        assert_eq!(err.line, line);
    }
}

#[test]
fn groups_digits_in_threes() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(7), "7");
    assert_eq!(thousands(999), "999");
    assert_eq!(thousands(1_000), "1,000");
    assert_eq!(thousands(1_001), "1,001");
    assert_eq!(thousands(123_456), "123,456");
    assert_eq!(thousands(1_234_567_890), "1,234,567,890");
}

#[test]
fn trade_line_uses_plain_integers() {
    let trade = Trade::new(100322, 100345, 5103, 7500);
    assert_eq!(format_trade(&trade), "100322,100345,5103,7500");
}

#[test]
fn order_echo_for_plain_and_iceberg() {
    let plain = parsed("B,1,99,10000");
    assert_eq!(format_order(&plain), "Buy 10,000 units @ 99p");

    let iceberg = parsed("S,2,101,50000,1000");
    assert_eq!(
        format_order(&iceberg),
        "Sell 50,000 units with peaks of 1,000 @ 101p"
    );
}

#[test]
fn renders_empty_book() {
    let book = OrderBook::new();
    let expected = "\
+-----------------------------------------------------------------+
| BUY                            | SELL                           |
| Id       | Volume      | Price | Price | Volume      | Id       |
+----------+-------------+-------+-------+-------------+----------+
+-----------------------------------------------------------------+
";
    assert_eq!(render_book(&book), expected);
}

#[test]
fn renders_two_sided_book_with_uneven_depth() {
    let mut book = OrderBook::new();
    for line in ["B,100322,5103,7500", "B,100301,5102,10000", "S,100345,5104,20000"] {
        book.insert_aggressive(&parsed(line)).unwrap();
    }

    let expected = "\
+-----------------------------------------------------------------+
| BUY                            | SELL                           |
| Id       | Volume      | Price | Price | Volume      | Id       |
+----------+-------------+-------+-------+-------------+----------+
|    100322|        7,500|  5,103|  5,104|       20,000|    100345|
|    100301|       10,000|  5,102|       |             |          |
+-----------------------------------------------------------------+
";
    assert_eq!(render_book(&book), expected);
}

#[test]
fn table_shows_visible_volume_only() {
    let mut book = OrderBook::new();
    book.insert_aggressive(&parsed("S,4,100,100,10")).unwrap();

    let rendered = render_book(&book);
    // 100 total behind a peak of 10: the table shows the visible slice.
    assert!(rendered.contains("|          |             |       |    100|           10|         4|"));
}
