//! Library-level tests for statement generation edge cases.

use std::io::Cursor;
use theater_billing::{
    read_summaries, statement, Cents, CurrencyFormatter, Performance, PerformanceSummary, Play,
    PlayCatalog, Statement, StatementError, UsdFormatter,
};

fn catalog() -> PlayCatalog {
    [
        ("hamlet", Play::new("Hamlet", "tragedy")),
        ("as-like", Play::new("As You Like It", "comedy")),
        ("othello", Play::new("Othello", "tragedy")),
    ]
    .into_iter()
    .collect()
}

fn single(play_id: &str, audience: u32) -> PerformanceSummary {
    PerformanceSummary::new("Solo", vec![Performance::new(play_id, audience)])
}

fn line_amount(play_id: &str, audience: u32) -> u64 {
    let stmt = Statement::compute(&single(play_id, audience), &catalog()).unwrap();
    stmt.lines[0].amount.value()
}

fn line_credits(play_id: &str, audience: u32) -> u64 {
    let stmt = Statement::compute(&single(play_id, audience), &catalog()).unwrap();
    stmt.lines[0].credits
}

// ==================== AMOUNTS ====================

#[test]
fn test_tragedy_up_to_thirty_seats_is_flat() {
    for audience in 0..=30 {
        assert_eq!(line_amount("hamlet", audience), 40_000);
    }
}

#[test]
fn test_tragedy_thirty_five_seats() {
    assert_eq!(line_amount("hamlet", 35), 45_000);
}

#[test]
fn test_comedy_fifteen_seats_has_no_bonus() {
    assert_eq!(line_amount("as-like", 15), 34_500);
}

#[test]
fn test_comedy_twenty_five_seats() {
    assert_eq!(line_amount("as-like", 25), 50_000);
}

// ==================== CREDITS ====================

#[test]
fn test_tragedy_ten_seats_earns_nothing() {
    assert_eq!(line_credits("othello", 10), 0);
}

#[test]
fn test_comedy_thirty_five_seats_earns_twelve() {
    assert_eq!(line_credits("as-like", 35), 12);
}

// ==================== TOTALS ====================

#[test]
fn test_totals_equal_sum_of_lines() {
    let summary = PerformanceSummary::new(
        "Mixed",
        vec![
            Performance::new("hamlet", 12),
            Performance::new("as-like", 21),
            Performance::new("othello", 77),
            Performance::new("as-like", 3),
            Performance::new("hamlet", 31),
        ],
    );

    let stmt = Statement::compute(&summary, &catalog()).unwrap();
    let line_sum: Cents = stmt.lines.iter().map(|l| l.amount).sum();
    let credit_sum: u64 = stmt.lines.iter().map(|l| l.credits).sum();

    assert_eq!(stmt.total_amount(), line_sum);
    assert_eq!(stmt.volume_credits(), credit_sum);
}

#[test]
fn test_order_changes_lines_not_totals() {
    let forward = PerformanceSummary::new(
        "BigCo",
        vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
    );
    let reversed = PerformanceSummary::new(
        "BigCo",
        vec![Performance::new("as-like", 35), Performance::new("hamlet", 55)],
    );

    let a = Statement::compute(&forward, &catalog()).unwrap();
    let b = Statement::compute(&reversed, &catalog()).unwrap();

    assert_eq!(a.total_amount(), b.total_amount());
    assert_eq!(a.volume_credits(), b.volume_credits());
    assert_eq!(a.lines[0].play_name, "Hamlet");
    assert_eq!(b.lines[0].play_name, "As You Like It");
}

#[test]
fn test_repeated_play_is_billed_each_time() {
    let summary = PerformanceSummary::new(
        "BigCo",
        vec![Performance::new("hamlet", 20), Performance::new("hamlet", 20)],
    );
    let text = statement(&summary, &catalog()).unwrap();

    assert_eq!(text.matches(" Hamlet: $400.00 (20 seats)\n").count(), 2);
    assert!(text.contains("Amount owed is $800.00\n"));
}

// ==================== ERRORS ====================

#[test]
fn test_unknown_type_anywhere_aborts() {
    let mut catalog = catalog();
    catalog.insert("henry-v", Play::new("Henry V", "history"));

    for position in 0..3 {
        let mut performances = vec![
            Performance::new("hamlet", 55),
            Performance::new("as-like", 35),
        ];
        performances.insert(position, Performance::new("henry-v", 40));
        let summary = PerformanceSummary::new("BigCo", performances);

        let err = statement(&summary, &catalog).unwrap_err();
        assert!(matches!(err, StatementError::UnknownPlayType(_)));
    }
}

#[test]
fn test_unused_unknown_type_is_harmless() {
    let mut catalog = catalog();
    catalog.insert("henry-v", Play::new("Henry V", "history"));

    assert!(statement(&single("hamlet", 10), &catalog).is_ok());
}

#[test]
fn test_missing_play_id() {
    let err = statement(&single("macbeth", 10), &catalog()).unwrap_err();
    assert_eq!(err.to_string(), "unknown play: macbeth");
}

// ==================== LOADING ====================

#[test]
fn test_loaded_inputs_match_handbuilt_statement() {
    let plays = "id,name,type\nhamlet,Hamlet,tragedy\nas-like,As You Like It,comedy\nothello,Othello,tragedy\n";
    let performances =
        "customer,play_id,audience\nBigCo,hamlet,55\nBigCo,as-like,35\nBigCo,othello,40\n";

    let loaded_catalog = PlayCatalog::from_csv(Cursor::new(plays)).unwrap();
    let summaries = read_summaries(Cursor::new(performances)).unwrap();

    assert_eq!(loaded_catalog, catalog());
    assert_eq!(
        statement(&summaries[0], &loaded_catalog).unwrap(),
        "Statement for BigCo\n Hamlet: $650.00 (55 seats)\n As You Like It: $580.00 (35 seats)\n Othello: $500.00 (40 seats)\nAmount owed is $1,730.00\nYou earned 47 credits\n"
    );
}

// ==================== FORMATTING ====================

#[test]
fn test_large_totals_are_grouped() {
    let summary = PerformanceSummary::new(
        "Stadium",
        vec![Performance::new("hamlet", 10_030), Performance::new("hamlet", 30)],
    );
    let text = statement(&summary, &catalog()).unwrap();

    assert!(text.contains(" Hamlet: $100,400.00 (10030 seats)\n"));
    assert!(text.contains("Amount owed is $100,800.00\n"));
}

#[test]
fn test_usd_formatter_is_deterministic() {
    for cents in [0, 1, 99, 100, 40_000, 173_000, 100_000_000] {
        assert_eq!(
            UsdFormatter.format(Cents::new(cents)),
            UsdFormatter.format(Cents::new(cents))
        );
    }
}
