//! Performances billed to a customer, and CSV loading of them.

use crate::error::{Result, StatementError};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// One show of a play attended by a customer's audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performance {
    /// Key into the [`PlayCatalog`](crate::PlayCatalog).
    pub play_id: String,

    /// Number of seats sold.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's season: performances in the order they appear on the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceSummary {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl PerformanceSummary {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        PerformanceSummary {
            customer: customer.into(),
            performances,
        }
    }
}

/// Raw performance row as read from CSV.
#[derive(Debug, Deserialize)]
struct PerformanceRecord {
    customer: String,
    play_id: String,
    audience: u32,
}

/// Reads performances from CSV with the header `customer,play_id,audience`.
///
/// Rows are grouped into one summary per customer. Summaries come out in the
/// order each customer first appears and keep their rows in file order.
/// Loading stops at the first malformed row (negative or non-numeric audience,
/// blank customer or play id).
pub fn read_summaries<R: Read>(reader: R) -> Result<Vec<PerformanceSummary>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut summaries: Vec<PerformanceSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (row_idx, result) in csv_reader
        .deserialize::<PerformanceRecord>()
        .enumerate()
    {
        let row = row_idx + 2; // 1-indexed, accounting for header row
        let record = result.map_err(|e| StatementError::from_csv_row(e, row))?;

        if record.customer.is_empty() {
            return Err(StatementError::InvalidRecord {
                row,
                message: "customer is empty".to_string(),
            });
        }
        if record.play_id.is_empty() {
            return Err(StatementError::InvalidRecord {
                row,
                message: "play_id is empty".to_string(),
            });
        }

        debug!(
            "Row {}: {} saw {} with {} seats",
            row, record.customer, record.play_id, record.audience
        );

        let slot = match index.get(&record.customer) {
            Some(&slot) => slot,
            None => {
                summaries.push(PerformanceSummary::new(record.customer.clone(), Vec::new()));
                index.insert(record.customer, summaries.len() - 1);
                summaries.len() - 1
            }
        };
        summaries[slot]
            .performances
            .push(Performance::new(record.play_id, record.audience));
    }

    Ok(summaries)
}
