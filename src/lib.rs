//! # Theater Billing
//!
//! Prices a customer's season of theater performances and renders the
//! billing statement as plain text.
//!
//! ## Design Principles
//!
//! - **Integer cents**: every amount is a [`Cents`] value; dollars only appear
//!   when a [`CurrencyFormatter`] renders text
//! - **Closed genres**: pricing dispatches on [`PlayType`]; unknown labels fail
//! - **Fail fast**: a missing play or unpriced genre aborts the statement
//! - **Pure core**: [`statement`] has no side effects and no hidden state
//!
//! ## Example
//!
//! ```
//! use theater_billing::{statement, Performance, PerformanceSummary, Play, PlayCatalog};
//!
//! let catalog: PlayCatalog = [
//!     ("hamlet", Play::new("Hamlet", "tragedy")),
//!     ("as-like", Play::new("As You Like It", "comedy")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let summary = PerformanceSummary::new(
//!     "BigCo",
//!     vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
//! );
//!
//! let text = statement(&summary, &catalog).unwrap();
//! assert!(text.ends_with("Amount owed is $1,230.00\nYou earned 37 credits\n"));
//! ```

pub mod error;
pub mod money;
pub mod performance;
pub mod play;
pub mod pricing;
pub mod statement;

pub use error::{Result, StatementError};
pub use money::{Cents, CurrencyFormatter, UsdFormatter};
pub use performance::{read_summaries, Performance, PerformanceSummary};
pub use play::{Play, PlayCatalog, PlayType};
pub use statement::{statement, statement_with, Statement, StatementLine};
