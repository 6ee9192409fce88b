//! Statement generation.
//!
//! A [`Statement`] is computed in full before anything is rendered, so a bad
//! performance anywhere in the summary fails the whole call and no partial
//! text is ever produced.

use crate::error::Result;
use crate::money::{Cents, CurrencyFormatter, UsdFormatter};
use crate::performance::PerformanceSummary;
use crate::play::PlayCatalog;
use crate::pricing;
use log::debug;
use std::io;

/// A priced performance as it appears on the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub play_name: String,
    pub audience: u32,
    pub amount: Cents,
    pub credits: u64,
}

/// A customer's priced season.
///
/// # Totals
///
/// [`total_amount`](Statement::total_amount) and
/// [`volume_credits`](Statement::volume_credits) are reductions over the same
/// lines that get printed, so the owed amount always equals the sum of the
/// line amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    /// Prices every performance in the summary.
    ///
    /// Fails with [`StatementError::UnknownPlay`](crate::StatementError::UnknownPlay)
    /// when a play id is missing from the catalog and with
    /// [`StatementError::UnknownPlayType`](crate::StatementError::UnknownPlayType)
    /// when a play's genre has no pricing rule.
    pub fn compute(summary: &PerformanceSummary, catalog: &PlayCatalog) -> Result<Self> {
        let lines = summary
            .performances
            .iter()
            .map(|perf| -> Result<StatementLine> {
                let play = catalog.get(&perf.play_id)?;
                let play_type = play.play_type()?;
                let amount = pricing::amount_for(play_type, perf.audience);
                let credits = pricing::volume_credits_for(play_type, perf.audience);

                debug!(
                    "{}: {} ({}) for {} seats priced at {} cents, {} credits",
                    summary.customer, play.name, play_type, perf.audience, amount, credits
                );

                Ok(StatementLine {
                    play_name: play.name.clone(),
                    audience: perf.audience,
                    amount,
                    credits,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Statement {
            customer: summary.customer.clone(),
            lines,
        })
    }

    /// Total owed across all lines.
    pub fn total_amount(&self) -> Cents {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Volume credits earned across all lines.
    pub fn volume_credits(&self) -> u64 {
        self.lines.iter().map(|line| line.credits).sum()
    }

    /// Renders the statement as newline-terminated text.
    pub fn render(&self, formatter: &dyn CurrencyFormatter) -> String {
        let mut result = format!("Statement for {}\n", self.customer);
        for line in &self.lines {
            result.push_str(&format!(
                " {}: {} ({} seats)\n",
                line.play_name,
                formatter.format(line.amount),
                line.audience
            ));
        }
        result.push_str(&format!(
            "Amount owed is {}\n",
            formatter.format(self.total_amount())
        ));
        result.push_str(&format!("You earned {} credits\n", self.volume_credits()));
        result
    }

    /// Writes the rendered statement to `writer`.
    pub fn write_to<W: io::Write>(
        &self,
        mut writer: W,
        formatter: &dyn CurrencyFormatter,
    ) -> Result<()> {
        writer.write_all(self.render(formatter).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Builds the text statement for a customer, with amounts in US dollars.
///
/// # Examples
///
/// ```
/// use theater_billing::{statement, Performance, PerformanceSummary, Play, PlayCatalog};
///
/// let catalog: PlayCatalog = [("hamlet", Play::new("Hamlet", "tragedy"))]
///     .into_iter()
///     .collect();
/// let summary = PerformanceSummary::new("BigCo", vec![Performance::new("hamlet", 55)]);
///
/// let text = statement(&summary, &catalog).unwrap();
/// assert_eq!(
///     text,
///     "Statement for BigCo\n Hamlet: $650.00 (55 seats)\nAmount owed is $650.00\nYou earned 25 credits\n"
/// );
/// ```
pub fn statement(summary: &PerformanceSummary, catalog: &PlayCatalog) -> Result<String> {
    statement_with(summary, catalog, &UsdFormatter)
}

/// Like [`statement`], with a caller-supplied currency formatter.
pub fn statement_with(
    summary: &PerformanceSummary,
    catalog: &PlayCatalog,
    formatter: &dyn CurrencyFormatter,
) -> Result<String> {
    Ok(Statement::compute(summary, catalog)?.render(formatter))
}
