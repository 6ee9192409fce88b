//! Integer-cent amounts and their presentation as currency text.
//!
//! All pricing arithmetic happens on whole cents, so totals never drift from
//! the sum of their lines. Conversion to dollars only happens at the edge,
//! inside a [`CurrencyFormatter`], using `rust_decimal` to avoid floats.

use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// An amount of money expressed in whole cents.
///
/// # Examples
///
/// ```
/// use theater_billing::Cents;
///
/// let total: Cents = [Cents::new(40000), Cents::new(2500)].into_iter().sum();
/// assert_eq!(total.value(), 42500);
/// assert_eq!(total.to_dollars().to_string(), "425.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(u64);

impl Cents {
    /// Number of decimal places in the dollar representation.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Cents(0);

    /// Wraps a raw cent count.
    pub const fn new(cents: u64) -> Self {
        Cents(cents)
    }

    /// Returns the raw cent count.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Converts to a dollar amount with exactly two decimal places.
    pub fn to_dollars(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), Self::SCALE)
    }
}

impl From<u64> for Cents {
    fn from(cents: u64) -> Self {
        Cents(cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Turns a cent amount into display text.
///
/// Implementations must be deterministic: the same amount always yields the
/// same string.
pub trait CurrencyFormatter {
    fn format(&self, amount: Cents) -> String;
}

/// US dollars, en-US convention: `$`, comma thousands separators, two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format(&self, amount: Cents) -> String {
        let text = format!("{:.2}", amount.to_dollars());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        format!("${}.{}", group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
