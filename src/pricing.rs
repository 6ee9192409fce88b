//! Per-performance pricing rules.
//!
//! Both functions are pure and integer-only; the statement totals are plain
//! sums of their results.

use crate::money::Cents;
use crate::play::PlayType;

const TRAGEDY_BASE: u64 = 40_000;
const TRAGEDY_INCLUDED_SEATS: u64 = 30;
const TRAGEDY_PER_EXTRA_SEAT: u64 = 1_000;

const COMEDY_BASE: u64 = 30_000;
const COMEDY_INCLUDED_SEATS: u64 = 20;
const COMEDY_LARGE_AUDIENCE_FEE: u64 = 10_000;
const COMEDY_PER_EXTRA_SEAT: u64 = 500;
const COMEDY_PER_SEAT: u64 = 300;

/// Seats above this count earn one volume credit each.
const CREDIT_THRESHOLD: u64 = 30;
/// Comedy audiences earn one extra credit per this many seats.
const COMEDY_CREDIT_DIVISOR: u64 = 5;

/// Amount charged for one performance.
///
/// # Examples
///
/// ```
/// use theater_billing::{pricing, Cents, PlayType};
///
/// assert_eq!(pricing::amount_for(PlayType::Tragedy, 35), Cents::new(45_000));
/// assert_eq!(pricing::amount_for(PlayType::Comedy, 25), Cents::new(50_000));
/// ```
pub fn amount_for(play_type: PlayType, audience: u32) -> Cents {
    let audience = u64::from(audience);
    let amount = match play_type {
        PlayType::Tragedy => {
            let mut amount = TRAGEDY_BASE;
            if audience > TRAGEDY_INCLUDED_SEATS {
                amount += TRAGEDY_PER_EXTRA_SEAT * (audience - TRAGEDY_INCLUDED_SEATS);
            }
            amount
        }
        PlayType::Comedy => {
            let mut amount = COMEDY_BASE;
            if audience > COMEDY_INCLUDED_SEATS {
                amount += COMEDY_LARGE_AUDIENCE_FEE
                    + COMEDY_PER_EXTRA_SEAT * (audience - COMEDY_INCLUDED_SEATS);
            }
            amount + COMEDY_PER_SEAT * audience
        }
    };
    Cents::new(amount)
}

/// Volume credits earned by one performance.
pub fn volume_credits_for(play_type: PlayType, audience: u32) -> u64 {
    let audience = u64::from(audience);
    let base = audience.saturating_sub(CREDIT_THRESHOLD);
    match play_type {
        PlayType::Comedy => base + audience / COMEDY_CREDIT_DIVISOR,
        PlayType::Tragedy => base,
    }
}
