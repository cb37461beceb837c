// ⏪ Asof Join Engine - backward point-in-time matching
//
// Not an equality join: each subscription's `end_date` is matched to the
// economic period with the largest `start_date` not exceeding it (the most
// recent period already in effect at that date). A subscription ending
// before every period has no match, which is an absent value, not an error.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use log::debug;

use crate::schema::{EconomicPeriod, JoinedSubscription, Subscription};

/// Rightmost index in an ascending-sorted `keys` with `keys[idx] <= bound`.
///
/// `None` when `keys` is empty or every key exceeds `bound`. A key equal to
/// `bound` matches (inclusive lower bound).
pub fn asof_backward(keys: &[NaiveDate], bound: NaiveDate) -> Option<usize> {
    let upper = keys.partition_point(|&key| key <= bound);
    upper.checked_sub(1)
}

/// Match each subscription's `end_date` to the economic period in effect at
/// that date, backward direction.
///
/// Periods are sorted by `start_date` internally; the subscriptions are
/// processed independently and the output preserves their input order and
/// count. Duplicate period start dates make the match ill-defined, so they
/// are rejected up front.
pub fn join_inflation(
    subscriptions: &[Subscription],
    periods: &[EconomicPeriod],
) -> Result<Vec<JoinedSubscription>> {
    let mut sorted: Vec<&EconomicPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| p.start_date);

    for pair in sorted.windows(2) {
        if pair[0].start_date == pair[1].start_date {
            bail!(
                "duplicate economic period start date {}: backward match is ambiguous",
                pair[0].start_date
            );
        }
    }

    let starts: Vec<NaiveDate> = sorted.iter().map(|p| p.start_date).collect();

    let joined: Vec<JoinedSubscription> = subscriptions
        .iter()
        .map(|sub| JoinedSubscription {
            subscription: sub.clone(),
            inflation_rate: asof_backward(&starts, sub.end_date)
                .map(|idx| sorted[idx].inflation_rate),
        })
        .collect();

    let unmatched = joined.iter().filter(|j| j.inflation_rate.is_none()).count();
    debug!(
        "asof join: {} subscriptions against {} periods, {} unmatched",
        joined.len(),
        periods.len(),
        unmatched
    );

    Ok(joined)
}

// ============================================================================
// TESTS
// ============================================================================
