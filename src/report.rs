// 📊 Insights Report - filtered aggregation and the three report lines

use anyhow::Result;
use log::debug;

use crate::asof::join_inflation;
use crate::industry::{count_in_industries, join_industries, renewal_rate_by_industry, top_industry};
use crate::schema::{Client, EconomicPeriod, JoinedSubscription, Subscription};

/// Industries counted on the first report line.
pub const TARGET_INDUSTRIES: [&str; 2] = ["Fintech", "Crypto"];

/// Marker printed in place of a statistic that has no data to compute from.
pub const UNDEFINED: &str = "undefined";

// ============================================================================
// FILTERED AGGREGATOR
// ============================================================================

/// Mean inflation rate across renewed subscriptions.
///
/// Rows with an absent inflation rate (no contemporaneous economic period)
/// are excluded from the mean, not treated as zero. `None` when nothing is
/// left to average.
pub fn mean_inflation_for_renewed(joined: &[JoinedSubscription]) -> Option<f64> {
    let rates: Vec<f64> = joined
        .iter()
        .filter(|row| row.subscription.renewed)
        .filter_map(|row| row.inflation_rate)
        .collect();

    if rates.is_empty() {
        None
    } else {
        Some(rates.iter().sum::<f64>() / rates.len() as f64)
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// The three computed statistics. Empty-result conditions are `None`, never
/// a zero standing in for "no data".
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsReport {
    pub fintech_crypto_clients: usize,
    pub top_industry: Option<String>,
    pub avg_inflation_for_renewals: Option<f64>,
}

impl InsightsReport {
    /// The three human-readable report lines, in order.
    pub fn render(&self) -> Vec<String> {
        let industry = self.top_industry.as_deref().unwrap_or(UNDEFINED);
        let inflation = match self.avg_inflation_for_renewals {
            Some(rate) => format!("{:.2}%", rate * 100.0),
            None => UNDEFINED.to_string(),
        };
        vec![
            format!(
                "There are a total of {} clients subscribed in fintech or crypto industries.",
                self.fintech_crypto_clients
            ),
            format!(
                "The industry with the highest rate of subscription renewal is the {} industry.",
                industry
            ),
            format!(
                "The average inflation rate for renewed subscriptions is: {}.",
                inflation
            ),
        ]
    }
}

/// Run the full pipeline over already-loaded tables.
///
/// The four operations run in sequence, each over immutable inputs; the only
/// fatal outcome after loading is a malformed economic period table.
pub fn run_pipeline(
    clients: &[Client],
    subscriptions: &[Subscription],
    periods: &[EconomicPeriod],
) -> Result<InsightsReport> {
    let fintech_crypto_clients = count_in_industries(clients, &TARGET_INDUSTRIES);

    let rates = renewal_rate_by_industry(&join_industries(subscriptions, clients));
    let top = top_industry(&rates);
    debug!("renewal rates by industry: {:?}", rates);

    let joined = join_inflation(subscriptions, periods)?;
    let avg_inflation = mean_inflation_for_renewed(&joined);

    Ok(InsightsReport {
        fintech_crypto_clients,
        top_industry: top.map(|(industry, _)| industry),
        avg_inflation_for_renewals: avg_inflation,
    })
}

// ============================================================================
// TESTS
// ============================================================================
