// 📋 Schema - Typed rows for the three input tables and derived join outputs

use chrono::NaiveDate;
use serde::Deserialize;

// ============================================================================
// INPUT ROWS (CSV-backed, field names match the CSV headers)
// ============================================================================

/// One client. Immutable reference data; `client_id` is a candidate key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    pub client_id: u64,
    pub industry: String,
}

/// One subscription. Zero or more per client. `end_date >= start_date` is
/// assumed of the input, not enforced here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscription {
    pub client_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub renewed: bool,
}

/// One economic regime, valid from `start_date` until `end_date`.
/// The period table is assumed non-overlapping; the asof engine sorts it by
/// `start_date` and rejects duplicate start dates, nothing more.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EconomicPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub inflation_rate: f64,
}

// ============================================================================
// DERIVED ROWS (ephemeral, produced fresh on every run)
// ============================================================================

/// Subscription plus the industry of its client, if the client is known.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustrySubscription {
    pub subscription: Subscription,
    pub industry: Option<String>,
}

/// Subscription plus the inflation rate of the economic period in effect at
/// its `end_date`. `None` when no period starts at or before that date.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedSubscription {
    pub subscription: Subscription,
    pub inflation_rate: Option<f64>,
}

// ============================================================================
// TESTS
// ============================================================================
