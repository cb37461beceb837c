// Subscription Insights - Core Library
// Exposes all modules for use in the CLI and tests

pub mod asof;
pub mod industry;
pub mod loader;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use asof::{asof_backward, join_inflation};
pub use industry::{count_in_industries, join_industries, renewal_rate_by_industry, top_industry};
pub use loader::{load_clients, load_periods, load_subscriptions};
pub use report::{
    mean_inflation_for_renewed, run_pipeline, InsightsReport, TARGET_INDUSTRIES, UNDEFINED,
};
pub use schema::{Client, EconomicPeriod, IndustrySubscription, JoinedSubscription, Subscription};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
