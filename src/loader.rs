// 📂 Table Loader - CSV → typed rows for the three input tables
//
// All loading failures are fatal: a missing file, a missing/renamed header,
// an unparseable date or number. Errors carry the file path and the 1-based
// data-row number so the offending line can be found.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::schema::{Client, EconomicPeriod, Subscription};

/// Load client reference data (`client_id,industry`).
pub fn load_clients(path: &Path) -> Result<Vec<Client>> {
    load_table(path, "clients")
}

/// Load subscription records (`client_id,start_date,end_date,renewed`).
pub fn load_subscriptions(path: &Path) -> Result<Vec<Subscription>> {
    load_table(path, "subscriptions")
}

/// Load economic indicator periods (`start_date,end_date,inflation_rate`).
pub fn load_periods(path: &Path) -> Result<Vec<EconomicPeriod>> {
    load_table(path, "economic periods")
}

fn load_table<T>(path: &Path, table: &str) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {} file: {}", table, path.display()))?;

    let mut rows = Vec::new();
    for (row_num, result) in rdr.deserialize().enumerate() {
        let row: T = result.with_context(|| {
            format!(
                "Failed to parse {} row {} in {}",
                table,
                row_num + 1,
                path.display()
            )
        })?;
        rows.push(row);
    }

    debug!("loaded {} {} rows from {}", rows.len(), table, path.display());
    Ok(rows)
}

// ============================================================================
// TESTS
// ============================================================================
