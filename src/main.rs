use anyhow::Result;
use std::env;
use std::path::PathBuf;

use subscription_insights::{load_clients, load_periods, load_subscriptions, run_pipeline};

// Default table locations, overridable by up to three positional arguments:
// <clients.csv> <subscriptions.csv> <economic_indicators.csv>
const DEFAULT_CLIENTS: &str = "data/client_details.csv";
const DEFAULT_SUBSCRIPTIONS: &str = "data/subscription_records.csv";
const DEFAULT_PERIODS: &str = "data/economic_indicators.csv";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let clients_path = path_arg(&args, 1, DEFAULT_CLIENTS);
    let subscriptions_path = path_arg(&args, 2, DEFAULT_SUBSCRIPTIONS);
    let periods_path = path_arg(&args, 3, DEFAULT_PERIODS);

    // Load everything up front; any input error aborts before computation.
    let clients = load_clients(&clients_path)?;
    let subscriptions = load_subscriptions(&subscriptions_path)?;
    let periods = load_periods(&periods_path)?;

    let report = run_pipeline(&clients, &subscriptions, &periods)?;
    for line in report.render() {
        println!("{line}");
    }

    Ok(())
}

fn path_arg(args: &[String], index: usize, default: &str) -> PathBuf {
    args.get(index).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default))
}
