//! SicMatch - SIC code prediction for business descriptions
//!
//! Main entry point for the demonstration binary.

use sicmatch_domain::Result;
use sicmatch_lib::utils::logging::error_label;
use sicmatch_lib::{predict_sic_codes, AppContext};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Business descriptions the demo runs through the classifier.
const DEMO_DESCRIPTIONS: &[&str] = &[
    "Compass Group PLC food catering and support services",
    "Tesco PLC retail supermarket grocery stores",
    "HSBC Holdings PLC banking financial services",
    "Simple catering",
    "Restaurant business",
    "Food retail store",
];

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<()> {
    // Initialize logging FIRST so we can see .env loading
    init_tracing();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env file"),
        Err(e) => warn!(error = %e, "could not load .env file"),
    }

    let config = sicmatch_infra::config::load()?;
    let ctx = AppContext::new_with_config(config)?;

    info!(catalog_entries = ctx.service.catalog().len(), "sicmatch initialized");

    for description in DEMO_DESCRIPTIONS {
        let prediction = predict_sic_codes(&ctx, description, None);
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        error!(kind = error_label(&err), error = %err, "sicmatch failed");
        std::process::exit(1);
    }
}
