//! SIC code prediction and accuracy commands

use std::time::Instant;

use sicmatch_domain::types::{DualAccuracy, SicPrediction};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Predict SIC codes for a free-text business description.
///
/// `limit` caps the number of ranked matches; the configured default
/// applies when `None`.
pub fn predict_sic_codes(
    ctx: &AppContext,
    description: &str,
    limit: Option<usize>,
) -> SicPrediction {
    let command_name = "classification::predict_sic_codes";
    let start = Instant::now();

    let prediction = ctx.service.predict(description, limit);

    log_command_execution(command_name, start.elapsed());
    info!(
        command = command_name,
        prediction_id = %prediction.id,
        match_count = prediction.matches.len(),
        "prediction completed"
    );

    prediction
}

/// Assess an existing registry code against the best prediction for the
/// same description.
pub fn get_dual_accuracy(ctx: &AppContext, description: &str, current_code: &str) -> DualAccuracy {
    let command_name = "classification::get_dual_accuracy";
    let start = Instant::now();

    let accuracy = ctx.service.dual_accuracy(description, current_code);

    log_command_execution(command_name, start.elapsed());
    info!(
        command = command_name,
        current_code,
        current_accurate = accuracy.current.is_accurate,
        predicted_accurate = accuracy.predicted.is_accurate,
        "dual accuracy completed"
    );

    accuracy
}

/// Look up the catalog description for a SIC code.
///
/// Unknown codes resolve to the catalog's not-found marker rather than
/// an error, matching the prediction output.
pub fn get_sic_description(ctx: &AppContext, code: &str) -> String {
    let command_name = "classification::get_sic_description";
    let start = Instant::now();

    let description = ctx.service.describe_code(code);

    log_command_execution(command_name, start.elapsed());

    description
}
