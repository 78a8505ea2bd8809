//! Configuration validation.
//!
//! Each check pushes a message onto a shared list; `validate` folds them
//! into a single `ConfigError` so the user sees every problem at once.

mod helpers;


use crate::schema::CoachConfig;
use coach_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CoachConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);
    validate_data(&mut errors, config);
    validate_credentials(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &CoachConfig) {
    let model = &config.model;
    validate_non_empty(errors, "model.model", &model.model);
    validate_range(errors, "model.max_tokens", model.max_tokens, 1, 64_000);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 1.0);
    validate_range(
        errors,
        "model.request_timeout_secs",
        model.request_timeout_secs,
        5,
        600,
    );
    validate_range(
        errors,
        "model.connect_timeout_secs",
        model.connect_timeout_secs,
        1,
        60,
    );
    if !model.api_url.starts_with("https://") && !model.api_url.starts_with("http://") {
        errors.push(format!(
            "model.api_url = {:?} must be an http(s) URL",
            model.api_url
        ));
    }
}

fn validate_data(errors: &mut Vec<String>, config: &CoachConfig) {
    let tiers = &config.data.tiers;
    if tiers.is_empty() {
        errors.push("data.tiers must list at least one tier".into());
    }
    for (i, tier) in tiers.iter().enumerate() {
        if tier.trim().is_empty() {
            errors.push(format!("data.tiers[{i}] is blank"));
        } else if tiers[..i].contains(tier) {
            errors.push(format!("data.tiers[{i}] = {tier:?} is a duplicate"));
        }
    }
}

fn validate_credentials(errors: &mut Vec<String>, config: &CoachConfig) {
    let var = &config.credentials.env_var;
    validate_non_empty(errors, "credentials.env_var", var);
    if var.contains('=') {
        errors.push(format!("credentials.env_var = {var:?} must not contain '='"));
    }
}
