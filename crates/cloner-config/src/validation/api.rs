//! Validation for the `[api]` section.

use crate::schema::ClonerConfig;

use super::helpers::validate_range;

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ClonerConfig) {
    let api = &config.api;
    validate_range(errors, "api.max_output_tokens", api.max_output_tokens, 1, 65536);
    validate_range(errors, "api.temperature", api.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        api.request_timeout_secs,
        1,
        600,
    );
}
