//! Structured log events for key fusion operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the final verdict of a fusion run.
pub fn verdict_emitted(final_score: f64, verdict: &str, layer_count: usize) {
    tracing::info!(
        event = "verdict_emitted",
        final_score = final_score,
        verdict = %verdict,
        layer_count = layer_count,
        "verdict emitted"
    );
}

/// Log a bucket that had no evidence and fell back to the neutral prior.
pub fn bucket_fell_back(bucket: &str, neutral_prior: f64) {
    tracing::debug!(
        event = "bucket_fell_back",
        bucket = %bucket,
        neutral_prior = neutral_prior,
        "bucket has no evidence, using neutral prior"
    );
}

/// Log a producer failure that was converted into a degraded layer.
pub fn producer_degraded(layer: &str, error_code: &str, error: &str) {
    tracing::warn!(
        event = "producer_degraded",
        layer = %layer,
        error_code = %error_code,
        error = %error,
        "producer failed, emitting degraded layer"
    );
}

/// Log a behavioral finding.
pub fn behavioral_flag_raised(check: &str, penalty: i64) {
    tracing::debug!(
        event = "behavioral_flag_raised",
        check = %check,
        penalty = penalty,
        "behavioral deviation flagged"
    );
}

/// Log the outcome of content classification.
pub fn classification_resolved(content_type: &str, format: &str) {
    tracing::info!(
        event = "classification_resolved",
        content_type = %content_type,
        format = %format,
        "content classified"
    );
}
