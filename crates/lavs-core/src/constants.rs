//! Shared constants for the LAVS engine.

// ---- Layer scores ----

/// Highest authenticity confidence a layer can report.
pub const MAX_SCORE: f64 = 100.0;

/// Lowest authenticity confidence a layer can report.
pub const MIN_SCORE: f64 = 0.0;

// ---- Aggregation ----

/// Risk substituted for a bucket with no supporting evidence.
pub const DEFAULT_NEUTRAL_PRIOR: f64 = 50.0;

/// Highest final risk still banded as `Real`.
pub const DEFAULT_REAL_MAX_RISK: f64 = 30.0;

/// Highest final risk still banded as `Suspicious`.
pub const DEFAULT_SUSPICIOUS_MAX_RISK: f64 = 60.0;

/// Maximum number of top signals in a verdict.
pub const DEFAULT_MAX_TOP_SIGNALS: usize = 3;

/// Decimal places kept on reported risks.
pub const RISK_DECIMALS: i32 = 2;

// ---- Behavioral analysis ----

/// Score the behavioral layer starts from before deductions.
pub const BEHAVIORAL_BASE_SCORE: i64 = 100;

/// Inter-layer score variance below which layers count as too uniform.
pub const DEFAULT_VARIANCE_THRESHOLD: f64 = 50.0;

/// Points deducted per behavioral finding.
pub const DEFAULT_BEHAVIORAL_PENALTY: i64 = 10;

/// Homogeneity/entropy mentions needed to flag over-regularized content.
pub const DEFAULT_MIN_REGULARITY_MENTIONS: usize = 2;

/// Detail emitted when no behavioral deduction fired.
pub const NO_BEHAVIORAL_DEVIATION: &str = "No significant behavioral deviations detected.";

// ---- Producers ----

/// Points deducted from a layer whose producer failed.
pub const DEFAULT_PRODUCER_FAILURE_PENALTY: f64 = 10.0;

/// Explanation used when a verdict carries no usable signal text.
pub const DEFAULT_EXPLANATION: &str =
    "Risk assessment generated from metadata, AI-pattern, and behavioral cues.";

// ---- Config ----

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "lavs.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "LAVS_LOG";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "lavs=info";
