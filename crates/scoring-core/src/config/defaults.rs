// Single source of truth for all default values.

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
pub const LOG_ENV_VAR: &str = "SCORING_LOG";

// --- Config sources ---
pub const INLINE_SOURCE: &str = "<inline>";
