//! UI state persistence configuration

/// Path for saving/loading application UI state (native only)
pub const APP_STATE_PATH: &str = ".states.json";
