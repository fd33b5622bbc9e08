//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All flags are only consulted under `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit one line per fetch cycle (trigger, interval, window).
    pub print_fetch_cycles: bool,
    /// Emit per-request URLs and response sizes from the REST client.
    pub print_http_requests: bool,
    /// Emit UI interaction logs (interval changes, manual refresh).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch_cycles: true,
    print_http_requests: false,
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};
