// Monotonic clock shared by native and WASM builds.
// std::time::Instant panics on wasm32-unknown-unknown, so the web build uses web-time.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
