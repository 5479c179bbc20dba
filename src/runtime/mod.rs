pub mod effect;
pub mod event;
pub mod intent;
pub mod reducer;
pub mod runner;
pub mod scheduler;

/// Monotonic clock that also works on `wasm32`, where `std::time::Instant`
/// is unavailable.
pub mod time {
    #[cfg(not(target_arch = "wasm32"))]
    pub use std::time::Instant;
    #[cfg(target_arch = "wasm32")]
    pub use web_time::Instant;
}
