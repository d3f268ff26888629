pub mod display;
pub mod telemetry;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
