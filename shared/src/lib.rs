//! Final Tap Shared Library
//!
//! Pure domain logic shared by the backend and the WASM module: the habit
//! profile, the longevity scorer, the remaining-life formatter and the API
//! types built from them.

pub mod duration;
pub mod errors;
pub mod habits;
pub mod health_metrics;
pub mod longevity;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use duration::{format_remaining, RemainingLife};
pub use errors::*;
pub use habits::*;
pub use longevity::{score, ImpactBreakdown, ImpactCategory, LongevityScore};
pub use types::*;
