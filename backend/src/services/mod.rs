//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the shared domain crate and external systems.

pub mod advice;
pub mod calculation;

pub use advice::AdviceService;
pub use calculation::CalculationService;
