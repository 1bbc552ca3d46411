//! bf-core: stable foundation for boreflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - advisory (non-fatal diagnostics carried beside results)
//! - error (shared error types)

pub mod advisory;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use advisory::Advisory;
pub use error::{BfError, BfResult};
pub use numeric::*;
pub use units::*;
