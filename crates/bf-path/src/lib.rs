//! bf-path: well trajectory model and path discretization for boreflow.
//!
//! Provides:
//! - Trajectory segments (tangent and circular-arc) in the vertical plane
//! - Validated trajectory assembly
//! - Fixed-step sampling into aligned measured-depth / elevation /
//!   inclination / segment-id sequences
//!
//! # Example
//!
//! ```
//! use bf_core::units::{deg, m};
//! use bf_path::{Segment, Trajectory, sample_path};
//!
//! let segments = vec![
//!     Segment::tangent(m(100.0)).unwrap(),
//!     Segment::arc(m(300.0), deg(30.0)).unwrap(),
//! ];
//! let trajectory = Trajectory::new(segments, deg(0.0), m(0.0)).unwrap();
//! let samples = sample_path(&trajectory, 1.0).unwrap();
//!
//! assert_eq!(samples.md_m[0], 0.0);
//! assert!(samples.len() > 100);
//! ```

pub mod error;
pub mod sampler;
pub mod segment;

// Re-exports for ergonomics
pub use error::{PathError, PathResult};
pub use sampler::{PathSamples, sample_path};
pub use segment::{Segment, Trajectory};
