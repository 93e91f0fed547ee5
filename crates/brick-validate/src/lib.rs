//! Physical validation for brick builds.
//!
//! Three independent read-only checkers inspect a [`BuildState`] snapshot:
//!
//! - [`check_collisions`] - strictly overlapping bounding-box pairs
//! - [`check_connections`] - connector alignment of every elevated part
//! - [`check_stability`] - static plausibility heuristics (warnings only)
//!
//! [`validate_build`] runs all three, records the recomputed support edges
//! back into the build, and aggregates everything into one
//! [`ValidationReport`] per pass - the refinement caller needs the complete
//! problem set per round, so nothing raises per-issue.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Example
//!
//! ```
//! use brick_build::BuildState;
//! use brick_types::{BrickDims, Rotation, StudCoord};
//! use brick_validate::validate_build;
//!
//! let mut build = BuildState::new();
//! let brick = BrickDims::new(2, 4, 3);
//! build.insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, brick).unwrap();
//! build.insert("3001", 4, StudCoord::new(0, 0, 3), Rotation::R0, brick).unwrap();
//!
//! let report = validate_build(&mut build);
//! assert!(report.is_valid);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod certify;
mod collision;
mod connection;
mod report;
mod stability;

pub use certify::validate_build;
pub use collision::{check_collisions, first_collision};
pub use connection::{check_connections, ConnectionReport};
pub use report::{BuildIssue, StabilityWarning, ValidationReport};
pub use stability::{check_stability, Footprint, GROUND_LAYER_PLATES};
