//! Collision-checked placement with nearby alternatives.
//!
//! [`try_place`] is the interactive front door to a build: it accepts a part
//! only when its bounding box is free, and on rejection probes a fixed set
//! of nearby placements so the caller can retry without searching. Whole-
//! build concerns (connection, stability) are deliberately out of scope
//! here; a part placed mid-edit may be supported by one placed later, so
//! those checks belong to a full validation pass.
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
//! use brick_place::{try_place, PlacementOutcome};
//! use brick_types::{BrickDims, Rotation, StudCoord};
//!
//! let mut build = BuildState::new();
//! let brick = BrickDims::new(1, 1, 3);
//!
//! let first = try_place(&mut build, "3005", 4, StudCoord::origin(), Rotation::R0, brick)
//!     .unwrap();
//! assert!(matches!(first, PlacementOutcome::Accepted(_)));
//!
//! // Same spot again: rejected, with somewhere nearby to try instead.
//! let second = try_place(&mut build, "3005", 4, StudCoord::origin(), Rotation::R0, brick)
//!     .unwrap();
//! match second {
//!     PlacementOutcome::Rejected { suggestions, .. } => assert_eq!(suggestions.len(), 2),
//!     PlacementOutcome::Accepted(_) => unreachable!(),
//! }
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod advisor;

pub use advisor::{try_place, PlacementOutcome, Suggestion};
