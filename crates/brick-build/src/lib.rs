//! Mutable build model for brick structures.
//!
//! This crate owns the central [`BuildState`]: an ordered collection of
//! [`PlacedPart`]s with a private spatial index for fast collision queries,
//! plus derived views (overall dimensions, per-part bounding boxes, a
//! [`BillOfQuantities`]).
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Design
//!
//! `BuildState::insert` enforces only construction-time invariants (positive
//! dimensions, unique core-assigned ids). Physical validity is deliberately
//! *not* checked here: callers construct hypothetical placements, probe them,
//! and certify the whole build afterwards, so a build may be transiently
//! invalid.
//!
//! The spatial index is a non-authoritative cache over the part list. It is
//! rebuilt lazily on first query after a mutation and never observable through
//! the public contract beyond query speed.
//!
//! # Concurrency
//!
//! A `BuildState` is single-writer: mutation requires `&mut self`, so the
//! borrow checker enforces write exclusion. All query methods take `&self`
//! (the lazy index cache is a [`std::sync::OnceLock`]), so read-only
//! validators may run concurrently against a consistent snapshot.
//!
//! # Example
//!
//! ```
//! use brick_build::BuildState;
//! use brick_types::{BrickDims, Rotation, StudCoord};
//!
//! let mut build = BuildState::new();
//! let id = build
//!     .insert("3001", 4, StudCoord::origin(), Rotation::R0, BrickDims::new(2, 4, 3))
//!     .unwrap();
//!
//! assert_eq!(build.len(), 1);
//! assert_eq!(build.overall_dimensions(), (2, 4, 3));
//! assert!(build.remove(id));
//! assert!(build.is_empty());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bom;
mod build;
mod error;
mod index;
mod part;

pub use bom::{BillOfQuantities, BoqItem};
pub use build::BuildState;
pub use error::InsertError;
pub use index::SpatialIndex;
pub use part::{PartId, PlacedPart};
