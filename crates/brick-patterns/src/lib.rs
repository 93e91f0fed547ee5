//! Parametric templates for common brick structures.
//!
//! Each template expands into plain [`BuildState`](brick_build::BuildState)
//! insertions and returns the created part ids, so a template is
//! indistinguishable from hand-placed parts once expanded. Templates fill
//! their own footprint without overlap but do not check against parts
//! already in the build; run a validation pass afterwards as usual.
//!
//! - [`base`] - ground plate layer, greedily tiled
//! - [`wall`] - running-bond brick wall along either horizontal axis
//! - [`column`] - stacked vertical support with alternating rotation
//! - [`wing`] - swept plate layers with a leading-edge slope
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
//! use brick_patterns::base;
//!
//! let mut build = BuildState::new();
//! let ids = base(&mut build, 0, 0, 4, 4, 2).unwrap();
//! assert!(!ids.is_empty());
//! assert_eq!(build.overall_dimensions(), (4, 4, 1));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod base;
pub mod catalog;
mod column;
mod wall;
mod wing;

pub use base::base;
pub use column::column;
pub use wall::{wall, WallDirection, WallParams};
pub use wing::{wing, WingParams};
