//! Geometry primitives for brick builds.
//!
//! This crate provides the coordinate, rotation, and bounding-box types the
//! rest of the brickforge ecosystem reasons with:
//!
//! - [`StudCoord`] - Integer position on the stud/plate grid
//! - [`Rotation`] - Quarter-turn rotation around the vertical axis
//! - [`BrickDims`] - Part dimensions in studs and plates
//! - [`GridBox`] - Axis-aligned bounding box with exclusive maxima
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Coordinate Systems
//!
//! Two coordinate systems cover placement and export:
//!
//! - **Stud grid**: discrete `i32` values. `x`/`z` count studs in the
//!   horizontal plane, `y` counts plates vertically (3 plates = 1 brick).
//!   All placement reasoning happens here.
//! - **Fine units**: continuous `f64` values for exporters. 1 stud = 20 fine
//!   units on x/z, 1 plate = 8 fine units on y. Grid-to-fine conversion is
//!   exact; the inverse rounds to the nearest grid cell.
//!
//! # Example
//!
//! ```
//! use brick_types::{BrickDims, GridBox, Rotation, StudCoord};
//!
//! // A 2x4 brick, one brick (3 plates) tall, rotated a quarter turn.
//! let dims = BrickDims::new(2, 4, 3);
//! let rotation = Rotation::from_degrees(90).unwrap();
//! let bbox = GridBox::of_part(StudCoord::new(0, 0, 0), dims, rotation);
//!
//! // Width and length swap at 90 degrees.
//! assert_eq!(bbox.max, StudCoord::new(4, 2, 3));
//!
//! // Boxes that merely share a face do not intersect.
//! let neighbor = GridBox::of_part(StudCoord::new(4, 0, 0), dims, rotation);
//! assert!(!bbox.intersects(&neighbor));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bbox;
mod coord;
mod dims;
mod error;
mod rotation;

pub use bbox::GridBox;
pub use coord::{StudCoord, FINE_PER_PLATE, FINE_PER_STUD, PLATES_PER_BRICK};
pub use dims::BrickDims;
pub use error::GeomError;
pub use rotation::Rotation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
