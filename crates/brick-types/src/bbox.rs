//! Axis-aligned bounding boxes on the stud grid.

use nalgebra::Point3;

use crate::coord::StudCoord;
use crate::dims::BrickDims;
use crate::rotation::Rotation;

/// An axis-aligned box of grid cells with **exclusive** maxima.
///
/// A 2x4x3 part at the origin occupies min `(0, 0, 0)` and max `(2, 4, 3)`:
/// the max corner is the first cell *outside* the part on every axis. With
/// this convention two boxes that share a face have `max == min` on that axis
/// and do not intersect, which is exactly what adjacent connected parts need.
///
/// # Example
///
/// ```
/// use brick_types::{BrickDims, GridBox, Rotation, StudCoord};
///
/// let a = GridBox::of_part(StudCoord::origin(), BrickDims::new(2, 4, 3), Rotation::R0);
/// let b = GridBox::of_part(StudCoord::new(2, 0, 0), BrickDims::new(2, 4, 3), Rotation::R0);
/// let c = GridBox::of_part(StudCoord::new(1, 0, 0), BrickDims::new(2, 4, 3), Rotation::R0);
///
/// assert!(!a.intersects(&b)); // face-sharing neighbors
/// assert!(a.intersects(&c)); // genuine overlap
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBox {
    /// Minimum corner (inclusive).
    pub min: StudCoord,
    /// Maximum corner (exclusive).
    pub max: StudCoord,
}

impl GridBox {
    /// Creates a box from corners, ordering them so min <= max per axis.
    #[must_use]
    pub fn new(a: StudCoord, b: StudCoord) -> Self {
        Self {
            min: StudCoord::new(a.x.min(b.x), a.z.min(b.z), a.y.min(b.y)),
            max: StudCoord::new(a.x.max(b.x), a.z.max(b.z), a.y.max(b.y)),
        }
    }

    /// Computes the bounding box of a part from its placement.
    ///
    /// The rotation is resolved first: width and length swap at 90/270
    /// degrees, height is unaffected.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn of_part(position: StudCoord, dims: BrickDims, rotation: Rotation) -> Self {
        let (dx, dz) = dims.footprint(rotation);
        Self {
            min: position,
            max: StudCoord::new(
                position.x + dx as i32,
                position.z + dz as i32,
                position.y + dims.height as i32,
            ),
        }
    }

    /// Strict overlap test on all three axes.
    ///
    /// Overlap requires `max_a > min_b && max_b > min_a` per axis, so boxes
    /// that merely touch (one's max equals the other's min) never intersect.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.max.x > other.min.x
            && other.max.x > self.min.x
            && self.max.z > other.min.z
            && other.max.z > self.min.z
            && self.max.y > other.min.y
            && other.max.y > self.min.y
    }

    /// Checks whether a single grid cell lies inside the box.
    #[must_use]
    pub const fn contains_cell(&self, cell: StudCoord) -> bool {
        cell.x >= self.min.x
            && cell.x < self.max.x
            && cell.z >= self.min.z
            && cell.z < self.max.z
            && cell.y >= self.min.y
            && cell.y < self.max.y
    }

    /// Smallest box containing both inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::{GridBox, StudCoord};
    ///
    /// let a = GridBox::new(StudCoord::origin(), StudCoord::new(2, 2, 2));
    /// let b = GridBox::new(StudCoord::new(4, 4, 0), StudCoord::new(6, 6, 1));
    /// let u = a.union(&b);
    /// assert_eq!(u.min, StudCoord::origin());
    /// assert_eq!(u.max, StudCoord::new(6, 6, 2));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: StudCoord::new(
                self.min.x.min(other.min.x),
                self.min.z.min(other.min.z),
                self.min.y.min(other.min.y),
            ),
            max: StudCoord::new(
                self.max.x.max(other.max.x),
                self.max.z.max(other.max.z),
                self.max.y.max(other.max.y),
            ),
        }
    }

    /// Returns the extent `(x studs, z studs, y plates)`.
    #[must_use]
    pub const fn size(&self) -> (u32, u32, u32) {
        (
            self.max.x.abs_diff(self.min.x),
            self.max.z.abs_diff(self.min.z),
            self.max.y.abs_diff(self.min.y),
        )
    }

    /// Number of grid cells covered.
    #[must_use]
    pub fn volume(&self) -> u64 {
        let (x, z, y) = self.size();
        u64::from(x) * u64::from(z) * u64::from(y)
    }

    /// Center of the box in fractional grid units `(x studs, y plates, z studs)`.
    ///
    /// Used by the stability heuristic for center-of-mass arithmetic.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            f64::from(self.min.x + self.max.x) / 2.0,
            f64::from(self.min.y + self.max.y) / 2.0,
            f64::from(self.min.z + self.max.z) / 2.0,
        )
    }
}
