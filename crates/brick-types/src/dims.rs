//! Part dimensions in grid units.

use crate::error::GeomError;
use crate::rotation::Rotation;

/// Part dimensions: width and length in studs, height in plates.
///
/// Dimensions are stored unrotated; [`BrickDims::footprint`] applies a
/// rotation when the horizontal extent is needed. All components must be
/// strictly positive for a part to be insertable, which
/// [`BrickDims::validate`] checks.
///
/// # Example
///
/// ```
/// use brick_types::{BrickDims, Rotation};
///
/// // A standard 2x4 brick is 3 plates tall.
/// let dims = BrickDims::new(2, 4, 3);
/// assert_eq!(dims.footprint(Rotation::R0), (2, 4));
/// assert_eq!(dims.footprint(Rotation::R90), (4, 2));
/// assert_eq!(dims.volume(), 24);
/// assert!(dims.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrickDims {
    /// Width in studs (x extent when unrotated).
    pub width: u32,
    /// Length in studs (z extent when unrotated).
    pub length: u32,
    /// Height in plates (3 plates = 1 brick).
    pub height: u32,
}

impl BrickDims {
    /// Creates new part dimensions.
    #[must_use]
    pub const fn new(width: u32, length: u32, height: u32) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Checks that every component is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DegenerateDims`] if any component is zero.
    pub const fn validate(self) -> Result<(), GeomError> {
        if self.width == 0 || self.length == 0 || self.height == 0 {
            return Err(GeomError::DegenerateDims {
                width: self.width,
                length: self.length,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Returns the horizontal `(x extent, z extent)` under a rotation.
    ///
    /// Width and length swap at 90 and 270 degrees; height never changes.
    #[must_use]
    pub const fn footprint(self, rotation: Rotation) -> (u32, u32) {
        if rotation.swaps_axes() {
            (self.length, self.width)
        } else {
            (self.width, self.length)
        }
    }

    /// Returns the volume in grid cells (stud x stud x plate).
    #[must_use]
    pub const fn volume(self) -> u64 {
        self.width as u64 * self.length as u64 * self.height as u64
    }

    /// Height in brick units (1 brick = 3 plates).
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::BrickDims;
    ///
    /// assert!((BrickDims::new(2, 4, 1).brick_height() - 1.0 / 3.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn brick_height(self) -> f64 {
        f64::from(self.height) / f64::from(crate::coord::PLATES_PER_BRICK)
    }
}

impl std::fmt::Display for BrickDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\u{d7}{}\u{d7}{}",
            self.width, self.length, self.height
        )
    }
}
