//! Quarter-turn rotation around the vertical axis.

use nalgebra::Matrix3;

use crate::error::GeomError;

/// A rotation around the vertical (y) axis in 90-degree increments.
///
/// Brick placement only ever uses quarter turns, so the type is a closed enum
/// rather than a free angle. Construction from arbitrary degrees is the one
/// fallible geometry operation.
///
/// # Example
///
/// ```
/// use brick_types::Rotation;
///
/// let rot = Rotation::from_degrees(90).unwrap();
/// assert_eq!(rot.degrees(), 90);
/// assert!(rot.swaps_axes());
///
/// assert!(Rotation::from_degrees(45).is_err());
/// assert!(Rotation::from_degrees(360).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// No rotation.
    #[default]
    R0,
    /// 90 degrees clockwise.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees clockwise.
    R270,
}

impl Rotation {
    /// Creates a rotation from whole degrees.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::InvalidRotation`] for anything outside
    /// {0, 90, 180, 270}. Values are not normalized; 360 is invalid.
    pub const fn from_degrees(degrees: i32) -> Result<Self, GeomError> {
        match degrees {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            other => Err(GeomError::InvalidRotation(other)),
        }
    }

    /// Returns the rotation angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Returns true when the rotation swaps a part's width and length.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::Rotation;
    ///
    /// assert!(!Rotation::R0.swaps_axes());
    /// assert!(Rotation::R90.swaps_axes());
    /// assert!(!Rotation::R180.swaps_axes());
    /// assert!(Rotation::R270.swaps_axes());
    /// ```
    #[must_use]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }

    /// Rotates a quarter turn clockwise.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_cw(), Rotation::R90);
    /// assert_eq!(Rotation::R270.rotate_cw(), Rotation::R0);
    /// ```
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        match self {
            Self::R0 => Self::R90,
            Self::R90 => Self::R180,
            Self::R180 => Self::R270,
            Self::R270 => Self::R0,
        }
    }

    /// Rotates a quarter turn counter-clockwise.
    #[must_use]
    pub const fn rotate_ccw(self) -> Self {
        match self {
            Self::R0 => Self::R270,
            Self::R90 => Self::R0,
            Self::R180 => Self::R90,
            Self::R270 => Self::R180,
        }
    }

    /// Returns the 3x3 rotation matrix for exporters.
    ///
    /// The matrix rotates around the vertical axis with the element layout
    /// file exporters expect:
    ///
    /// ```text
    /// [  cos  0  sin ]
    /// [   0   1   0  ]
    /// [ -sin  0  cos ]
    /// ```
    ///
    /// Quarter-turn sines and cosines are exactly -1, 0, or 1, so the matrix
    /// entries are exact.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::Rotation;
    ///
    /// let m = Rotation::R90.matrix();
    /// assert_eq!(m[(0, 0)], 0.0);
    /// assert_eq!(m[(0, 2)], 1.0);
    /// assert_eq!(m[(2, 0)], -1.0);
    /// assert_eq!(m[(1, 1)], 1.0);
    /// ```
    #[must_use]
    pub fn matrix(self) -> Matrix3<f64> {
        let (cos, sin) = match self {
            Self::R0 => (1.0, 0.0),
            Self::R90 => (0.0, 1.0),
            Self::R180 => (-1.0, 0.0),
            Self::R270 => (0.0, -1.0),
        };
        Matrix3::new(cos, 0.0, sin, 0.0, 1.0, 0.0, -sin, 0.0, cos)
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\u{b0}", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_canonical() {
        for deg in [0, 90, 180, 270] {
            let rot = Rotation::from_degrees(deg).unwrap();
            assert_eq!(rot.degrees(), deg);
        }
    }

    #[test]
    fn test_from_degrees_invalid() {
        for deg in [-90, 1, 45, 91, 360, 450] {
            assert!(matches!(
                Rotation::from_degrees(deg),
                Err(GeomError::InvalidRotation(d)) if d == deg
            ));
        }
    }

    #[test]
    fn test_cw_ccw_inverse() {
        for rot in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
            assert_eq!(rot.rotate_cw().rotate_ccw(), rot);
            assert_eq!(rot.rotate_ccw().rotate_cw(), rot);
        }
    }

    #[test]
    fn test_full_turn() {
        let rot = Rotation::R0
            .rotate_cw()
            .rotate_cw()
            .rotate_cw()
            .rotate_cw();
        assert_eq!(rot, Rotation::R0);
    }

    #[test]
    fn test_matrix_identity() {
        assert_eq!(Rotation::R0.matrix(), Matrix3::identity());
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        for rot in [Rotation::R90, Rotation::R180, Rotation::R270] {
            let m = rot.matrix();
            let product = m * m.transpose();
            assert!((product - Matrix3::identity()).abs().max() < 1e-12);
        }
    }

    #[test]
    fn test_matrix_composition_matches_rotate_cw() {
        let composed = Rotation::R90.matrix() * Rotation::R90.matrix();
        assert!((composed - Rotation::R180.matrix()).abs().max() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rotation::R270), "270\u{b0}");
    }
}
