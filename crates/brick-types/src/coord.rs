//! Stud-grid coordinate type and fine-unit conversions.

use nalgebra::Point3;

/// Fine units per stud on the horizontal (x/z) axes.
pub const FINE_PER_STUD: f64 = 20.0;

/// Fine units per plate on the vertical (y) axis.
pub const FINE_PER_PLATE: f64 = 8.0;

/// Plates per brick height.
pub const PLATES_PER_BRICK: u32 = 3;

/// A discrete position on the stud/plate grid.
///
/// `x` and `z` count studs in the horizontal plane, `y` counts plates
/// vertically with 0 at ground level. Coordinates may be negative, so the
/// build origin can sit anywhere.
///
/// # Example
///
/// ```
/// use brick_types::StudCoord;
///
/// let coord = StudCoord::new(3, -2, 6);
/// assert_eq!(coord.x, 3);
/// assert_eq!(coord.z, -2);
/// assert_eq!(coord.y, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudCoord {
    /// X position in studs (width axis).
    pub x: i32,
    /// Z position in studs (depth axis).
    pub z: i32,
    /// Y position in plates (height axis, 3 plates = 1 brick).
    pub y: i32,
}

impl StudCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, z: i32, y: i32) -> Self {
        Self { x, z, y }
    }

    /// Creates a coordinate at the grid origin.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::StudCoord;
    ///
    /// assert_eq!(StudCoord::origin(), StudCoord::new(0, 0, 0));
    /// ```
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Converts to fine units for export.
    ///
    /// The conversion is exact: 1 stud = 20 fine units on x/z and
    /// 1 plate = 8 fine units on y.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::StudCoord;
    /// use nalgebra::Point3;
    ///
    /// let coord = StudCoord::new(2, -1, 3);
    /// assert_eq!(coord.to_fine(), Point3::new(40.0, 24.0, -20.0));
    /// ```
    #[must_use]
    pub fn to_fine(self) -> Point3<f64> {
        Point3::new(
            f64::from(self.x) * FINE_PER_STUD,
            f64::from(self.y) * FINE_PER_PLATE,
            f64::from(self.z) * FINE_PER_STUD,
        )
    }

    /// Parses fine-unit coordinates back onto the grid.
    ///
    /// Rounds each component to the nearest grid cell, so the conversion is
    /// lossy for points that do not sit exactly on the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::StudCoord;
    /// use nalgebra::Point3;
    ///
    /// let coord = StudCoord::from_fine(Point3::new(41.0, 23.0, -19.0));
    /// assert_eq!(coord, StudCoord::new(2, -1, 3));
    ///
    /// // Exact round trip for on-grid points.
    /// let on_grid = StudCoord::new(7, 5, 11);
    /// assert_eq!(StudCoord::from_fine(on_grid.to_fine()), on_grid);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_fine(point: Point3<f64>) -> Self {
        Self::new(
            (point.x / FINE_PER_STUD).round() as i32,
            (point.z / FINE_PER_STUD).round() as i32,
            (point.y / FINE_PER_PLATE).round() as i32,
        )
    }

    /// Returns a new coordinate with the given offsets applied.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_types::StudCoord;
    ///
    /// let coord = StudCoord::new(1, 1, 0);
    /// assert_eq!(coord.offset(-1, 2, 3), StudCoord::new(0, 3, 3));
    /// ```
    #[must_use]
    pub const fn offset(self, dx: i32, dz: i32, dy: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.z.wrapping_add(dz),
            self.y.wrapping_add(dy),
        )
    }

    /// Returns the coordinate as an `(x, z, y)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.z, self.y)
    }
}

impl From<(i32, i32, i32)> for StudCoord {
    fn from((x, z, y): (i32, i32, i32)) -> Self {
        Self::new(x, z, y)
    }
}

impl From<StudCoord> for (i32, i32, i32) {
    fn from(coord: StudCoord) -> Self {
        coord.as_tuple()
    }
}

impl std::ops::Add for StudCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.z.wrapping_add(other.z),
            self.y.wrapping_add(other.y),
        )
    }
}

impl std::ops::Sub for StudCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.z.wrapping_sub(other.z),
            self.y.wrapping_sub(other.y),
        )
    }
}

impl std::fmt::Display for StudCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.z, self.y)
    }
}
