//! Center-of-mass and proportion heuristics.
//!
//! Both checks are advisory. They flag builds that are plausible to tip
//! over, not builds that are physically impossible, so they surface as
//! [`StabilityWarning`]s rather than errors.

use brick_build::BuildState;
use brick_types::{GridBox, Vector3};
use tracing::debug;

use crate::report::StabilityWarning;

/// Parts whose bottom face starts below this plate height count as the
/// ground layer for footprint purposes.
pub const GROUND_LAYER_PLATES: i32 = 3;

/// Height-to-base ratio above which a build is flagged as top-heavy.
const TALL_NARROW_RATIO: f64 = 3.0;

/// Horizontal extent of the ground layer, in studs.
///
/// Bounds are inclusive of every covered cell: a single 2x4 part at the
/// origin yields `min_x == 0`, `max_x == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    /// Westmost covered stud column.
    pub min_x: i32,
    /// Eastmost covered stud column.
    pub max_x: i32,
    /// Northmost covered stud row.
    pub min_z: i32,
    /// Southmost covered stud row.
    pub max_z: i32,
}

impl Footprint {
    /// True when the fractional point `(x, z)` lies within the footprint.
    ///
    /// Cell index `i` spans `[i, i + 1)` in continuous stud coordinates, so
    /// the covered region runs from `min` to `max + 1` on each axis.
    #[must_use]
    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= f64::from(self.min_x)
            && x <= f64::from(self.max_x) + 1.0
            && z >= f64::from(self.min_z)
            && z <= f64::from(self.max_z) + 1.0
    }
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}] x [{}..{}]",
            self.min_x, self.max_x, self.min_z, self.max_z
        )
    }
}

/// Runs the stability heuristics over a build.
///
/// Two advisory checks:
///
/// 1. **Tall and narrow** - the build's height in bricks exceeds
///    three times its smaller horizontal extent in studs.
/// 2. **Center of mass** - the volume-weighted center of mass falls
///    horizontally outside the ground-layer footprint. Parts starting
///    below [`GROUND_LAYER_PLATES`] define the footprint; if nothing sits
///    that low, every part contributes to it.
///
/// An empty build is trivially stable.
///
/// # Example
///
/// ```
/// use brick_build::BuildState;
/// use brick_types::{BrickDims, Rotation, StudCoord};
/// use brick_validate::check_stability;
///
/// let mut build = BuildState::new();
/// build
///     .insert("3003", 4, StudCoord::origin(), Rotation::R0, BrickDims::new(2, 2, 3))
///     .unwrap();
/// assert!(check_stability(&build).is_empty());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn check_stability(build: &BuildState) -> Vec<StabilityWarning> {
    if build.is_empty() {
        return Vec::new();
    }

    let mut warnings = Vec::new();

    // Volume-weighted center of mass; every part counts as uniform density.
    let mut weighted = Vector3::new(0.0, 0.0, 0.0);
    let mut total_volume = 0.0;
    for part in build.parts() {
        let volume = part.dims().volume() as f64;
        let center = part.bounding_box().center();
        weighted += center.coords * volume;
        total_volume += volume;
    }
    let cog = weighted / total_volume;
    debug!(
        cog_x = cog.x,
        cog_y = cog.y,
        cog_z = cog.z,
        "Computed center of mass"
    );

    if let Some(footprint) = ground_footprint(build) {
        if !footprint.contains(cog.x, cog.z) {
            warnings.push(StabilityWarning::CenterOfMassOutsideBase {
                center_x: cog.x,
                center_z: cog.z,
                footprint,
            });
        }
    }

    let (dx, dz, dy) = build.overall_dimensions();
    if dx > 0 && dz > 0 {
        let height_bricks = f64::from(dy) / 3.0;
        let base_studs = dx.min(dz);
        if height_bricks > f64::from(base_studs) * TALL_NARROW_RATIO {
            warnings.push(StabilityWarning::TallAndNarrow {
                height_bricks,
                base_studs,
            });
        }
    }

    warnings
}

/// Footprint of the parts resting at or near the ground.
///
/// Falls back to the whole build when no part starts below
/// [`GROUND_LAYER_PLATES`], so a build floated off the ground still gets a
/// meaningful center-of-mass comparison.
fn ground_footprint(build: &BuildState) -> Option<Footprint> {
    let boxes: Vec<GridBox> = build
        .parts()
        .iter()
        .map(brick_build::PlacedPart::bounding_box)
        .collect();

    let mut ground: Vec<&GridBox> = boxes
        .iter()
        .filter(|b| b.min.y < GROUND_LAYER_PLATES)
        .collect();
    if ground.is_empty() {
        ground = boxes.iter().collect();
    }

    let (first, rest) = ground.split_first()?;
    let all = rest.iter().fold(**first, |acc, b| acc.union(b));
    Some(Footprint {
        min_x: all.min.x,
        max_x: all.max.x - 1,
        min_z: all.min.z,
        max_z: all.max.z - 1,
    })
}
