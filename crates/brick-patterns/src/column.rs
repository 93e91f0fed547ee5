//! Vertical support columns.

use brick_build::{BuildState, InsertError, PartId};
use brick_types::{GeomError, Rotation, StudCoord};
use tracing::debug;

use crate::catalog::{CatalogPart, BRICK_1X1, BRICK_1X2, BRICK_1X3, BRICK_1X4};

/// Stacks 1xN bricks into a support column at `(x, z)`.
///
/// `thickness` selects the brick: 1x1 up to 1x4, clamped at four studs.
/// Courses alternate a quarter turn so the grain crosses between layers;
/// each course still shares at least the corner cell with the one below,
/// which keeps the stack connected. Courses are laid from the ground while
/// below `height_plates`, so the final course may overshoot a height that
/// is not a multiple of three.
///
/// # Errors
///
/// Returns [`InsertError::Geometry`] when `height_plates` or `thickness`
/// is zero.
pub fn column(
    build: &mut BuildState,
    x: i32,
    z: i32,
    height_plates: u32,
    thickness: u32,
    color: u32,
) -> Result<Vec<PartId>, InsertError> {
    if height_plates == 0 || thickness == 0 {
        return Err(InsertError::Geometry(GeomError::DegenerateDims {
            width: thickness,
            length: thickness,
            height: height_plates,
        }));
    }

    let part: &CatalogPart = match thickness {
        1 => &BRICK_1X1,
        2 => &BRICK_1X2,
        3 => &BRICK_1X3,
        _ => &BRICK_1X4,
    };

    let top = i32::try_from(height_plates).unwrap_or(i32::MAX);
    let mut ids = Vec::new();
    let mut y = 0;
    let mut rotation = Rotation::R0;
    while y < top {
        ids.push(build.insert(
            part.number,
            color,
            StudCoord::new(x, z, y),
            rotation,
            part.dims,
        )?);
        y += 3;
        rotation = rotation.rotate_cw();
    }

    debug!(parts = ids.len(), thickness, "Stacked column");
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_validate::validate_build;

    #[test]
    fn test_course_count() {
        let mut build = BuildState::new();
        let ids = column(&mut build, 0, 0, 9, 1, 4).unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(build.overall_dimensions(), (1, 1, 9));
    }

    #[test]
    fn test_uneven_height_overshoots() {
        let mut build = BuildState::new();
        let ids = column(&mut build, 0, 0, 7, 1, 4).unwrap();
        // Courses at 0, 3, and 6; the last one tops out at 9 plates.
        assert_eq!(ids.len(), 3);
        assert_eq!(build.overall_dimensions(), (1, 1, 9));
    }

    #[test]
    fn test_thickness_selects_part() {
        for (thickness, number) in [(1, "3005"), (2, "3004"), (3, "3622"), (4, "3010"), (7, "3010")]
        {
            let mut build = BuildState::new();
            let ids = column(&mut build, 0, 0, 3, thickness, 4).unwrap();
            assert_eq!(build.part(ids[0]).unwrap().part_type(), number);
        }
    }

    #[test]
    fn test_alternating_rotation_connected() {
        let mut build = BuildState::new();
        column(&mut build, 2, 2, 12, 3, 4).unwrap();
        let rotations: Vec<Rotation> = build.parts().iter().map(|p| p.rotation()).collect();
        assert_eq!(
            rotations,
            vec![Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270]
        );
        // The corner cell is shared by every pair of adjacent courses.
        let report = validate_build(&mut build);
        assert!(report.is_valid, "{report}");
    }

    #[test]
    fn test_zero_height_rejected() {
        let mut build = BuildState::new();
        assert!(column(&mut build, 0, 0, 0, 1, 4).is_err());
        assert!(build.is_empty());
    }
}
