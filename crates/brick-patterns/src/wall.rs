//! Running-bond wall expansion.

use brick_build::{BuildState, InsertError, PartId};
use brick_types::{Rotation, StudCoord};
use tracing::debug;

use crate::catalog::{BRICK_2X2, BRICK_2X4};

/// Horizontal axis a wall runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallDirection {
    /// Wall extends along the x axis, two studs thick in z.
    AlongX,
    /// Wall extends along the z axis, two studs thick in x.
    AlongZ,
}

/// Parameters for [`wall`].
#[derive(Debug, Clone, Copy)]
pub struct WallParams {
    /// Near corner of the wall at its lowest course.
    pub start: StudCoord,
    /// Run length in studs.
    pub length: u32,
    /// Height in plates; courses are laid while below this.
    pub height_plates: u32,
    /// Axis the wall runs along.
    pub direction: WallDirection,
    /// Color applied to every brick.
    pub color: u32,
}

/// Expands a two-stud-thick wall in running bond.
///
/// Courses are one brick (three plates) tall. Even courses shift two studs
/// into the run and the gap behind them is closed with a 2x2 brick, so
/// vertical joints never line up between neighboring courses. Each course
/// is filled with 2x4 bricks and finished with a 2x2 where only two studs
/// remain; a single leftover stud stays open, matching the brick module.
///
/// # Errors
///
/// Returns [`InsertError::Geometry`] for zero `length` or `height_plates`.
pub fn wall(build: &mut BuildState, params: &WallParams) -> Result<Vec<PartId>, InsertError> {
    brick_types::BrickDims::new(params.length, 2, params.height_plates)
        .validate()
        .map_err(InsertError::Geometry)?;

    let run = i32::try_from(params.length).unwrap_or(i32::MAX);
    let top = params.start.y + i32::try_from(params.height_plates).unwrap_or(i32::MAX);

    let mut ids = Vec::new();
    let mut y = params.start.y;
    let mut course = 0;
    while y < top {
        let offset = if course % 2 == 0 { 2 } else { 0 };

        if offset > 0 && run >= 2 {
            // Close the bond gap at the near end of shifted courses.
            ids.push(insert_brick(build, params, 0, y, &BRICK_2X2, Rotation::R0)?);
        }

        let mut along = offset;
        while along < run {
            let remaining = run - along;
            if remaining >= 4 {
                let rotation = match params.direction {
                    WallDirection::AlongX => Rotation::R90,
                    WallDirection::AlongZ => Rotation::R0,
                };
                ids.push(insert_brick(build, params, along, y, &BRICK_2X4, rotation)?);
                along += 4;
            } else if remaining >= 2 {
                ids.push(insert_brick(build, params, along, y, &BRICK_2X2, Rotation::R0)?);
                along += 2;
            } else {
                break;
            }
        }

        y += 3;
        course += 1;
    }

    debug!(
        parts = ids.len(),
        length = params.length,
        courses = course,
        "Expanded wall"
    );
    Ok(ids)
}

/// Places one brick `along` studs into the run at plate height `y`.
fn insert_brick(
    build: &mut BuildState,
    params: &WallParams,
    along: i32,
    y: i32,
    part: &crate::catalog::CatalogPart,
    rotation: Rotation,
) -> Result<PartId, InsertError> {
    let position = match params.direction {
        WallDirection::AlongX => StudCoord::new(params.start.x + along, params.start.z, y),
        WallDirection::AlongZ => StudCoord::new(params.start.x, params.start.z + along, y),
    };
    build.insert(part.number, params.color, position, rotation, part.dims)
}
