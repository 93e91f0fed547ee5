//! Ground plate layer tiling.

use brick_build::{BuildState, InsertError, PartId};
use brick_types::{Rotation, StudCoord};
use tracing::debug;

use crate::catalog::{PLATE_1X1, PLATE_2X2, PLATE_2X4};

/// Tiles a rectangular ground layer with plates, largest first.
///
/// The area is covered row by row: 4-deep rows of 2x4 plates while the
/// remaining length allows, then 2-deep rows of 2x2 plates (or rotated 2x4
/// plates where four studs of width remain), then single rows. Odd leftover
/// width is finished with 1x1 plates, so the layer covers the full rectangle
/// with no overlap.
///
/// # Errors
///
/// Returns [`InsertError::Geometry`] for zero `width` or `length`.
pub fn base(
    build: &mut BuildState,
    origin_x: i32,
    origin_z: i32,
    width: u32,
    length: u32,
    color: u32,
) -> Result<Vec<PartId>, InsertError> {
    // Reuse the dims validation for degenerate extents.
    brick_types::BrickDims::new(width, length, 1)
        .validate()
        .map_err(InsertError::Geometry)?;

    let end_x = origin_x + i32::try_from(width).unwrap_or(i32::MAX);
    let end_z = origin_z + i32::try_from(length).unwrap_or(i32::MAX);

    let mut ids = Vec::new();
    let mut z = origin_z;
    while z < end_z {
        let depth = match end_z - z {
            d if d >= 4 => 4,
            d if d >= 2 => 2,
            _ => 1,
        };

        let mut x = origin_x;
        while x < end_x {
            let w = end_x - x;
            let at = StudCoord::new(x, z, 0);
            match (depth, w) {
                (4, w) if w >= 2 => {
                    ids.push(build.insert(
                        PLATE_2X4.number,
                        color,
                        at,
                        Rotation::R0,
                        PLATE_2X4.dims,
                    )?);
                    x += 2;
                }
                (2, w) if w >= 4 => {
                    ids.push(build.insert(
                        PLATE_2X4.number,
                        color,
                        at,
                        Rotation::R90,
                        PLATE_2X4.dims,
                    )?);
                    x += 4;
                }
                (2, w) if w >= 2 => {
                    ids.push(build.insert(
                        PLATE_2X2.number,
                        color,
                        at,
                        Rotation::R0,
                        PLATE_2X2.dims,
                    )?);
                    x += 2;
                }
                _ => {
                    // One-stud strip: finish the row depth with 1x1 plates.
                    for dz in 0..depth {
                        ids.push(build.insert(
                            PLATE_1X1.number,
                            color,
                            StudCoord::new(x, z + dz, 0),
                            Rotation::R0,
                            PLATE_1X1.dims,
                        )?);
                    }
                    x += 1;
                }
            }
        }
        z += depth;
    }

    debug!(parts = ids.len(), width, length, "Tiled base layer");
    Ok(ids)
}
