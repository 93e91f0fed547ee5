//! Swept wing surfaces.

use brick_build::{BuildState, InsertError, PartId};
use brick_types::{Rotation, StudCoord};
use tracing::debug;

use crate::catalog::{PLATE_2X4, SLOPE_2X2};

/// Largest supported sweep angle in degrees.
pub const MAX_SWEEP_DEGREES: u32 = 45;

/// Parameters for [`wing`].
#[derive(Debug, Clone, Copy)]
pub struct WingParams {
    /// Wing root position; the span extends from here along z.
    pub start: StudCoord,
    /// Span in studs, laid in two-stud plate rows.
    pub length: u32,
    /// Sweep angle in degrees, clamped to [`MAX_SWEEP_DEGREES`].
    pub sweep_degrees: u32,
    /// Surface thickness in plate layers.
    pub thickness_plates: u32,
    /// Color applied to every part.
    pub color: u32,
}

/// Expands a swept wing from plate rows, capped with a leading-edge slope.
///
/// Each layer is a run of 2x4 plates laid sideways along z, two studs of
/// span per plate, each row shifted in x by the sweep fraction of its span
/// position. Layers stack directly, and a 45-degree slope caps the root on
/// top of the last layer. An odd `length` rounds up to the two-stud plate
/// module.
///
/// # Errors
///
/// Returns [`InsertError::Geometry`] when `length` or `thickness_plates`
/// is zero.
pub fn wing(build: &mut BuildState, params: &WingParams) -> Result<Vec<PartId>, InsertError> {
    brick_types::BrickDims::new(2, params.length, params.thickness_plates)
        .validate()
        .map_err(InsertError::Geometry)?;

    let span = i32::try_from(params.length).unwrap_or(i32::MAX);
    let sweep = params.sweep_degrees.min(MAX_SWEEP_DEGREES);
    let layers = i32::try_from(params.thickness_plates).unwrap_or(i32::MAX);

    let mut ids = Vec::new();
    for layer in 0..layers {
        let mut i = 0;
        while i < span {
            // Sweep shifts each row by its fraction of the span.
            let shift = (i * i32::try_from(sweep).unwrap_or(0)) / (span * 10);
            ids.push(build.insert(
                PLATE_2X4.number,
                params.color,
                StudCoord::new(
                    params.start.x + shift,
                    params.start.z + i,
                    params.start.y + layer,
                ),
                Rotation::R90,
                PLATE_2X4.dims,
            )?);
            i += 2;
        }
    }

    // Leading-edge cap on top of the root.
    ids.push(build.insert(
        SLOPE_2X2.number,
        params.color,
        StudCoord::new(params.start.x, params.start.z, params.start.y + layers),
        Rotation::R0,
        SLOPE_2X2.dims,
    )?);

    debug!(
        parts = ids.len(),
        span = params.length,
        sweep,
        "Expanded wing"
    );
    Ok(ids)
}
