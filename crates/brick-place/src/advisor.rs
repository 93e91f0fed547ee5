//! Placement probing and suggestion generation.

use brick_build::{BuildState, InsertError, PartId};
use brick_types::{BrickDims, GridBox, Rotation, StudCoord};
use brick_validate::first_collision;
use tracing::debug;

/// Unit directions for the eight horizontal neighbor probes, in fixed order.
/// Each direction is scaled by the part's rotated footprint so a probe moves
/// a full part-width (or part-length) clear of the attempted position.
const NEIGHBOR_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Most suggestions returned for one rejection.
const MAX_SUGGESTIONS: usize = 2;

/// A complete alternative placement the caller can retry verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// Alternative anchor position.
    pub position: StudCoord,
    /// Alternative rotation.
    pub rotation: Rotation,
}

/// Result of one placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The part was inserted into the build.
    Accepted(PartId),
    /// The placement collided; the build is unchanged.
    Rejected {
        /// First part whose box overlaps the attempted placement.
        collided_with: PartId,
        /// Up to two collision-free placements near the attempt.
        suggestions: Vec<Suggestion>,
    },
}

/// Attempts to place a part, rejecting collisions with nearby alternatives.
///
/// Only bounding-box overlap is checked here. Connection and stability are
/// whole-build properties evaluated by a full validation pass, since a part
/// placed now may be supported by one placed later.
///
/// On rejection the build is untouched and the outcome carries up to two
/// [`Suggestion`]s, found by probing the eight horizontal neighbor positions
/// one footprint step away in fixed order and then the clockwise-next
/// rotation at the original position. The probe count is constant regardless
/// of build size.
///
/// # Errors
///
/// Returns [`InsertError::Geometry`] for degenerate dimensions. Collision
/// is not an error; it is the `Rejected` outcome.
pub fn try_place(
    build: &mut BuildState,
    part_type: impl Into<String>,
    color: u32,
    position: StudCoord,
    rotation: Rotation,
    dims: BrickDims,
) -> Result<PlacementOutcome, InsertError> {
    dims.validate().map_err(InsertError::Geometry)?;

    let probe = GridBox::of_part(position, dims, rotation);
    let Some(collided_with) = first_collision(build, &probe) else {
        let id = build.insert(part_type, color, position, rotation, dims)?;
        return Ok(PlacementOutcome::Accepted(id));
    };

    let suggestions = suggest_alternatives(build, position, rotation, dims);
    debug!(
        collided_with = %collided_with,
        alternatives = suggestions.len(),
        "Placement rejected"
    );
    Ok(PlacementOutcome::Rejected {
        collided_with,
        suggestions,
    })
}

/// Probes the fixed candidate set and keeps collision-free placements.
#[allow(clippy::cast_possible_wrap)]
fn suggest_alternatives(
    build: &BuildState,
    position: StudCoord,
    rotation: Rotation,
    dims: BrickDims,
) -> Vec<Suggestion> {
    let (step_x, step_z) = dims.footprint(rotation);
    let (step_x, step_z) = (step_x as i32, step_z as i32);
    let mut candidates: Vec<Suggestion> = NEIGHBOR_DIRECTIONS
        .iter()
        .map(|&(dx, dz)| Suggestion {
            position: position.offset(dx * step_x, dz * step_z, 0),
            rotation,
        })
        .collect();
    candidates.push(Suggestion {
        position,
        rotation: rotation.rotate_cw(),
    });

    candidates
        .into_iter()
        .filter(|s| {
            let probe = GridBox::of_part(s.position, dims, s.rotation);
            first_collision(build, &probe).is_none()
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}
