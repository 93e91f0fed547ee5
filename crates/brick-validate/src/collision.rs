//! Bounding-box collision detection.

use brick_build::{BuildState, PartId};
use brick_types::GridBox;

/// Finds every pair of parts whose bounding boxes strictly overlap.
///
/// Overlap is strict on all three axes (`max_a > min_b && max_b > min_a`),
/// so parts that merely share a face - the normal situation for adjacent
/// connected parts - are never reported. Each overlapping pair appears
/// exactly once, ordered `(lower id, higher id)`, and the result is sorted.
///
/// Candidates come from the build's spatial index; the exact box test
/// confirms them, keeping the pass near-linear for realistic builds.
///
/// # Example
///
/// ```
/// use brick_build::BuildState;
/// use brick_types::{BrickDims, Rotation, StudCoord};
/// use brick_validate::check_collisions;
///
/// let mut build = BuildState::new();
/// let brick = BrickDims::new(2, 4, 3);
/// let a = build.insert("3001", 4, StudCoord::origin(), Rotation::R0, brick).unwrap();
/// let b = build.insert("3001", 4, StudCoord::origin(), Rotation::R0, brick).unwrap();
///
/// assert_eq!(check_collisions(&build), vec![(a, b)]);
/// ```
#[must_use]
pub fn check_collisions(build: &BuildState) -> Vec<(PartId, PartId)> {
    let index = build.index();
    let mut pairs = Vec::new();

    for part in build.parts() {
        let bbox = part.bounding_box();
        for candidate_id in index.candidates(&bbox) {
            // Visit each unordered pair once, from its lower id.
            if candidate_id <= part.id() {
                continue;
            }
            let Some(other) = build.part(candidate_id) else {
                continue;
            };
            if bbox.intersects(&other.bounding_box()) {
                pairs.push((part.id(), candidate_id));
            }
        }
    }

    pairs.sort_unstable();
    pairs
}

/// Checks a hypothetical box against the current build.
///
/// Returns the first colliding part in id order, or `None` when the box is
/// free. Used by the placement advisor to probe placements that have not
/// been inserted.
#[must_use]
pub fn first_collision(build: &BuildState, probe: &GridBox) -> Option<PartId> {
    build
        .index()
        .candidates(probe)
        .into_iter()
        .find(|&id| match build.part(id) {
            Some(part) => probe.intersects(&part.bounding_box()),
            None => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_types::{BrickDims, Rotation, StudCoord};

    const BRICK_2X4: BrickDims = BrickDims::new(2, 4, 3);

    fn insert_at(build: &mut BuildState, x: i32, z: i32, y: i32) -> PartId {
        build
            .insert("3001", 4, StudCoord::new(x, z, y), Rotation::R0, BRICK_2X4)
            .unwrap()
    }

    #[test]
    fn test_empty_build_no_collisions() {
        assert!(check_collisions(&BuildState::new()).is_empty());
    }

    #[test]
    fn test_identical_placement_collides() {
        let mut build = BuildState::new();
        let a = insert_at(&mut build, 0, 0, 0);
        let b = insert_at(&mut build, 0, 0, 0);
        assert_eq!(check_collisions(&build), vec![(a, b)]);
    }

    #[test]
    fn test_face_touching_never_reported() {
        let mut build = BuildState::new();
        insert_at(&mut build, 0, 0, 0);
        insert_at(&mut build, 2, 0, 0); // shares the x face
        insert_at(&mut build, 0, 4, 0); // shares the z face
        insert_at(&mut build, 0, 0, 3); // stacked, shares the y face
        assert!(check_collisions(&build).is_empty());
    }

    #[test]
    fn test_partial_overlap_reported_once() {
        let mut build = BuildState::new();
        let a = insert_at(&mut build, 0, 0, 0);
        let b = insert_at(&mut build, 1, 2, 1);
        let pairs = check_collisions(&build);
        assert_eq!(pairs, vec![(a, b)]);
    }

    #[test]
    fn test_rotation_resolved_before_test() {
        let mut build = BuildState::new();
        insert_at(&mut build, 0, 0, 0);
        let c = build
            .insert(
                "3001",
                4,
                StudCoord::new(1, 1, 0),
                Rotation::R90,
                BRICK_2X4,
            )
            .unwrap();
        // Rotated footprint 4x2 spans x 1..5, z 1..3 and overlaps part 1.
        let pairs = check_collisions(&build);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, c);
    }

    #[test]
    fn test_three_way_overlap_reports_each_pair() {
        let mut build = BuildState::new();
        let a = insert_at(&mut build, 0, 0, 0);
        let b = insert_at(&mut build, 0, 0, 0);
        let c = insert_at(&mut build, 0, 0, 0);
        assert_eq!(check_collisions(&build), vec![(a, b), (a, c), (b, c)]);
    }

    #[test]
    fn test_first_collision_probe() {
        let mut build = BuildState::new();
        let a = insert_at(&mut build, 0, 0, 0);

        let clear = GridBox::of_part(StudCoord::new(10, 10, 0), BRICK_2X4, Rotation::R0);
        assert_eq!(first_collision(&build, &clear), None);

        let overlapping = GridBox::of_part(StudCoord::new(1, 0, 0), BRICK_2X4, Rotation::R0);
        assert_eq!(first_collision(&build, &overlapping), Some(a));

        let touching = GridBox::of_part(StudCoord::new(2, 0, 0), BRICK_2X4, Rotation::R0);
        assert_eq!(first_collision(&build, &touching), None);
    }
}
