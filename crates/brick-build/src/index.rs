//! Coarse spatial bucket index over placed parts.

use brick_types::GridBox;
use hashbrown::HashMap;
use tracing::debug;

use crate::part::{PartId, PlacedPart};

/// Grid cells per bucket on the x and z axes.
const BUCKET_STUDS: i32 = 4;

/// Grid cells per bucket on the y axis (two brick heights).
const BUCKET_PLATES: i32 = 6;

/// A coarse 3D bucket grid accelerating collision queries.
///
/// Each bucket covers a 4x4 stud by 6 plate block of grid cells; a part is
/// registered in every bucket its bounding box overlaps. Queries return a
/// *superset* of the truly intersecting parts, so callers must confirm with
/// an exact box test.
///
/// The index is a private cache owned by one
/// [`BuildState`](crate::BuildState): never shared across builds, invalidated
/// on mutation, and idempotently rebuildable in O(n). Without it, whole-build
/// collision checking is O(n^2) pairwise, which degrades past a few hundred
/// parts.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    buckets: HashMap<(i32, i32, i32), Vec<PartId>>,
}

impl SpatialIndex {
    /// Builds the index from scratch over a part list.
    pub(crate) fn build(parts: &[PlacedPart]) -> Self {
        let mut buckets: HashMap<(i32, i32, i32), Vec<PartId>> = HashMap::new();
        for part in parts {
            for key in bucket_keys(&part.bounding_box()) {
                buckets.entry(key).or_default().push(part.id());
            }
        }
        debug!(parts = parts.len(), buckets = buckets.len(), "rebuilt spatial index");
        Self { buckets }
    }

    /// Candidate parts whose boxes might intersect the probe box.
    ///
    /// Deduplicated but unordered beyond id sort; may contain parts that do
    /// not actually intersect. An empty result is authoritative: no part
    /// intersects the probe.
    #[must_use]
    pub fn candidates(&self, probe: &GridBox) -> Vec<PartId> {
        let mut found = Vec::new();
        for key in bucket_keys(probe) {
            if let Some(ids) = self.buckets.get(&key) {
                found.extend_from_slice(ids);
            }
        }
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Number of non-empty buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Bucket keys overlapped by a box, in deterministic order.
fn bucket_keys(bbox: &GridBox) -> Vec<(i32, i32, i32)> {
    // Exclusive max: the last covered cell is max - 1.
    let x_range = bucket_span(bbox.min.x, bbox.max.x, BUCKET_STUDS);
    let z_range = bucket_span(bbox.min.z, bbox.max.z, BUCKET_STUDS);
    let y_range = bucket_span(bbox.min.y, bbox.max.y, BUCKET_PLATES);

    let mut keys = Vec::new();
    for bx in x_range.0..=x_range.1 {
        for bz in z_range.0..=z_range.1 {
            for by in y_range.0..=y_range.1 {
                keys.push((bx, bz, by));
            }
        }
    }
    keys
}

fn bucket_span(min: i32, max: i32, size: i32) -> (i32, i32) {
    debug_assert!(max > min, "degenerate box");
    (min.div_euclid(size), (max - 1).div_euclid(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_types::{BrickDims, Rotation, StudCoord};

    fn part(id: u32, x: i32, z: i32, y: i32) -> PlacedPart {
        PlacedPart::new(
            PartId::new(id),
            "3001".to_string(),
            4,
            StudCoord::new(x, z, y),
            Rotation::R0,
            BrickDims::new(2, 4, 3),
        )
    }

    #[test]
    fn test_empty_index() {
        let index = SpatialIndex::build(&[]);
        let probe = GridBox::new(StudCoord::origin(), StudCoord::new(10, 10, 10));
        assert!(index.candidates(&probe).is_empty());
        assert_eq!(index.bucket_count(), 0);
    }

    #[test]
    fn test_candidates_superset() {
        let parts = vec![part(1, 0, 0, 0), part(2, 0, 0, 3), part(3, 40, 40, 0)];
        let index = SpatialIndex::build(&parts);

        let probe = parts[0].bounding_box();
        let found = index.candidates(&probe);
        // Parts 1 and 2 share buckets with the probe; part 3 is far away.
        assert!(found.contains(&PartId::new(1)));
        assert!(found.contains(&PartId::new(2)));
        assert!(!found.contains(&PartId::new(3)));
    }

    #[test]
    fn test_candidates_deduplicated() {
        // A part spanning several buckets must appear once.
        let big = PlacedPart::new(
            PartId::new(1),
            "3030".to_string(),
            4,
            StudCoord::origin(),
            Rotation::R0,
            BrickDims::new(10, 10, 3),
        );
        let index = SpatialIndex::build(std::slice::from_ref(&big));
        let probe = GridBox::new(StudCoord::origin(), StudCoord::new(12, 12, 3));
        assert_eq!(index.candidates(&probe), vec![PartId::new(1)]);
    }

    #[test]
    fn test_negative_coordinates() {
        let parts = vec![part(1, -3, -7, 0)];
        let index = SpatialIndex::build(&parts);
        let found = index.candidates(&parts[0].bounding_box());
        assert_eq!(found, vec![PartId::new(1)]);
    }

    #[test]
    fn test_bucket_span_exclusive_max() {
        // A box covering cells 0..4 stays in bucket 0.
        assert_eq!(bucket_span(0, 4, 4), (0, 0));
        // Covering cells 0..5 spills into bucket 1.
        assert_eq!(bucket_span(0, 5, 4), (0, 1));
        assert_eq!(bucket_span(-4, 0, 4), (-1, -1));
    }
}
