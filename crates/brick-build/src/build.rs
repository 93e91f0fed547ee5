//! The mutable build state.

use std::sync::OnceLock;

use brick_types::{BrickDims, GridBox, Rotation, StudCoord};
use tracing::debug;

use crate::bom::BillOfQuantities;
use crate::error::InsertError;
use crate::index::SpatialIndex;
use crate::part::{PartId, PlacedPart};

/// A mutable collection of placed parts with derived spatial views.
///
/// The part list is kept in insertion order (meaningful for presentation and
/// build instructions, not an invariant anything else relies on). Ids start
/// at 1 and are never reused.
///
/// Insertion enforces *construction-time* invariants only: strictly positive
/// dimensions and id uniqueness. Whether the build is physically sound
/// (collision-free, supported, stable) is the validators' concern, and a
/// build is allowed to be transiently invalid between mutations.
///
/// # Example
///
/// ```
/// use brick_build::BuildState;
/// use brick_types::{BrickDims, Rotation, StudCoord};
///
/// let mut build = BuildState::new();
/// let brick = BrickDims::new(2, 4, 3);
/// let a = build.insert("3001", 4, StudCoord::origin(), Rotation::R0, brick).unwrap();
/// let b = build
///     .insert("3001", 4, StudCoord::new(0, 0, 3), Rotation::R0, brick)
///     .unwrap();
///
/// assert_eq!(build.overall_dimensions(), (2, 4, 6));
/// assert_eq!(build.bill_of_quantities().quantity_of("3001", 4), 2);
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Default)]
pub struct BuildState {
    parts: Vec<PlacedPart>,
    next_id: u32,
    /// Lazily rebuilt collision-query cache; cleared on every mutation.
    index: OnceLock<SpatialIndex>,
}

impl Clone for BuildState {
    fn clone(&self) -> Self {
        // The index cache is cheap to rebuild; clones start cold.
        Self {
            parts: self.parts.clone(),
            next_id: self.next_id,
            index: OnceLock::new(),
        }
    }
}

impl BuildState {
    /// Creates an empty build.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            next_id: 1,
            index: OnceLock::new(),
        }
    }

    /// Number of placed parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True when no parts are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// All parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[PlacedPart] {
        &self.parts
    }

    /// Looks up a part by id.
    #[must_use]
    pub fn part(&self, id: PartId) -> Option<&PlacedPart> {
        self.parts.iter().find(|p| p.id() == id)
    }

    /// Inserts a new part and returns its assigned id.
    ///
    /// Physical validity is deliberately unchecked so callers can build and
    /// probe hypothetical placements before certifying the whole build.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::Geometry`] if any dimension component is zero,
    /// or [`InsertError::DuplicateId`] if the id counter was corrupted (ids
    /// are core-assigned, so this indicates a bug, not bad input).
    pub fn insert(
        &mut self,
        part_type: impl Into<String>,
        color: u32,
        position: StudCoord,
        rotation: Rotation,
        dims: BrickDims,
    ) -> Result<PartId, InsertError> {
        dims.validate()?;

        let id = PartId::new(self.next_id);
        if self.part(id).is_some() {
            return Err(InsertError::DuplicateId(id));
        }

        self.parts.push(PlacedPart::new(
            id,
            part_type.into(),
            color,
            position,
            rotation,
            dims,
        ));
        self.next_id += 1;
        self.invalidate_index();
        Ok(id)
    }

    /// Removes a part by id.
    ///
    /// Returns `false` if no such part exists. On success the spatial index
    /// is invalidated and the removed id is purged from every remaining
    /// part's `supported_by` set.
    pub fn remove(&mut self, id: PartId) -> bool {
        let Some(pos) = self.parts.iter().position(|p| p.id() == id) else {
            return false;
        };
        self.parts.remove(pos);
        for part in &mut self.parts {
            part.supported_by_mut().remove(&id);
        }
        self.invalidate_index();
        debug!(part = %id, remaining = self.parts.len(), "removed part");
        true
    }

    /// Bounding box of a single part, if present.
    #[must_use]
    pub fn bounding_box_of(&self, id: PartId) -> Option<GridBox> {
        self.part(id).map(PlacedPart::bounding_box)
    }

    /// Overall extents `(studs x, studs z, plates y)` of the build.
    ///
    /// Zero on every axis for an empty build.
    #[must_use]
    pub fn overall_dimensions(&self) -> (u32, u32, u32) {
        let mut boxes = self.parts.iter().map(PlacedPart::bounding_box);
        let Some(first) = boxes.next() else {
            return (0, 0, 0);
        };
        boxes.fold(first, |acc, b| acc.union(&b)).size()
    }

    /// Aggregates the part list into a bill of quantities by (type, color).
    ///
    /// Purely derived; nothing is cached.
    #[must_use]
    pub fn bill_of_quantities(&self) -> BillOfQuantities {
        BillOfQuantities::from_parts(&self.parts)
    }

    /// The spatial index, rebuilding it if a mutation invalidated it.
    ///
    /// The index is a private cache of this build; it accelerates collision
    /// queries and carries no authority of its own.
    #[must_use]
    pub fn index(&self) -> &SpatialIndex {
        self.index.get_or_init(|| SpatialIndex::build(&self.parts))
    }

    /// Replaces all recorded support relations with the given edge set.
    ///
    /// Called by the validation pass after recomputing connectivity; each
    /// `(part, supporter)` edge records that `part` rests on `supporter`.
    /// Edges naming unknown parts are ignored.
    pub fn record_supports(&mut self, edges: &[(PartId, PartId)]) {
        for part in &mut self.parts {
            part.supported_by_mut().clear();
        }
        for &(part_id, supporter) in edges {
            if let Some(part) = self.parts.iter_mut().find(|p| p.id() == part_id) {
                part.supported_by_mut().insert(supporter);
            }
        }
    }

    fn invalidate_index(&mut self) {
        self.index = OnceLock::new();
    }
}
