//! Placed parts and their identifiers.

use std::collections::BTreeSet;

use brick_types::{BrickDims, GridBox, Rotation, StudCoord};

/// Identifier of a part within one build.
///
/// Assigned by [`BuildState`](crate::BuildState) on insertion, starting at 1
/// and monotonically increasing. Ids are never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartId(u32);

impl PartId {
    /// Creates a part id from a raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A part instance placed in a build.
///
/// Placed parts are exclusively owned by the [`BuildState`](crate::BuildState)
/// that created them: there is no public constructor, and a part is destroyed
/// only through `BuildState::remove`.
///
/// The bounding box and connector positions are derived on demand from
/// position, dimensions, and rotation; nothing geometric is stored twice.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedPart {
    id: PartId,
    part_type: String,
    color: u32,
    position: StudCoord,
    rotation: Rotation,
    dims: BrickDims,
    supported_by: BTreeSet<PartId>,
}

impl PlacedPart {
    pub(crate) fn new(
        id: PartId,
        part_type: String,
        color: u32,
        position: StudCoord,
        rotation: Rotation,
        dims: BrickDims,
    ) -> Self {
        Self {
            id,
            part_type,
            color,
            position,
            rotation,
            dims,
            supported_by: BTreeSet::new(),
        }
    }

    /// Build-unique id of this part.
    #[must_use]
    pub const fn id(&self) -> PartId {
        self.id
    }

    /// Catalog part number (e.g. `"3001"` for a 2x4 brick).
    #[must_use]
    pub fn part_type(&self) -> &str {
        &self.part_type
    }

    /// Color code of this part.
    #[must_use]
    pub const fn color(&self) -> u32 {
        self.color
    }

    /// Grid position of the part's minimum corner.
    #[must_use]
    pub const fn position(&self) -> StudCoord {
        self.position
    }

    /// Rotation around the vertical axis.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Unrotated part dimensions.
    #[must_use]
    pub const fn dims(&self) -> BrickDims {
        self.dims
    }

    /// Ids of the parts directly beneath that hold this part up.
    ///
    /// Non-owning references, recomputed by the connection validator on each
    /// certification pass and purged when a referenced part is removed.
    #[must_use]
    pub const fn supported_by(&self) -> &BTreeSet<PartId> {
        &self.supported_by
    }

    pub(crate) fn supported_by_mut(&mut self) -> &mut BTreeSet<PartId> {
        &mut self.supported_by
    }

    /// Rotation-aware axis-aligned bounding box.
    #[must_use]
    pub const fn bounding_box(&self) -> GridBox {
        GridBox::of_part(self.position, self.dims, self.rotation)
    }

    /// Top connector (stud) positions, one per covered footprint cell.
    ///
    /// The `y` of every returned coordinate is the part's top face, i.e. the
    /// plate layer a part stacked on top would start at.
    #[must_use]
    pub fn top_studs(&self) -> Vec<StudCoord> {
        self.connector_row(self.bounding_box().max.y)
    }

    /// Bottom connector (socket) positions, one per covered footprint cell.
    ///
    /// The `y` of every returned coordinate is the part's bottom face. A part
    /// is supported when one of these matches another part's top stud.
    #[must_use]
    pub fn bottom_sockets(&self) -> Vec<StudCoord> {
        self.connector_row(self.bounding_box().min.y)
    }

    fn connector_row(&self, y: i32) -> Vec<StudCoord> {
        let bbox = self.bounding_box();
        let mut row = Vec::with_capacity(
            (bbox.max.x - bbox.min.x).unsigned_abs() as usize
                * (bbox.max.z - bbox.min.z).unsigned_abs() as usize,
        );
        for x in bbox.min.x..bbox.max.x {
            for z in bbox.min.z..bbox.max.z {
                row.push(StudCoord::new(x, z, y));
            }
        }
        row
    }
}
