//! Bill-of-quantities aggregation.

use hashbrown::HashMap;

use crate::part::PlacedPart;

/// One line of a bill of quantities: a (part type, color) pair and its count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoqItem {
    /// Catalog part number.
    pub part_type: String,
    /// Color code.
    pub color: u32,
    /// Number of placements.
    pub quantity: usize,
}

/// Bill of quantities for a build, aggregated by (part type, color).
///
/// A purely derived view: always recomputed from the part list, never stored
/// alongside it. Items are sorted by part type then color so the output is
/// deterministic.
///
/// # Example
///
/// ```
/// use brick_build::BuildState;
/// use brick_types::{BrickDims, Rotation, StudCoord};
///
/// let mut build = BuildState::new();
/// let brick = BrickDims::new(2, 4, 3);
/// build.insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, brick).unwrap();
/// build.insert("3001", 4, StudCoord::new(4, 0, 0), Rotation::R0, brick).unwrap();
/// build.insert("3001", 1, StudCoord::new(8, 0, 0), Rotation::R0, brick).unwrap();
///
/// let boq = build.bill_of_quantities();
/// assert_eq!(boq.total_parts(), 3);
/// assert_eq!(boq.quantity_of("3001", 4), 2);
/// assert_eq!(boq.unique_part_types(), vec!["3001"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BillOfQuantities {
    items: Vec<BoqItem>,
}

impl BillOfQuantities {
    pub(crate) fn from_parts(parts: &[PlacedPart]) -> Self {
        let mut counts: HashMap<(&str, u32), usize> = HashMap::new();
        for part in parts {
            *counts.entry((part.part_type(), part.color())).or_insert(0) += 1;
        }

        let mut items: Vec<BoqItem> = counts
            .into_iter()
            .map(|((part_type, color), quantity)| BoqItem {
                part_type: part_type.to_string(),
                color,
                quantity,
            })
            .collect();
        items.sort_by(|a, b| (&a.part_type, a.color).cmp(&(&b.part_type, b.color)));
        Self { items }
    }

    /// The aggregated line items, sorted by part type then color.
    #[must_use]
    pub fn items(&self) -> &[BoqItem] {
        &self.items
    }

    /// Total number of placed parts (sum of all quantities).
    #[must_use]
    pub fn total_parts(&self) -> usize {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Distinct part types, sorted and deduplicated.
    #[must_use]
    pub fn unique_part_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.items.iter().map(|i| i.part_type.as_str()).collect();
        types.dedup();
        types
    }

    /// Quantity of one (part type, color) combination; 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, part_type: &str, color: u32) -> usize {
        self.items
            .iter()
            .find(|i| i.part_type == part_type && i.color == color)
            .map_or(0, |i| i.quantity)
    }
}

impl std::fmt::Display for BillOfQuantities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bill of Quantities ({} parts):", self.total_parts())?;
        for item in &self.items {
            writeln!(
                f,
                "  {} x part {} (color {})",
                item.quantity, item.part_type, item.color
            )?;
        }
        Ok(())
    }
}
