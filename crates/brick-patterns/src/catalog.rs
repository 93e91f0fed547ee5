//! Part numbers and dimensions for the catalog parts templates use.

use brick_types::BrickDims;

/// A catalog entry: part number, display name, and unrotated dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogPart {
    /// Manufacturer part number, e.g. `"3001"`.
    pub number: &'static str,
    /// Display name, e.g. `"Brick 2x4"`.
    pub name: &'static str,
    /// Width, length, and height before rotation.
    pub dims: BrickDims,
}

impl CatalogPart {
    const fn new(number: &'static str, name: &'static str, dims: BrickDims) -> Self {
        Self { number, name, dims }
    }
}

/// Brick 2x4.
pub const BRICK_2X4: CatalogPart = CatalogPart::new("3001", "Brick 2x4", BrickDims::new(2, 4, 3));
/// Brick 2x2.
pub const BRICK_2X2: CatalogPart = CatalogPart::new("3003", "Brick 2x2", BrickDims::new(2, 2, 3));
/// Brick 1x2.
pub const BRICK_1X2: CatalogPart = CatalogPart::new("3004", "Brick 1x2", BrickDims::new(1, 2, 3));
/// Brick 1x1.
pub const BRICK_1X1: CatalogPart = CatalogPart::new("3005", "Brick 1x1", BrickDims::new(1, 1, 3));
/// Brick 1x3.
pub const BRICK_1X3: CatalogPart = CatalogPart::new("3622", "Brick 1x3", BrickDims::new(1, 3, 3));
/// Brick 1x4.
pub const BRICK_1X4: CatalogPart = CatalogPart::new("3010", "Brick 1x4", BrickDims::new(1, 4, 3));
/// Plate 2x4.
pub const PLATE_2X4: CatalogPart = CatalogPart::new("3037", "Plate 2x4", BrickDims::new(2, 4, 1));
/// Plate 2x2.
pub const PLATE_2X2: CatalogPart = CatalogPart::new("3022", "Plate 2x2", BrickDims::new(2, 2, 1));
/// Plate 1x1.
pub const PLATE_1X1: CatalogPart = CatalogPart::new("3024", "Plate 1x1", BrickDims::new(1, 1, 1));
/// Slope 45 2x2.
pub const SLOPE_2X2: CatalogPart = CatalogPart::new("3041", "Slope 45 2x2", BrickDims::new(2, 2, 3));

/// Every catalog part, in part-number order.
pub const ALL: [CatalogPart; 10] = [
    BRICK_2X4,
    BRICK_2X2,
    BRICK_1X2,
    BRICK_1X1,
    BRICK_1X4,
    PLATE_2X2,
    PLATE_1X1,
    PLATE_2X4,
    SLOPE_2X2,
    BRICK_1X3,
];

/// Looks up a catalog part by number.
#[must_use]
pub fn by_number(number: &str) -> Option<&'static CatalogPart> {
    ALL.iter().find(|p| p.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_number() {
        let part = by_number("3001").unwrap();
        assert_eq!(part.name, "Brick 2x4");
        assert_eq!(part.dims, BrickDims::new(2, 4, 3));
    }

    #[test]
    fn test_lookup_unknown_number() {
        assert!(by_number("9999").is_none());
    }

    #[test]
    fn test_all_dims_valid() {
        for part in ALL {
            assert!(part.dims.validate().is_ok(), "{}", part.number);
        }
    }

    #[test]
    fn test_numbers_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.number, b.number);
            }
        }
    }
}
