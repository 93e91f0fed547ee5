//! End-to-end scenarios across the brick crate ecosystem.
//!
//! These tests exercise the public API the way a generation pipeline would,
//! organized in tiers of increasing scope:
//!
//! - Tier 1: Foundation (grid primitives, fine units, boxes)
//! - Tier 2: Build modeling (insert, remove, lookups, BOQ)
//! - Tier 3: Validation (collision, connection, stability)
//! - Tier 4: Placement and patterns
//!
//! If any of these tests fail after API changes, it indicates a breaking
//! change that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use brick::prelude::*;
use brick::{patterns, types, validate};

// =============================================================================
// TIER 1: Foundation - Grid Primitives
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn fine_unit_round_trip_over_lattice() {
        for x in -8..=8 {
            for z in -8..=8 {
                for y in [-6, -1, 0, 1, 5, 30] {
                    let coord = StudCoord::new(x, z, y);
                    let fine = coord.to_fine();
                    assert_eq!(StudCoord::from_fine(fine), coord);
                }
            }
        }
    }

    #[test]
    fn fine_units_scale() {
        let fine = StudCoord::new(1, 2, 3).to_fine();
        assert!((fine.x - 20.0).abs() < f64::EPSILON);
        assert!((fine.y - 24.0).abs() < f64::EPSILON);
        assert!((fine.z - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rotation_swaps_footprint() {
        let dims = BrickDims::new(2, 4, 3);
        assert_eq!(dims.footprint(Rotation::R0), (2, 4));
        assert_eq!(dims.footprint(Rotation::R90), (4, 2));
        assert_eq!(dims.footprint(Rotation::R180), (2, 4));
        assert_eq!(dims.footprint(Rotation::R270), (4, 2));
    }

    #[test]
    fn invalid_rotation_angle_rejected() {
        assert!(Rotation::from_degrees(45).is_err());
        assert_eq!(Rotation::from_degrees(270).unwrap(), Rotation::R270);
    }

    #[test]
    fn face_touching_boxes_do_not_intersect() {
        let dims = BrickDims::new(2, 4, 3);
        let a = GridBox::of_part(StudCoord::new(0, 0, 0), dims, Rotation::R0);
        let side = GridBox::of_part(StudCoord::new(2, 0, 0), dims, Rotation::R0);
        let top = GridBox::of_part(StudCoord::new(0, 0, 3), dims, Rotation::R0);
        let overlapping = GridBox::of_part(StudCoord::new(1, 0, 0), dims, Rotation::R0);

        assert!(!a.intersects(&side));
        assert!(!a.intersects(&top));
        assert!(a.intersects(&overlapping));
    }

    #[test]
    fn degenerate_dims_rejected() {
        assert!(BrickDims::new(0, 4, 3).validate().is_err());
        assert!(BrickDims::new(2, 0, 3).validate().is_err());
        assert!(BrickDims::new(2, 4, 0).validate().is_err());
        assert!(BrickDims::new(1, 1, 1).validate().is_ok());
    }
}

// =============================================================================
// TIER 2: Build Modeling
// =============================================================================

mod tier2_build {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut build = BuildState::new();
        let id = build
            .insert(
                "3001",
                4,
                StudCoord::new(2, 3, 0),
                Rotation::R90,
                BrickDims::new(2, 4, 3),
            )
            .unwrap();

        let part = build.part(id).unwrap();
        assert_eq!(part.part_type(), "3001");
        assert_eq!(part.color(), 4);
        assert_eq!(part.rotation(), Rotation::R90);

        // Rotated 2x4 spans 4 studs in x.
        let bbox = build.bounding_box_of(id).unwrap();
        assert_eq!(bbox.size(), (4, 2, 3));
    }

    #[test]
    fn removal_purges_support_references_and_lookups() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 4, 3);
        let lower = build
            .insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        let upper = build
            .insert("3001", 4, StudCoord::new(0, 0, 3), Rotation::R0, dims)
            .unwrap();
        validate_build(&mut build);
        assert!(build.part(upper).unwrap().supported_by().contains(&lower));

        assert!(build.remove(lower));
        assert!(build.part(lower).is_none());
        assert!(build.bounding_box_of(lower).is_none());
        assert!(build.part(upper).unwrap().supported_by().is_empty());

        // Double removal is a no-op.
        assert!(!build.remove(lower));
    }

    #[test]
    fn bill_of_quantities_aggregates_by_type_and_color() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 2, 3);
        build
            .insert("3003", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        build
            .insert("3003", 4, StudCoord::new(4, 0, 0), Rotation::R0, dims)
            .unwrap();
        build
            .insert("3003", 1, StudCoord::new(8, 0, 0), Rotation::R0, dims)
            .unwrap();

        let boq = build.bill_of_quantities();
        assert_eq!(boq.total_parts(), 3);
        assert_eq!(boq.unique_part_types(), vec!["3003"]);
        assert_eq!(boq.quantity_of("3003", 4), 2);
        assert_eq!(boq.quantity_of("3003", 1), 1);
    }

    #[test]
    fn overall_dimensions_span_all_parts() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 2, 3);
        build
            .insert("3003", 4, StudCoord::new(-2, -2, 0), Rotation::R0, dims)
            .unwrap();
        build
            .insert("3003", 4, StudCoord::new(4, 4, 6), Rotation::R0, dims)
            .unwrap();
        assert_eq!(build.overall_dimensions(), (8, 8, 9));
    }
}

// =============================================================================
// TIER 3: Validation
// =============================================================================

mod tier3_validation {
    use super::*;

    #[test]
    fn duplicate_placement_reports_collision() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 4, 3);
        let a = build
            .insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        let b = build
            .insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();

        let report = validate_build(&mut build);
        assert!(!report.is_valid);
        assert!(report
            .errors
            .contains(&BuildIssue::Collision { first: a, second: b }));
    }

    #[test]
    fn grounded_parts_never_disconnected() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 4, 3);
        build
            .insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        build
            .insert("3001", 4, StudCoord::new(20, 20, 0), Rotation::R0, dims)
            .unwrap();
        let report = validate_build(&mut build);
        assert!(report.is_valid);
    }

    #[test]
    fn stacked_aligned_parts_valid() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 4, 3);
        build
            .insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        build
            .insert("3001", 4, StudCoord::new(0, 0, 3), Rotation::R0, dims)
            .unwrap();
        let report = validate_build(&mut build);
        assert!(report.is_valid, "{report}");
    }

    #[test]
    fn shifted_clear_of_footprint_disconnected() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 4, 3);
        build
            .insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        let floater = build
            .insert("3001", 4, StudCoord::new(2, 0, 3), Rotation::R0, dims)
            .unwrap();
        let report = validate_build(&mut build);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| matches!(
            e,
            BuildIssue::Disconnected { parts } if parts.contains(&floater)
        )));
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn tall_thin_column_warns_but_stays_valid() {
        let mut build = BuildState::new();
        // A 1x1 column, ten bricks (30 plates) tall.
        for level in 0..10 {
            build
                .insert(
                    "3005",
                    4,
                    StudCoord::new(0, 0, level * 3),
                    Rotation::R0,
                    BrickDims::new(1, 1, 3),
                )
                .unwrap();
        }
        let report = validate_build(&mut build);
        assert!(report.is_valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| matches!(w, StabilityWarning::TallAndNarrow { .. })));
    }

    #[test]
    fn validation_is_repeatable() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 4, 3);
        build
            .insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        build
            .insert("3001", 4, StudCoord::new(0, 0, 3), Rotation::R0, dims)
            .unwrap();
        let first = validate_build(&mut build);
        let second = validate_build(&mut build);
        assert_eq!(first.is_valid, second.is_valid);
        assert_eq!(first.errors, second.errors);
    }

    #[test]
    fn read_only_checkers_accessible() {
        let mut build = BuildState::new();
        build
            .insert(
                "3001",
                4,
                StudCoord::new(0, 0, 0),
                Rotation::R0,
                BrickDims::new(2, 4, 3),
            )
            .unwrap();
        assert!(validate::check_collisions(&build).is_empty());
        assert!(validate::check_connections(&build).all_connected());
        assert!(validate::check_stability(&build).is_empty());
    }
}

// =============================================================================
// TIER 4: Placement and Patterns
// =============================================================================

mod tier4_placement_patterns {
    use super::*;

    #[test]
    fn try_place_rejects_duplicate_with_suggestions() {
        let mut build = BuildState::new();
        let dims = BrickDims::new(2, 4, 3);
        let first = try_place(&mut build, "3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        let PlacementOutcome::Accepted(existing) = first else {
            panic!("first placement must succeed");
        };

        let second = try_place(&mut build, "3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, dims)
            .unwrap();
        let PlacementOutcome::Rejected {
            collided_with,
            suggestions,
        } = second
        else {
            panic!("duplicate placement must be rejected");
        };
        assert_eq!(collided_with, existing);
        assert!(!suggestions.is_empty());

        // A suggestion can be retried verbatim.
        let retry = try_place(
            &mut build,
            "3001",
            4,
            suggestions[0].position,
            suggestions[0].rotation,
            dims,
        )
        .unwrap();
        assert!(matches!(retry, PlacementOutcome::Accepted(_)));
    }

    #[test]
    fn base_and_wall_certify_valid() {
        let mut build = BuildState::new();
        patterns::base(&mut build, 0, 0, 8, 8, 2).unwrap();
        patterns::wall(
            &mut build,
            &patterns::WallParams {
                start: StudCoord::new(0, 0, 1),
                length: 8,
                height_plates: 9,
                direction: patterns::WallDirection::AlongX,
                color: 4,
            },
        )
        .unwrap();

        let report = validate_build(&mut build);
        assert!(report.is_valid, "{report}");

        let boq = build.bill_of_quantities();
        assert!(boq.total_parts() > 10);
    }

    #[test]
    fn column_supports_an_elevated_platform() {
        let mut build = BuildState::new();
        patterns::column(&mut build, 0, 0, 9, 1, 4).unwrap();
        patterns::column(&mut build, 3, 0, 9, 1, 4).unwrap();
        // Beam across the two column tops.
        build
            .insert(
                "3010",
                4,
                StudCoord::new(0, 0, 9),
                Rotation::R90,
                BrickDims::new(1, 4, 3),
            )
            .unwrap();
        let report = validate_build(&mut build);
        assert!(report.is_valid, "{report}");
    }

    #[test]
    fn catalog_matches_placed_dims() {
        let part = patterns::catalog::by_number("3001").unwrap();
        let mut build = BuildState::new();
        let id = build
            .insert(part.number, 4, StudCoord::new(0, 0, 0), Rotation::R0, part.dims)
            .unwrap();
        assert_eq!(build.part(id).unwrap().dims(), part.dims);
    }

    #[test]
    fn wing_pattern_certifies_valid() {
        let mut build = BuildState::new();
        patterns::wing(
            &mut build,
            &patterns::WingParams {
                start: StudCoord::new(0, 0, 0),
                length: 8,
                sweep_degrees: 30,
                thickness_plates: 2,
                color: 15,
            },
        )
        .unwrap();
        let report = validate_build(&mut build);
        assert!(report.is_valid, "{report}");
    }

    #[test]
    fn fine_positions_exported_for_rendering() {
        let mut build = BuildState::new();
        build
            .insert(
                "3001",
                4,
                StudCoord::new(2, 1, 3),
                Rotation::R0,
                BrickDims::new(2, 4, 3),
            )
            .unwrap();
        let part = &build.parts()[0];
        let fine = part.position().to_fine();
        assert!((fine.x - 40.0).abs() < f64::EPSILON);
        assert!((fine.y - 24.0).abs() < f64::EPSILON);
        assert!((fine.z - 20.0).abs() < f64::EPSILON);
        let matrix: types::Matrix3<f64> = part.rotation().matrix();
        assert_eq!(matrix, types::Matrix3::identity());
    }
}
