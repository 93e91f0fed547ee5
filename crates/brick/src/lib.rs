//! Complete toolkit for modeling and validating stud-grid brick builds.
//!
//! This umbrella crate re-exports all brick-* crates, providing a unified API
//! for build modeling, physical validation, and placement. All crates are
//! Layer 0 (zero engine dependencies) and can be used in CLI tools, WASM,
//! servers, or Python bindings.
//!
//! # Quick Start
//!
//! ```
//! use brick::prelude::*;
//!
//! // Model a build on the stud grid
//! let mut build = BuildState::new();
//! let brick_2x4 = BrickDims::new(2, 4, 3);
//! build.insert("3001", 4, StudCoord::new(0, 0, 0), Rotation::R0, brick_2x4).unwrap();
//! build.insert("3001", 4, StudCoord::new(0, 0, 3), Rotation::R90, brick_2x4).unwrap();
//!
//! // Validate physics: collisions, connections, stability
//! let report = validate_build(&mut build);
//! assert!(report.is_valid);
//!
//! // Place a part with collision-checked suggestions
//! let outcome = try_place(&mut build, "3003", 1, StudCoord::new(10, 10, 0),
//!     Rotation::R0, BrickDims::new(2, 2, 3)).unwrap();
//! assert!(matches!(outcome, PlacementOutcome::Accepted(_)));
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Grid primitives: `StudCoord`, `BrickDims`, `Rotation`, `GridBox`
//! - [`build`] - Build modeling: `BuildState`, `PlacedPart`, spatial index, BOQ
//! - [`validate`] - Collision, connection, and stability validation
//! - [`place`] - Collision-checked placement with alternative suggestions
//! - [`patterns`] - Parametric templates: base, wall, column, wing
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for the grid and build types

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Grid primitives: `StudCoord`, `BrickDims`, `Rotation`, `GridBox`.
pub use brick_types as types;

/// Build modeling: `BuildState`, `PlacedPart`, spatial index, BOQ.
pub use brick_build as build;

/// Collision, connection, and stability validation.
pub use brick_validate as validate;

/// Collision-checked placement with alternative suggestions.
pub use brick_place as place;

/// Parametric templates: base, wall, column, wing.
pub use brick_patterns as patterns;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for brick modeling.
///
/// This module re-exports the most commonly used types and functions.
///
/// # Usage
///
/// ```
/// use brick::prelude::*;
/// ```
pub mod prelude {
    // Grid primitives
    pub use brick_types::{BrickDims, GridBox, Rotation, StudCoord};

    // Build modeling
    pub use brick_build::{BillOfQuantities, BuildState, PartId, PlacedPart};

    // Validation
    pub use brick_validate::{validate_build, BuildIssue, StabilityWarning, ValidationReport};

    // Placement (main interactive use case)
    pub use brick_place::{try_place, PlacementOutcome, Suggestion};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        // Verify prelude types are accessible
        use prelude::*;

        let build = BuildState::new();
        assert!(build.is_empty());
        assert_eq!(build.overall_dimensions(), (0, 0, 0));
    }

    #[test]
    fn test_module_reexports() {
        // Verify all modules are accessible
        let _ = types::StudCoord::origin();
        let _ = build::BuildState::new();
        let _ = validate::ValidationReport::new();
        let _ = patterns::catalog::by_number("3001");
    }
}
