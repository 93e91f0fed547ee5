//! Full validation pass over a build.

use brick_build::BuildState;
use tracing::{info, warn};

use crate::collision::check_collisions;
use crate::connection::check_connections;
use crate::report::{BuildIssue, ValidationReport};
use crate::stability::check_stability;

/// Runs every checker over the build and aggregates one report.
///
/// The pass order is collision, connection, stability. Support edges found
/// by the connection check are recorded back into the build, replacing
/// whatever a previous pass left behind; that write-back is the only reason
/// this takes `&mut`.
///
/// Each disconnected part also yields a correction hint in
/// [`ValidationReport::suggestions`].
///
/// # Example
///
/// ```
/// use brick_build::BuildState;
/// use brick_types::{BrickDims, Rotation, StudCoord};
/// use brick_validate::validate_build;
///
/// let mut build = BuildState::new();
/// let brick = BrickDims::new(2, 4, 3);
/// build.insert("3001", 4, StudCoord::origin(), Rotation::R0, brick).unwrap();
/// // Floating two bricks up with nothing underneath.
/// build.insert("3001", 4, StudCoord::new(0, 0, 6), Rotation::R0, brick).unwrap();
///
/// let report = validate_build(&mut build);
/// assert!(!report.is_valid);
/// assert_eq!(report.suggestions.len(), 1);
/// ```
pub fn validate_build(build: &mut BuildState) -> ValidationReport {
    info!(parts = build.len(), "Starting validation pass");

    let mut report = ValidationReport::new();

    for (first, second) in check_collisions(build) {
        report.add_error(BuildIssue::Collision { first, second });
    }

    let connections = check_connections(build);
    if !connections.disconnected.is_empty() {
        for id in &connections.disconnected {
            report.add_suggestion(format!(
                "add support below part {id} or move it to a connected position"
            ));
        }
        report.add_error(BuildIssue::Disconnected {
            parts: connections.disconnected.clone(),
        });
    }
    build.record_supports(&connections.supports);

    for warning in check_stability(build) {
        report.add_warning(warning);
    }

    if report.is_valid {
        info!(
            warnings = report.warnings.len(),
            "Validation pass complete, build is valid"
        );
    } else {
        warn!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validation pass found errors"
        );
    }
    report
}
