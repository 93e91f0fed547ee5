//! Structured validation findings and the aggregate report.

use brick_build::PartId;

use crate::stability::Footprint;

/// A build-level error found during validation.
///
/// Every variant is recoverable by editing the build; none of them abort
/// anything. They are collected into a [`ValidationReport`] rather than
/// raised individually.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildIssue {
    /// Two parts' bounding boxes strictly overlap.
    ///
    /// Recoverable by moving or removing either part. `first < second`.
    #[error("collision between part {first} and part {second}")]
    Collision {
        /// Lower part id of the pair.
        first: PartId,
        /// Higher part id of the pair.
        second: PartId,
    },

    /// Elevated parts with no connector aligned to any part beneath them.
    ///
    /// All floating parts of one pass aggregate into a single issue so a
    /// refinement caller sees the complete set at once. Recoverable by
    /// repositioning the parts or adding support beneath them.
    #[error("{} part(s) not connected to the structure: {}", parts.len(), format_ids(parts))]
    Disconnected {
        /// Every part that lacks support, in id order.
        parts: Vec<PartId>,
    },
}

fn format_ids(ids: &[PartId]) -> String {
    let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}

/// An advisory stability finding. Never fails a build.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StabilityWarning {
    /// The build is tall relative to its smaller base extent.
    TallAndNarrow {
        /// Total height in brick units (plates / 3).
        height_bricks: f64,
        /// Smaller horizontal extent of the build in studs.
        base_studs: u32,
    },

    /// The volume-weighted center of mass is outside the ground footprint.
    CenterOfMassOutsideBase {
        /// Center of mass x in studs.
        center_x: f64,
        /// Center of mass z in studs.
        center_z: f64,
        /// Horizontal footprint of the ground layer.
        footprint: Footprint,
    },
}

impl std::fmt::Display for StabilityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TallAndNarrow {
                height_bricks,
                base_studs,
            } => write!(
                f,
                "build is very tall ({height_bricks:.1} bricks) for its base ({base_studs} studs)"
            ),
            Self::CenterOfMassOutsideBase {
                center_x,
                center_z,
                footprint,
            } => write!(
                f,
                "center of mass ({center_x:.1}, {center_z:.1}) is outside the base {footprint}"
            ),
        }
    }
}

/// Aggregate result of one validation pass.
///
/// A transient value: recomputed on every pass, never stored inside the
/// build. `is_valid` is true exactly when `errors` is empty; warnings and
/// suggestions never block.
///
/// # Example
///
/// ```
/// use brick_validate::ValidationReport;
///
/// let report = ValidationReport::new();
/// assert!(report.is_valid);
/// assert_eq!(report.issue_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// True when no errors were found.
    pub is_valid: bool,
    /// Blocking findings, in detection order.
    pub errors: Vec<BuildIssue>,
    /// Advisory findings.
    pub warnings: Vec<StabilityWarning>,
    /// Human-readable correction hints.
    pub suggestions: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// Creates an empty, valid report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Records an error and marks the report invalid.
    pub fn add_error(&mut self, issue: BuildIssue) {
        self.errors.push(issue);
        self.is_valid = false;
    }

    /// Records an advisory warning.
    pub fn add_warning(&mut self, warning: StabilityWarning) {
        self.warnings.push(warning);
    }

    /// Records a correction hint.
    pub fn add_suggestion(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    /// Total number of errors and warnings.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// One-line summary of the pass.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_valid && self.warnings.is_empty() {
            return "build is valid".to_string();
        }
        if self.is_valid {
            return format!("build is valid with {} warning(s)", self.warnings.len());
        }
        format!(
            "validation failed: {} error(s), {} warning(s)",
            self.errors.len(),
            self.warnings.len()
        )
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for error in &self.errors {
            writeln!(f, "  error: {error}")?;
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {warning}")?;
        }
        for suggestion in &self.suggestions {
            writeln!(f, "  hint: {suggestion}")?;
        }
        Ok(())
    }
}
