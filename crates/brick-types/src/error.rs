//! Error types for geometry operations.

/// Errors that can occur when constructing geometry values.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeomError {
    /// The rotation angle is not one of the canonical quarter turns.
    #[error("rotation must be 0, 90, 180, or 270 degrees, got {0}")]
    InvalidRotation(i32),

    /// A dimension component is zero.
    #[error("part dimensions must be strictly positive, got {width}x{length}x{height}")]
    DegenerateDims {
        /// Width in studs.
        width: u32,
        /// Length in studs.
        length: u32,
        /// Height in plates.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeomError::InvalidRotation(45);
        assert!(format!("{err}").contains("45"));

        let err = GeomError::DegenerateDims {
            width: 0,
            length: 4,
            height: 3,
        };
        assert!(format!("{err}").contains("0x4x3"));
    }
}
