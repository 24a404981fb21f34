//! Error types for palette assembly.

use std::fmt;

/// Assembly stage named in an [`AssembleError`] diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Writing the reserved black/white anchor slots.
    Anchors,
    /// Writing lightness-bucket centroids.
    Lightness,
    /// Writing hue-bucket centroids.
    Hue,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Anchors => write!(f, "anchor reservation"),
            Stage::Lightness => write!(f, "lightness centroids"),
            Stage::Hue => write!(f, "hue centroids"),
        }
    }
}

/// Error type for palette assembly.
///
/// An overrun means the slot accounting upstream (anchor reservation plus
/// channel reduction targets) produced more surviving buckets than palette
/// slots. This is an internal invariant violation, not a caller-recoverable
/// condition; it aborts the invocation with a diagnostic naming the stage
/// that ran out of room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// The assembler would write past the palette bounds.
    SlotOverrun {
        /// The stage that attempted the out-of-bounds write.
        stage: Stage,
        /// Total palette capacity in colors.
        capacity: usize,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::SlotOverrun { stage, capacity } => {
                write!(
                    f,
                    "palette slot accounting overrun during {} (capacity {} colors)",
                    stage, capacity
                )
            }
        }
    }
}

impl std::error::Error for AssembleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrun_display_names_stage() {
        let error = AssembleError::SlotOverrun {
            stage: Stage::Hue,
            capacity: 8,
        };
        assert_eq!(
            error.to_string(),
            "palette slot accounting overrun during hue centroids (capacity 8 colors)"
        );
    }
}
