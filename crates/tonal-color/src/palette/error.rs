//! Error types for palette selection

use thiserror::Error;

/// Returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette algorithm {0:?} (expected hsv-ladder, oklch-ladder or oklch-gradient)")]
pub struct UnknownAlgorithm(pub String);
