//! Errors surfaced by polygon validation and the decomposition pipeline.

use std::fmt;

use crate::decomp::VertexCategory;

/// Pipeline stage that hit a status-structure miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Lookup of the edge ending at the current vertex.
    PreviousEdge,
    /// Search for the active edge directly left of the current vertex.
    FindLeft,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PreviousEdge => write!(f, "previous-edge lookup"),
            Stage::FindLeft => write!(f, "find-left query"),
        }
    }
}

/// Error type shared by `Polygon::new` and the `decomp` operations.
#[derive(Clone, Debug, PartialEq)]
pub enum DecompError {
    /// Input rejected before any sweep work.
    InvalidPolygon { reason: String },
    /// Two vertices share both coordinates and cannot be ordered by the sweep.
    DegenerateEvent { first: usize, second: usize },
    /// The sweep expected an active edge that is not there (non-simple input).
    StatusStructureMiss {
        index: usize,
        category: VertexCategory,
        stage: Stage,
    },
    /// The monotone stack scan ran out of vertices (piece is not y-monotone).
    TriangulatorContract { index: usize, reason: String },
}

impl DecompError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn contract(index: usize, reason: impl Into<String>) -> Self {
        Self::TriangulatorContract {
            index,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DecompError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { reason } => write!(f, "invalid polygon: {reason}"),
            Self::DegenerateEvent { first, second } => write!(
                f,
                "vertices {first} and {second} coincide; sweep order is undefined"
            ),
            Self::StatusStructureMiss {
                index,
                category,
                stage,
            } => write!(
                f,
                "status structure miss at vertex {index} ({category:?}) during {stage}; \
                 input is probably not simple"
            ),
            Self::TriangulatorContract { index, reason } => {
                write!(f, "monotone scan failed at vertex {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for DecompError {}
