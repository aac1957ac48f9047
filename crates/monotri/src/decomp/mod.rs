//! Triangulation by monotone decomposition.
//!
//! Pipeline
//! 1. `classify`: label vertices Start/End/Split/Merge/Regular, list edges.
//! 2. `partition`: top-to-bottom sweep, emits diagonals at split and merge
//!    vertices.
//! 3. `assemble_monotone`: cut the boundary along the diagonals.
//! 4. `triangulate_monotone`: stack scan per piece.
//!
//! `triangulate` runs all four; `decompose` also returns the intermediates for
//! step-by-step display (`crate::shell::frames`).
//!
//! Conventions
//! - Input is a validated counterclockwise `Polygon`; indices refer to its order.
//! - Sweep ties: descending y, then ascending x, then index (`geom2::sweep_cmp`).
//! - Output triangles are counterclockwise.

mod assemble;
mod classify;
mod partition;
mod triangulate;
mod types;

pub use assemble::assemble_monotone;
pub use classify::classify;
pub use partition::{partition, sweep_events};
pub use triangulate::{is_y_monotone, triangulate_monotone};
pub use types::{
    BoundaryEdge, Classification, Decomposition, Diagonal, MonotonePolygon, SweepEvent, Triangle,
    VertexCategory,
};

use tracing::debug;

use crate::error::DecompError;
use crate::geom2::Polygon;

/// Triangulate a simple polygon: `n − 2` counterclockwise triangles.
pub fn triangulate(poly: &Polygon) -> Result<Vec<Triangle>, DecompError> {
    let cls = classify(poly);
    let diagonals = partition(poly, &cls)?;
    let pieces = assemble_monotone(poly, &diagonals);
    triangulate_pieces(&pieces)
}

/// Run the pipeline and keep every intermediate product.
pub fn decompose(poly: &Polygon) -> Result<Decomposition, DecompError> {
    let classification = classify(poly);
    let log = partition::sweep(poly, &classification)?;
    let pieces = assemble_monotone(poly, &log.diagonals);
    let triangles = triangulate_pieces(&pieces)?;
    Ok(Decomposition {
        classification,
        diagonals: log.diagonals,
        events: log.events,
        diagonals_after: log.diagonals_after,
        pieces,
        triangles,
    })
}

fn triangulate_pieces(pieces: &[MonotonePolygon]) -> Result<Vec<Triangle>, DecompError> {
    let mut triangles = Vec::new();
    for piece in pieces {
        triangles.extend(triangulate_monotone(piece)?);
    }
    debug!(
        pieces = pieces.len(),
        triangles = triangles.len(),
        "triangulation done"
    );
    Ok(triangles)
}
