//! Polygon triangulation by monotone decomposition.
//!
//! Layout
//! - `geom2`: orientation kernel, sweep order, validated `Polygon`, random
//!   star polygons.
//! - `decomp`: classify, partition, assemble and triangulate.
//! - `shell`: scene frames, JSON scene I/O, input state machine, results file.
//! - `error`: the one error type every stage returns.
//!
//! The crate has no stable public API; `prelude` lists what callers usually need.

pub mod decomp;
pub mod error;
pub mod geom2;
pub mod shell;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use decomp::{decompose, triangulate, Triangle};
pub use error::DecompError;
pub use geom2::{Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::decomp::{
        assemble_monotone, classify, decompose, is_y_monotone, partition, triangulate,
        triangulate_monotone, Classification, Decomposition, Diagonal, MonotonePolygon, Triangle,
        VertexCategory,
    };
    pub use crate::error::DecompError;
    pub use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{orientation, Point, Polygon};
    pub use crate::shell::{Scene, Style};
}
