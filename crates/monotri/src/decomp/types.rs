//! Data types flowing between the decomposition stages.
//!
//! All indices refer to the counterclockwise vertex order of the `Polygon`
//! they were computed from; `Polygon::source_index` maps them back to input
//! order.

use crate::geom2::{orientation, Point, Polygon};

/// Local shape of a vertex with respect to a top-to-bottom sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexCategory {
    Start,
    End,
    Split,
    Merge,
    Regular,
}

impl VertexCategory {
    pub const ALL: [VertexCategory; 5] = [
        VertexCategory::Start,
        VertexCategory::End,
        VertexCategory::Split,
        VertexCategory::Merge,
        VertexCategory::Regular,
    ];
}

/// Directed boundary edge `from → to` (`to = from + 1 mod n`).
///
/// Edge `i` starts at vertex `i`, so the edge index doubles as the status key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundaryEdge {
    pub from: usize,
    pub to: usize,
}

/// Classifier output: one category per vertex plus the `n` boundary edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub categories: Vec<VertexCategory>,
    pub edges: Vec<BoundaryEdge>,
}

impl Classification {
    /// Vertex indices labelled `cat`, ascending.
    pub fn subset(&self, cat: VertexCategory) -> Vec<usize> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cat)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count(&self, cat: VertexCategory) -> usize {
        self.categories.iter().filter(|c| **c == cat).count()
    }
}

/// A vertex as seen by the sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepEvent {
    pub point: Point,
    pub category: VertexCategory,
    pub index: usize,
}

/// Interior chord between two vertices. Unordered: `(a, b)` equals `(b, a)`.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Diagonal {
    pub a: usize,
    pub b: usize,
}

impl Diagonal {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// `(min, max)` endpoint pair.
    #[inline]
    pub fn canonical(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    /// Number of index steps between the endpoints (`max − min`).
    #[inline]
    pub fn span(&self) -> usize {
        let (lo, hi) = self.canonical();
        hi - lo
    }
}

impl PartialEq for Diagonal {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl std::hash::Hash for Diagonal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// A y-monotone piece: counterclockwise points and their polygon indices.
#[derive(Clone, Debug, PartialEq)]
pub struct MonotonePolygon {
    pub indices: Vec<usize>,
    pub points: Vec<Point>,
}

impl MonotonePolygon {
    /// Piece made of `indices` (counterclockwise) of `poly`.
    pub fn from_indices(poly: &Polygon, indices: Vec<usize>) -> Self {
        let points = indices.iter().map(|&i| poly.point(i)).collect();
        Self { indices, points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Triangle as polygon vertex indices, counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    pub fn points(&self, poly: &Polygon) -> [Point; 3] {
        let [a, b, c] = self.0;
        [poly.point(a), poly.point(b), poly.point(c)]
    }

    /// Signed area of the triangle (positive: counterclockwise).
    pub fn signed_area(&self, poly: &Polygon) -> f64 {
        let [a, b, c] = self.points(poly);
        0.5 * orientation(&a, &b, &c)
    }

    /// Same triangle with indices in the caller's original vertex order.
    ///
    /// Reversed input keeps the vertex cycle but the orientation then matches
    /// the input winding.
    pub fn to_source(&self, poly: &Polygon) -> Triangle {
        Triangle(self.0.map(|i| poly.source_index(i)))
    }
}

/// Every intermediate product of one decomposition pass.
#[derive(Clone, Debug)]
pub struct Decomposition {
    pub classification: Classification,
    /// Diagonals in discovery order (may contain duplicates).
    pub diagonals: Vec<Diagonal>,
    /// Sweep events in processing order; `diagonals_after[k]` diagonals were known
    /// once `events[k]` had been handled.
    pub events: Vec<SweepEvent>,
    pub diagonals_after: Vec<usize>,
    pub pieces: Vec<MonotonePolygon>,
    pub triangles: Vec<Triangle>,
}
