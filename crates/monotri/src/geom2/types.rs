//! Simple polygon in the plane, validated and stored counterclockwise.
//!
//! Invariants:
//! - At least 3 vertices, all coordinates finite.
//! - No two vertices coincide (consecutive or not).
//! - Positive signed area: vertices run counterclockwise.
//!
//! Simplicity (no self-intersection) is a caller precondition and is not
//! checked here; the sweep reports a `StatusStructureMiss` when it notices.

use super::orient::{signed_area, sweep_cmp};
use super::Point;
use crate::error::DecompError;

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pts: Vec<Point>,
    reversed: bool,
}

impl Polygon {
    /// Validate `points` and canonicalize to counterclockwise order.
    pub fn new(points: Vec<Point>) -> Result<Self, DecompError> {
        let n = points.len();
        if n < 3 {
            return Err(DecompError::invalid(format!(
                "need at least 3 vertices, got {n}"
            )));
        }
        if let Some(k) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(DecompError::invalid(format!(
                "vertex {k} has a non-finite coordinate"
            )));
        }
        // `-0.0 + 0.0 == +0.0`: one zero, so ordering and equality agree.
        let points: Vec<Point> = points
            .into_iter()
            .map(|p| Point::new(p.x + 0.0, p.y + 0.0))
            .collect();
        for k in 0..n {
            if points[k] == points[(k + 1) % n] {
                return Err(DecompError::invalid(format!(
                    "vertices {k} and {} are repeated",
                    (k + 1) % n
                )));
            }
        }
        // Non-consecutive duplicates end up adjacent in sweep order.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| sweep_cmp((&points[a], a), (&points[b], b)));
        for w in order.windows(2) {
            if points[w[0]] == points[w[1]] {
                return Err(DecompError::DegenerateEvent {
                    first: w[0],
                    second: w[1],
                });
            }
        }
        let area = signed_area(&points);
        if area == 0.0 {
            return Err(DecompError::invalid("all vertices are collinear"));
        }
        let mut pts = points;
        let reversed = area < 0.0;
        if reversed {
            pts.reverse();
        }
        Ok(Self { pts, reversed })
    }

    /// Convenience constructor from coordinate pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self, DecompError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Vertices in counterclockwise order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    #[inline]
    pub fn point(&self, i: usize) -> Point {
        self.pts[i]
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        if i == 0 {
            self.pts.len() - 1
        } else {
            i - 1
        }
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.pts.len()
    }

    /// Whether the input was clockwise and got reversed.
    #[inline]
    pub fn was_reversed(&self) -> bool {
        self.reversed
    }

    /// Index of vertex `i` in the sequence originally passed to `new`.
    #[inline]
    pub fn source_index(&self, i: usize) -> usize {
        if self.reversed {
            self.pts.len() - 1 - i
        } else {
            i
        }
    }

    /// Enclosed area (always positive).
    pub fn area(&self) -> f64 {
        signed_area(&self.pts)
    }
}
