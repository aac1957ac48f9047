//! Polygon assembler: cut the boundary along the diagonals.

use tracing::debug;

use super::types::{Diagonal, MonotonePolygon};
use crate::geom2::Polygon;

/// Split `poly` along `diagonals` into monotone pieces.
///
/// Chords are taken shortest span first. Non-crossing diagonals are either
/// nested or disjoint in index range, so when a chord `(lo, hi)` is reached
/// every shorter chord inside it has already claimed its own interior, and the
/// unclaimed vertices in `lo..=hi` are exactly this piece. Whatever is never
/// claimed is the last piece.
///
/// Duplicate chords and chords joining neighbouring vertices are dropped.
pub fn assemble_monotone(poly: &Polygon, diagonals: &[Diagonal]) -> Vec<MonotonePolygon> {
    let n = poly.len();
    let mut chords: Vec<(usize, usize)> = diagonals
        .iter()
        .map(Diagonal::canonical)
        .filter(|&(lo, hi)| hi - lo > 1 && !(lo == 0 && hi == n - 1))
        .collect();
    chords.sort_by_key(|&(lo, hi)| (hi - lo, lo));
    chords.dedup();

    let mut used = vec![false; n];
    let mut pieces = Vec::with_capacity(chords.len() + 1);
    for &(lo, hi) in &chords {
        let mut idx = Vec::with_capacity(hi - lo + 1);
        idx.push(lo);
        for u in lo + 1..hi {
            if !used[u] {
                idx.push(u);
                used[u] = true;
            }
        }
        idx.push(hi);
        pieces.push(MonotonePolygon::from_indices(poly, idx));
    }
    let rest: Vec<usize> = (0..n).filter(|&u| !used[u]).collect();
    pieces.push(MonotonePolygon::from_indices(poly, rest));
    debug!(pieces = pieces.len(), chords = chords.len(), "assembled monotone pieces");
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comb() -> Polygon {
        // Rectangle with a notch pushed up from the bottom to (1.5, 2).
        Polygon::from_xy(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.5, 2.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (3.0, 4.0),
            (0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn no_diagonals_gives_whole_polygon() {
        let poly = comb();
        let pieces = assemble_monotone(&poly, &[]);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].indices, (0..7).collect::<Vec<_>>());
        assert_eq!(pieces[0].points, poly.points().to_vec());
    }

    #[test]
    fn nested_chords_share_only_endpoints() {
        let poly = comb();
        let diags = [
            Diagonal::new(6, 2),
            Diagonal::new(2, 5),
            Diagonal::new(5, 2),
            Diagonal::new(0, 6),
        ];
        let pieces = assemble_monotone(&poly, &diags);
        let idx: Vec<Vec<usize>> = pieces.iter().map(|p| p.indices.clone()).collect();
        assert_eq!(idx, vec![vec![2, 3, 4, 5], vec![2, 5, 6], vec![0, 1, 2, 6]]);
    }
}
