//! Vertex classifier: one pass over the boundary.

use super::types::{BoundaryEdge, Classification, VertexCategory};
use crate::geom2::{above, orientation, Polygon};

/// Label each vertex Start, End, Split, Merge or Regular and list the edges.
///
/// `d = orientation(prev, cur, next)`; with counterclockwise input `d >= 0`
/// means the interior angle is at most π. Above/below use the sweep tie rule,
/// so a vertex level with one neighbour is still ordered against it.
pub fn classify(poly: &Polygon) -> Classification {
    let n = poly.len();
    let pts = poly.points();
    let mut categories = Vec::with_capacity(n);
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let prev = &pts[poly.prev(i)];
        let cur = &pts[i];
        let next = &pts[poly.next(i)];
        let d = orientation(prev, cur, next);
        let over_both = above(cur, prev) && above(cur, next);
        let under_both = above(prev, cur) && above(next, cur);
        let cat = match (d >= 0.0, over_both, under_both) {
            (true, true, _) => VertexCategory::Start,
            (true, _, true) => VertexCategory::End,
            (false, true, _) => VertexCategory::Split,
            (false, _, true) => VertexCategory::Merge,
            _ => VertexCategory::Regular,
        };
        categories.push(cat);
        edges.push(BoundaryEdge {
            from: i,
            to: poly.next(i),
        });
    }
    Classification { categories, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VertexCategory::*;

    #[test]
    fn square_has_one_start_one_end() {
        let sq = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
        let c = classify(&sq);
        assert_eq!(c.categories, vec![Regular, End, Regular, Start]);
        assert_eq!(c.edges.len(), 4);
        assert_eq!(c.edges[3], BoundaryEdge { from: 3, to: 0 });
    }

    #[test]
    fn bottom_notch_is_split() {
        // Notch pushed up from the bottom edge: (2, 2) is reflex, both neighbours lower.
        let p = Polygon::from_xy(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
            .unwrap();
        let c = classify(&p);
        assert_eq!(c.categories[1], Split);
        assert_eq!(c.subset(End), vec![0, 2]);
        assert_eq!(c.subset(Start), vec![4]);
    }

    #[test]
    fn top_notch_is_merge() {
        let p = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)])
            .unwrap();
        let c = classify(&p);
        assert_eq!(c.categories[3], Merge);
        assert_eq!(c.count(Start), 2);
    }

    #[test]
    fn side_notch_is_regular() {
        let arrow = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (2.0, 2.0), (4.0, 4.0), (0.0, 4.0)])
            .unwrap();
        let c = classify(&arrow);
        assert_eq!(c.categories[2], Regular);
        assert_eq!(c.count(Split) + c.count(Merge), 0);
    }
}
