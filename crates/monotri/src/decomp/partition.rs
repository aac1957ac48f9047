//! Monotone partitioner: top-to-bottom sweep with an edge → helper status map.
//!
//! The status structure holds the boundary edges currently crossed by the sweep
//! line that have the polygon interior on their right (east) side. With
//! counterclockwise input those are exactly the downward-directed edges. Each
//! maps to its helper: the lowest vertex seen so far that can see the edge
//! horizontally to its right. A diagonal is emitted whenever a helper that is a
//! Merge vertex gets replaced, and at every Split vertex.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::types::{BoundaryEdge, Classification, Diagonal, SweepEvent, VertexCategory};
use crate::error::{DecompError, Stage};
use crate::geom2::orient::x_at_y;
use crate::geom2::{orientation, sweep_cmp, Point, Polygon};

/// Diagonals splitting `poly` into y-monotone pieces, in discovery order.
///
/// `cls` must come from `classify(poly)`. The result may contain the same
/// chord twice; consumers compare diagonals as unordered pairs.
pub fn partition(poly: &Polygon, cls: &Classification) -> Result<Vec<Diagonal>, DecompError> {
    Ok(sweep(poly, cls)?.diagonals)
}

/// Sweep transcript kept for step-by-step consumers.
pub(crate) struct SweepLog {
    pub diagonals: Vec<Diagonal>,
    pub events: Vec<SweepEvent>,
    pub diagonals_after: Vec<usize>,
}

/// Events sorted into sweep order (descending y, ascending x, index).
pub fn sweep_events(poly: &Polygon, cls: &Classification) -> Vec<SweepEvent> {
    let mut events: Vec<SweepEvent> = cls
        .categories
        .iter()
        .enumerate()
        .map(|(index, &category)| SweepEvent {
            point: poly.point(index),
            category,
            index,
        })
        .collect();
    events.sort_by(|a, b| sweep_cmp((&a.point, a.index), (&b.point, b.index)));
    events
}

pub(crate) fn sweep(poly: &Polygon, cls: &Classification) -> Result<SweepLog, DecompError> {
    let events = sweep_events(poly, cls);
    let mut status = Status::new(poly, &cls.edges);
    let mut diagonals = Vec::new();
    let mut diagonals_after = Vec::with_capacity(events.len());

    for ev in &events {
        trace!(index = ev.index, category = ?ev.category, "sweep event");
        let out_edge = cls.edges[ev.index];
        match ev.category {
            VertexCategory::Start => {
                status.insert(out_edge, *ev);
            }
            VertexCategory::End => {
                let helper = status.remove_previous(ev)?;
                connect_if_merge(&mut diagonals, ev, &helper);
            }
            VertexCategory::Split => {
                let left = status.find_left(ev)?;
                let helper = status.replace_helper(left, *ev);
                push_diagonal(&mut diagonals, ev, &helper);
                status.insert(out_edge, *ev);
            }
            VertexCategory::Merge => {
                let helper = status.remove_previous(ev)?;
                connect_if_merge(&mut diagonals, ev, &helper);
                let left = status.find_left(ev)?;
                let helper = status.replace_helper(left, *ev);
                connect_if_merge(&mut diagonals, ev, &helper);
            }
            VertexCategory::Regular => {
                if status.has_previous(ev) {
                    // Interior lies to the right: we are on a left boundary chain.
                    let helper = status.remove_previous(ev)?;
                    connect_if_merge(&mut diagonals, ev, &helper);
                    status.insert(out_edge, *ev);
                } else {
                    let left = status.find_left(ev)?;
                    let helper = status.replace_helper(left, *ev);
                    connect_if_merge(&mut diagonals, ev, &helper);
                }
            }
        }
        diagonals_after.push(diagonals.len());
    }
    debug!(
        vertices = poly.len(),
        diagonals = diagonals.len(),
        "monotone partition done"
    );
    Ok(SweepLog {
        diagonals,
        events,
        diagonals_after,
    })
}

fn push_diagonal(out: &mut Vec<Diagonal>, cur: &SweepEvent, helper: &SweepEvent) {
    debug!(from = cur.index, to = helper.index, "insert diagonal");
    out.push(Diagonal::new(cur.index, helper.index));
}

fn connect_if_merge(out: &mut Vec<Diagonal>, cur: &SweepEvent, helper: &SweepEvent) {
    if helper.category == VertexCategory::Merge {
        push_diagonal(out, cur, helper);
    }
}

/// Active edges keyed by boundary edge, iterated in edge-index order.
struct Status<'a> {
    pts: &'a [Point],
    edges: &'a [BoundaryEdge],
    prev_of: Vec<usize>,
    active: BTreeMap<BoundaryEdge, SweepEvent>,
}

impl<'a> Status<'a> {
    fn new(poly: &'a Polygon, edges: &'a [BoundaryEdge]) -> Self {
        Self {
            pts: poly.points(),
            edges,
            prev_of: (0..poly.len()).map(|i| poly.prev(i)).collect(),
            active: BTreeMap::new(),
        }
    }

    fn insert(&mut self, edge: BoundaryEdge, helper: SweepEvent) {
        self.active.insert(edge, helper);
    }

    #[inline]
    fn previous_edge(&self, ev: &SweepEvent) -> BoundaryEdge {
        self.edges[self.prev_of[ev.index]]
    }

    fn has_previous(&self, ev: &SweepEvent) -> bool {
        self.active.contains_key(&self.previous_edge(ev))
    }

    /// Remove the edge ending at `ev`, returning its helper.
    fn remove_previous(&mut self, ev: &SweepEvent) -> Result<SweepEvent, DecompError> {
        let edge = self.previous_edge(ev);
        self.active
            .remove(&edge)
            .ok_or(DecompError::StatusStructureMiss {
                index: ev.index,
                category: ev.category,
                stage: Stage::PreviousEdge,
            })
    }

    /// Set the helper of an active edge, returning the old one.
    fn replace_helper(&mut self, edge: BoundaryEdge, helper: SweepEvent) -> SweepEvent {
        // `edge` comes from `find_left`, so it is present.
        self.active.insert(edge, helper).unwrap_or(helper)
    }

    /// Active edge directly left of `ev` at the sweep line through it.
    ///
    /// Linear scan. Candidates satisfy `orientation(from, to, p) > 0`; the one
    /// crossing the sweep line furthest right wins, the lowest edge index on
    /// exact ties.
    fn find_left(&self, ev: &SweepEvent) -> Result<BoundaryEdge, DecompError> {
        let p = &ev.point;
        let mut best: Option<(BoundaryEdge, f64)> = None;
        for edge in self.active.keys() {
            let a = &self.pts[edge.from];
            let b = &self.pts[edge.to];
            if orientation(a, b, p) <= 0.0 {
                continue;
            }
            let x = x_at_y(a, b, p.y);
            if best.map_or(true, |(_, bx)| x > bx) {
                best = Some((*edge, x));
            }
        }
        best.map(|(edge, _)| edge)
            .ok_or(DecompError::StatusStructureMiss {
                index: ev.index,
                category: ev.category,
                stage: Stage::FindLeft,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomp::classify;

    fn diagonals_of(coords: &[(f64, f64)]) -> Vec<(usize, usize)> {
        let poly = Polygon::from_xy(coords).unwrap();
        let cls = classify(&poly);
        partition(&poly, &cls)
            .unwrap()
            .iter()
            .map(Diagonal::canonical)
            .collect()
    }

    #[test]
    fn monotone_inputs_need_no_diagonals() {
        assert!(diagonals_of(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).is_empty());
        assert!(
            diagonals_of(&[(0.0, 0.0), (4.0, 0.0), (2.0, 2.0), (4.0, 4.0), (0.0, 4.0)]).is_empty()
        );
    }

    #[test]
    fn split_vertex_connects_up() {
        // (2, 2) is a split vertex. The left edge's helper is the last vertex
        // swept to its right, the regular corner (4, 4).
        let d = diagonals_of(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_eq!(d, vec![(1, 3)]);
    }

    #[test]
    fn merge_vertex_connects_down() {
        // (2, 2) is a merge vertex; the next vertex swept on the left chain,
        // (0, 0), replaces it as helper and gets connected.
        let d = diagonals_of(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]);
        assert_eq!(d, vec![(0, 3)]);
    }

    #[test]
    fn events_follow_sweep_order() {
        let poly =
            Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
        let cls = classify(&poly);
        let order: Vec<usize> = sweep_events(&poly, &cls).iter().map(|e| e.index).collect();
        assert_eq!(order, vec![3, 2, 0, 1]);
    }

    #[test]
    fn missing_status_edge_is_reported() {
        // Hand-made classification that claims an End vertex with no active edge.
        let poly =
            Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
        let mut cls = classify(&poly);
        cls.categories[3] = VertexCategory::End;
        let err = partition(&poly, &cls).unwrap_err();
        assert!(matches!(
            err,
            DecompError::StatusStructureMiss {
                index: 3,
                stage: Stage::PreviousEdge,
                ..
            }
        ));
    }
}
