//! Monotone triangulator: linear stack scan over the merged chains.

use super::types::{MonotonePolygon, Triangle};
use crate::error::DecompError;
use crate::geom2::{above, orientation, sweep_cmp, Point};

/// Vertex of a monotone piece tagged with its boundary chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ChainVertex {
    /// Position inside the piece.
    slot: usize,
    /// `true` on the left chain (top down to, excluding, the bottom vertex).
    left: bool,
}

/// Triangulate one y-monotone piece; `n − 2` counterclockwise triangles.
///
/// Triangles reference the piece's polygon indices.
pub fn triangulate_monotone(piece: &MonotonePolygon) -> Result<Vec<Triangle>, DecompError> {
    let n = piece.len();
    if n < 3 {
        return Err(DecompError::contract(
            piece.indices.first().copied().unwrap_or(0),
            format!("piece has {n} vertices"),
        ));
    }
    let pts = &piece.points;
    if !is_y_monotone(pts) {
        return Err(DecompError::contract(piece.indices[0], "piece is not y-monotone"));
    }
    let order = merge_chains(pts);
    let mut out = Vec::with_capacity(n - 2);
    let mut emit = |a: ChainVertex, b: ChainVertex, c: ChainVertex| {
        out.push(ccw_triangle(piece, a.slot, b.slot, c.slot));
    };

    let mut stack: Vec<ChainVertex> = vec![order[0], order[1]];
    for (k, &a) in order.iter().enumerate().skip(2) {
        let top = stack[stack.len() - 1];
        if a.left != top.left || k == n - 1 {
            // Opposite chain (or the bottom vertex): everything on the stack is
            // visible from `a`; fan across it.
            let first = pop(&mut stack, piece, a)?;
            let mut b = first;
            while let Some(c) = stack.pop() {
                emit(a, b, c);
                b = c;
            }
            stack.push(first);
            stack.push(a);
        } else {
            let mut b = pop(&mut stack, piece, a)?;
            while let Some(&c) = stack.last() {
                if !is_ear(pts, a, b, c) {
                    break;
                }
                emit(a, b, c);
                b = c;
                stack.pop();
            }
            stack.push(b);
            stack.push(a);
        }
    }
    if out.len() != n - 2 {
        return Err(DecompError::contract(
            piece.indices[order[n - 1].slot],
            format!(
                "emitted {} triangles for {n} vertices",
                out.len()
            ),
        ));
    }
    Ok(out)
}

/// Pop with the non-empty precondition turned into an error.
fn pop(
    stack: &mut Vec<ChainVertex>,
    piece: &MonotonePolygon,
    at: ChainVertex,
) -> Result<ChainVertex, DecompError> {
    stack
        .pop()
        .ok_or_else(|| DecompError::contract(piece.indices[at.slot], "stack empty"))
}

/// `(a, b, c)` lies inside the piece.
///
/// `s = 2·chain_bit − 1`: on the left chain the turn a → b → c must be
/// clockwise, on the right chain counterclockwise. Collinear is rejected.
#[inline]
fn is_ear(pts: &[Point], a: ChainVertex, b: ChainVertex, c: ChainVertex) -> bool {
    let s = if a.left { 1.0 } else { -1.0 };
    s * orientation(&pts[a.slot], &pts[b.slot], &pts[c.slot]) < 0.0
}

fn ccw_triangle(piece: &MonotonePolygon, a: usize, b: usize, c: usize) -> Triangle {
    let pts = &piece.points;
    let idx = &piece.indices;
    if orientation(&pts[a], &pts[b], &pts[c]) < 0.0 {
        Triangle([idx[a], idx[c], idx[b]])
    } else {
        Triangle([idx[a], idx[b], idx[c]])
    }
}

/// Top and bottom slot under the sweep order.
fn extremes(pts: &[Point]) -> (usize, usize) {
    let by_sweep = |a: &usize, b: &usize| sweep_cmp((&pts[*a], *a), (&pts[*b], *b));
    let top = (0..pts.len()).min_by(by_sweep).unwrap_or(0);
    let bottom = (0..pts.len()).max_by(by_sweep).unwrap_or(0);
    (top, bottom)
}

/// Whether the counterclockwise boundary `pts` is y-monotone under the sweep
/// order: it descends strictly from the top vertex to the bottom vertex, then
/// climbs strictly back. Fewer than 3 points is not a polygon.
pub fn is_y_monotone(pts: &[Point]) -> bool {
    let n = pts.len();
    if n < 3 {
        return false;
    }
    let (top, bottom) = extremes(pts);
    let mut s = top;
    while s != bottom {
        let t = (s + 1) % n;
        if !above(&pts[s], &pts[t]) {
            return false;
        }
        s = t;
    }
    while s != top {
        let t = (s + 1) % n;
        if !above(&pts[t], &pts[s]) {
            return false;
        }
        s = t;
    }
    true
}

/// Slots in sweep order with chain tags.
///
/// Walking counterclockwise from the top vertex descends the left chain until
/// the bottom vertex; the rest (bottom included) is the right chain, which is
/// read backwards to descend as well. The two descending lists are merged.
fn merge_chains(pts: &[Point]) -> Vec<ChainVertex> {
    let n = pts.len();
    let by_sweep = |a: &usize, b: &usize| sweep_cmp((&pts[*a], *a), (&pts[*b], *b));
    let (top, bottom) = extremes(pts);

    let mut left = Vec::new();
    let mut s = top;
    while s != bottom {
        left.push(s);
        s = (s + 1) % n;
    }
    let mut right = Vec::new();
    let mut s = (top + n - 1) % n;
    loop {
        right.push(s);
        if s == bottom {
            break;
        }
        s = (s + n - 1) % n;
    }

    let mut merged = Vec::with_capacity(n);
    let (mut l, mut r) = (0, 0);
    while l < left.len() || r < right.len() {
        let take_left = r >= right.len()
            || (l < left.len() && by_sweep(&left[l], &right[r]).is_lt());
        if take_left {
            merged.push(ChainVertex {
                slot: left[l],
                left: true,
            });
            l += 1;
        } else {
            merged.push(ChainVertex {
                slot: right[r],
                left: false,
            });
            r += 1;
        }
    }
    merged
}
