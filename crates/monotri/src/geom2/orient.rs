//! Orientation kernel and sweep order.
//!
//! - `orientation(a, b, c)`: shoelace determinant, positive for a left turn.
//! - `above(p, q)`: the sweep relation (higher y first, smaller x on ties).
//! - `sweep_cmp`: total order on indexed vertices built from `above`.
//!
//! Every y comparison in the crate goes through `above`, so classifier,
//! partitioner and triangulator agree on how horizontal ties are broken.

use std::cmp::Ordering;

use super::Point;

/// Signed double area of the triangle `(a, b, c)`.
///
/// `> 0`: `c` lies left of the directed line `a → b` (counterclockwise turn).
/// `< 0`: right (clockwise). `== 0`: collinear; callers decide.
#[inline]
pub fn orientation(a: &Point, b: &Point, c: &Point) -> f64 {
    a.x * b.y + b.x * c.y + c.x * a.y - b.y * c.x - c.y * a.x - a.y * b.x
}

/// `true` if `p` comes strictly before `q` in the sweep (top to bottom).
///
/// Equal y: the smaller x counts as higher. Coincident points are neither.
#[inline]
pub fn above(p: &Point, q: &Point) -> bool {
    p.y > q.y || (p.y == q.y && p.x < q.x)
}

/// Sweep order on `(point, index)`: descending y, ascending x, ascending index.
///
/// `Ordering::Less` means `a` is processed first.
/// Uses the same float equality as `above` (`-0.0 == 0.0`); coordinates are
/// finite once inside a `Polygon`.
pub fn sweep_cmp(a: (&Point, usize), b: (&Point, usize)) -> Ordering {
    let cmp = |u: f64, v: f64| u.partial_cmp(&v).unwrap_or(Ordering::Equal);
    cmp(b.0.y, a.0.y)
        .then_with(|| cmp(a.0.x, b.0.x))
        .then_with(|| a.1.cmp(&b.1))
}

/// Shoelace signed area; positive for counterclockwise boundaries.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..n {
        let p = points[k];
        let q = points[(k + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// x-coordinate where segment `a–b` meets the horizontal line at `y`.
///
/// Horizontal segments report their right end; the sweep only queries them
/// at their own height.
#[inline]
pub fn x_at_y(a: &Point, b: &Point, y: f64) -> f64 {
    if a.y == b.y {
        return a.x.max(b.x);
    }
    let t = (y - a.y) / (b.y - a.y);
    a.x + t * (b.x - a.x)
}
