//! Scene sequences for step-by-step display of a decomposition.
//!
//! Frame order: classification, one partition frame per sweep event, one frame
//! per emitted triangle, final scene.

use std::collections::HashSet;

use super::scene::{LinesCollection, PointsCollection, Scene, Style};
use crate::decomp::{Decomposition, Diagonal, Triangle, VertexCategory};
use crate::geom2::{Point, Polygon};

pub const BOUNDARY_COLOR: &str = "grey";
pub const DIAGONAL_COLOR: &str = "red";
pub const SWEEP_COLOR: &str = "orange";
pub const TRIANGLE_COLOR: &str = "blue";

/// Fixed display colour per vertex category.
pub fn category_color(cat: VertexCategory) -> &'static str {
    match cat {
        VertexCategory::Start => "green",
        VertexCategory::End => "red",
        VertexCategory::Merge => "purple",
        VertexCategory::Split => "blue",
        VertexCategory::Regular => "grey",
    }
}

fn boundary(poly: &Polygon) -> LinesCollection {
    let lines = (0..poly.len())
        .map(|i| [poly.point(i), poly.point(poly.next(i))])
        .collect();
    LinesCollection::new(lines, Style::color(BOUNDARY_COLOR))
}

fn vertices(poly: &Polygon) -> PointsCollection {
    PointsCollection::new(poly.points().to_vec(), Style::default())
}

fn diagonal_lines(poly: &Polygon, diagonals: &[Diagonal]) -> LinesCollection {
    let lines = diagonals
        .iter()
        .map(|d| [poly.point(d.a), poly.point(d.b)])
        .collect();
    LinesCollection::new(lines, Style::color(DIAGONAL_COLOR))
}

fn x_range(poly: &Polygon) -> (f64, f64) {
    poly.points()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        })
}

/// Vertices grouped by category, plus the boundary.
pub fn classification_scene(poly: &Polygon, d: &Decomposition) -> Scene {
    let points = VertexCategory::ALL
        .iter()
        .map(|&cat| {
            let pts = d
                .classification
                .subset(cat)
                .into_iter()
                .map(|i| poly.point(i))
                .collect();
            PointsCollection::new(pts, Style::color(category_color(cat)))
        })
        .collect();
    Scene {
        points,
        lines: vec![boundary(poly)],
    }
}

/// One frame per sweep event: sweep line at the event, diagonals known so far.
pub fn partition_frames(poly: &Polygon, d: &Decomposition) -> Vec<Scene> {
    let (x0, x1) = x_range(poly);
    d.events
        .iter()
        .zip(&d.diagonals_after)
        .map(|(ev, &known)| {
            let y = ev.point.y;
            let sweep = LinesCollection::new(
                vec![[Point::new(x0, y), Point::new(x1, y)]],
                Style::color(SWEEP_COLOR),
            );
            let current = PointsCollection::new(
                vec![ev.point],
                Style {
                    color: Some(category_color(ev.category).to_string()),
                    marker_size: Some(8.0),
                    ..Style::default()
                },
            );
            Scene {
                points: vec![vertices(poly), current],
                lines: vec![
                    boundary(poly),
                    diagonal_lines(poly, &d.diagonals[..known]),
                    sweep,
                ],
            }
        })
        .collect()
}

/// Triangle edges in blue and the boundary edges none of them covers in grey.
fn triangle_scene(poly: &Polygon, triangles: &[Triangle]) -> Scene {
    let mut covered: HashSet<Diagonal> = HashSet::new();
    let mut tri_lines = Vec::new();
    for t in triangles {
        let [a, b, c] = t.0;
        for (u, v) in [(a, b), (b, c), (c, a)] {
            if covered.insert(Diagonal::new(u, v)) {
                tri_lines.push([poly.point(u), poly.point(v)]);
            }
        }
    }
    let rest = (0..poly.len())
        .filter(|&i| !covered.contains(&Diagonal::new(i, poly.next(i))))
        .map(|i| [poly.point(i), poly.point(poly.next(i))])
        .collect();
    Scene {
        points: vec![vertices(poly)],
        lines: vec![
            LinesCollection::new(rest, Style::color(BOUNDARY_COLOR)),
            LinesCollection::new(tri_lines, Style::color(TRIANGLE_COLOR)),
        ],
    }
}

/// Frame `k` shows the first `k + 1` triangles.
pub fn triangulation_frames(poly: &Polygon, triangles: &[Triangle]) -> Vec<Scene> {
    (1..=triangles.len())
        .map(|k| triangle_scene(poly, &triangles[..k]))
        .collect()
}

pub fn final_scene(poly: &Polygon, triangles: &[Triangle]) -> Scene {
    triangle_scene(poly, triangles)
}

/// The full display sequence for one decomposition.
pub fn all_frames(poly: &Polygon, d: &Decomposition) -> Vec<Scene> {
    let mut frames = vec![classification_scene(poly, d)];
    frames.extend(partition_frames(poly, d));
    frames.extend(triangulation_frames(poly, &d.triangles));
    frames.push(final_scene(poly, &d.triangles));
    frames
}
