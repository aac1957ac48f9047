//! Scene model for step-by-step display, with JSON load/save.
//!
//! Wire format (a list of scenes):
//! `[{"points": [[[x, y], ...], ...], "lines": [[[[x, y], [x, y]], ...], ...]}]`.
//! Styles stay in memory only; the wire format carries geometry.

use serde::{Deserialize, Serialize};

use crate::geom2::Point;

/// Drawing style for one collection. Unset fields use the renderer's default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub color: Option<String>,
    pub marker_size: Option<f64>,
    pub line_width: Option<f64>,
    pub alpha: Option<f64>,
}

impl Style {
    pub fn color(name: &str) -> Self {
        Self {
            color: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Points drawn with one style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointsCollection {
    pub points: Vec<Point>,
    pub style: Style,
}

impl PointsCollection {
    pub fn new(points: Vec<Point>, style: Style) -> Self {
        Self { points, style }
    }

    pub fn add_points(&mut self, pts: impl IntoIterator<Item = Point>) {
        self.points.extend(pts);
    }
}

/// Segments drawn with one style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinesCollection {
    pub lines: Vec<[Point; 2]>,
    pub style: Style,
}

impl LinesCollection {
    pub fn new(lines: Vec<[Point; 2]>, style: Style) -> Self {
        Self { lines, style }
    }

    pub fn add(&mut self, line: [Point; 2]) {
        self.lines.push(line);
    }
}

/// Everything shown at once in one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub points: Vec<PointsCollection>,
    pub lines: Vec<LinesCollection>,
}

#[derive(Serialize, Deserialize)]
struct SceneWire {
    points: Vec<Vec<[f64; 2]>>,
    lines: Vec<Vec<[[f64; 2]; 2]>>,
}

#[inline]
fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

#[inline]
fn pt(a: [f64; 2]) -> Point {
    Point::new(a[0], a[1])
}

impl From<&Scene> for SceneWire {
    fn from(s: &Scene) -> Self {
        Self {
            points: s
                .points
                .iter()
                .map(|c| c.points.iter().map(xy).collect())
                .collect(),
            lines: s
                .lines
                .iter()
                .map(|c| c.lines.iter().map(|[a, b]| [xy(a), xy(b)]).collect())
                .collect(),
        }
    }
}

impl From<SceneWire> for Scene {
    fn from(w: SceneWire) -> Self {
        Self {
            points: w
                .points
                .into_iter()
                .map(|c| PointsCollection::new(c.into_iter().map(pt).collect(), Style::default()))
                .collect(),
            lines: w
                .lines
                .into_iter()
                .map(|c| {
                    LinesCollection::new(
                        c.into_iter().map(|[a, b]| [pt(a), pt(b)]).collect(),
                        Style::default(),
                    )
                })
                .collect(),
        }
    }
}

/// Serialize scenes to the JSON wire format.
pub fn scenes_to_json(scenes: &[Scene]) -> serde_json::Result<String> {
    let wire: Vec<SceneWire> = scenes.iter().map(SceneWire::from).collect();
    serde_json::to_string(&wire)
}

/// Parse scenes from the JSON wire format (styles come back as defaults).
pub fn scenes_from_json(s: &str) -> serde_json::Result<Vec<Scene>> {
    let wire: Vec<SceneWire> = serde_json::from_str(s)?;
    Ok(wire.into_iter().map(Scene::from).collect())
}
