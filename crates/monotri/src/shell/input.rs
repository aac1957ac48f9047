//! Interactive input as an explicit state machine.
//!
//! `handle` consumes one event and returns the next state; everything drawn so
//! far lives in a caller-owned `Drawing`.

use crate::geom2::Point;

/// Close radius as a fraction of the mean view extent.
///
/// The radius is `TOLERANCE * (width + height) / 2`, taken from the extents and
/// not from the mean of the raw limit values, so panning the view leaves it
/// unchanged. A click closes a polygon only once it has 3 vertices; two
/// vertices never close.
pub const TOLERANCE: f64 = 0.15;

/// Visible region; sets the polygon close radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
}

impl Default for View {
    fn default() -> Self {
        Self {
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
        }
    }
}

impl View {
    /// Clicks closer than this to a polygon's first vertex close it.
    pub fn close_radius(&self) -> f64 {
        let w = (self.xlim.1 - self.xlim.0).abs();
        let h = (self.ylim.1 - self.ylim.0).abs();
        TOLERANCE * 0.5 * (w + h)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum InputState {
    #[default]
    Idle,
    AddingPoints,
    AddingLines {
        pending: Option<Point>,
    },
    AddingPolygon {
        vertices: Vec<Point>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    TogglePoints,
    ToggleLines,
    TogglePolygon,
    Click(Point),
}

/// Everything the user has entered. Each toggle into points or lines mode
/// opens a fresh group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    pub points: Vec<Vec<Point>>,
    pub segments: Vec<Vec<[Point; 2]>>,
    pub polygons: Vec<Vec<Point>>,
}

/// Advance the state machine by one event.
///
/// Leaving polygon mode drops an unclosed polygon.
pub fn handle(
    state: InputState,
    event: InputEvent,
    drawing: &mut Drawing,
    view: &View,
) -> InputState {
    use InputEvent::*;
    use InputState::*;
    match (state, event) {
        (AddingPoints, TogglePoints) | (AddingLines { .. }, ToggleLines) => Idle,
        (AddingPolygon { .. }, TogglePolygon) => Idle,
        (_, TogglePoints) => {
            drawing.points.push(Vec::new());
            AddingPoints
        }
        (_, ToggleLines) => {
            drawing.segments.push(Vec::new());
            AddingLines { pending: None }
        }
        (_, TogglePolygon) => AddingPolygon {
            vertices: Vec::new(),
        },
        (Idle, Click(_)) => Idle,
        (AddingPoints, Click(p)) => {
            if let Some(group) = drawing.points.last_mut() {
                group.push(p);
            }
            AddingPoints
        }
        (AddingLines { pending: None }, Click(p)) => AddingLines { pending: Some(p) },
        (AddingLines { pending: Some(a) }, Click(b)) => {
            if let Some(group) = drawing.segments.last_mut() {
                group.push([a, b]);
            }
            AddingLines { pending: None }
        }
        (AddingPolygon { mut vertices }, Click(p)) => {
            let closes = vertices.len() >= 3 && (p - vertices[0]).norm() < view.close_radius();
            if closes {
                drawing.polygons.push(vertices);
                AddingPolygon {
                    vertices: Vec::new(),
                }
            } else {
                vertices.push(p);
                AddingPolygon { vertices }
            }
        }
    }
}

/// Fold a whole event list from `Idle`.
pub fn replay(events: &[InputEvent], view: &View) -> (InputState, Drawing) {
    let mut drawing = Drawing::default();
    let state = events
        .iter()
        .fold(InputState::Idle, |s, &e| handle(s, e, &mut drawing, view));
    (state, drawing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(x: f64, y: f64) -> InputEvent {
        InputEvent::Click(Point::new(x, y))
    }

    #[test]
    fn toggling_twice_returns_to_idle() {
        let v = View::default();
        let mut d = Drawing::default();
        for ev in [
            InputEvent::TogglePoints,
            InputEvent::ToggleLines,
            InputEvent::TogglePolygon,
        ] {
            let s = handle(InputState::Idle, ev, &mut d, &v);
            assert_ne!(s, InputState::Idle);
            assert_eq!(handle(s, ev, &mut d, &v), InputState::Idle);
        }
    }

    #[test]
    fn other_toggle_switches_mode_directly() {
        let v = View::default();
        let mut d = Drawing::default();
        let s = handle(InputState::AddingPoints, InputEvent::ToggleLines, &mut d, &v);
        assert_eq!(s, InputState::AddingLines { pending: None });
    }

    #[test]
    fn clicks_in_idle_are_ignored() {
        let (s, d) = replay(&[click(0.5, 0.5)], &View::default());
        assert_eq!(s, InputState::Idle);
        assert_eq!(d, Drawing::default());
    }

    #[test]
    fn points_go_to_the_newest_group() {
        let evs = [
            InputEvent::TogglePoints,
            click(0.1, 0.1),
            InputEvent::TogglePoints,
            InputEvent::TogglePoints,
            click(0.2, 0.2),
            click(0.3, 0.3),
        ];
        let (_, d) = replay(&evs, &View::default());
        assert_eq!(d.points.len(), 2);
        assert_eq!(d.points[0].len(), 1);
        assert_eq!(d.points[1].len(), 2);
    }

    #[test]
    fn lines_pair_up_clicks() {
        let evs = [
            InputEvent::ToggleLines,
            click(0.0, 0.0),
            click(1.0, 0.0),
            click(0.0, 1.0),
        ];
        let (s, d) = replay(&evs, &View::default());
        assert_eq!(d.segments, vec![vec![[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]]]);
        assert_eq!(
            s,
            InputState::AddingLines {
                pending: Some(Point::new(0.0, 1.0))
            }
        );
    }

    #[test]
    fn click_near_first_vertex_closes_polygon() {
        // Close radius for the unit view is 0.15.
        let evs = [
            InputEvent::TogglePolygon,
            click(0.0, 0.0),
            click(1.0, 0.0),
            click(1.0, 1.0),
            click(0.05, 0.05),
            click(2.0, 2.0),
        ];
        let (s, d) = replay(&evs, &View::default());
        assert_eq!(d.polygons.len(), 1);
        assert_eq!(d.polygons[0].len(), 3);
        assert_eq!(
            s,
            InputState::AddingPolygon {
                vertices: vec![Point::new(2.0, 2.0)]
            }
        );
    }

    #[test]
    fn two_vertices_never_close() {
        let evs = [
            InputEvent::TogglePolygon,
            click(0.0, 0.0),
            click(1.0, 0.0),
            click(0.01, 0.0),
        ];
        let (s, d) = replay(&evs, &View::default());
        assert!(d.polygons.is_empty());
        match s {
            InputState::AddingPolygon { vertices } => assert_eq!(vertices.len(), 3),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn close_radius_ignores_view_offset() {
        let near = View {
            xlim: (0.0, 2.0),
            ylim: (0.0, 2.0),
        };
        let far = View {
            xlim: (100.0, 102.0),
            ylim: (-50.0, -48.0),
        };
        assert_eq!(near.close_radius(), far.close_radius());
    }

    #[test]
    fn close_radius_scales_with_view() {
        let v = View {
            xlim: (0.0, 10.0),
            ylim: (0.0, 30.0),
        };
        assert!((v.close_radius() - 3.0).abs() < 1e-12);
    }
}
