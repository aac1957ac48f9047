//! Polygon and input-event files.
//!
//! Polygon formats, picked by extension:
//! - `.json`: `[[x, y], ...]`
//! - `.csv`: columns `x` and `y` (read with polars)
//! - anything else: whitespace or comma separated numbers, pairs in order

use anyhow::{bail, Context, Result};
use monotri::shell::{InputEvent, View};
use monotri::Point;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub fn read_polygon(path: &Path) -> Result<Vec<Point>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let pts = match ext {
        "json" => parse_json(
            &fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        )?,
        "csv" => read_csv(path)?,
        _ => parse_text(
            &fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        )?,
    };
    tracing::info!(path = %path.display(), vertices = pts.len(), "polygon_loaded");
    Ok(pts)
}

pub fn parse_json(s: &str) -> Result<Vec<Point>> {
    let raw: Vec<[f64; 2]> = serde_json::from_str(s).context("expected a list of [x, y] pairs")?;
    Ok(raw.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

pub fn to_json(pts: &[Point]) -> Result<String> {
    let raw: Vec<[f64; 2]> = pts.iter().map(|p| [p.x, p.y]).collect();
    Ok(serde_json::to_string_pretty(&raw)?)
}

pub fn parse_text(s: &str) -> Result<Vec<Point>> {
    let nums = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("not a number: {t:?}"))
        })
        .collect::<Result<Vec<f64>>>()?;
    if nums.len() % 2 != 0 {
        bail!("odd number of coordinates ({})", nums.len());
    }
    Ok(nums
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([col("x").cast(DataType::Float64), col("y").cast(DataType::Float64)])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row}: missing coordinate"),
        })
        .collect()
}

/// On-disk form of one input event.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventRecord {
    TogglePoints,
    ToggleLines,
    TogglePolygon,
    Click { x: f64, y: f64 },
}

impl From<EventRecord> for InputEvent {
    fn from(r: EventRecord) -> Self {
        match r {
            EventRecord::TogglePoints => InputEvent::TogglePoints,
            EventRecord::ToggleLines => InputEvent::ToggleLines,
            EventRecord::TogglePolygon => InputEvent::TogglePolygon,
            EventRecord::Click { x, y } => InputEvent::Click(Point::new(x, y)),
        }
    }
}

/// Recorded session: view limits plus the event list.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventLog {
    #[serde(default = "unit_limits")]
    pub xlim: (f64, f64),
    #[serde(default = "unit_limits")]
    pub ylim: (f64, f64),
    pub events: Vec<EventRecord>,
}

fn unit_limits() -> (f64, f64) {
    (0.0, 1.0)
}

impl EventLog {
    pub fn view(&self) -> View {
        View {
            xlim: self.xlim,
            ylim: self.ylim,
        }
    }

    pub fn input_events(&self) -> Vec<InputEvent> {
        self.events.iter().copied().map(InputEvent::from).collect()
    }
}

pub fn read_events(path: &Path) -> Result<EventLog> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parsing events in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn text_accepts_commas_and_newlines() {
        let pts = parse_text("0 0\n4, 0\n4 4\n 0 4\n").unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[2], Point::new(4.0, 4.0));
    }

    #[test]
    fn text_rejects_odd_count() {
        assert!(parse_text("0 0 1").is_err());
        assert!(parse_text("0 zero").is_err());
    }

    #[test]
    fn json_polygon_round_trips() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.5, 0.0), Point::new(0.0, 2.0)];
        assert_eq!(parse_json(&to_json(&pts).unwrap()).unwrap(), pts);
    }

    #[test]
    fn csv_reads_xy_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n2,3\n").unwrap();
        let pts = read_polygon(&path).unwrap();
        assert_eq!(
            pts,
            vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)]
        );
    }

    #[test]
    fn event_log_defaults_to_unit_view() {
        let log: EventLog = serde_json::from_str(
            r#"{"events": [{"kind": "toggle_polygon"}, {"kind": "click", "x": 0.5, "y": 0.25}]}"#,
        )
        .unwrap();
        assert_eq!(log.view(), View::default());
        assert_eq!(
            log.input_events(),
            vec![
                InputEvent::TogglePolygon,
                InputEvent::Click(Point::new(0.5, 0.25))
            ]
        );
    }
}
