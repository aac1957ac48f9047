use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use monotri::decomp::{decompose, Decomposition};
use monotri::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use monotri::shell::{all_frames, input::replay, results::results_string, scenes_to_json};
use monotri::Polygon;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{Payload, RunCounts};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangulate simple polygons by monotone decomposition")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate one polygon file and write the triangle listing
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also write the step-by-step scene sequence as JSON
        #[arg(long)]
        scenes: Option<PathBuf>,
    },
    /// Sample a random star-shaped polygon and write it as JSON
    Random {
        #[arg(long, default_value_t = 16)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Replay recorded input events and triangulate every closed polygon
    Replay {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out, scenes } => run(&input, &out, scenes.as_deref(), cmd.tag),
        Action::Random {
            vertices,
            seed,
            out,
        } => random(vertices, seed, &out, cmd.tag),
        Action::Replay { events, out } => replay_events(&events, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Decompose one polygon and log its counts.
fn decompose_logged(poly: &Polygon) -> Result<(Decomposition, RunCounts)> {
    let d = decompose(poly).context("triangulating polygon")?;
    let counts = RunCounts {
        vertices: poly.len(),
        diagonals: d.diagonals.len(),
        pieces: d.pieces.len(),
        triangles: d.triangles.len(),
    };
    tracing::info!(
        vertices = counts.vertices,
        diagonals = counts.diagonals,
        pieces = counts.pieces,
        triangles = counts.triangles,
        "triangulated"
    );
    Ok((d, counts))
}

fn run(input: &Path, out: &Path, scenes: Option<&Path>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "run");
    let pts = io::read_polygon(input)?;
    let poly =
        Polygon::new(pts).with_context(|| format!("invalid polygon in {}", input.display()))?;
    let (d, counts) = decompose_logged(&poly)?;

    ensure_parent(out)?;
    fs::write(out, results_string(&poly, &d.triangles))
        .with_context(|| format!("writing {}", out.display()))?;

    if let Some(scenes) = scenes {
        let frames = all_frames(&poly, &d);
        ensure_parent(scenes)?;
        fs::write(scenes, scenes_to_json(&frames)?)
            .with_context(|| format!("writing {}", scenes.display()))?;
        tracing::info!(frames = frames.len(), path = %scenes.display(), "scenes_written");
    }

    let params = json!({
        "input": input.to_string_lossy(),
        "scenes": scenes.map(|p| p.to_string_lossy().into_owned()),
        "reversed": poly.was_reversed(),
    });
    provenance::write_sidecar(out, Payload::new(params, tag).with_counts(vec![counts]))?;
    Ok(())
}

fn random(vertices: usize, seed: u64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(vertices, seed, out = %out.display(), "random");
    if vertices < 3 {
        bail!("need at least 3 vertices, got {vertices}");
    }
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..StarCfg::default()
    };
    let poly = (0..64)
        .find_map(|index| draw_star_polygon(cfg, ReplayToken { seed, index }))
        .context("sampler kept producing invalid polygons")?;
    ensure_parent(out)?;
    fs::write(out, io::to_json(poly.points())?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = json!({ "vertices": vertices, "seed": seed });
    provenance::write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn replay_events(events: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(events = %events.display(), out = %out.display(), "replay");
    let log = io::read_events(events)?;
    let (state, drawing) = replay(&log.input_events(), &log.view());
    tracing::info!(
        polygons = drawing.polygons.len(),
        final_state = ?state,
        "events_replayed"
    );

    let mut text = String::new();
    let mut counts = Vec::with_capacity(drawing.polygons.len());
    for (k, verts) in drawing.polygons.into_iter().enumerate() {
        let poly = Polygon::new(verts).with_context(|| format!("closed polygon {k}"))?;
        let (d, c) = decompose_logged(&poly)?;
        text.push_str(&results_string(&poly, &d.triangles));
        counts.push(c);
    }
    ensure_parent(out)?;
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let params = json!({ "events": events.to_string_lossy() });
    provenance::write_sidecar(out, Payload::new(params, tag).with_counts(counts))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": monotri::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn run_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("notch.json");
        fs::write(&input, "[[0,0],[2,2],[4,0],[4,4],[0,4]]").unwrap();
        let out = dir.path().join("res").join("notch.tri");
        let scenes = dir.path().join("notch.scenes.json");
        run(&input, &out, Some(&scenes), Some("t".into())).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.split('\t').count() == 3));
        assert!(dir.path().join("res").join("notch.provenance.json").exists());
        let frames =
            monotri::shell::scenes_from_json(&fs::read_to_string(scenes).unwrap()).unwrap();
        assert_eq!(frames.len(), 1 + 5 + 3 + 1);
    }

    #[test]
    fn run_rejects_collinear_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("line.txt");
        fs::write(&input, "0 0\n1 1\n2 2\n").unwrap();
        let err = run(&input, &dir.path().join("x.tri"), None, None).unwrap_err();
        assert!(format!("{err:#}").contains("collinear"));
    }

    #[test]
    fn random_then_run_round_trip() {
        let dir = tempdir().unwrap();
        let poly = dir.path().join("star.json");
        random(24, 9, &poly, None).unwrap();
        let out = dir.path().join("star.tri");
        run(&poly, &out, None, None).unwrap();
        assert_eq!(fs::read_to_string(out).unwrap().lines().count(), 22);
    }

    #[test]
    fn replay_triangulates_closed_polygons() {
        let dir = tempdir().unwrap();
        let events = dir.path().join("session.json");
        fs::write(
            &events,
            r#"{"xlim": [0, 10], "ylim": [0, 10], "events": [
                {"kind": "toggle_polygon"},
                {"kind": "click", "x": 1, "y": 1},
                {"kind": "click", "x": 8, "y": 1},
                {"kind": "click", "x": 8, "y": 8},
                {"kind": "click", "x": 1, "y": 8},
                {"kind": "click", "x": 1.2, "y": 1.1},
                {"kind": "toggle_polygon"}
            ]}"#,
        )
        .unwrap();
        let out = dir.path().join("session.tri");
        replay_events(&events, &out, None).unwrap();
        assert_eq!(fs::read_to_string(out).unwrap().lines().count(), 2);
    }
}
