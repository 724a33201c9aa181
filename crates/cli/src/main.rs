use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use geofence::api::{
    classify_position, draw_polygon_radial, find_self_intersection_with_cfg, monotone_chain,
    point_from_pair, point_in_polygon_with_cfg, repair_area, scramble, FenceCfg, PolyReplay,
    RadialCfg, VertexCount,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-in-area checks against vertex-list areas")]
struct Cmd {
    /// Emit debug-level logs (repair decisions)
    #[arg(long)]
    verbose: bool,

    #[command(flatten)]
    tol: Tolerances,

    #[command(subcommand)]
    action: Action,
}

/// Tolerance overrides; defaults match `FenceCfg::default()`.
#[derive(Args, Clone, Copy)]
struct Tolerances {
    /// Ray-cast tie-break added to y on endpoint-height hits
    #[arg(long, default_value_t = FenceCfg::default().nudge)]
    nudge: f64,
    /// Lower bound of the open crossing-parameter window
    #[arg(long, default_value_t = FenceCfg::default().t_lo)]
    t_lo: f64,
    /// Upper bound of the open crossing-parameter window
    #[arg(long, default_value_t = FenceCfg::default().t_hi)]
    t_hi: f64,
}

impl From<Tolerances> for FenceCfg {
    fn from(t: Tolerances) -> Self {
        FenceCfg {
            t_lo: t.t_lo,
            t_hi: t.t_hi,
            nudge: t.nudge,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Is (x, y) inside the area?
    Check {
        #[arg(long)]
        area: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Print the convex hull of the area
    Hull {
        #[arg(long)]
        area: PathBuf,
    },
    /// Report the first pair of crossing edges, if any
    Intersects {
        #[arg(long)]
        area: PathBuf,
    },
    /// Classify every position in a file and write the verdicts plus provenance
    Batch {
        #[arg(long)]
        area: PathBuf,
        #[arg(long)]
        positions: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a sampled star-shaped area
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Permute the vertices (usually self-intersecting)
        #[arg(long)]
        scramble: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize, Debug, PartialEq)]
struct PositionVerdict {
    x: f64,
    y: f64,
    inside: bool,
    repaired: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = FenceCfg::from(cmd.tol);
    match cmd.action {
        Action::Check { area, x, y } => check(&area, x, y, cfg),
        Action::Hull { area } => hull(&area),
        Action::Intersects { area } => intersects(&area, cfg),
        Action::Batch {
            area,
            positions,
            out,
        } => batch(&area, &positions, &out, cfg).map(|_| ()),
        Action::Sample {
            seed,
            index,
            vertices,
            scramble,
        } => sample(seed, index, vertices, scramble),
        Action::Report => report(cfg),
    }
}

fn check(area: &Path, x: f64, y: f64, cfg: FenceCfg) -> Result<()> {
    io::ensure_finite([x, y])?;
    let poly = io::read_points(area)?;
    let v = classify_position(point_from_pair([x, y]), &poly, cfg);
    tracing::info!(area = %area.display(), x, y, inside = v.inside, repaired = v.repaired, "check");
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({"inside": v.inside, "repaired": v.repaired}))?
    );
    Ok(())
}

fn hull(area: &Path) -> Result<()> {
    let poly = io::read_points(area)?;
    let hull = monotone_chain(&poly);
    tracing::info!(area = %area.display(), vertices = poly.len(), hull_vertices = hull.len(), "hull");
    println!("{}", serde_json::to_string_pretty(&io::to_pairs(&hull))?);
    Ok(())
}

fn intersects(area: &Path, cfg: FenceCfg) -> Result<()> {
    let poly = io::read_points(area)?;
    let hit = find_self_intersection_with_cfg(&poly, cfg);
    tracing::info!(area = %area.display(), self_intersects = hit.is_some(), "intersects");
    let crossing = hit.map(|c| {
        let at = c.point(&poly).map(|p| [p.x, p.y]);
        json!({"first": c.first, "second": c.second, "t": c.t, "u": c.u, "at": at})
    });
    println!(
        "{}",
        serde_json::to_string_pretty(
            &json!({"self_intersects": crossing.is_some(), "crossing": crossing})
        )?
    );
    Ok(())
}

fn batch(area: &Path, positions: &Path, out: &Path, cfg: FenceCfg) -> Result<Vec<PositionVerdict>> {
    let poly = io::read_points(area)?;
    let queries = io::read_points(positions)?;
    let (region, repaired) = repair_area(&poly, cfg);
    tracing::info!(
        area = %area.display(),
        positions = queries.len(),
        repaired,
        region_vertices = region.len(),
        "batch"
    );
    let verdicts: Vec<PositionVerdict> = queries
        .iter()
        .map(|q| PositionVerdict {
            x: q.x,
            y: q.y,
            inside: point_in_polygon_with_cfg(*q, &region, cfg),
            repaired,
        })
        .collect();
    io::write_json(out, &verdicts)?;

    let inside = verdicts.iter().filter(|v| v.inside).count();
    let record = provenance::BatchProvenance {
        code_rev: provenance::code_rev(),
        geofence_version: geofence::VERSION,
        callsite: provenance::Callsite::here(),
        tolerances: cfg.into(),
        area: provenance::PointFile::describe(area, &poly),
        positions: provenance::PointFile::describe(positions, &queries),
        repaired,
        region_vertices: region.len(),
        inside,
        verdicts: out.display().to_string(),
    };
    let prov = provenance::write_sidecar(out, &record)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), inside, "batch written");
    Ok(verdicts)
}

fn sample(seed: u64, index: u64, vertices: usize, mix: bool) -> Result<()> {
    let tok = PolyReplay { seed, index };
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let mut poly = draw_polygon_radial(cfg, tok);
    if mix {
        poly = scramble(&poly, tok);
    }
    tracing::info!(seed, index, vertices = poly.len(), scrambled = mix, "sample");
    println!("{}", serde_json::to_string_pretty(&io::to_pairs(&poly))?);
    Ok(())
}

fn report(cfg: FenceCfg) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "geofence_version": geofence::VERSION,
        "tolerances": provenance::ToleranceRecord::from(cfg),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn default_tolerances_match_library() {
        let cmd = Cmd::try_parse_from(["cli", "report"]).unwrap();
        assert_eq!(FenceCfg::from(cmd.tol), FenceCfg::default());
        let cmd = Cmd::try_parse_from([
            "cli", "--nudge", "0.001", "check", "--area", "a.json", "--x", "-1", "--y", "2",
        ])
        .unwrap();
        assert_eq!(FenceCfg::from(cmd.tol).nudge, 0.001);
        assert!(matches!(cmd.action, Action::Check { x, .. } if x == -1.0));
    }

    #[test]
    fn batch_writes_verdicts_and_sidecar() {
        let dir = tempdir().unwrap();
        let area = dir.path().join("bowtie.json");
        let positions = dir.path().join("positions.json");
        let out = dir.path().join("out/verdicts.json");
        fs::write(&area, "[[0, 0], [4, 4], [4, 0], [0, 4]]").unwrap();
        fs::write(&positions, "[[2, 3], [5, 2], [1, 2]]").unwrap();

        let cfg = FenceCfg::default();
        let verdicts = batch(&area, &positions, &out, cfg).unwrap();
        let inside: Vec<bool> = verdicts.iter().map(|v| v.inside).collect();
        assert_eq!(inside, vec![true, false, true]);
        assert!(verdicts.iter().all(|v| v.repaired));

        // the shared region answers exactly like per-position classification
        let poly = io::read_points(&area).unwrap();
        for v in &verdicts {
            let single = classify_position(point_from_pair([v.x, v.y]), &poly, cfg);
            assert_eq!((v.inside, v.repaired), (single.inside, single.repaired));
        }

        let written: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written[0]["inside"], true);
        let prov = dir.path().join("out/verdicts.provenance.json");
        let sidecar: serde_json::Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(sidecar["inside"], 2);
        assert_eq!(sidecar["repaired"], true);
        assert_eq!(sidecar["region_vertices"], 4);
        assert_eq!(sidecar["area"]["points"], 4);
        assert_eq!(sidecar["positions"]["points"], 3);
        assert_eq!(sidecar["positions"]["bbox"], json!([[1.0, 2.0], [5.0, 3.0]]));
    }

    #[test]
    fn check_rejects_non_finite_query() {
        let dir = tempdir().unwrap();
        let area = dir.path().join("square.json");
        fs::write(&area, "[[0, 0], [4, 0], [4, 4], [0, 4]]").unwrap();
        assert!(check(&area, f64::NAN, 1.0, FenceCfg::default()).is_err());
        assert!(check(&area, 1.0, 1.0, FenceCfg::default()).is_ok());
    }
}
