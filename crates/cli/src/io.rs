//! JSON point lists on disk: `[[x, y], ...]`.

use anyhow::{bail, Context, Result};
use geofence::api::{pair_from_point, polygon_from_pairs, Point};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a vertex or position list, rejecting non-finite coordinates.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    for (i, p) in pairs.iter().enumerate() {
        ensure_finite(*p).with_context(|| format!("{} entry {i}", path.display()))?;
    }
    Ok(polygon_from_pairs(&pairs))
}

pub fn ensure_finite(p: [f64; 2]) -> Result<()> {
    if !(p[0].is_finite() && p[1].is_finite()) {
        bail!("non-finite coordinate ({}, {})", p[0], p[1]);
    }
    Ok(())
}

pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(pair_from_point).collect()
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
