//! `<stem>.provenance.json` sidecars for batch verdict files.

use anyhow::Result;
use geofence::api::{FenceCfg, Point};
use serde::Serialize;
use std::ffi::OsStr;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io;

/// Everything needed to reproduce one `batch` run.
#[derive(Serialize, Debug)]
pub struct BatchProvenance {
    pub code_rev: String,
    pub geofence_version: &'static str,
    pub callsite: Callsite,
    pub tolerances: ToleranceRecord,
    pub area: PointFile,
    pub positions: PointFile,
    /// The area self-intersected and positions were tested against its hull.
    pub repaired: bool,
    pub region_vertices: usize,
    pub inside: usize,
    pub verdicts: String,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Callsite {
    #[track_caller]
    pub fn here() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ToleranceRecord {
    pub t_lo: f64,
    pub t_hi: f64,
    pub nudge: f64,
}

impl From<FenceCfg> for ToleranceRecord {
    fn from(cfg: FenceCfg) -> Self {
        Self {
            t_lo: cfg.t_lo,
            t_hi: cfg.t_hi,
            nudge: cfg.nudge,
        }
    }
}

/// An input point list: its path, size and axis-aligned extent.
#[derive(Serialize, Debug)]
pub struct PointFile {
    pub path: String,
    pub points: usize,
    /// `[[min_x, min_y], [max_x, max_y]]`; `null` for an empty list.
    pub bbox: Option<[[f64; 2]; 2]>,
}

impl PointFile {
    pub fn describe(path: &Path, points: &[Point]) -> Self {
        let bbox = points.iter().fold(None, |acc: Option<[[f64; 2]; 2]>, p| {
            Some(match acc {
                None => [[p.x, p.y], [p.x, p.y]],
                Some([lo, hi]) => [
                    [lo[0].min(p.x), lo[1].min(p.y)],
                    [hi[0].max(p.x), hi[1].max(p.y)],
                ],
            })
        });
        Self {
            path: path.display().to_string(),
            points: points.len(),
            bbox,
        }
    }
}

/// Write the sidecar next to `verdicts` and return its path.
pub fn write_sidecar(verdicts: &Path, record: &BatchProvenance) -> Result<PathBuf> {
    let path = sidecar_path(verdicts);
    io::write_json(&path, record)?;
    Ok(path)
}

fn sidecar_path(verdicts: &Path) -> PathBuf {
    let mut name = verdicts
        .file_stem()
        .unwrap_or_else(|| OsStr::new("verdicts"))
        .to_os_string();
    name.push(".provenance.json");
    verdicts.with_file_name(name)
}

/// Commit the binary describes: `GIT_COMMIT` at build time, then at run time,
/// then `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn non_empty(rev: String) -> Option<String> {
    (!rev.is_empty()).then_some(rev)
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
        .and_then(non_empty)
}
