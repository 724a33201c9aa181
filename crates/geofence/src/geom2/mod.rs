//! 2D containment geometry on vertex lists.
//!
//! Purpose
//! - Decide whether a position lies inside an area given as a vertex list,
//!   repairing self-intersecting areas into their convex hull first.
//! - Keep every routine a free function over `&[Point]`; there is no state.
//!
//! Pipeline
//! - `intersect::find_self_intersection` scans edge pairs for an interior crossing.
//! - `hull::monotone_chain` builds the CCW convex hull (Andrew's algorithm).
//! - `ray::point_in_polygon` runs the even-odd horizontal ray cast.
//! - `check::check_position` composes the three; `check::repair_area` exposes
//!   the region a batch of positions can share.
//!
//! Tolerances live in `FenceCfg`; the defaults are the historical constants
//! and changing them moves boundary classifications.

mod check;
mod hull;
mod intersect;
pub mod rand;
mod ray;
mod types;
mod util;

pub use check::{check_position, classify_position, repair_area};
pub use hull::monotone_chain;
pub use intersect::{
    find_self_intersection, find_self_intersection_with_cfg, polygon_self_intersects,
    polygon_self_intersects_with_cfg,
};
pub use ray::{point_in_polygon, point_in_polygon_with_cfg};
pub use types::{Crossing, FenceCfg, Point, Verdict};
pub use util::cross;
