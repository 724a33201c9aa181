//! Point-in-area containment for possibly self-intersecting polygons.
//!
//! The entry point is [`check_position`]: it scans the area for crossing
//! edges, replaces a self-intersecting area by its convex hull, and then runs
//! an even-odd ray cast.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (alias [`Point`]).
//! - Polygons are plain slices without a closing duplicate vertex; the wrap
//!   edge `n-1 → 0` is implicit.
//! - Nothing here mutates its inputs.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    check_position, classify_position, cross, find_self_intersection, monotone_chain,
    point_in_polygon, polygon_self_intersects, Crossing, FenceCfg, Point, Verdict,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_polygon_radial, draw_query_points, scramble, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        check_position, classify_position, cross, monotone_chain, point_in_polygon,
        polygon_self_intersects, FenceCfg, Point, Verdict,
    };
    pub use nalgebra::Vector2 as Vec2;
}
