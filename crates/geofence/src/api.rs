//! Curated surface for the command-line front end and experiments.
//!
//! Important
//! - This is not a stable API. It groups the pieces a caller needs to go from
//!   raw coordinate pairs to a containment verdict.

// 2D containment
pub use crate::geom2::{
    check_position, classify_position, find_self_intersection, find_self_intersection_with_cfg,
    monotone_chain, point_in_polygon, point_in_polygon_with_cfg, repair_area, Crossing, FenceCfg,
    Point, Verdict,
};
// 2D random polygons
pub use crate::geom2::rand::{
    draw_polygon_radial, draw_query_points, scramble, RadialCfg, ReplayToken as PolyReplay,
    VertexCount,
};

/// Build a point from an `[x, y]` pair.
#[inline]
pub fn point_from_pair(p: [f64; 2]) -> Point {
    Point::new(p[0], p[1])
}

/// Convert a point back into an `[x, y]` pair.
#[inline]
pub fn pair_from_point(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

/// Convert a list of `[x, y]` pairs into a polygon.
pub fn polygon_from_pairs(pairs: &[[f64; 2]]) -> Vec<Point> {
    pairs.iter().copied().map(point_from_pair).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_feed_the_containment_check() {
        let area = polygon_from_pairs(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
        assert_eq!(area.len(), 4);
        assert_eq!(area[1], Point::new(4.0, 0.0));
        assert!(check_position(point_from_pair([2.0, 2.0]), &area));
        assert_eq!(pair_from_point(&area[2]), [4.0, 4.0]);
    }
}
