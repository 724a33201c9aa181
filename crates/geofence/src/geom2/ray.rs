//! Even-odd ray casting.
//!
//! A horizontal ray is cast from the query towards `+x`; the query is inside
//! iff it crosses the boundary an odd number of times.
//!
//! Tie-break
//! - When the query height equals an edge endpoint's height, the working `y`
//!   is raised by `FenceCfg::nudge`. The raised value persists for the rest of
//!   the edges in the same call, so repeated hits compound. The caller's point
//!   is never modified.
//! - Net effect on an axis-aligned box: the left and bottom sides count as
//!   inside, the right and top sides as outside.

use super::types::{FenceCfg, Point};
use super::util::edge;

/// Even-odd containment of `point` in `polygon`.
///
/// Polygons with fewer than three vertices contain nothing.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    point_in_polygon_with_cfg(point, polygon, FenceCfg::default())
}

/// As [`point_in_polygon`], with explicit tolerances.
pub fn point_in_polygon_with_cfg(point: Point, polygon: &[Point], cfg: FenceCfg) -> bool {
    let px = point.x;
    let mut py = point.y;
    let mut crossings = 0usize;
    for i in 0..polygon.len() {
        let (p, q) = edge(polygon, i);
        let (a, b) = if p.y > q.y { (q, p) } else { (p, q) };

        if py == a.y || py == b.y {
            py += cfg.nudge;
        }
        if py < a.y || py > b.y || px > a.x.max(b.x) {
            continue;
        }
        if px < a.x.min(b.x) {
            crossings += 1;
            continue;
        }
        if ray_crosses_edge(px, py, a, b) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Crossing decision for a query inside the edge's bounding box.
///
/// `a` is the lower endpoint. The query is left of the edge iff the edge's
/// slope is at most the slope from `a` to the query. A query straight above
/// `a` has no finite slope and never counts, whether the edge is vertical or
/// not.
#[inline]
fn ray_crosses_edge(px: f64, py: f64, a: Point, b: Point) -> bool {
    if a.x == b.x || px == a.x {
        return false;
    }
    let edge_slope = (b.y - a.y) / (b.x - a.x);
    let query_slope = (py - a.y) / (px - a.x);
    edge_slope <= query_slope
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ]
    }

    #[test]
    fn square_interior_and_exterior() {
        let sq = square();
        assert!(point_in_polygon(vector![2.0, 2.0], &sq));
        assert!(!point_in_polygon(vector![5.0, 5.0], &sq));
        assert!(!point_in_polygon(vector![-1.0, 2.0], &sq));
        assert!(!point_in_polygon(vector![2.0, -0.5], &sq));
    }

    #[test]
    fn square_boundary_follows_nudge_rule() {
        let sq = square();
        // left side: the vertical-edge branch skips it, the right side counts
        assert!(point_in_polygon(vector![0.0, 2.0], &sq));
        // right side: no edge lies to the right
        assert!(!point_in_polygon(vector![4.0, 2.0], &sq));
        // bottom side: nudged up into the interior
        assert!(point_in_polygon(vector![2.0, 0.0], &sq));
        // top side: nudged up out of the square
        assert!(!point_in_polygon(vector![2.0, 4.0], &sq));
    }

    #[test]
    fn orientation_does_not_matter() {
        let mut cw = square();
        cw.reverse();
        for q in [vector![2.0, 2.0], vector![1.0, 3.5], vector![5.0, 1.0]] {
            assert_eq!(point_in_polygon(q, &cw), point_in_polygon(q, &square()));
        }
    }

    #[test]
    fn sloped_edges_use_slope_comparison() {
        let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 4.0]];
        assert!(point_in_polygon(vector![2.0, 1.0], &tri));
        assert!(point_in_polygon(vector![1.0, 1.5], &tri));
        assert!(!point_in_polygon(vector![0.5, 3.0], &tri));
        assert!(!point_in_polygon(vector![3.5, 3.0], &tri));
    }

    #[test]
    fn query_above_lower_endpoint_never_crosses() {
        let a = vector![1.0, 0.0];
        assert!(!ray_crosses_edge(1.0, 1.0, a, vector![3.0, 2.0]));
        assert!(!ray_crosses_edge(1.0, 1.0, a, vector![-1.0, 2.0]));
        assert!(!ray_crosses_edge(1.0, 1.0, a, vector![1.0, 2.0]));
        // one step right of `a` the slope comparison applies again
        assert!(ray_crosses_edge(1.5, 1.0, a, vector![3.0, 2.0]));
    }

    #[test]
    fn apex_column_of_an_inverted_triangle_is_outside() {
        // both sloped edges start at the apex straight below the query
        let tri = [vector![0.0, 0.0], vector![4.0, 4.0], vector![-4.0, 4.0]];
        assert!(!point_in_polygon(vector![0.0, 2.0], &tri));
        assert!(point_in_polygon(vector![0.5, 2.0], &tri));
        assert!(point_in_polygon(vector![-0.5, 2.0], &tri));
    }

    #[test]
    fn nudge_compounds_across_successive_edges() {
        // The bottom edge lifts y from 0 to 1e-5, which is exactly the height
        // of the next edge's upper end; that lifts it again to 2e-5 and the
        // sloped edge drops out. Only the right side is crossed.
        let area = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![8.0, 1e-5],
            vector![8.0, 4.0],
            vector![0.0, 4.0],
        ];
        let q = vector![6.0, 0.0];
        assert!(point_in_polygon(q, &area));
        assert_eq!(q, vector![6.0, 0.0]);
        // without any tie-break lift the query stays below the sloped edge
        let flat = FenceCfg {
            nudge: 0.0,
            ..FenceCfg::default()
        };
        assert!(!point_in_polygon_with_cfg(q, &area, flat));
    }

    #[test]
    fn degenerate_polygons_contain_nothing() {
        let q = vector![1.0, 1.0];
        assert!(!point_in_polygon(q, &[]));
        assert!(!point_in_polygon(q, &[vector![1.0, 1.0]]));
        assert!(!point_in_polygon(q, &[vector![0.0, 0.0], vector![2.0, 2.0]]));
        assert!(!point_in_polygon(vector![-3.0, 1.0], &[vector![0.0, 0.0], vector![2.0, 2.0]]));
    }

    #[test]
    fn caller_point_is_not_nudged() {
        let sq = square();
        let q = vector![2.0, 0.0];
        let _ = point_in_polygon(q, &sq);
        assert_eq!(q, vector![2.0, 0.0]);
        assert_eq!(point_in_polygon(q, &sq), point_in_polygon(q, &sq));
    }
}
