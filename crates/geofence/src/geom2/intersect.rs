//! Self-intersection scan over a polygon's edges.
//!
//! Every edge `i → i+1` is paired with every edge starting at `k ∈ [i+1, n)`
//! (for the wrap edge, `k` starts at 0). The scan includes the adjacent pair
//! sharing a vertex; shared-endpoint touches fall outside the open parameter
//! window and are not reported. Parallel pairs (`cross == 0`) are skipped, so
//! collinear overlaps are not detected.

use super::types::{Crossing, FenceCfg, Point};
use super::util::{cross, edge};

/// True when two edges of `polygon` cross in their interiors.
///
/// Always false for polygons with at most two vertices.
pub fn polygon_self_intersects(polygon: &[Point]) -> bool {
    polygon_self_intersects_with_cfg(polygon, FenceCfg::default())
}

/// As [`polygon_self_intersects`], with explicit tolerances.
pub fn polygon_self_intersects_with_cfg(polygon: &[Point], cfg: FenceCfg) -> bool {
    find_self_intersection_with_cfg(polygon, cfg).is_some()
}

/// First crossing pair in scan order, if any.
pub fn find_self_intersection(polygon: &[Point]) -> Option<Crossing> {
    find_self_intersection_with_cfg(polygon, FenceCfg::default())
}

/// As [`find_self_intersection`], with explicit tolerances.
pub fn find_self_intersection_with_cfg(polygon: &[Point], cfg: FenceCfg) -> Option<Crossing> {
    let n = polygon.len();
    if n <= 2 {
        return None;
    }
    for i in 0..n {
        let (a, b) = edge(polygon, i);
        let ab = b - a;
        let j = (i + 1) % n;
        for k in j..n {
            let (c, d) = edge(polygon, k);
            let cd = d - c;
            let den = cross(ab, cd);
            if den == 0.0 {
                continue;
            }
            // a + t·ab = c + u·cd, solved by Cramer's rule.
            let ac = c - a;
            let t = cross(ac, cd) / den;
            let u = cross(ac, ab) / den;
            if cfg.in_window(t) && cfg.in_window(u) {
                return Some(Crossing {
                    first: i,
                    second: k,
                    t,
                    u,
                });
            }
        }
    }
    None
}
