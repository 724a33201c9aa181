use std::borrow::Cow;

use super::hull::monotone_chain;
use super::intersect::find_self_intersection_with_cfg;
use super::ray::point_in_polygon_with_cfg;
use super::types::{FenceCfg, Point, Verdict};

/// Is `position` inside `area`?
///
/// A self-intersecting area is replaced by its convex hull before the ray
/// cast. The caller's area is never modified.
pub fn check_position(position: Point, area: &[Point]) -> bool {
    classify_position(position, area, FenceCfg::default()).inside
}

/// As [`check_position`], with explicit tolerances, also reporting whether
/// the area had to be repaired.
pub fn classify_position(position: Point, area: &[Point], cfg: FenceCfg) -> Verdict {
    let (region, repaired) = repair_area(area, cfg);
    Verdict {
        inside: point_in_polygon_with_cfg(position, &region, cfg),
        repaired,
    }
}

/// The polygon containment is decided against: `area` itself when it is
/// simple, its convex hull when the scan finds a crossing. The flag is `true`
/// for the hull.
///
/// Callers classifying many positions against one area resolve it once here
/// and ray-cast each position against the result.
pub fn repair_area(area: &[Point], cfg: FenceCfg) -> (Cow<'_, [Point]>, bool) {
    match find_self_intersection_with_cfg(area, cfg) {
        Some(hit) => {
            let hull = monotone_chain(area);
            tracing::debug!(
                first = hit.first,
                second = hit.second,
                vertices = area.len(),
                hull_vertices = hull.len(),
                "area self-intersects; testing against its convex hull"
            );
            (Cow::Owned(hull), true)
        }
        None => (Cow::Borrowed(area), false),
    }
}
