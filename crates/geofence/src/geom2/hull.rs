use super::types::Point;
use super::util::{lex_cmp, turn};

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Output starts at the rightmost point and runs the upper chain right→left,
/// then the lower chain left→right; no closing duplicate. Collinear points are
/// dropped (`turn <= 0` pops). 0 or 1 input points give an empty hull, 2 give
/// both points.
pub fn monotone_chain(polygon: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = polygon.to_vec();
    pts.sort_by(lex_cmp);

    let lower = half_hull(pts.iter());
    let upper = half_hull(pts.iter().rev());

    let mut hull = upper;
    hull.pop();
    hull.extend(lower.iter().take(lower.len().saturating_sub(1)));
    hull
}

fn half_hull<'a>(pts: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for p in pts {
        while chain.len() >= 2 && turn(chain[chain.len() - 2], chain[chain.len() - 1], *p) <= 0.0 {
            chain.pop();
        }
        chain.push(*p);
    }
    chain
}
