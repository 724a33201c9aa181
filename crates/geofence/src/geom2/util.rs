use std::cmp::Ordering;

use super::types::Point;

/// 2D cross product of `a` and `b` taken as vectors from a common origin.
///
/// Positive when `b` is counter-clockwise from `a`, zero when parallel.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Orientation of `c` relative to the directed line `a → b`.
#[inline]
pub(super) fn turn(a: Point, b: Point, c: Point) -> f64 {
    cross(b - a, c - a)
}

/// Edge `i → i+1`, wrapping at the end.
#[inline]
pub(super) fn edge(polygon: &[Point], i: usize) -> (Point, Point) {
    let j = if i + 1 == polygon.len() { 0 } else { i + 1 };
    (polygon[i], polygon[j])
}

/// Lexicographic order on `(x, y)`. Uses `total_cmp`, so NaN coordinates get
/// a fixed place instead of breaking the sort.
#[inline]
pub(super) fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}
