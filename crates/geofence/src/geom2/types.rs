//! Basic 2D types and tolerances for the containment pipeline.
//!
//! - `Point`: 2D coordinate, an alias of `nalgebra::Vector2<f64>`.
//! - `FenceCfg`: centralizes the crossing-parameter window and ray-cast nudge.
//! - `Crossing`, `Verdict`: small result records.

use nalgebra::Vector2;

/// 2D coordinate. Vertices and query positions share this type.
pub type Point = Vector2<f64>;

/// Containment configuration (tolerances).
///
/// `t_lo`/`t_hi` bound the open window a crossing parameter must fall in for
/// two edges to count as crossing; `nudge` is added to the query `y` when it
/// lands exactly on an edge endpoint's height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FenceCfg {
    pub t_lo: f64,
    pub t_hi: f64,
    pub nudge: f64,
}

impl Default for FenceCfg {
    fn default() -> Self {
        Self {
            t_lo: 1e-6,
            t_hi: 0.999999,
            nudge: 1e-5,
        }
    }
}

impl FenceCfg {
    /// Open-window membership `t_lo < t < t_hi`.
    #[inline]
    pub fn in_window(&self, t: f64) -> bool {
        self.t_lo < t && t < self.t_hi
    }
}

/// First interior crossing found by the self-intersection scan.
///
/// `first`/`second` are the start indices of the two edges
/// (`first → first+1`, `second → second+1`, both mod n); `t` and `u` are the
/// crossing parameters along each edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub first: usize,
    pub second: usize,
    pub t: f64,
    pub u: f64,
}

impl Crossing {
    /// Crossing point, evaluated on the first edge of `polygon`.
    ///
    /// Meaningful only for the polygon that was scanned; `None` when `first`
    /// is out of range for `polygon`.
    pub fn point(&self, polygon: &[Point]) -> Option<Point> {
        let a = *polygon.get(self.first)?;
        let b = polygon[(self.first + 1) % polygon.len()];
        Some(a + (b - a) * self.t)
    }
}

/// Outcome of `classify_position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub inside: bool,
    /// The area self-intersected and was replaced by its convex hull.
    pub repaired: bool,
}
