//! Walk a row of positions across a bowtie area and print each verdict.
//!
//! Usage:
//!   cargo run -p geofence --example bowtie
//!
//! The raw bowtie has two triangular lobes; the repaired area is the square
//! spanned by its corners, so points between the lobes come out inside.

use geofence::{classify_position, point_in_polygon, FenceCfg, Point};

fn main() {
    let bowtie = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 4.0),
    ];
    for i in 0..=8 {
        let q = Point::new(0.5 * i as f64, 3.0);
        let v = classify_position(q, &bowtie, FenceCfg::default());
        println!(
            "({:.1}, {:.1}): raw={} inside={} repaired={}",
            q.x,
            q.y,
            point_in_polygon(q, &bowtie),
            v.inside,
            v.repaired
        );
    }
}
