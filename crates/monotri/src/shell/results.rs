//! Plain-text triangle listing: one `(x, y)\t(x, y)\t(x, y)` line per triangle.
//!
//! Coordinates use shortest round-trip digits. Magnitudes in `[1e-4, 1e16)` (and
//! zero) are positional with at least one fractional digit (`4.0`, `0.0001`);
//! the rest use an exponent with explicit sign and two or more digits
//! (`1e-05`, `1.5e+20`).

use std::fmt::Write as _;
use std::io;

use crate::decomp::Triangle;
use crate::geom2::{Point, Polygon};

/// One coordinate in the results-file float format.
pub fn format_coord(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let a = v.abs();
    if a != 0.0 && !(1e-4..1e16).contains(&a) {
        let s = format!("{v:e}");
        let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(d) => ('-', d),
            None => ('+', exp),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }
    let s = format!("{v}");
    if s.contains('.') {
        s
    } else {
        s + ".0"
    }
}

/// `(x, y)` in the results-file float format.
pub fn format_point(p: &Point) -> String {
    format!("({}, {})", format_coord(p.x), format_coord(p.y))
}

pub fn results_string(poly: &Polygon, triangles: &[Triangle]) -> String {
    let mut out = String::new();
    for t in triangles {
        let [a, b, c] = t.points(poly);
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            format_point(&a),
            format_point(&b),
            format_point(&c)
        );
    }
    out
}

pub fn write_results<W: io::Write>(
    mut w: W,
    poly: &Polygon,
    triangles: &[Triangle],
) -> io::Result<()> {
    w.write_all(results_string(poly, triangles).as_bytes())?;
    w.flush()
}
