//! Corner-cutting subdivision of open polylines.

use super::curves::Curve;

/// One pass of corner cutting.
///
/// Each interior point `p[i]` is replaced by the midpoint of the incoming
/// edge and the weighted average `(p[i-1] + 6 p[i] + p[i+1]) / 8`. The
/// endpoints are left where they are. Curves with fewer than three points
/// have no interior and are returned unchanged.
pub fn subdivide(curve: &Curve) -> Curve {
    let p = curve.points();
    let n = p.len();
    if n < 3 {
        return curve.clone();
    }

    let mut out = Vec::with_capacity(2 * n - 2);
    out.push(p[0]);
    for w in p.windows(3) {
        let (a, b, c) = (w[0].to_vec2(), w[1].to_vec2(), w[2].to_vec2());
        out.push((a * 0.5 + b * 0.5).to_point());
        out.push((a * 0.125 + b * 0.75 + c * 0.125).to_point());
    }
    out.push(p[n - 1]);
    Curve::new(out)
}

/// Apply `iterations` passes, each to the previous pass's output.
pub fn smooth(curve: &Curve, iterations: usize) -> Curve {
    (0..iterations).fold(curve.clone(), |c, _| subdivide(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn curve(points: &[(f64, f64)]) -> Curve {
        Curve::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn single_pass_weights() {
        let c = curve(&[(0.0, 0.0), (8.0, 8.0), (16.0, 0.0)]);
        let s = subdivide(&c);
        assert_eq!(
            s,
            curve(&[(0.0, 0.0), (4.0, 4.0), (8.0, 6.0), (16.0, 0.0)])
        );
    }

    #[test]
    fn short_curves_pass_through() {
        let two = curve(&[(0.0, 0.0), (3.0, 4.0)]);
        assert_eq!(smooth(&two, 3), two);
        let one = curve(&[(7.0, 7.0)]);
        assert_eq!(smooth(&one, 3), one);
    }

    #[test]
    fn endpoints_fixed_across_passes() {
        let c = curve(&[(0.0, 0.0), (10.0, 20.0), (30.0, 5.0), (45.0, 40.0), (60.0, 0.0)]);
        for iterations in 1..=3 {
            let s = smooth(&c, iterations);
            assert_eq!(s.first(), c.first());
            assert_eq!(s.last(), c.last());
        }
    }

    #[test]
    fn point_count_grows_each_pass() {
        let c = curve(&[(0.0, 0.0), (10.0, 20.0), (30.0, 5.0), (60.0, 0.0)]);
        // n -> 2n - 2
        assert_eq!(smooth(&c, 1).len(), 6);
        assert_eq!(smooth(&c, 2).len(), 10);
        assert_eq!(smooth(&c, 3).len(), 18);
    }

    #[test]
    fn passes_compound() {
        let c = curve(&[(0.0, 0.0), (8.0, 8.0), (16.0, 0.0)]);
        assert_eq!(smooth(&c, 2), subdivide(&subdivide(&c)));
    }
}
