use super::*;
use proptest::prelude::*;

/// Weakly increasing X on a quarter grid (exact under translation), with vertical
/// steps and exactly repeated points.
fn stepped_curve(max_len: usize) -> impl Strategy<Value = Monotone<Xy>> {
    let step = (0u8..=20, -100.0f64..100.0, prop::bool::weighted(0.1));
    prop::collection::vec(step, 0..max_len).prop_map(|steps| {
        let mut x = -20.0;
        let mut pts: Vec<Xy> = Vec::with_capacity(steps.len());
        for (dx, y, repeat) in steps {
            match pts.last() {
                Some(&last) if repeat => pts.push(last),
                _ => {
                    x += f64::from(dx) * 0.25;
                    pts.push(Xy::new(x, y));
                }
            }
        }
        Monotone::assume(pts)
    })
}

/// Small integer lattice, so exact collinear runs and vertical steps are common.
fn lattice_curve() -> impl Strategy<Value = Monotone<Xy>> {
    prop::collection::vec((0u8..3, -2i8..3), 0..24).prop_map(|steps| {
        let mut x = 0.0;
        let pts = steps
            .into_iter()
            .map(|(dx, y)| {
                x += f64::from(dx);
                Xy::new(x, f64::from(y))
            })
            .collect();
        Monotone::assume(pts)
    })
}

/// A point of the quarter grid.
fn grid_x() -> impl Strategy<Value = f64> {
    (-120i32..600).prop_map(|k| f64::from(k) * 0.25)
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

/// Evenly spaced points over the domain plus every breakpoint X.
fn sample_xs(c: &Monotone<Xy>) -> Vec<f64> {
    let Some((lo, hi)) = c.domain(&Natural) else {
        return Vec::new();
    };
    let mut xs: Vec<f64> = (0..=40u32)
        .map(|k| lo + (hi - lo) * f64::from(k) / 40.0)
        .collect();
    xs.extend(c.iter().map(|p| p.x));
    xs
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sorted_is_monotone_and_stable(xs in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        let tagged: Vec<(f64, f64)> = xs.iter().enumerate().map(|(i, &x)| (x.round(), i as f64)).collect();
        let sorted = sort_ascending(&tagged, &Natural);
        prop_assert!(is_monotone(&sorted, &Natural));
        prop_assert_eq!(sorted.len(), tagged.len());
        for w in sorted.windows(2) {
            if w[0].0 == w[1].0 {
                prop_assert!(w[0].1 < w[1].1);
            }
        }
    }

    #[test]
    fn reduce_is_idempotent_and_keeps_ends(c in lattice_curve()) {
        let r = reduce(&c, &Natural);
        prop_assert_eq!(reduce(&r, &Natural), r.clone());
        prop_assert!(r.len() <= c.len());
        prop_assert!(r.len() >= c.len().min(2));
        prop_assert_eq!(r.first(), c.first());
        prop_assert_eq!(r.last(), c.last());
        // Subsequence of the input.
        let mut it = c.iter();
        prop_assert!(r.iter().all(|p| it.any(|q| q == p)));
        // Same function.
        for x in sample_xs(&c) {
            let (a, b) = (value_at(&c, &Natural, x), value_at(&r, &Natural, x));
            prop_assert!(close(a.unwrap(), b.unwrap(), 1e-12), "x={} {:?} {:?}", x, a, b);
        }
    }

    #[test]
    fn reduce_is_idempotent_on_stepped_curves(c in stepped_curve(32)) {
        let r = reduce(&c, &Natural);
        prop_assert_eq!(reduce(&r, &Natural), r);
    }

    #[test]
    fn split_then_join_reconstructs(c in stepped_curve(32), x0 in grid_x()) {
        let (lhs, rhs) = split(&c, &Natural, x0);
        prop_assert!(is_monotone(&lhs, &Natural));
        prop_assert!(is_monotone(&rhs, &Natural));
        prop_assert!(lhs.iter().all(|p| p.x <= 0.0));
        prop_assert!(rhs.iter().all(|p| p.x >= 0.0));
        let back = join(&lhs, &rhs, x0);
        prop_assert!(is_monotone(&back, &Natural));
        for x in sample_xs(&c) {
            let (a, b) = (value_at(&c, &Natural, x), value_at(&back, &Natural, x));
            prop_assert!(close(a.unwrap(), b.unwrap(), 1e-9), "x={} {:?} {:?}", x, a, b);
        }
    }

    #[test]
    fn truncate_stays_inside(c in stepped_curve(32), a in grid_x(), b in grid_x()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let t = truncate(&c, &Natural, min, max);
        prop_assert!(is_monotone(&t, &Natural));
        prop_assert!(t.iter().all(|p| p.x >= min && p.x <= max));
        if let Some((lo, hi)) = c.domain(&Natural) {
            if lo < min && hi > max {
                let (first, last) = (t[0], t[t.len() - 1]);
                prop_assert_eq!(first.x, min);
                prop_assert_eq!(last.x, max);
                // On a vertical step at `min` the first point of the step opens the
                // result, while `value_at` reports the last one.
                if !c.iter().any(|p| p.x == min) {
                    prop_assert!(close(first.y, value_at(&c, &Natural, min).unwrap(), 1e-9));
                }
                prop_assert!(close(last.y, value_at(&c, &Natural, max).unwrap(), 1e-9));
            }
        }
    }

    #[test]
    fn sum_is_pointwise(curves in prop::collection::vec(stepped_curve(16), 0..7)) {
        let s = sum(&curves, &Natural);
        prop_assert!(is_monotone(&s, &Natural));
        prop_assert!(s.len() <= curves.iter().map(|c| c.len()).sum::<usize>());
        let mut rev = curves.clone();
        rev.reverse();
        let s_rev = sum(&rev, &Natural);
        for x in sample_xs(&s) {
            let expected: f64 = curves.iter().filter_map(|c| value_at(c, &Natural, x)).sum();
            let got = value_at(&s, &Natural, x).unwrap();
            prop_assert!(close(got, expected, 1e-9), "x={} {} vs {}", x, got, expected);
            prop_assert!(close(value_at(&s_rev, &Natural, x).unwrap(), got, 1e-9));
        }
    }

    #[test]
    fn merge2_commutes(a in stepped_curve(16), b in stepped_curve(16)) {
        prop_assert_eq!(merge2(&a, &b, &Natural), merge2(&b, &a, &Natural));
    }
}
