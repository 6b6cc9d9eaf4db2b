//! Property-based tests for quadratic expressions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::quadratic::QuadraticExpression;
    use crate::roots::{RootCount, Roots};
    use crate::RootError;

    // Small integer-valued coefficients keep f64 arithmetic exact
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    fn small_quadratic() -> impl Strategy<Value = QuadraticExpression> {
        (small_coeff(), small_coeff(), small_coeff())
            .prop_map(|(a, b, c)| QuadraticExpression::new(a, b, c))
    }

    fn any_finite_quadratic() -> impl Strategy<Value = QuadraticExpression> {
        let finite = -1.0e6f64..1.0e6f64;
        (finite.clone(), finite.clone(), finite)
            .prop_map(|(a, b, c)| QuadraticExpression::new(a, b, c))
    }

    proptest! {
        // Combinator laws

        #[test]
        fn scale_one_plus_scale_zero_is_identity(e in any_finite_quadratic()) {
            let rebuilt = QuadraticExpression::sum(
                &QuadraticExpression::scale(1.0, &e),
                &QuadraticExpression::scale(0.0, &e),
            );
            prop_assert_eq!(rebuilt, e);
        }

        #[test]
        fn scale_commutes_with_evaluate(e in small_quadratic(), r in small_coeff(), x in small_coeff()) {
            let scaled = QuadraticExpression::scale(r, &e);
            prop_assert_eq!(scaled.evaluate(x), r * e.evaluate(x));
        }

        #[test]
        fn sum_commutes_with_evaluate(p in small_quadratic(), q in small_quadratic(), x in small_coeff()) {
            let s = QuadraticExpression::sum(&p, &q);
            prop_assert_eq!(s.evaluate(x), p.evaluate(x) + q.evaluate(x));
        }

        #[test]
        fn sum_is_commutative(p in any_finite_quadratic(), q in any_finite_quadratic()) {
            prop_assert_eq!(QuadraticExpression::sum(&p, &q), QuadraticExpression::sum(&q, &p));
        }

        #[test]
        fn add_matches_sum(p in any_finite_quadratic(), q in any_finite_quadratic()) {
            let mut acc = p;
            acc.add(&q);
            prop_assert_eq!(acc, QuadraticExpression::sum(&p, &q));
        }

        // Value semantics

        #[test]
        fn copy_is_independent(e in small_quadratic(), x in small_coeff(), v in small_coeff()) {
            let before = e.evaluate(x);
            let mut copy = e;
            prop_assert_eq!(copy, e);

            copy.set_a(v + 1000.0);
            copy.set_b(v);
            copy.set_c(v);
            prop_assert_eq!(e.evaluate(x), before);
            prop_assert_ne!(copy, e);
        }

        #[test]
        fn equality_is_symmetric(p in small_quadratic(), q in small_quadratic()) {
            prop_assert_eq!(p == q, q == p);
            prop_assert_eq!(p, p);
        }

        // Roots

        #[test]
        fn root_extraction_agrees_with_count(e in small_quadratic()) {
            match e.root_count() {
                RootCount::NoReal => prop_assert_eq!(e.roots(), Err(RootError::NoRealRoots)),
                RootCount::One => prop_assert!(matches!(e.roots(), Ok(Roots::One(_))), "expected a single root"),
                RootCount::Two => prop_assert!(matches!(e.roots(), Ok(Roots::Two { .. })), "expected two roots"),
                RootCount::Infinite => prop_assert_eq!(e.roots(), Ok(Roots::Unbounded)),
            }
        }

        #[test]
        fn smaller_root_never_exceeds_larger(e in small_quadratic()) {
            if let (Ok(lo), Ok(hi)) = (e.smaller_root(), e.larger_root()) {
                prop_assert!(lo <= hi);
            }
        }

        #[test]
        fn factored_roots_are_recovered(r1 in -20i32..20i32, r2 in -20i32..20i32) {
            prop_assume!(r1 != r2);
            // (x - r1)(x - r2) = x^2 - (r1 + r2)x + r1*r2
            let (r1, r2) = (f64::from(r1), f64::from(r2));
            let e = QuadraticExpression::new(1.0, -(r1 + r2), r1 * r2);

            prop_assert_eq!(e.number_of_roots(), 2);
            prop_assert_eq!(e.smaller_root(), Ok(r1.min(r2)));
            prop_assert_eq!(e.larger_root(), Ok(r1.max(r2)));
        }

        #[test]
        fn two_roots_evaluate_near_zero(e in small_quadratic()) {
            if let Ok(Roots::Two { smaller, larger }) = e.roots() {
                let scale = e.a().abs() + e.b().abs() + e.c().abs();
                prop_assert!(e.evaluate(smaller).abs() <= 1e-9 * scale * (1.0 + smaller * smaller));
                prop_assert!(e.evaluate(larger).abs() <= 1e-9 * scale * (1.0 + larger * larger));
            }
        }
    }
}
