use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely relative tolerance, used when comparing against reference data.
    pub fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Sign changes of the first difference of `values`.
///
/// Zero differences are skipped, so a flat run does not count as a turn.
/// A concave series with one interior peak yields exactly one change.
pub fn first_difference_sign_changes(values: &[Real]) -> usize {
    let mut changes = 0;
    let mut last_sign = 0.0;
    for pair in values.windows(2) {
        let d = pair[1] - pair[0];
        if d == 0.0 {
            continue;
        }
        let sign = d.signum();
        if last_sign != 0.0 && sign != last_sign {
            changes += 1;
        }
        last_sign = sign;
    }
    changes
}

/// True when every element is strictly greater than the one before it.
pub fn is_strictly_increasing(values: &[Real]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn relative_tolerance_ignores_absolute_floor() {
        let tol = Tolerances::relative(1e-2);
        assert!(nearly_equal(269_210.0, 269_381.15, tol));
        assert!(!nearly_equal(0.0, 1e-13, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn sign_changes_single_peak() {
        assert_eq!(first_difference_sign_changes(&[1.0, 3.0, 4.0, 2.0, 1.0]), 1);
        assert_eq!(first_difference_sign_changes(&[1.0, 2.0, 3.0]), 0);
        assert_eq!(first_difference_sign_changes(&[1.0, 3.0, 2.0, 4.0]), 2);
        assert_eq!(first_difference_sign_changes(&[1.0, 2.0, 2.0, 1.0]), 1);
        assert_eq!(first_difference_sign_changes(&[]), 0);
    }

    #[test]
    fn strictly_increasing() {
        assert!(is_strictly_increasing(&[0.1, 0.2, 0.3]));
        assert!(!is_strictly_increasing(&[0.1, 0.1, 0.3]));
        assert!(is_strictly_increasing(&[0.5]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn monotone_series_has_no_turns(
            start in 0.0_f64..10.0,
            step in 1e-3_f64..1.0,
            n in 2_usize..50,
        ) {
            let values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            prop_assert_eq!(first_difference_sign_changes(&values), 0);
            prop_assert!(is_strictly_increasing(&values));
        }
    }
}
