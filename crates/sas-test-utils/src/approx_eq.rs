// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Approximate equality testing for floating-point types.
//!
//! Implements the NumPy-style `isclose` rule: two values `a` and `b` are
//! approximately equal if
//!
//! ```text
//! |a - b| ≤ max(atol, rtol · max(|a|, |b|))
//! ```
//!
//! The primary interface is the [`approx_eq!`](crate::approx_eq!) and
//! [`assert_approx_eq!`](crate::assert_approx_eq!) macros:
//!
//! ```
//! use sas_test_utils::assert_approx_eq;
//!
//! assert_approx_eq!(1.0, 1.0 + f64::EPSILON);
//! assert_approx_eq!(1.0, 1.001, atol <= 0.01);
//! assert_approx_eq!(100.0, 100.1, rtol <= 0.01);
//! ```

/// Returns the default relative tolerance based on the absolute tolerance.
///
/// If `atol > 0.0`, returns `0.0` (only absolute tolerance is used).
/// Otherwise, returns `sqrt(f64::EPSILON)` ≈ 1.49e-8.
pub fn default_rtol(atol: f64) -> f64 {
    if atol > 0.0 { 0.0 } else { f64::EPSILON.sqrt() }
}

/// Trait for types that can be compared for approximate equality.
pub trait ApproxEq<Rhs = Self>: std::fmt::Debug {
    /// Compares `self` with `rhs` for approximate equality with the given
    /// absolute and relative tolerances.
    fn approx_eq(&self, rhs: &Rhs, atol: f64, rtol: f64) -> bool;
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq(&self, rhs: &Self, atol: f64, rtol: f64) -> bool {
        if self == rhs {
            return true;
        }
        if !self.is_finite() || !rhs.is_finite() {
            return false;
        }
        (self - rhs).abs() <= f64::max(atol, rtol * f64::max(self.abs(), rhs.abs()))
    }
}

impl<T: ApproxEq> ApproxEq for Vec<T> {
    fn approx_eq(&self, rhs: &Self, atol: f64, rtol: f64) -> bool {
        self.as_slice().approx_eq(&rhs.as_slice(), atol, rtol)
    }
}

impl<T: ApproxEq> ApproxEq for &[T] {
    fn approx_eq(&self, rhs: &Self, atol: f64, rtol: f64) -> bool {
        self.len() == rhs.len()
            && self
                .iter()
                .zip(rhs.iter())
                .all(|(lhs, rhs)| lhs.approx_eq(rhs, atol, rtol))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq(&self, rhs: &Self, atol: f64, rtol: f64) -> bool {
        self.iter()
            .zip(rhs.iter())
            .all(|(lhs, rhs)| lhs.approx_eq(rhs, atol, rtol))
    }
}

/// Returns `true` if the two values are approximately equal.
///
/// Accepts optional `atol <= x` and `rtol <= x` clauses, in that order.
#[macro_export]
macro_rules! approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {{
        let atol = 0.0;
        $crate::ApproxEq::approx_eq(&$lhs, &$rhs, atol, $crate::default_rtol(atol))
    }};
    ($lhs:expr, $rhs:expr, atol <= $atol:expr $(,)?) => {
        $crate::ApproxEq::approx_eq(&$lhs, &$rhs, $atol, 0.0)
    };
    ($lhs:expr, $rhs:expr, rtol <= $rtol:expr $(,)?) => {
        $crate::ApproxEq::approx_eq(&$lhs, &$rhs, 0.0, $rtol)
    };
    ($lhs:expr, $rhs:expr, atol <= $atol:expr, rtol <= $rtol:expr $(,)?) => {
        $crate::ApproxEq::approx_eq(&$lhs, &$rhs, $atol, $rtol)
    };
}

/// Asserts that the two values are approximately equal.
///
/// Accepts the same tolerance clauses as [`approx_eq!`](crate::approx_eq!).
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(, $($tol:tt)+)?) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        assert!(
            $crate::approx_eq!(lhs, rhs $(, $($tol)+)?),
            "{:?} ≉ {:?}",
            lhs,
            rhs,
        );
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rtol() {
        assert_eq!(default_rtol(0.0), f64::EPSILON.sqrt());
        assert_eq!(default_rtol(0.01), 0.0);
    }

    #[test]
    fn test_approx_eq_default() {
        assert!(approx_eq!(1.0, 1.0 + f64::EPSILON));
        assert!(!approx_eq!(1.0, 1.001));
    }

    #[test]
    fn test_approx_eq_atol() {
        assert!(approx_eq!(1.0, 1.001, atol <= 0.01));
        assert!(!approx_eq!(1.0, 1.02, atol <= 0.01));
    }

    #[test]
    fn test_approx_eq_rtol() {
        assert!(approx_eq!(100.0, 100.1, rtol <= 0.01));
        assert!(!approx_eq!(100.0, 102.0, rtol <= 0.01));
    }

    #[test]
    fn test_approx_eq_both() {
        assert!(approx_eq!(1.0, 1.001, atol <= 0.01, rtol <= 0.01));
    }

    #[test]
    fn test_approx_eq_exact() {
        assert!(approx_eq!(0.0, 0.0));
        assert!(approx_eq!(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn test_approx_eq_non_finite() {
        assert!(!approx_eq!(f64::NAN, f64::NAN));
        assert!(!approx_eq!(f64::INFINITY, 1.0, atol <= 1e9));
    }

    #[test]
    fn test_approx_eq_slices() {
        let lhs = vec![1.0, 2.0, 3.0];
        let rhs = vec![1.0, 2.0 + 1e-12, 3.0];
        assert!(approx_eq!(lhs, rhs, atol <= 1e-9));
        let short = vec![1.0, 2.0];
        assert!(!approx_eq!(lhs, short, atol <= 1e-9));
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq!(1.0, 1.0 + f64::EPSILON);
        assert_approx_eq!([1.0, 2.0], [1.0, 2.0], atol <= 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_panics() {
        assert_approx_eq!(1.0, 2.0);
    }
}
