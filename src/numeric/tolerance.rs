// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;

use num_traits::NumCast;
use thiserror::Error;

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToleranceError {
    #[error("tolerance must be strictly positive, got {0}")]
    NonPositive(f64),
    #[error("tolerance must be finite, got {0}")]
    NonFinite(f64),
    #[error("tolerance {0} is not representable in the target scalar type")]
    Unrepresentable(f64),
}

/// The single comparison threshold shared by every predicate.
///
/// Two reals are equal when `|a - b| < eps`; two points are equal when every
/// coordinate is. A `Tolerance` is a plain value: pass the same one to every
/// call of a detection session so the coplanar and separating-axis branches
/// agree at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance<T: Scalar> {
    eps: T,
}

impl<T: Scalar> Tolerance<T> {
    pub fn new(eps: T) -> Result<Self, ToleranceError> {
        let as_f64 = eps.to_f64().unwrap_or(f64::NAN);
        if !eps.is_finite() {
            return Err(ToleranceError::NonFinite(as_f64));
        }
        if eps <= T::zero() {
            return Err(ToleranceError::NonPositive(as_f64));
        }
        Ok(Self { eps })
    }

    pub fn from_f64(eps: f64) -> Result<Self, ToleranceError> {
        let eps_t = <T as NumCast>::from(eps).ok_or(ToleranceError::Unrepresentable(eps))?;
        if eps > 0.0 && eps_t.is_zero() {
            return Err(ToleranceError::Unrepresentable(eps));
        }
        Self::new(eps_t)
    }

    #[inline]
    pub fn eps(&self) -> T {
        self.eps
    }

    #[inline]
    pub fn approx_eq(&self, a: T, b: T) -> bool {
        (a - b).abs() < self.eps
    }

    #[inline]
    pub fn is_zero(&self, a: T) -> bool {
        a.abs() < self.eps
    }

    pub fn points_eq(&self, a: &Point3<T>, b: &Point3<T>) -> bool {
        self.approx_eq(a.x, b.x) && self.approx_eq(a.y, b.y) && self.approx_eq(a.z, b.z)
    }

    pub fn is_zero_vector(&self, v: &Point3<T>) -> bool {
        self.is_zero(v.x) && self.is_zero(v.y) && self.is_zero(v.z)
    }

    /// Lexicographic order on (x, y, z) where coordinates within tolerance
    /// of each other compare equal.
    pub fn cmp_points(&self, a: &Point3<T>, b: &Point3<T>) -> Ordering {
        for (pa, pb) in [(a.x, b.x), (a.y, b.y), (a.z, b.z)] {
            if !self.approx_eq(pa, pb) {
                return pa.partial_cmp(&pb).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            eps: T::default_tolerance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_1e_12_for_f64() {
        assert_eq!(Tolerance::<f64>::default().eps(), 1e-12);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert_eq!(
            Tolerance::<f64>::new(0.0).unwrap_err(),
            ToleranceError::NonPositive(0.0)
        );
        assert!(matches!(
            Tolerance::<f64>::new(-1e-9),
            Err(ToleranceError::NonPositive(_))
        ));
        assert!(matches!(
            Tolerance::<f64>::new(f64::INFINITY),
            Err(ToleranceError::NonFinite(_))
        ));
        assert!(matches!(
            Tolerance::<f64>::new(f64::NAN),
            Err(ToleranceError::NonFinite(_))
        ));
    }

    #[test]
    fn from_f64_rejects_values_that_underflow() {
        assert!(matches!(
            Tolerance::<f32>::from_f64(1e-60),
            Err(ToleranceError::Unrepresentable(_))
        ));
        assert!(Tolerance::<f32>::from_f64(1e-4).is_ok());
    }

    #[test]
    fn scalar_equality_is_strict_below_eps() {
        let tol = Tolerance::new(0.5).unwrap();
        assert!(tol.approx_eq(1.0, 1.4));
        assert!(!tol.approx_eq(1.0, 1.5));
        assert!(tol.is_zero(-0.25));
    }

    #[test]
    fn point_ordering_skips_coordinates_within_tolerance() {
        let tol = Tolerance::new(1e-6).unwrap();
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-9, 1.0, 3.0);
        assert_eq!(tol.cmp_points(&a, &b), Ordering::Greater);
        assert_eq!(tol.cmp_points(&b, &a), Ordering::Less);

        let c = Point3::new(1.0, 2.0, 3.0 + 1e-9);
        assert_eq!(tol.cmp_points(&a, &c), Ordering::Equal);
        assert!(tol.points_eq(&a, &c));
    }
}
