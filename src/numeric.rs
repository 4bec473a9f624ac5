// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The numeric module contains floating point comparison functions used to
//! terminate Vincenty's iterations and to detect degenerate geometry.
//!
//! `is_zero`, `is_negative` and `is_positive` test the sign of a value
//! exactly: they are not tolerance based. Note: `-0.0` is zero, not negative,
//! and `NaN` is neither zero, negative nor positive.

#![allow(clippy::float_cmp)]

/// The default precision used to compare values in Vincenty's iterations.
pub const DEFAULT_PRECISION: f64 = 1.0e-12;

/// Test whether two values are equal within a relative tolerance.
///
/// Identical values are always equal. If either value is not finite, they are
/// only equal if both are `NaN`. Otherwise, the difference is compared with
/// `tolerance` scaled by the larger magnitude, or by 1.0 if either value is zero.
/// * `a`, `b` - the values to compare.
/// * `tolerance` - the relative tolerance.
/// # Examples
/// ```
/// use vincenty_wgs84::numeric::{is_approximately_equal, DEFAULT_PRECISION};
///
/// assert!(is_approximately_equal(1.0, 1.0 + 1.0e-13, DEFAULT_PRECISION));
/// assert!(!is_approximately_equal(1.0, 1.0 + 1.0e-11, DEFAULT_PRECISION));
/// assert!(is_approximately_equal(f64::NAN, f64::NAN, DEFAULT_PRECISION));
/// ```
#[must_use]
pub fn is_approximately_equal(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }

    if !a.is_finite() || !b.is_finite() {
        return a.is_nan() && b.is_nan();
    }

    let scale = if a == 0.0 || b == 0.0 {
        1.0
    } else {
        libm::fmax(libm::fabs(a), libm::fabs(b))
    };
    libm::fabs(a - b) <= scale * tolerance
}

/// Test whether a value is exactly zero, either `0.0` or `-0.0`.
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value == 0.0
}

/// Test whether a value is strictly less than zero.
#[must_use]
pub fn is_negative(value: f64) -> bool {
    value < 0.0
}

/// Test whether a value is strictly greater than zero.
#[must_use]
pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_approximately_equal_finite() {
        assert!(is_approximately_equal(0.0, 0.0, DEFAULT_PRECISION));
        assert!(is_approximately_equal(0.0, -0.0, DEFAULT_PRECISION));
        assert!(is_approximately_equal(123.456, 123.456, 0.0));

        // relative to the larger magnitude
        assert!(is_approximately_equal(1.0e6, 1.0e6 + 1.0e-7, DEFAULT_PRECISION));
        assert!(!is_approximately_equal(1.0e6, 1.0e6 + 1.0e-5, DEFAULT_PRECISION));
        assert!(is_approximately_equal(-2.0, -2.0 - 1.0e-12, DEFAULT_PRECISION));
        assert!(!is_approximately_equal(-2.0, 2.0, DEFAULT_PRECISION));

        // absolute when either value is zero
        assert!(is_approximately_equal(0.0, 1.0e-13, DEFAULT_PRECISION));
        assert!(!is_approximately_equal(0.0, 1.0e-11, DEFAULT_PRECISION));
        assert!(!is_approximately_equal(1.0e-11, 0.0, DEFAULT_PRECISION));
    }

    #[test]
    fn test_is_approximately_equal_non_finite() {
        assert!(is_approximately_equal(f64::NAN, f64::NAN, DEFAULT_PRECISION));
        assert!(!is_approximately_equal(f64::NAN, 1.0, DEFAULT_PRECISION));
        assert!(!is_approximately_equal(1.0, f64::NAN, DEFAULT_PRECISION));

        assert!(is_approximately_equal(
            f64::INFINITY,
            f64::INFINITY,
            DEFAULT_PRECISION
        ));
        assert!(!is_approximately_equal(
            f64::INFINITY,
            f64::NEG_INFINITY,
            DEFAULT_PRECISION
        ));
        assert!(!is_approximately_equal(
            f64::INFINITY,
            f64::MAX,
            DEFAULT_PRECISION
        ));
        assert!(!is_approximately_equal(f64::NAN, f64::INFINITY, 1.0));
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(-0.0));
        assert!(!is_zero(f64::MIN_POSITIVE));
        assert!(!is_zero(-f64::EPSILON));
        assert!(!is_zero(f64::NAN));
    }

    #[test]
    fn test_is_negative_and_positive() {
        assert!(is_negative(-1.0));
        assert!(is_negative(f64::NEG_INFINITY));
        assert!(!is_negative(-0.0));
        assert!(!is_negative(0.0));
        assert!(!is_negative(f64::NAN));

        assert!(is_positive(1.0e-300));
        assert!(is_positive(f64::INFINITY));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-1.0));
        assert!(!is_positive(f64::NAN));
    }
}
