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

//! This module contains the series used by Vincenty's formulae to correct
//! great circle distances and longitudes on the auxiliary sphere to
//! geodesic distances and longitudes on the ellipsoid.
//!
//! Equation numbers refer to T. Vincenty,
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).

#![allow(clippy::suboptimal_flops)]

use super::wgs84;

/// Calculate `u²`, the square of the ellipsoid's second eccentricity scaled
/// by the square of the cosine of the azimuth at the equator.
/// * `sq_cos_alpha` - the square of the cosine of the equatorial azimuth.
#[must_use]
pub fn calculate_sq_u(sq_cos_alpha: f64) -> f64 {
    sq_cos_alpha * wgs84::SQ_2ND_ECCENTRICITY
}

/// The distance scale factor `A`, Vincenty Eq. 3.
/// * `sq_u` - see [`calculate_sq_u`].
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::coefficients::{calculate_sq_u, evaluate_a};
///
/// // A geodesic along a meridian
/// assert_eq!(1.0016827510415598, evaluate_a(calculate_sq_u(1.0)));
/// // A geodesic along the equator
/// assert_eq!(1.0, evaluate_a(calculate_sq_u(0.0)));
/// ```
#[must_use]
pub fn evaluate_a(sq_u: f64) -> f64 {
    1.0 + sq_u / 16384.0 * (4096.0 + sq_u * (-768.0 + sq_u * (320.0 - 175.0 * sq_u)))
}

/// The distance correction factor `B`, Vincenty Eq. 4.
/// * `sq_u` - see [`calculate_sq_u`].
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::coefficients::{calculate_sq_u, evaluate_b};
///
/// assert_eq!(0.0016792186103294126, evaluate_b(calculate_sq_u(1.0)));
/// assert_eq!(0.0, evaluate_b(calculate_sq_u(0.0)));
/// ```
#[must_use]
pub fn evaluate_b(sq_u: f64) -> f64 {
    sq_u / 1024.0 * (256.0 + sq_u * (-128.0 + sq_u * (74.0 - 47.0 * sq_u)))
}

/// The longitude correction factor `C`, Vincenty Eq. 10.
/// * `sq_cos_alpha` - the square of the cosine of the equatorial azimuth.
#[must_use]
pub fn evaluate_c(sq_cos_alpha: f64) -> f64 {
    let f = wgs84::F;
    f / 16.0 * sq_cos_alpha * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha))
}

/// The difference between the great circle distance on the auxiliary sphere
/// and the scaled geodesic distance, `Δσ`, Vincenty Eq. 6.
/// * `b` - the distance correction factor, see [`evaluate_b`].
/// * `sin_sigma`, `cos_sigma` - sine and cosine of the arc length `σ`.
/// * `cos_2sigma_m` - cosine of twice the arc length from the equator to
///   the midpoint of the arc.
#[must_use]
pub fn calculate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let sq_cos_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * sq_cos_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * sq_cos_2sigma_m)))
}

/// The difference between the longitude on the auxiliary sphere and the
/// longitude on the ellipsoid, from Vincenty Eq. 11.
/// * `c` - the longitude correction factor, see [`evaluate_c`].
/// * `sin_alpha` - sine of the equatorial azimuth.
/// * `sigma` - the arc length on the auxiliary sphere in radians.
/// * `sin_sigma`, `cos_sigma` - sine and cosine of `sigma`.
/// * `cos_2sigma_m` - see [`calculate_delta_sigma`].
#[must_use]
pub fn calculate_longitude_correction(
    c: f64,
    sin_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    (1.0 - c)
        * wgs84::F
        * sin_alpha
        * (sigma
            + c * sin_sigma
                * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_sq_u() {
        assert_eq!(0.0, calculate_sq_u(0.0));
        assert_eq!(0.003369748371166732, calculate_sq_u(0.5));
        assert_eq!(wgs84::SQ_2ND_ECCENTRICITY, calculate_sq_u(1.0));
    }

    #[test]
    fn test_evaluate_a_b() {
        let sq_u = calculate_sq_u(0.5);
        assert_eq!(1.0008419055635702, evaluate_a(sq_u));
        assert_eq!(0.0008410204515478023, evaluate_b(sq_u));
    }

    #[test]
    fn test_evaluate_c() {
        assert_eq!(0.0, evaluate_c(0.0));
        assert_eq!(0.00041997956273398003, evaluate_c(0.5));
        assert_eq!(0.0008389052499035381, evaluate_c(1.0));
    }

    #[test]
    fn test_calculate_delta_sigma() {
        // No correction on a sphere
        assert_eq!(0.0, calculate_delta_sigma(0.0, 0.5, 0.5, 0.5));
        // No correction for a zero length arc
        let b = evaluate_b(calculate_sq_u(1.0));
        assert_eq!(0.0, calculate_delta_sigma(b, 0.0, 1.0, 1.0));

        // A short arc starting at the equator: Δσ ≈ B * sin σ
        let sigma: f64 = 1.0e-3;
        let delta_sigma =
            calculate_delta_sigma(b, libm::sin(sigma), libm::cos(sigma), libm::cos(sigma));
        assert!((delta_sigma - b * sigma).abs() < 1.0e-8);
    }

    #[test]
    fn test_calculate_longitude_correction() {
        // No correction along a meridian
        assert_eq!(
            0.0,
            calculate_longitude_correction(evaluate_c(1.0), 0.0, 1.0, 0.8, 0.6, 0.6)
        );

        // Along the equator the correction is f * sigma
        let sigma = 1.0;
        let correction = calculate_longitude_correction(
            evaluate_c(0.0),
            1.0,
            sigma,
            libm::sin(sigma),
            libm::cos(sigma),
            0.0,
        );
        assert_eq!(wgs84::F * sigma, correction);
    }
}
