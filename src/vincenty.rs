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

//! The vincenty module contains functions for solving the inverse and direct
//! geodetic problems on the WGS 84 ellipsoid using
//! [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! The inverse problem finds the distance and initial azimuth between two
//! positions. The direct problem finds the position at a distance along a
//! geodesic from a start position and initial azimuth.
//!
//! Equation numbers refer to T. Vincenty,
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).

#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::coefficients::{
    calculate_delta_sigma, calculate_longitude_correction, calculate_sq_u, evaluate_a,
    evaluate_b, evaluate_c,
};
use crate::ellipsoid::{wgs84, ParametricLatitude};
use crate::error::{Error, Result};
use crate::numeric::{is_approximately_equal, is_negative, is_zero, DEFAULT_PRECISION};
use crate::GeodeticCurve;
use angle_sc::{Degrees, Radians};
use icao_units::si::Metres;
use tracing::{debug, trace, warn};
use unit_sphere::LatLong;

/// The precision used to terminate both iterations.
pub const PRECISION: f64 = DEFAULT_PRECISION;

/// The maximum number of iterations of the inverse solution.
pub const MAX_INVERSE_ITERATIONS: u32 = 20;

/// The maximum number of iterations of the direct solution.
/// It normally converges in a handful of iterations.
pub const MAX_DIRECT_ITERATIONS: u32 = 100;

/// The result of iterating the inverse solution.
#[derive(Debug)]
struct InverseSolution {
    /// The parametric latitude of the start position.
    beta1: ParametricLatitude,
    /// The parametric latitude of the finish position.
    beta2: ParametricLatitude,
    /// The longitude difference on the auxiliary sphere.
    lambda: f64,
    /// The geodesic distance.
    distance: Metres,
    /// Whether lambda converged within `MAX_INVERSE_ITERATIONS`.
    converged: bool,
}

/// Iterate Vincenty's inverse solution between a pair of positions.
/// * `a`, `b` - the start and finish positions.
fn solve_inverse(a: &LatLong, b: &LatLong) -> InverseSolution {
    let beta1 = ParametricLatitude::from_geodetic(Radians(a.lat().0.to_radians()));
    let beta2 = ParametricLatitude::from_geodetic(Radians(b.lat().0.to_radians()));

    let sin_u1_sin_u2 = beta1.sin() * beta2.sin();
    let cos_u1_sin_u2 = beta1.cos() * beta2.sin();
    let sin_u1_cos_u2 = beta1.sin() * beta2.cos();
    let cos_u1_cos_u2 = beta1.cos() * beta2.cos();

    // Eq. 13
    let omega = b.lon().0.to_radians() - a.lon().0.to_radians();
    let mut lambda = omega;

    let mut a_coeff = 0.0;
    let mut sigma = 0.0;
    let mut delta_sigma = 0.0;
    let mut converged = false;

    for i in 0..MAX_INVERSE_ITERATIONS {
        let lambda0 = lambda;
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        // Eq. 14
        let temp = cos_u1_sin_u2 - sin_u1_cos_u2 * cos_lambda;
        let sq_sin_sigma = beta2.cos() * sin_lambda * beta2.cos() * sin_lambda + temp * temp;
        let sin_sigma = libm::sqrt(sq_sin_sigma);

        // Eq. 15 & 16
        let cos_sigma = sin_u1_sin_u2 + cos_u1_cos_u2 * cos_lambda;
        sigma = libm::atan2(sin_sigma, cos_sigma);

        // Eq. 17, sin_sigma is zero for coincident points
        let sin_alpha = if is_zero(sq_sin_sigma) {
            0.0
        } else {
            cos_u1_cos_u2 * sin_lambda / sin_sigma
        };
        let cos_alpha = libm::cos(libm::asin(sin_alpha));
        let sq_cos_alpha = cos_alpha * cos_alpha;

        // Eq. 18, sq_cos_alpha is zero along the equator
        let cos_2sigma_m = if is_zero(sq_cos_alpha) {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1_sin_u2 / sq_cos_alpha
        };

        let sq_u = calculate_sq_u(sq_cos_alpha);
        a_coeff = evaluate_a(sq_u);
        let b_coeff = evaluate_b(sq_u);
        delta_sigma = calculate_delta_sigma(b_coeff, sin_sigma, cos_sigma, cos_2sigma_m);

        // Eq. 11, modified
        let c_coeff = evaluate_c(sq_cos_alpha);
        lambda = omega
            + calculate_longitude_correction(
                c_coeff,
                sin_alpha,
                sigma,
                sin_sigma,
                cos_sigma,
                cos_2sigma_m,
            );

        // NaN along a meridian, where lambda is always zero
        let change = libm::fabs((lambda - lambda0) / lambda);
        if 1 < i && change < PRECISION {
            trace!(iterations = i + 1, "inverse solution converged");
            converged = true;
            break;
        }
    }

    // Eq. 19
    let distance = Metres(wgs84::B.0 * a_coeff * (sigma - delta_sigma));

    InverseSolution {
        beta1,
        beta2,
        lambda,
        distance,
        converged,
    }
}

/// Calculate the initial azimuth of a converged inverse solution, Eq. 20.
///
/// returns the azimuth in the range `0 <= azimuth < 360` degrees.
fn calculate_azimuth(solution: &InverseSolution) -> Degrees {
    let beta1 = solution.beta1;
    let beta2 = solution.beta2;
    let mut radians = libm::atan2(
        beta2.cos() * libm::sin(solution.lambda),
        beta1.cos() * beta2.sin() - beta1.sin() * beta2.cos() * libm::cos(solution.lambda),
    );
    if is_negative(radians) {
        radians += core::f64::consts::TAU;
    }

    let degrees = radians.to_degrees();
    Degrees(if 360.0 <= degrees {
        degrees - 360.0
    } else {
        degrees
    })
}

/// Calculate the geodesic distance between a pair of positions.
/// It solves the inverse geodetic problem but does not calculate the azimuth,
/// so it cannot fail.
/// * `a`, `b` - the start and finish positions.
///
/// returns the geodesic distance in metres.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
///
/// let a = LatLong::new(Degrees(32.0), Degrees(35.0));
/// let b = LatLong::new(Degrees(33.0), Degrees(34.0));
/// let distance = calculate_distance(&a, &b);
///
/// assert!(145_357.85 < distance.0 && distance.0 < 145_357.86);
/// ```
#[must_use]
pub fn calculate_distance(a: &LatLong, b: &LatLong) -> Metres {
    solve_inverse(a, b).distance
}

/// Calculate the geodesic curve, distance and initial azimuth, between a pair
/// of positions. It solves the inverse geodetic problem.
///
/// If the solution does not converge, the positions are assumed to be on a
/// meridian: the azimuth is 180° if `a` is north of `b` and 0° if it is south.
/// * `a`, `b` - the start and finish positions.
///
/// returns the `GeodeticCurve` from `a` to `b`.
///
/// # Errors
///
/// Returns `Error::DegenerateGeometry` if the solution does not converge and
/// `a` and `b` have the same latitude, e.g. if they are the same position.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
///
/// let a = LatLong::new(Degrees(32.0), Degrees(35.0));
/// let b = LatLong::new(Degrees(33.0), Degrees(34.0));
/// let curve = calculate_curve(&a, &b).unwrap();
///
/// assert!(145_357.85 < curve.distance().0 && curve.distance().0 < 145_357.86);
/// assert!(319.988_503_8 < curve.azimuth().0 && curve.azimuth().0 < 319.988_503_91);
///
/// assert!(calculate_curve(&a, &a).is_err());
/// ```
pub fn calculate_curve(a: &LatLong, b: &LatLong) -> Result<GeodeticCurve> {
    let solution = solve_inverse(a, b);

    let azimuth = if solution.converged {
        calculate_azimuth(&solution)
    } else {
        let phi1 = a.lat().0.to_radians();
        let phi2 = b.lat().0.to_radians();
        debug!(phi1, phi2, "inverse solution did not converge, assuming a meridian");
        if phi1 > phi2 {
            Degrees(180.0)
        } else if phi1 < phi2 {
            Degrees(0.0)
        } else {
            warn!(lat = a.lat().0, "undefined azimuth between points on the same latitude");
            return Err(Error::DegenerateGeometry { lat: a.lat() });
        }
    };

    Ok(GeodeticCurve::new(solution.distance, azimuth))
}

/// Iterate the arc length on the auxiliary sphere, Eqs. 5, 6 & 7.
/// * `s_over_b_a` - the distance divided by the Semiminor axis and `A`.
/// * `sigma1` - the arc length from the equator to the start position.
/// * `b_coeff` - the distance correction factor `B`.
/// * `max_iterations` - the maximum number of iterations.
///
/// returns the arc length on the auxiliary sphere in radians.
fn iterate_sigma(s_over_b_a: f64, sigma1: f64, b_coeff: f64, max_iterations: u32) -> Result<f64> {
    let mut sigma = s_over_b_a;
    let mut iterations = 0;
    loop {
        iterations += 1;
        let previous = sigma;

        let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);
        sigma = s_over_b_a
            + calculate_delta_sigma(b_coeff, libm::sin(sigma), libm::cos(sigma), cos_2sigma_m);

        if is_approximately_equal(sigma, previous, PRECISION) {
            trace!(iterations, "direct solution converged");
            return Ok(sigma);
        }

        if max_iterations <= iterations {
            warn!(iterations, sigma, "direct solution did not converge");
            return Err(Error::DirectNotConverged { iterations });
        }
    }
}

/// Calculate the destination position after travelling a distance along a
/// geodesic from a start position and initial azimuth.
/// It solves the direct geodetic problem.
/// * `a` - the start position.
/// * `azimuth` - the initial azimuth, clockwise from North.
/// * `distance` - the distance to travel.
///
/// returns the destination position. Its longitude is not normalised.
///
/// # Errors
///
/// Returns `Error::NegativeDistance` if `distance` is negative or
/// `Error::DirectNotConverged` if the solution does not converge.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
///
/// let a = LatLong::new(Degrees(32.0), Degrees(35.0));
/// let b = calculate_destination(&a, Degrees(10.0), Metres(3000.0)).unwrap();
///
/// assert!((32.026_643_4 - b.lat().0).abs() < 1.0e-7);
/// assert!((35.005_514_6 - b.lon().0).abs() < 1.0e-7);
/// ```
pub fn calculate_destination(a: &LatLong, azimuth: Degrees, distance: Metres) -> Result<LatLong> {
    if is_negative(distance.0) {
        warn!(distance = distance.0, "negative distance");
        return Err(Error::NegativeDistance { distance });
    }

    let alpha1 = azimuth.0.to_radians();
    let sin_alpha1 = libm::sin(alpha1);
    let cos_alpha1 = libm::cos(alpha1);
    let beta1 = ParametricLatitude::from_geodetic(Radians(a.lat().0.to_radians()));

    // Eq. 1
    let sigma1 = libm::atan2(beta1.tan(), cos_alpha1);

    // Eq. 2
    let sin_alpha = beta1.cos() * sin_alpha1;
    let sq_sin_alpha = sin_alpha * sin_alpha;
    let sq_cos_alpha = 1.0 - sq_sin_alpha;

    // Eqs. 3 & 4
    let sq_u = calculate_sq_u(sq_cos_alpha);
    let a_coeff = evaluate_a(sq_u);
    let b_coeff = evaluate_b(sq_u);

    let s_over_b_a = distance.0 / (wgs84::B.0 * a_coeff);
    let sigma = iterate_sigma(s_over_b_a, sigma1, b_coeff, MAX_DIRECT_ITERATIONS)?;

    let sin_sigma = libm::sin(sigma);
    let cos_sigma = libm::cos(sigma);
    let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);

    // Eq. 8
    let temp = beta1.sin() * sin_sigma - beta1.cos() * cos_sigma * cos_alpha1;
    let phi2 = libm::atan2(
        beta1.sin() * cos_sigma + beta1.cos() * sin_sigma * cos_alpha1,
        wgs84::ONE_MINUS_F * libm::sqrt(sq_sin_alpha + temp * temp),
    );

    // Eq. 9, atan2 handles geodesics that pass over a pole
    let lambda = libm::atan2(
        sin_sigma * sin_alpha1,
        beta1.cos() * cos_sigma - beta1.sin() * sin_sigma * cos_alpha1,
    );

    // Eqs. 10 & 11
    let c_coeff = evaluate_c(sq_cos_alpha);
    let l = lambda
        - calculate_longitude_correction(
            c_coeff,
            sin_alpha,
            sigma,
            sin_sigma,
            cos_sigma,
            cos_2sigma_m,
        );

    let lon2 = a.lon().0.to_radians() + l;
    Ok(LatLong::new(
        Degrees(phi2.to_degrees()),
        Degrees(lon2.to_degrees()),
    ))
}
