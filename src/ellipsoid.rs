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

//! The ellipsoid module contains the WGS 84 ellipsoid parameters and the
//! conversion from a geodetic latitude to a parametric (reduced) latitude on
//! the auxiliary sphere used by Vincenty's formulae.

pub mod coefficients;
pub mod wgs84;

use angle_sc::Radians;

/// A parametric latitude on the auxiliary sphere, stored as its tangent,
/// sine and cosine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParametricLatitude {
    tan: f64,
    sin: f64,
    cos: f64,
}

impl ParametricLatitude {
    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere: tan(beta) = (1 - f) * tan(lat).
    /// * `lat` - the geodetic Latitude.
    #[must_use]
    pub fn from_geodetic(lat: Radians) -> Self {
        let tan = wgs84::ONE_MINUS_F * libm::tan(lat.0);
        let beta = libm::atan(tan);
        Self {
            tan,
            sin: libm::sin(beta),
            cos: libm::cos(beta),
        }
    }

    /// The tangent of the parametric latitude.
    #[must_use]
    pub const fn tan(&self) -> f64 {
        self.tan
    }

    /// The sine of the parametric latitude.
    #[must_use]
    pub const fn sin(&self) -> f64 {
        self.sin
    }

    /// The cosine of the parametric latitude.
    #[must_use]
    pub const fn cos(&self) -> f64 {
        self.cos
    }
}
