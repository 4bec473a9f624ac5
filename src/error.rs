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

//! The error module contains the errors returned by the direct and inverse
//! geodetic calculations.

use angle_sc::Degrees;
use icao_units::si::Metres;

/// The errors that can occur when solving a geodetic problem.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The direct problem was given a negative travel distance.
    #[error("negative distance is not a valid travel distance: {} m", .distance.0)]
    NegativeDistance { distance: Metres },

    /// The inverse problem did not converge and both points have the same
    /// latitude, so the azimuth is undefined.
    #[error("undefined azimuth between points on the same latitude: {}°", .lat.0)]
    DegenerateGeometry { lat: Degrees },

    /// The direct problem did not converge within the iteration limit.
    #[error("direct solution did not converge after {iterations} iterations")]
    DirectNotConverged { iterations: u32 },
}

/// The result type of the geodetic calculations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::NegativeDistance {
            distance: Metres(-1.0),
        };
        assert_eq!(
            "negative distance is not a valid travel distance: -1 m",
            error.to_string()
        );

        let error = Error::DegenerateGeometry { lat: Degrees(10.0) };
        assert_eq!(
            "undefined azimuth between points on the same latitude: 10°",
            error.to_string()
        );

        let error = Error::DirectNotConverged { iterations: 100 };
        assert_eq!(
            "direct solution did not converge after 100 iterations",
            error.to_string()
        );
    }
}
