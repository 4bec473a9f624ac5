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

//! vincenty-wgs84
//!
//! A library for solving the direct and inverse geodetic problems on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid using
//! [Vincenty's formulae](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).
//!
//! ## Geodetic problems
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//!
//! - the *inverse* problem: given two positions, find the length of the
//!   geodesic between them and its initial azimuth, see [`calculate_distance`]
//!   and [`calculate_curve`];
//! - the *direct* problem: given a position, an initial azimuth and a distance,
//!   find the position at the end of the geodesic, see [`calculate_destination`].
//!
//! Vincenty's method maps the geodesic onto a great circle on an auxiliary
//! sphere and iterates series corrections until they converge.
//! It is accurate to well under a millimetre, but the inverse solution may
//! fail to converge for nearly antipodal positions. In that case the
//! positions are treated as if they were on a meridian.
//!
//! ## Design
//!
//! The WGS-84 parameters are compile time constants, see [`ellipsoid::wgs84`].
//! All of the calculations are pure functions, so they may be called
//! concurrently from any number of threads.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`;
//! - [tracing](https://crates.io/crates/tracing) - to report the progress of
//!   the iterations.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod error;
pub mod numeric;
pub mod vincenty;

pub use angle_sc::{Degrees, Radians};
pub use error::{Error, Result};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
pub use vincenty::{calculate_curve, calculate_destination, calculate_distance};

/// The solution of the inverse geodetic problem: the length of the geodesic
/// between two positions and its azimuth at the start position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCurve {
    /// The geodesic distance.
    distance: Metres,
    /// The initial azimuth, 0 <= azimuth < 360 degrees.
    azimuth: Degrees,
}

impl GeodeticCurve {
    /// Constructor.
    /// * `distance` - the geodesic distance.
    /// * `azimuth` - the initial azimuth.
    #[must_use]
    pub const fn new(distance: Metres, azimuth: Degrees) -> Self {
        Self { distance, azimuth }
    }

    /// The geodesic distance.
    #[must_use]
    pub const fn distance(&self) -> Metres {
        self.distance
    }

    /// The initial azimuth, clockwise from North.
    #[must_use]
    pub const fn azimuth(&self) -> Degrees {
        self.azimuth
    }
}

/// A position on the WGS-84 ellipsoid.
///
/// A convenience wrapper around a `LatLong` that calls the functions in the
/// [`vincenty`] module.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
///
/// let istanbul = Location::new(LatLong::new(Degrees(42.0), Degrees(29.0)));
/// let washington = Location::new(LatLong::new(Degrees(39.0), Degrees(-77.0)));
///
/// let distance_nm = NauticalMiles::from(istanbul.distance_to(&washington));
/// println!("Istanbul-Washington distance: {:?}", distance_nm);
///
/// let curve = istanbul.curve(&washington).unwrap();
/// println!("Istanbul-Washington initial azimuth: {:?}", curve.azimuth().0);
///
/// let position = istanbul.destination(curve.azimuth(), curve.distance()).unwrap();
/// assert!((washington.lat().0 - position.lat().0).abs() < 1.0e-9);
/// assert!((washington.lon().0 - position.lon().0).abs() < 1.0e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    point: LatLong,
}

impl Location {
    /// Constructor.
    /// * `point` - the latitude and longitude of the position.
    #[must_use]
    pub const fn new(point: LatLong) -> Self {
        Self { point }
    }

    /// The latitude and longitude of the position.
    #[must_use]
    pub const fn point(&self) -> &LatLong {
        &self.point
    }

    /// The latitude of the position.
    #[must_use]
    pub fn lat(&self) -> Degrees {
        self.point.lat()
    }

    /// The longitude of the position.
    #[must_use]
    pub fn lon(&self) -> Degrees {
        self.point.lon()
    }

    /// The geodetic curve from this position to `other`.
    /// See [`calculate_curve`].
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateGeometry` if the azimuth is undefined.
    pub fn curve(&self, other: &Self) -> Result<GeodeticCurve> {
        calculate_curve(&self.point, &other.point)
    }

    /// The position at `distance` along the geodesic from this position with
    /// initial `azimuth`. See [`calculate_destination`].
    ///
    /// # Errors
    ///
    /// Returns `Error::NegativeDistance` if `distance` is negative.
    pub fn destination(&self, azimuth: Degrees, distance: Metres) -> Result<Self> {
        calculate_destination(&self.point, azimuth, distance).map(Self::new)
    }

    /// The geodesic distance from this position to `other`.
    /// See [`calculate_distance`].
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Metres {
        calculate_distance(&self.point, &other.point)
    }
}

impl From<LatLong> for Location {
    fn from(point: LatLong) -> Self {
        Self::new(point)
    }
}
