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

//! The wgs84 module contains the WGS 84 ellipsoid parameters used by
//! Vincenty's formulae.
//!
//! The Semiminor axis is defined directly (rather than derived from the
//! flattening) and the flattening is derived from both axes, so every
//! calculation sees exactly the same values.

use icao_units::si::Metres;

/// The WGS 84 Semimajor axis measured in metres.  
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The WGS 84 Semiminor axis measured in metres.  
/// This is the radius at the poles.
pub const B: Metres = Metres(6_356_752.314_245);

/// The WGS 84 flattening, a ratio: (a - b) / a.
pub const F: f64 = (A.0 - B.0) / A.0;

/// One minus the flattening ratio.
pub const ONE_MINUS_F: f64 = 1.0 - F;

/// The square of the second Eccentricity: (a² - b²) / b².
pub const SQ_2ND_ECCENTRICITY: f64 = (A.0 * A.0 - B.0 * B.0) / (B.0 * B.0);
