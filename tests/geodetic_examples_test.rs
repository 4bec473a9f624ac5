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

extern crate vincenty_wgs84;

use angle_sc::is_within_tolerance;
use serde::Deserialize;
use vincenty_wgs84::{
    calculate_curve, calculate_destination, calculate_distance, Degrees, LatLong, Metres,
};

const FILENAME: &str = "data/geodetic_examples.csv";

/// A geodesic between a pair of positions with its azimuth and length.
#[derive(Debug, Deserialize)]
struct GeodeticExample {
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    azimuth: f64,
    distance: f64,
}

#[test]
fn test_geodetic_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<GeodeticExample>() {
        let record = result?;

        let a = LatLong::new(Degrees(record.lat1), Degrees(record.lon1));
        let b = LatLong::new(Degrees(record.lat2), Degrees(record.lon2));

        // Inverse
        let curve = calculate_curve(&a, &b)?;
        assert!(
            is_within_tolerance(record.distance, curve.distance().0, 1.0e-4),
            "distance: {record:?} {curve:?}"
        );
        assert!(
            is_within_tolerance(record.azimuth, curve.azimuth().0, 1.0e-8),
            "azimuth: {record:?} {curve:?}"
        );
        assert_eq!(curve.distance(), calculate_distance(&a, &b));

        // Direct
        let c = calculate_destination(&a, Degrees(record.azimuth), Metres(record.distance))?;
        assert!(
            is_within_tolerance(record.lat2, c.lat().0, 1.0e-8),
            "latitude: {record:?} {c:?}"
        );
        assert!(
            is_within_tolerance(record.lon2, c.lon().0, 1.0e-8),
            "longitude: {record:?} {c:?}"
        );

        count += 1;
    }
    assert_eq!(40, count);

    Ok(())
}
