// Copyright (c) 2024 Via Technology Ltd.

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

//! The `great_circle` module calculates the length and initial bearing of the
//! shortest path between two positions on the surface of a sphere.

use crate::clamp;
use crate::sphere::PositionDelta;
use crate::trig::{Degrees, Radians};
use contracts::debug_ensures;

/// Calculate the great circle distance between a pair of positions using the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// * `delta` - the latitudes of the positions and the differences between them.
///
/// returns the great circle distance on the unit sphere in Radians.
#[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0))]
#[must_use]
pub fn calculate_distance(delta: &PositionDelta) -> Radians {
    let sin_half_delta_lat = libm::sin(0.5 * delta.delta_lat.0);
    let sin_half_delta_lng = libm::sin(0.5 * delta.delta_lng.0);
    let haversine = sin_half_delta_lat * sin_half_delta_lat
        + libm::cos(delta.lat1.0)
            * libm::cos(delta.lat2.0)
            * sin_half_delta_lng
            * sin_half_delta_lng;

    // rounding errors may take the haversine just outside of its range
    let haversine = clamp(haversine, 0.0, 1.0);
    Radians(2.0 * libm::atan2(libm::sqrt(haversine), libm::sqrt(1.0 - haversine)))
}

/// Calculate the initial bearing of the great circle path between a pair of
/// positions.
/// * `delta` - the latitudes of the positions and the differences between them.
///
/// returns the bearing clockwise from North, in the range 0 to 360 degrees.
#[debug_ensures((0.0..360.0).contains(&ret.0))]
#[must_use]
pub fn calculate_bearing(delta: &PositionDelta) -> Degrees {
    let (sin_lat1, cos_lat1) = libm::sincos(delta.lat1.0);
    let (sin_lat2, cos_lat2) = libm::sincos(delta.lat2.0);
    let (sin_delta_lng, cos_delta_lng) = libm::sincos(delta.delta_lng.0);

    let y = sin_delta_lng * cos_lat2;
    let x = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lng;
    Degrees::from(Radians(libm::atan2(y, x))).to_bearing()
}
