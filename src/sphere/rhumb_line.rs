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

//! The `rhumb_line` module calculates the length and bearing of a
//! [rhumb line](https://en.wikipedia.org/wiki/Rhumb_line), a path of constant
//! bearing, between two positions on the surface of a sphere.
//!
//! Latitudes are projected onto a Mercator chart with the inverse
//! [Gudermannian function](https://en.wikipedia.org/wiki/Gudermannian_function),
//! on which a rhumb line is a straight line.

use crate::sphere::PositionDelta;
use crate::trig::{Degrees, Radians};
use contracts::debug_ensures;
use std::f64::consts::{FRAC_PI_4, PI};

/// The smallest projected latitude difference used to calculate the ratio
/// of the latitude difference to the projected latitude difference.
const MIN_DELTA_PSI: f64 = 1.0e-11;

/// Calculate the difference between the projected latitudes of a pair of
/// positions: the inverse Gudermannian of lat2 minus that of lat1.
/// * `delta` - the latitudes of the positions and the differences between them.
///
/// returns zero if both latitudes are on the same pole.
#[must_use]
pub fn calculate_delta_psi(delta: &PositionDelta) -> f64 {
    let delta_psi = libm::log(
        libm::tan(FRAC_PI_4 + 0.5 * delta.lat2.0) / libm::tan(FRAC_PI_4 + 0.5 * delta.lat1.0),
    );
    if delta_psi.is_nan() {
        0.0
    } else {
        delta_psi
    }
}

/// Wrap a longitude difference onto the shorter path across the antimeridian.
/// # Examples
/// ```
/// use via_geodesy::sphere::rhumb_line::wrap_delta_longitude;
/// use via_geodesy::trig::{Degrees, Radians};
///
/// let result = wrap_delta_longitude(Radians::from(Degrees(-358.0)));
/// assert!((Degrees::from(result).0 - 2.0).abs() < 1.0e-12);
/// assert_eq!(Radians(1.0), wrap_delta_longitude(Radians(1.0)));
/// ```
#[must_use]
pub fn wrap_delta_longitude(delta_lng: Radians) -> Radians {
    if libm::fabs(delta_lng.0) > PI {
        if delta_lng.0 > 0.0 {
            Radians(delta_lng.0 - 2.0 * PI)
        } else {
            Radians(delta_lng.0 + 2.0 * PI)
        }
    } else {
        delta_lng
    }
}

/// Calculate the rhumb line distance between a pair of positions.
/// * `delta` - the latitudes of the positions and the differences between them.
///
/// returns the rhumb line distance on the unit sphere in Radians.
#[debug_ensures(0.0 <= ret.0)]
#[must_use]
pub fn calculate_distance(delta: &PositionDelta) -> Radians {
    let delta_psi = calculate_delta_psi(delta);

    // On an East-West course the ratio is 0/0, use cos(lat) instead.
    let q = if libm::fabs(delta_psi) > MIN_DELTA_PSI {
        delta.delta_lat.0 / delta_psi
    } else {
        libm::cos(delta.lat1.0)
    };

    let delta_lng = wrap_delta_longitude(delta.delta_lng).0;
    Radians(libm::sqrt(
        delta.delta_lat.0 * delta.delta_lat.0 + q * q * delta_lng * delta_lng,
    ))
}

/// Calculate the constant bearing of the rhumb line between a pair of positions.
/// * `delta` - the latitudes of the positions and the differences between them.
///
/// returns the bearing clockwise from North, in the range 0 to 360 degrees.
#[debug_ensures((0.0..360.0).contains(&ret.0))]
#[must_use]
pub fn calculate_bearing(delta: &PositionDelta) -> Degrees {
    let delta_psi = calculate_delta_psi(delta);
    let delta_lng = wrap_delta_longitude(delta.delta_lng);
    Degrees::from(Radians(libm::atan2(delta_lng.0, delta_psi))).to_bearing()
}
