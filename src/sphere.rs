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

//! The sphere module contains types and functions for calculating distances
//! and bearings between positions on the surface of a spherical Earth.
//!
//! The `great_circle` and `rhumb_line` modules calculate distances on the
//! surface of the unit sphere in `Radians`.
//! Physical distances are calculated by multiplying by the radius of the
//! Earth, see `calculate_distance`.

pub mod great_circle;
pub mod rhumb_line;

use crate::coordinate::Coordinate;
use crate::options::Formula;
use crate::trig::{Degrees, Radians};
use crate::units::{Metres, EARTH_MEAN_RADIUS};
use crate::Validate;
use contracts::{debug_ensures, debug_requires};

/// The latitudes of a pair of positions and the differences between them,
/// in Radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionDelta {
    /// The latitude of the start position.
    pub lat1: Radians,
    /// The latitude of the end position.
    pub lat2: Radians,
    /// The latitude of the end position minus the latitude of the start.
    pub delta_lat: Radians,
    /// The longitude of the end position minus the longitude of the start.
    /// Note: it is **not** wrapped around the antimeridian.
    pub delta_lng: Radians,
}

impl PositionDelta {
    /// Construct a `PositionDelta` from point a to point b.
    #[must_use]
    pub fn new(a: &Coordinate, b: &Coordinate) -> Self {
        let lat1 = a.lat_radians();
        let lat2 = b.lat_radians();
        Self {
            lat1,
            lat2,
            delta_lat: Radians(lat2.0 - lat1.0),
            delta_lng: Radians(b.lng_radians().0 - a.lng_radians().0),
        }
    }
}

/// Calculate the distance of point b from point a along the path of the
/// given formula.
/// * `formula` - great circle or rhumb line.
/// * `a`, `b` - the start and end positions.
///
/// returns the distance in Metres, exactly zero if the positions are the same,
/// see `Coordinate::is_same_position`.
#[debug_requires(a.is_valid() && b.is_valid())]
#[debug_ensures(0.0 <= ret.0)]
#[must_use]
pub fn calculate_distance(formula: Formula, a: &Coordinate, b: &Coordinate) -> Metres {
    if a.is_same_position(b) {
        return Metres(0.0);
    }

    let delta = PositionDelta::new(a, b);
    let distance = match formula {
        Formula::GreatCircle => great_circle::calculate_distance(&delta),
        Formula::RhumbLine => rhumb_line::calculate_distance(&delta),
    };
    Metres(EARTH_MEAN_RADIUS.0 * distance.0)
}

/// Calculate the bearing of point b from point a along the path of the
/// given formula.
/// * `formula` - great circle or rhumb line.
/// * `a`, `b` - the start and end positions.
///
/// returns the initial bearing clockwise from North, in the range 0 to 360 degrees.
#[debug_requires(a.is_valid() && b.is_valid())]
#[debug_ensures((0.0..360.0).contains(&ret.0))]
#[must_use]
pub fn calculate_bearing(formula: Formula, a: &Coordinate, b: &Coordinate) -> Degrees {
    let delta = PositionDelta::new(a, b);
    match formula {
        Formula::GreatCircle => great_circle::calculate_bearing(&delta),
        Formula::RhumbLine => rhumb_line::calculate_bearing(&delta),
    }
}
