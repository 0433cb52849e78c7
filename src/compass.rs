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

//! The compass module maps bearings onto the points of a
//! [compass rose](https://en.wikipedia.org/wiki/Points_of_the_compass).
//!
//! A `CompassPrecision` selects how many points the compass has:
//! the 4 cardinal points, the 8 cardinal and intercardinal points or all
//! 16 points including the secondary intercardinal points.

use crate::error::GeodesyError;
use crate::trig::Degrees;
use serde::{Serialize, Serializer};
use std::fmt;

/// The granularity of a compass direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompassPrecision {
    /// N, E, S, W.
    Cardinal = 1,
    /// N, NE, E, SE, S, SW, W, NW.
    Intercardinal = 2,
    /// All 16 points.
    SecondaryIntercardinal = 3,
}

impl CompassPrecision {
    /// The number of points on the compass.
    #[must_use]
    pub const fn sectors(self) -> usize {
        match self {
            Self::Cardinal => 4,
            Self::Intercardinal => 8,
            Self::SecondaryIntercardinal => 16,
        }
    }

    pub(crate) fn unsupported(value: String) -> GeodesyError {
        GeodesyError::UnsupportedValue {
            field: "options.directionPrecision".to_owned(),
            value,
            expected: "0, 1, 2, 3",
        }
    }

    /// The nearest compass point to a bearing at this precision.
    /// * `bearing` - the bearing in the range 0 to 360 degrees.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn point(self, bearing: Degrees) -> CompassPoint {
        let sectors = self.sectors();
        #[allow(clippy::cast_precision_loss)]
        let sector_width = 360.0 / sectors as f64;
        let step = CompassPoint::ALL.len() / sectors;
        let sector = libm::round(bearing.0 / sector_width) as usize;
        CompassPoint::ALL[(sector * step) % CompassPoint::ALL.len()]
    }
}

impl TryFrom<u8> for CompassPrecision {
    type Error = GeodesyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Cardinal),
            2 => Ok(Self::Intercardinal),
            3 => Ok(Self::SecondaryIntercardinal),
            _ => Err(Self::unsupported(value.to_string())),
        }
    }
}

/// The 16 points of the compass, clockwise from North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
}

impl CompassPoint {
    /// All of the compass points in clockwise order from North.
    pub const ALL: [Self; 16] = [
        Self::North,
        Self::NorthNorthEast,
        Self::NorthEast,
        Self::EastNorthEast,
        Self::East,
        Self::EastSouthEast,
        Self::SouthEast,
        Self::SouthSouthEast,
        Self::South,
        Self::SouthSouthWest,
        Self::SouthWest,
        Self::WestSouthWest,
        Self::West,
        Self::WestNorthWest,
        Self::NorthWest,
        Self::NorthNorthWest,
    ];

    /// The abbreviation of the compass point, e.g. "NNE".
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthNorthEast => "NNE",
            Self::NorthEast => "NE",
            Self::EastNorthEast => "ENE",
            Self::East => "E",
            Self::EastSouthEast => "ESE",
            Self::SouthEast => "SE",
            Self::SouthSouthEast => "SSE",
            Self::South => "S",
            Self::SouthSouthWest => "SSW",
            Self::SouthWest => "SW",
            Self::WestSouthWest => "WSW",
            Self::West => "W",
            Self::WestNorthWest => "WNW",
            Self::NorthWest => "NW",
            Self::NorthNorthWest => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CompassPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The compass direction of a `Measurement`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The compass point nearest to the bearing.
    Point(CompassPoint),
    /// The positions coincide, so there is no direction.
    Undetermined,
}

impl Direction {
    /// The compass point, None if the direction is undetermined.
    #[must_use]
    pub const fn compass_point(self) -> Option<CompassPoint> {
        match self {
            Self::Point(point) => Some(point),
            Self::Undetermined => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(point) => fmt::Display::fmt(point, f),
            Self::Undetermined => Ok(()),
        }
    }
}

impl Serialize for Direction {
    /// Serialize a `Direction` as its abbreviation, an empty string if undetermined.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Point(point) => point.serialize(serializer),
            Self::Undetermined => serializer.serialize_str(""),
        }
    }
}

/// Calculate the compass point of a bearing.
/// * `bearing` - the bearing in the range 0 to 360 degrees.
/// * `precision` - the compass granularity: 1, 2 or 3.
///
/// # Errors
/// `UnsupportedValue` if `precision` is not 1, 2 or 3,
/// `OutOfRange` if `bearing` is not in the range 0 to 360 degrees.
///
/// # Examples
/// ```
/// use via_geodesy::compass::{calculate_compass_point, CompassPoint};
/// use via_geodesy::trig::Degrees;
///
/// assert_eq!(CompassPoint::West, calculate_compass_point(Degrees(288.0), 2).unwrap());
/// assert_eq!(CompassPoint::WestNorthWest, calculate_compass_point(Degrees(288.0), 3).unwrap());
/// assert!(calculate_compass_point(Degrees(288.0), 0).is_err());
/// assert!(calculate_compass_point(Degrees(-1.0), 1).is_err());
/// ```
pub fn calculate_compass_point(bearing: Degrees, precision: u8) -> Result<CompassPoint, GeodesyError> {
    let precision = CompassPrecision::try_from(precision)?;
    if Degrees::is_bearing(bearing.0) {
        Ok(precision.point(bearing))
    } else {
        Err(GeodesyError::OutOfRange {
            field: "bearing".to_owned(),
            value: bearing.0.to_string(),
            range: "[0, 360]",
        })
    }
}
