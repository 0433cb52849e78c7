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

//! The units module converts distances from `Metres`, the base unit of the
//! calculations, into the units requested by the caller.

use crate::error::GeodesyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The Metres newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Metres(pub f64);

/// The mean radius of the Earth used by the spherical Earth model.
pub const EARTH_MEAN_RADIUS: Metres = Metres(6_371_009.0);

/// The distance units that a result may be expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    #[default]
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "yd")]
    Yards,
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "nm")]
    NauticalMiles,
}

impl Units {
    /// All of the supported units.
    pub const ALL: [Self; 6] = [
        Self::Meters,
        Self::Kilometers,
        Self::Feet,
        Self::Yards,
        Self::Miles,
        Self::NauticalMiles,
    ];

    /// The codes of the supported units, as used in error messages.
    pub const CODES: &'static str = "m, km, ft, yd, mi, nm";

    /// The code of the units, e.g. "km".
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Feet => "ft",
            Self::Yards => "yd",
            Self::Miles => "mi",
            Self::NauticalMiles => "nm",
        }
    }

    /// The number of these units in a metre.
    #[must_use]
    pub const fn per_metre(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => 0.001,
            Self::Feet => 3.280_84,
            Self::Yards => 1.0936,
            Self::Miles => 0.000_621_371,
            Self::NauticalMiles => 0.000_539_957,
        }
    }

    /// Convert a distance in `Metres` into these units.
    /// # Examples
    /// ```
    /// use via_geodesy::units::{Metres, Units};
    ///
    /// assert_eq!(1.5, Units::Kilometers.convert(Metres(1500.0)));
    /// assert_eq!(1500.0, Units::Meters.convert(Metres(1500.0)));
    /// ```
    #[must_use]
    pub fn convert(self, distance: Metres) -> f64 {
        match self {
            Self::Meters => distance.0,
            _ => distance.0 * self.per_metre(),
        }
    }

    /// Convert a distance in these units back into `Metres`.
    #[must_use]
    pub fn to_metres(self, distance: f64) -> Metres {
        match self {
            Self::Meters => Metres(distance),
            _ => Metres(distance / self.per_metre()),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Units {
    type Err = GeodesyError;

    /// Parse a units code, e.g. "nm".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|units| units.code() == s)
            .ok_or_else(|| GeodesyError::UnsupportedValue {
                field: "options.units".to_owned(),
                value: s.to_owned(),
                expected: Self::CODES,
            })
    }
}
