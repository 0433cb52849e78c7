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

//! The trig module contains the angle newtypes used by the distance and
//! bearing calculations together with their range tests.

#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

/// The conversion factor from Degrees to Radians.
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// The conversion factor from Radians to Degrees.
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

impl Degrees {
    /// Test whether a value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a valid longitude.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }

    /// Test whether a value is a valid bearing.
    /// I.e. whether it lies in the range: 0.0 <= value <= 360.0
    #[must_use]
    pub fn is_bearing(value: f64) -> bool {
        (0.0..=360.0).contains(&value)
    }

    /// Normalise a Degrees value into a bearing in the range: 0.0 <= value < 360.0
    /// # Examples
    /// ```
    /// use via_geodesy::trig::Degrees;
    ///
    /// assert_eq!(270.0, Degrees(-90.0).to_bearing().0);
    /// assert_eq!(0.0, Degrees(0.0).to_bearing().0);
    /// assert_eq!(180.0, Degrees(180.0).to_bearing().0);
    /// assert_eq!(359.0, Degrees(-1.0).to_bearing().0);
    /// assert_eq!(288.31, Degrees(288.31).to_bearing().0);
    /// assert_eq!(0.0, Degrees(360.0).to_bearing().0);
    /// ```
    #[must_use]
    pub fn to_bearing(self) -> Self {
        // bearings already in range are returned unchanged, bit for bit
        let value = if self.0 < 0.0 { self.0 + 360.0 } else { self.0 };
        // -0.0 and values a rounding error below 360 both belong at north.
        if value == 0.0 || 360.0 <= value {
            Self(0.0)
        } else {
            Self(value)
        }
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use via_geodesy::trig::{Degrees, Radians};
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0 * RAD2DEG)
    }
}

impl Neg for Degrees {
    type Output = Self;

    /// An implementation of Neg for Degrees, i.e. -angle.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Degrees> for Radians {
    /// Construct an angle in Radians from an angle in Degrees.
    /// # Examples
    /// ```
    /// use via_geodesy::trig::{Degrees, Radians};
    ///
    /// let arg = Degrees(-90.0);
    /// let answer = Radians::from(arg);
    /// assert_eq!(-std::f64::consts::FRAC_PI_2, answer.0);
    /// ```
    fn from(a: Degrees) -> Self {
        Self(a.0 * DEG2RAD)
    }
}

impl Neg for Radians {
    type Output = Self;

    /// An implementation of Neg for Radians, i.e. -angle.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
