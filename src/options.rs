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

//! The options module contains `Options`, the configuration of a
//! calculation: the distance formula, the units of the result, the number of
//! decimal places of the distance and bearing and the granularity of the
//! compass direction.
//!
//! `Options` may be built in code, deserialized with
//! [serde](https://crates.io/crates/serde) (missing fields take their default
//! values) or parsed strictly from a JSON value with `Options::from_json`.

use crate::compass::CompassPrecision;
use crate::error::GeodesyError;
use crate::units::Units;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The maximum number of decimal places of a distance or bearing.
pub const MAX_PRECISION: u32 = 15;

const PRECISION_RANGE: &str = "integers [0, 15]";

/// The path along which a distance and bearing are calculated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// The shortest path, calculated with the haversine formula.
    #[default]
    #[serde(rename = "great-circle")]
    GreatCircle,
    /// The path of constant bearing.
    #[serde(rename = "rhumb-line")]
    RhumbLine,
}

impl Formula {
    /// The codes of the supported formulae, as used in error messages.
    pub const CODES: &'static str = "great-circle, rhumb-line";

    /// The code of the formula, e.g. "rhumb-line".
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GreatCircle => "great-circle",
            Self::RhumbLine => "rhumb-line",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Formula {
    type Err = GeodesyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "great-circle" => Ok(Self::GreatCircle),
            "rhumb-line" => Ok(Self::RhumbLine),
            _ => Err(GeodesyError::UnsupportedValue {
                field: "options.formula".to_owned(),
                value: s.to_owned(),
                expected: Self::CODES,
            }),
        }
    }
}

/// The configuration of a calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// The units of the distance, default metres.
    pub units: Units,
    /// The number of decimal places of the distance: 0 to 15, default 0.
    pub distance_precision: u32,
    /// The number of decimal places of the bearing: 0 to 15, default 0.
    pub bearing_precision: u32,
    /// The granularity of the compass direction, default 2.
    /// 0: none, 1: cardinal, 2: intercardinal, 3: secondary intercardinal.
    pub direction_precision: u8,
    /// The distance and bearing formula, default great circle.
    pub formula: Formula,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            units: Units::default(),
            distance_precision: 0,
            bearing_precision: 0,
            direction_precision: 2,
            formula: Formula::default(),
        }
    }
}

impl Options {
    /// Builder style setter for the units.
    #[must_use]
    pub const fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Builder style setter for the formula.
    #[must_use]
    pub const fn with_formula(mut self, formula: Formula) -> Self {
        self.formula = formula;
        self
    }

    /// Builder style setter for the distance and bearing precisions.
    #[must_use]
    pub const fn with_precisions(mut self, distance: u32, bearing: u32) -> Self {
        self.distance_precision = distance;
        self.bearing_precision = bearing;
        self
    }

    /// Builder style setter for the direction precision.
    #[must_use]
    pub const fn with_direction_precision(mut self, direction_precision: u8) -> Self {
        self.direction_precision = direction_precision;
        self
    }

    /// The compass granularity, None if the direction is disabled.
    /// # Errors
    /// `UnsupportedValue` if `direction_precision` is not 0, 1, 2 or 3.
    pub fn compass_precision(&self) -> Result<Option<CompassPrecision>, GeodesyError> {
        match self.direction_precision {
            0 => Ok(None),
            value => CompassPrecision::try_from(value).map(Some),
        }
    }

    /// Validate the options.
    /// # Errors
    /// `OutOfRange` if a precision is greater than `MAX_PRECISION`,
    /// `UnsupportedValue` if `direction_precision` is not 0, 1, 2 or 3.
    ///
    /// # Examples
    /// ```
    /// use via_geodesy::Options;
    ///
    /// assert!(Options::default().validate().is_ok());
    /// assert!(Options::default().with_precisions(16, 0).validate().is_err());
    /// assert!(Options::default().with_direction_precision(4).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), GeodesyError> {
        check_precision(self.distance_precision, "options.distancePrecision")?;
        check_precision(self.bearing_precision, "options.bearingPrecision")?;
        self.compass_precision().map(|_| ())
    }

    /// Parse and validate `Options` from a JSON object.
    /// Absent or null members take their default values, a null `value`
    /// yields the default `Options`.
    /// Values are strictly typed: numeric strings are not converted to numbers.
    /// # Errors
    /// `UnsupportedValue` if `units`, `formula` or `directionPrecision` is not
    /// one of its supported values,
    /// `NotANumber` if a precision is not a JSON number,
    /// `OutOfRange` if a precision is not an integer in the range 0 to 15.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use via_geodesy::{Formula, Options, Units};
    ///
    /// let options = Options::from_json(&json!({"units": "nm", "formula": "rhumb-line"})).unwrap();
    /// assert_eq!(Units::NauticalMiles, options.units);
    /// assert_eq!(Formula::RhumbLine, options.formula);
    /// assert_eq!(2, options.direction_precision);
    ///
    /// assert!(Options::from_json(&json!({"directionPrecision": "2"})).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, GeodesyError> {
        let mut options = Self::default();
        if value.is_null() {
            return Ok(options);
        }
        if !value.is_object() {
            return Err(GeodesyError::UnsupportedValue {
                field: "options".to_owned(),
                value: value.to_string(),
                expected: "an object",
            });
        }

        if let Some(units) = member(value, "units") {
            options.units = parse_code(units, "options.units", Units::CODES)?;
        }
        if let Some(precision) = member(value, "distancePrecision") {
            options.distance_precision = parse_precision(precision, "options.distancePrecision")?;
        }
        if let Some(precision) = member(value, "bearingPrecision") {
            options.bearing_precision = parse_precision(precision, "options.bearingPrecision")?;
        }
        if let Some(precision) = member(value, "directionPrecision") {
            options.direction_precision = integral(precision, 3)
                .and_then(|p| u8::try_from(p).ok())
                .filter(|&p| p == 0 || CompassPrecision::try_from(p).is_ok())
                .ok_or_else(|| CompassPrecision::unsupported(precision.to_string()))?;
        }
        if let Some(formula) = member(value, "formula") {
            options.formula = parse_code(formula, "options.formula", Formula::CODES)?;
        }

        options.validate()?;
        Ok(options)
    }
}

fn check_precision(precision: u32, field: &str) -> Result<(), GeodesyError> {
    if precision <= MAX_PRECISION {
        Ok(())
    } else {
        Err(GeodesyError::OutOfRange {
            field: field.to_owned(),
            value: precision.to_string(),
            range: PRECISION_RANGE,
        })
    }
}

/// A present, non null member of a JSON object.
fn member<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get(name).filter(|v| !v.is_null())
}

/// Parse a JSON string holding a units or formula code.
fn parse_code<T>(value: &Value, field: &str, expected: &'static str) -> Result<T, GeodesyError>
where
    T: FromStr<Err = GeodesyError>,
{
    value
        .as_str()
        .ok_or_else(|| GeodesyError::UnsupportedValue {
            field: field.to_owned(),
            value: value.to_string(),
            expected,
        })?
        .parse()
}

/// The value of a JSON number if it is an integer from 0 to `max`,
/// written either as an integer or as a float, e.g. `2` or `2.0`.
#[allow(clippy::float_cmp)]
fn integral(value: &Value, max: u32) -> Option<u32> {
    let number = value.as_f64()?;
    (0..=max).find(|&p| f64::from(p) == number)
}

/// Parse a JSON number holding a precision.
fn parse_precision(value: &Value, field: &str) -> Result<u32, GeodesyError> {
    if !value.is_number() {
        return Err(GeodesyError::NotANumber {
            field: field.to_owned(),
            value: value.to_string(),
        });
    }

    integral(value, MAX_PRECISION).ok_or_else(|| GeodesyError::OutOfRange {
            field: field.to_owned(),
            value: value.to_string(),
            range: PRECISION_RANGE,
        })
}
