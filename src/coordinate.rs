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

//! The coordinate module contains the `Coordinate` type: a position on the
//! surface of the Earth as a latitude and longitude in decimal degrees.
//!
//! Coordinates are validated before a calculation, either from typed values
//! with `Coordinate::validate` or from loosely typed
//! [serde_json](https://crates.io/crates/serde_json) values with
//! `Coordinate::from_json`.

pub mod geo;

use crate::error::GeodesyError;
use crate::trig::{Degrees, Radians};
use crate::Validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifies which of the two positions of a calculation is being validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The start position.
    A,
    /// The end position.
    B,
}

impl Endpoint {
    /// The name of the endpoint in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "pointA",
            Self::B => "pointB",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A position as a latitude and longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Validate for Coordinate {
    /// Test whether a `Coordinate` is valid.
    /// I.e. whether the latitude lies in the range: -90.0 <= lat <= 90.0
    /// and the longitude lies in the range: -180.0 <= lng <= 180.0
    fn is_valid(&self) -> bool {
        Degrees::is_latitude(self.lat) && Degrees::is_longitude(self.lng)
    }
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The latitude in Radians.
    #[must_use]
    pub fn lat_radians(&self) -> Radians {
        Radians::from(Degrees(self.lat))
    }

    /// The longitude in Radians.
    #[must_use]
    pub fn lng_radians(&self) -> Radians {
        Radians::from(Degrees(self.lng))
    }

    /// Whether two coordinates are the same position on the sphere.
    /// All longitudes meet at the poles, and longitudes -180 and 180 are the
    /// same meridian.
    /// # Examples
    /// ```
    /// use via_geodesy::Coordinate;
    ///
    /// assert!(Coordinate::new(0.0, 180.0).is_same_position(&Coordinate::new(0.0, -180.0)));
    /// assert!(Coordinate::new(90.0, 0.0).is_same_position(&Coordinate::new(90.0, 50.0)));
    /// assert!(!Coordinate::new(89.0, 0.0).is_same_position(&Coordinate::new(89.0, 50.0)));
    /// ```
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_same_position(&self, other: &Self) -> bool {
        self.lat == other.lat
            && (libm::fabs(self.lat) == 90.0
                || self.lng == other.lng
                || (libm::fabs(self.lng) == 180.0 && libm::fabs(other.lng) == 180.0))
    }

    /// Validate the `Coordinate` as the given endpoint of a calculation.
    /// # Errors
    /// `NotANumber` if the latitude or longitude is NaN,
    /// `OutOfRange` if the latitude or longitude is outside of its range.
    ///
    /// # Examples
    /// ```
    /// use via_geodesy::coordinate::{Coordinate, Endpoint};
    ///
    /// assert!(Coordinate::new(90.0, -180.0).validate(Endpoint::A).is_ok());
    ///
    /// let error = Coordinate::new(190.0, 0.0).validate(Endpoint::A).unwrap_err();
    /// assert_eq!("pointA.lat", error.field());
    /// ```
    pub fn validate(&self, endpoint: Endpoint) -> Result<(), GeodesyError> {
        self.check(endpoint.name())
    }

    /// Check the latitude and longitude, reporting errors against `prefix`.
    pub(crate) fn check(&self, prefix: &str) -> Result<(), GeodesyError> {
        check_degrees(
            self.lat,
            &format!("{prefix}.lat"),
            Degrees::is_latitude,
            "[-90, 90]",
        )?;
        check_degrees(
            self.lng,
            &format!("{prefix}.lng"),
            Degrees::is_longitude,
            "[-180, 180]",
        )
    }

    /// Parse and validate a `Coordinate` from a JSON object with numeric
    /// `lat` and `lng` members.
    /// * `value` - the JSON value.
    /// * `endpoint` - the endpoint of the calculation, used in error messages.
    ///
    /// # Errors
    /// `MissingField` if `lat` or `lng` is absent,
    /// `NotANumber` if `lat` or `lng` is not a JSON number,
    /// `OutOfRange` if `lat` or `lng` is outside of its range.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use via_geodesy::coordinate::{Coordinate, Endpoint};
    ///
    /// let a = Coordinate::from_json(&json!({"lat": 51.5, "lng": -0.1}), Endpoint::A).unwrap();
    /// assert_eq!(Coordinate::new(51.5, -0.1), a);
    ///
    /// let error = Coordinate::from_json(&json!({"lat": 51.5}), Endpoint::B).unwrap_err();
    /// assert_eq!("pointB.lng is missing", error.to_string());
    /// ```
    pub fn from_json(value: &Value, endpoint: Endpoint) -> Result<Self, GeodesyError> {
        let lat = number_member(value, endpoint, "lat")?;
        let lng = number_member(value, endpoint, "lng")?;
        let coordinate = Self::new(lat, lng);
        coordinate.validate(endpoint)?;
        Ok(coordinate)
    }
}

/// Check that a value in degrees is a number within range.
fn check_degrees(
    value: f64,
    field: &str,
    in_range: fn(f64) -> bool,
    range: &'static str,
) -> Result<(), GeodesyError> {
    if value.is_nan() {
        Err(GeodesyError::NotANumber {
            field: field.to_owned(),
            value: value.to_string(),
        })
    } else if in_range(value) {
        Ok(())
    } else {
        Err(GeodesyError::OutOfRange {
            field: field.to_owned(),
            value: value.to_string(),
            range,
        })
    }
}

/// Read a numeric member of a JSON object.
fn number_member(value: &Value, endpoint: Endpoint, name: &str) -> Result<f64, GeodesyError> {
    let field = format!("{endpoint}.{name}");
    let member = value
        .get(name)
        .ok_or_else(|| GeodesyError::MissingField {
            field: field.clone(),
        })?;
    member.as_f64().ok_or_else(|| GeodesyError::NotANumber {
        field,
        value: member.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinate_traits() {
        let a = Coordinate::new(51.509_865, -0.118_092);
        let a_clone = a.clone();
        assert!(a_clone == a);
        assert!(a.is_valid());

        print!("Coordinate: {:?}", a);
    }

    #[test]
    fn test_coordinate_radians() {
        let a = Coordinate::new(-90.0, 180.0);
        assert_eq!(-std::f64::consts::FRAC_PI_2, a.lat_radians().0);
        assert_eq!(std::f64::consts::PI, a.lng_radians().0);
    }

    #[test]
    fn test_is_same_position() {
        let a = Coordinate::new(51.509_865, -0.118_092);
        assert!(a.is_same_position(&a));
        assert!(!a.is_same_position(&Coordinate::new(51.509_865, -0.118_093)));

        let east = Coordinate::new(10.0, 180.0);
        let west = Coordinate::new(10.0, -180.0);
        assert!(east.is_same_position(&west));
        assert!(west.is_same_position(&east));
        assert!(!east.is_same_position(&Coordinate::new(-10.0, -180.0)));

        let south_pole = Coordinate::new(-90.0, 0.0);
        assert!(south_pole.is_same_position(&Coordinate::new(-90.0, 123.0)));
        assert!(!south_pole.is_same_position(&Coordinate::new(90.0, 0.0)));
    }

    #[test]
    fn test_validate_limits() {
        for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            assert!(Coordinate::new(lat, lng).validate(Endpoint::A).is_ok());
        }
    }

    #[test]
    fn test_validate_out_of_range() {
        let result = Coordinate::new(190.0, 0.0).validate(Endpoint::A);
        assert_eq!(
            Err(GeodesyError::OutOfRange {
                field: "pointA.lat".to_owned(),
                value: "190".to_owned(),
                range: "[-90, 90]",
            }),
            result
        );

        let result = Coordinate::new(-90.01, 0.0).validate(Endpoint::B);
        assert_eq!("pointB.lat", result.unwrap_err().field());

        let result = Coordinate::new(0.0, 180.01).validate(Endpoint::A);
        assert_eq!(
            Err(GeodesyError::OutOfRange {
                field: "pointA.lng".to_owned(),
                value: "180.01".to_owned(),
                range: "[-180, 180]",
            }),
            result
        );

        let result = Coordinate::new(0.0, f64::NEG_INFINITY).validate(Endpoint::B);
        assert_eq!("pointB.lng", result.unwrap_err().field());
    }

    #[test]
    fn test_validate_nan() {
        let result = Coordinate::new(f64::NAN, 0.0).validate(Endpoint::A);
        assert_eq!(
            Err(GeodesyError::NotANumber {
                field: "pointA.lat".to_owned(),
                value: "NaN".to_owned(),
            }),
            result
        );

        let result = Coordinate::new(0.0, f64::NAN).validate(Endpoint::B);
        assert!(matches!(result, Err(GeodesyError::NotANumber { .. })));
    }

    #[test]
    fn test_from_json() {
        let value = json!({"lat": 40, "lng": -73.935_242});
        let result = Coordinate::from_json(&value, Endpoint::B).unwrap();
        assert_eq!(Coordinate::new(40.0, -73.935_242), result);
    }

    #[test]
    fn test_from_json_missing_field() {
        let result = Coordinate::from_json(&json!({"lng": 0.0}), Endpoint::A);
        assert_eq!(
            Err(GeodesyError::MissingField {
                field: "pointA.lat".to_owned()
            }),
            result
        );

        let result = Coordinate::from_json(&json!({"lat": 0.0, "lon": 0.0}), Endpoint::B);
        assert_eq!(
            Err(GeodesyError::MissingField {
                field: "pointB.lng".to_owned()
            }),
            result
        );

        let result = Coordinate::from_json(&json!(null), Endpoint::A);
        assert!(matches!(result, Err(GeodesyError::MissingField { .. })));
    }

    #[test]
    fn test_from_json_not_a_number() {
        let result = Coordinate::from_json(&json!({"lat": "51.5", "lng": 0.0}), Endpoint::A);
        assert_eq!(
            Err(GeodesyError::NotANumber {
                field: "pointA.lat".to_owned(),
                value: "\"51.5\"".to_owned(),
            }),
            result
        );

        for lng in [json!(null), json!(true), json!([1.0]), json!({"deg": 1.0})] {
            let result = Coordinate::from_json(&json!({"lat": 0.0, "lng": lng}), Endpoint::B);
            assert!(matches!(result, Err(GeodesyError::NotANumber { .. })));
        }
    }

    #[test]
    fn test_from_json_out_of_range() {
        let result = Coordinate::from_json(&json!({"lat": 190, "lng": 0}), Endpoint::A);
        assert!(matches!(result, Err(GeodesyError::OutOfRange { .. })));
    }

    #[test]
    fn test_serde_coordinate() {
        let a = Coordinate::new(40.730_61, -73.935_242);
        let serialized = serde_json::to_string(&a).unwrap();
        assert_eq!(r#"{"lat":40.73061,"lng":-73.935242}"#, serialized);
        let deserialized: Coordinate = serde_json::from_str(&serialized).unwrap();
        assert_eq!(a, deserialized);
    }
}
