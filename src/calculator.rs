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

//! The calculator module contains the `compute` function, which validates a
//! calculation request and assembles its `Measurement`.

use crate::compass::Direction;
use crate::coordinate::{Coordinate, Endpoint};
use crate::error::GeodesyError;
use crate::options::{Formula, Options};
use crate::round;
use crate::sphere;
use crate::trig::Degrees;
use crate::units::Units;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// The distance, bearing and compass direction of one position from another.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// The distance, rounded to `Options::distance_precision` decimal places.
    pub distance: f64,
    /// The units of the distance.
    pub units: Units,
    /// The bearing in degrees, rounded to `Options::bearing_precision`
    /// decimal places; None if the distance is zero.
    pub bearing: Option<f64>,
    /// The formula used to calculate the distance and bearing.
    pub formula: Formula,
    /// The compass direction; None if `Options::direction_precision` is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// Validate the positions and the options of a calculation.
fn validate(a: &Coordinate, b: &Coordinate, options: &Options) -> Result<(), GeodesyError> {
    a.validate(Endpoint::A)?;
    b.validate(Endpoint::B)?;
    options.validate()
}

/// Calculate the distance, bearing and compass direction of point b from point a.
/// * `a`, `b` - the start and end positions.
/// * `options` - the formula, units and precisions of the calculation.
///
/// The bearing and direction are not calculated if the distance is zero.
///
/// # Errors
/// A `GeodesyError` describing the first invalid position or option.
///
/// # Examples
/// ```
/// use via_geodesy::{compute, Coordinate, Formula, Options, Units};
///
/// let london = Coordinate::new(51.509_865, -0.118_092);
/// let new_york = Coordinate::new(40.730_610, -73.935_242);
/// let options = Options::default()
///     .with_formula(Formula::RhumbLine)
///     .with_units(Units::Kilometers)
///     .with_precisions(1, 1);
///
/// let result = compute(&london, &new_york, &options).unwrap();
/// assert_eq!(5788.2, result.distance);
/// assert_eq!(Some(258.0), result.bearing);
/// assert_eq!("W", result.direction.unwrap().to_string());
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(formula = %options.formula, units = %options.units))]
pub fn compute(
    a: &Coordinate,
    b: &Coordinate,
    options: &Options,
) -> Result<Measurement, GeodesyError> {
    if let Err(error) = validate(a, b, options) {
        debug!(%error, "rejected calculation");
        return Err(error);
    }
    let compass_precision = options.compass_precision()?;

    let distance = options
        .units
        .convert(sphere::calculate_distance(options.formula, a, b));

    #[allow(clippy::float_cmp)]
    let (bearing, direction) = if distance == 0.0 {
        (None, compass_precision.map(|_| Direction::Undetermined))
    } else {
        let bearing = sphere::calculate_bearing(options.formula, a, b);
        let bearing = Degrees(round(bearing.0, options.bearing_precision)).to_bearing();
        (
            Some(bearing.0),
            compass_precision.map(|precision| Direction::Point(precision.point(bearing))),
        )
    };

    let measurement = Measurement {
        distance: round(distance, options.distance_precision),
        units: options.units,
        bearing,
        formula: options.formula,
        direction,
    };
    debug!(
        distance = measurement.distance,
        bearing = ?measurement.bearing,
        direction = ?measurement.direction,
        "calculated measurement"
    );
    Ok(measurement)
}

/// Calculate the distance, bearing and compass direction of point b from
/// point a, where the positions and options are loosely typed JSON values.
/// * `a`, `b` - JSON objects with numeric `lat` and `lng` members.
/// * `options` - an optional JSON object, see `Options::from_json`.
///
/// # Errors
/// A `GeodesyError` describing the first missing, non-numeric or invalid
/// member of the positions or options.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use via_geodesy::{compute_json, GeodesyError};
///
/// let a = json!({"lat": 51.509_865, "lng": -0.118_092});
/// let b = json!({"lat": 40.730_610, "lng": -73.935_242});
/// let result = compute_json(&a, &b, Some(&json!({"units": "yd"}))).unwrap();
/// assert_eq!(6_085_767.0, result.distance);
///
/// let result = compute_json(&json!({"lat": 190, "lng": 0}), &b, None);
/// assert!(matches!(result, Err(GeodesyError::OutOfRange { .. })));
/// ```
pub fn compute_json(
    a: &Value,
    b: &Value,
    options: Option<&Value>,
) -> Result<Measurement, GeodesyError> {
    let parse = || -> Result<(Coordinate, Coordinate, Options), GeodesyError> {
        Ok((
            Coordinate::from_json(a, Endpoint::A)?,
            Coordinate::from_json(b, Endpoint::B)?,
            options.map_or_else(|| Ok(Options::default()), Options::from_json)?,
        ))
    };

    match parse() {
        Ok((a, b, options)) => compute(&a, &b, &options),
        Err(error) => {
            debug!(%error, "rejected calculation");
            Err(error)
        }
    }
}
