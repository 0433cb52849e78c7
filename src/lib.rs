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

//! This library calculates the distance, initial bearing and compass direction
//! between two positions on the surface of a spherical Earth.
//!
//! Distances are calculated along either a great circle, using the
//! [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula), or a
//! [rhumb line](https://en.wikipedia.org/wiki/Rhumb_line), using the inverse
//! Gudermannian function.
//! The Earth is modelled as a sphere with a mean radius of 6 371 009 metres,
//! see `units::EARTH_MEAN_RADIUS`.
//!
//! The `compute` function validates a pair of `Coordinate`s and a set of
//! `Options` and returns a `Measurement`; `compute_json` does the same for
//! loosely typed [serde_json](https://crates.io/crates/serde_json) values.
//!
//! # Examples
//! ```
//! use via_geodesy::{compute, Coordinate, Options};
//!
//! let london = Coordinate::new(51.509_865, -0.118_092);
//! let new_york = Coordinate::new(40.730_610, -73.935_242);
//!
//! let result = compute(&london, &new_york, &Options::default()).unwrap();
//! assert_eq!(5_564_893.0, result.distance);
//! assert_eq!(Some(288.0), result.bearing);
//! assert_eq!("W", result.direction.unwrap().to_string());
//! ```
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract)
//! on the internal formulae.
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.

pub mod calculator;
pub mod compass;
pub mod coordinate;
pub mod error;
pub mod options;
pub mod sphere;
pub mod trig;
pub mod units;

pub use calculator::{compute, compute_json, Measurement};
pub use compass::{CompassPoint, Direction};
pub use coordinate::Coordinate;
pub use error::GeodesyError;
pub use options::{Formula, Options};
pub use units::Units;

use contracts::{debug_ensures, debug_requires};

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a pair of values are within tolerance of each other
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value are within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}

/// The magnitude below which every integer written with up to 15 digits
/// survives a round trip through an `f64` and its shortest representation.
const SHIFT_LIMIT: f64 = 1.0e15;

/// Round a value to a number of decimal places.
/// * `value` the value to round.
/// * `precision` the number of decimal places.
///
/// Ties are rounded half away from zero.
/// The decimal point is shifted in the shortest decimal representation of the
/// value, so values such as 1.005 round as they are written rather than as
/// their nearest binary approximation.
/// Non-finite values are returned unchanged, as are values that already have
/// 15 or more significant digits before the `precision` decimal place: an
/// `f64` cannot carry the digits beyond them.
/// Rounding is idempotent: `round(round(x, p), p) == round(x, p)`.
///
/// # Examples
/// ```
/// use via_geodesy::round;
///
/// assert_eq!(1.01, round(1.005, 2));
/// assert_eq!(-1.01, round(-1.005, 2));
/// assert_eq!(3.0, round(2.5, 0));
/// assert_eq!(1234.57, round(1234.5678, 2));
/// ```
#[must_use]
pub fn round(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted = format!("{value}e{precision}")
        .parse::<f64>()
        .unwrap_or_else(|_| value * libm::pow(10.0, f64::from(precision)));
    if SHIFT_LIMIT <= libm::fabs(shifted) {
        return value;
    }
    let rounded = libm::round(shifted);
    format!("{rounded}e-{precision}")
        .parse::<f64>()
        .unwrap_or_else(|_| rounded / libm::pow(10.0, f64::from(precision)))
}
