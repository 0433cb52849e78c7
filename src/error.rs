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

//! The error module contains the `GeodesyError` returned when a coordinate
//! or an option fails validation.

use thiserror::Error;

/// The reasons that a calculation request is rejected.
///
/// `field` is the dotted path of the offending input, e.g. `pointA.lat` or
/// `options.distancePrecision`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeodesyError {
    /// A coordinate lacks a latitude or longitude.
    #[error("{field} is missing")]
    MissingField { field: String },

    /// A numeric field holds a non-numeric value.
    #[error("{field} is not a number: {value}")]
    NotANumber { field: String, value: String },

    /// A coordinate or precision lies outside of its permitted range.
    #[error("{field} is out of range: {value} is not within {range}")]
    OutOfRange {
        field: String,
        value: String,
        range: &'static str,
    },

    /// An enumerated option holds an unrecognised value.
    #[error("{field} is not supported: {value}, expected one of {expected}")]
    UnsupportedValue {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl GeodesyError {
    /// The dotted path of the input that failed validation.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::NotANumber { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::UnsupportedValue { field, .. } => field,
        }
    }
}
