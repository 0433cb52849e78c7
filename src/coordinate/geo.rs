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

//! The `geo` module converts between `Coordinate`s and
//! [geo-types](https://crates.io/crates/geo-types) positions.
//! Note: `geo-types` and [GeoJSON](https://geojson.org/) order positions as
//! **x: longitude, y: latitude.**

use crate::coordinate::Coordinate;
use crate::error::GeodesyError;

impl TryFrom<&geo_types::Coord> for Coordinate {
    type Error = GeodesyError;

    /// Attempt to convert a `geo_types::Coord` to a `Coordinate`.
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        let coordinate = Self::new(item.y, item.x);
        coordinate.check("coord")?;
        Ok(coordinate)
    }
}

impl From<&Coordinate> for geo_types::Coord {
    fn from(a: &Coordinate) -> Self {
        Self { x: a.lng, y: a.lat }
    }
}

impl TryFrom<&geo_types::Point> for Coordinate {
    type Error = GeodesyError;

    /// Attempt to convert a `geo_types::Point` to a `Coordinate`.
    fn try_from(item: &geo_types::Point) -> Result<Self, Self::Error> {
        Self::try_from(&item.0)
    }
}

impl From<&Coordinate> for geo_types::Point {
    fn from(a: &Coordinate) -> Self {
        Self::new(a.lng, a.lat)
    }
}
