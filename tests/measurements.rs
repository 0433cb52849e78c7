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

//! Scenario and property tests of the `compute` function.

use serde::Deserialize;
use via_geodesy::compass::CompassPoint;
use via_geodesy::units::Metres;
use via_geodesy::{
    compute, compute_json, is_within_tolerance, round, Coordinate, Direction, Formula,
    GeodesyError, Options, Units,
};

/// Calculations and their expected results.
/// An empty bearing is the zero distance marker, a direction of "-" means
/// that the direction is omitted.
const SCENARIOS: &str = "\
lat1,lng1,lat2,lng2,formula,units,distance_precision,bearing_precision,direction_precision,distance,bearing,direction
51.509865,-0.118092,40.730610,-73.935242,great-circle,m,0,0,2,5564893,288,W
51.509865,-0.118092,40.730610,-73.935242,rhumb-line,m,0,0,2,5788236,258,W
51.509865,-0.118092,40.730610,-73.935242,great-circle,yd,0,0,2,6085767,288,W
51.509865,-0.118092,40.730610,-73.935242,great-circle,km,2,1,3,5564.89,288.3,WNW
51.509865,-0.118092,40.730610,-73.935242,great-circle,m,0,0,0,5564893,288,-
0,0,0,90,great-circle,m,0,0,1,10007558,90,E
0,179,0,-179,rhumb-line,m,0,0,3,222390,90,E
10,170,-10,-170,rhumb-line,km,1,2,3,3137.1,135.15,SE
60,0,60,-30,great-circle,mi,0,0,3,1027,283,WNW
-33.8688,151.2093,51.5074,-0.1278,great-circle,nm,0,0,2,9176,319,NW
45,45,45,45,rhumb-line,ft,0,0,2,0,,
45,45,45,45,great-circle,m,0,0,0,0,,-
";

#[derive(Debug, Deserialize)]
struct Scenario {
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
    formula: String,
    units: String,
    distance_precision: u32,
    bearing_precision: u32,
    direction_precision: u8,
    distance: f64,
    bearing: Option<f64>,
    direction: String,
}

impl Scenario {
    fn options(&self) -> Options {
        Options {
            units: self.units.parse().unwrap(),
            distance_precision: self.distance_precision,
            bearing_precision: self.bearing_precision,
            direction_precision: self.direction_precision,
            formula: self.formula.parse().unwrap(),
        }
    }
}

fn sample_coordinates() -> Vec<Coordinate> {
    let mut coordinates = Vec::new();
    for lat in (-90..=90).step_by(30) {
        for lng in (-180..=180).step_by(45) {
            coordinates.push(Coordinate::new(f64::from(lat), f64::from(lng)));
        }
    }
    coordinates.push(Coordinate::new(51.509_865, -0.118_092));
    coordinates.push(Coordinate::new(-33.868_8, 151.209_3));
    coordinates
}

#[test]
fn test_scenarios() {
    let mut reader = csv::Reader::from_reader(SCENARIOS.as_bytes());
    let mut count = 0;
    for record in reader.deserialize() {
        let scenario: Scenario = record.unwrap();
        let a = Coordinate::new(scenario.lat1, scenario.lng1);
        let b = Coordinate::new(scenario.lat2, scenario.lng2);
        let options = scenario.options();

        let result = compute(&a, &b, &options).unwrap();
        assert_eq!(scenario.distance, result.distance, "{scenario:?}");
        assert_eq!(scenario.bearing, result.bearing, "{scenario:?}");
        assert_eq!(options.units, result.units);
        assert_eq!(options.formula, result.formula);
        match scenario.direction.as_str() {
            "-" => assert_eq!(None, result.direction, "{scenario:?}"),
            label => assert_eq!(
                label,
                result.direction.unwrap().to_string(),
                "{scenario:?}"
            ),
        }
        count += 1;
    }
    assert_eq!(12, count);
}

#[test]
fn test_out_of_range_latitude() {
    let result = compute(
        &Coordinate::new(190.0, 0.0),
        &Coordinate::new(0.0, 0.0),
        &Options::default(),
    );
    assert_eq!(
        Err(GeodesyError::OutOfRange {
            field: "pointA.lat".to_owned(),
            value: "190".to_owned(),
            range: "[-90, 90]",
        }),
        result
    );
}

#[test]
fn test_each_violation_is_detected() {
    let a = serde_json::json!({"lat": 0.0, "lng": 0.0});
    let cases = [
        (serde_json::json!({"lng": 0.0}), None, "pointB.lat"),
        (serde_json::json!({"lat": 0.0, "lng": "1"}), None, "pointB.lng"),
        (serde_json::json!({"lat": -91.0, "lng": 0.0}), None, "pointB.lat"),
        (serde_json::json!({"lat": 0.0, "lng": 181.0}), None, "pointB.lng"),
        (
            a.clone(),
            Some(serde_json::json!({"units": "league"})),
            "options.units",
        ),
        (
            a.clone(),
            Some(serde_json::json!({"distancePrecision": 16})),
            "options.distancePrecision",
        ),
        (
            a.clone(),
            Some(serde_json::json!({"bearingPrecision": 0.5})),
            "options.bearingPrecision",
        ),
        (
            a.clone(),
            Some(serde_json::json!({"formula": "vincenty"})),
            "options.formula",
        ),
        (
            a.clone(),
            Some(serde_json::json!({"directionPrecision": 5})),
            "options.directionPrecision",
        ),
    ];

    for (b, options, field) in cases {
        let result = compute_json(&a, &b, options.as_ref());
        assert_eq!(field, result.unwrap_err().field());
    }
}

#[test]
fn test_identical_positions_have_no_bearing() {
    for a in sample_coordinates() {
        for formula in [Formula::GreatCircle, Formula::RhumbLine] {
            let options = Options::default().with_formula(formula);
            let result = compute(&a, &a, &options).unwrap();
            assert_eq!(0.0, result.distance);
            assert_eq!(None, result.bearing);
            assert_eq!(Some(Direction::Undetermined), result.direction);
        }
    }
}

#[test]
fn test_distance_bearing_and_direction_ranges() {
    let coordinates = sample_coordinates();
    for formula in [Formula::GreatCircle, Formula::RhumbLine] {
        for precision in 1..=3 {
            let options = Options::default()
                .with_formula(formula)
                .with_precisions(3, 3)
                .with_direction_precision(precision);
            for a in &coordinates {
                for b in &coordinates {
                    let result = compute(a, b, &options).unwrap();
                    assert!(0.0 <= result.distance);
                    if let Some(bearing) = result.bearing {
                        assert!((0.0..360.0).contains(&bearing), "{a:?} {b:?}");
                        let point = result.direction.unwrap().compass_point().unwrap();
                        assert!(CompassPoint::ALL.contains(&point));
                    }
                }
            }
        }
    }
}

#[test]
fn test_unit_round_trip() {
    let a = Coordinate::new(51.509_865, -0.118_092);
    let b = Coordinate::new(40.730_610, -73.935_242);
    let metres = compute(&a, &b, &Options::default().with_precisions(15, 0))
        .unwrap()
        .distance;

    for units in Units::ALL {
        let options = Options::default()
            .with_units(units)
            .with_precisions(15, 0);
        let converted = compute(&a, &b, &options).unwrap().distance;
        assert!(is_within_tolerance(
            metres,
            units.to_metres(converted).0,
            1.0e-6
        ));
        assert!(is_within_tolerance(
            converted,
            units.convert(Metres(metres)),
            1.0e-6
        ));
    }
}

#[test]
fn test_rounding_is_idempotent() {
    let a = Coordinate::new(-33.868_8, 151.209_3);
    let b = Coordinate::new(51.507_4, -0.127_8);
    for precision in 0..=15 {
        let options = Options::default().with_precisions(precision, precision);
        let result = compute(&a, &b, &options).unwrap();
        assert_eq!(result.distance, round(result.distance, precision));
        let bearing = result.bearing.unwrap();
        assert_eq!(bearing, round(bearing, precision));
    }
}

#[test]
fn test_compute_is_repeatable_across_threads() {
    let a = Coordinate::new(51.509_865, -0.118_092);
    let b = Coordinate::new(40.730_610, -73.935_242);
    let options = Options::default().with_precisions(6, 6);
    let expected = compute(&a, &b, &options).unwrap();

    let (a, b, options) = (&a, &b, &options);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    (0..100)
                        .map(|_| compute(a, b, options))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for result in handle.join().unwrap() {
                assert_eq!(expected, result.unwrap());
            }
        }
    });
}
