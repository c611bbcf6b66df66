// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use std::fmt;


#[derive(Clone, Copy, Debug, PartialEq)]
/// A geographic position. Both provider APIs speak `[lon, lat]` on the wire;
/// this type always carries latitude first to keep the two from being mixed
/// up inside the app.
pub struct Coordinate {
  pub latitude:  f64,
  pub longitude: f64,
}

impl Coordinate {
  pub fn new(latitude: f64, longitude: f64) -> Self {
    Self { latitude,
           longitude }
  }
}

impl fmt::Display for Coordinate {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "[{:.4}, {:.4}]", self.latitude, self.longitude)
  }
}


#[derive(Clone, Debug, PartialEq)]
/// A driving route as returned by the routing provider: the full path
/// geometry plus the summary metrics. Lives for one prediction cycle.
pub struct RouteSummary {
  pub distance_meters:  f64,
  pub duration_seconds: f64,
  pub polyline:         Vec<Coordinate>,
}


#[derive(Clone, Debug, PartialEq)]
/// Where a weather observation was taken.
pub enum Site {
  Place(String),
  Point(Coordinate),
}

impl fmt::Display for Site {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Place(name) => write!(f, "{}", name),
      Self::Point(coordinate) => write!(f, "{}", coordinate),
    }
  }
}


#[derive(Clone, Debug, PartialEq)]
/// Current weather at one site. Sub-fields the provider did not deliver are
/// `None`, which is distinct from any legitimate zero reading.
pub struct WeatherObservation {
  pub site:                Site,
  pub condition:           Option<String>,
  pub temperature_celsius: Option<f64>,
  pub wind_speed_mps:      Option<f64>,
}

impl WeatherObservation {
  /// True if the provider delivered no usable sub-field at all.
  pub fn is_empty(&self) -> bool {
    self.condition.is_none()
    && self.temperature_celsius.is_none()
    && self.wind_speed_mps.is_none()
  }
}


#[derive(Clone, Copy, Debug, PartialEq)]
/// Outcome of the delay model call. `Unavailable` is the one downgraded
/// failure in the whole cycle; everything else aborts.
pub enum Prediction {
  Minutes(f64),
  Unavailable,
}

// fin --------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use super::{Coordinate, Prediction, Site, WeatherObservation};

  use pretty_assertions::assert_eq;


  #[test]
  fn coordinate_test() {
    let coordinate = Coordinate::new(28.557163, 77.163665);

    assert_eq!(coordinate.latitude, 28.557163);
    assert_eq!(coordinate.longitude, 77.163665);
    assert_eq!(coordinate.to_string(), "[28.5572, 77.1637]");
  }

  #[test]
  fn site_test() {
    let place = Site::Place(String::from("paris"));
    assert_eq!(place.to_string(), "paris");

    let point = Site::Point(Coordinate::new(48.8566, 2.3522));
    assert_eq!(point.to_string(), "[48.8566, 2.3522]");
  }

  #[test]
  fn observation_test() {
    let observation =
      WeatherObservation { site:                Site::Place("lyon".into()),
                           condition:           None,
                           temperature_celsius: None,
                           wind_speed_mps:      None, };
    assert!(observation.is_empty());

    let observation =
      WeatherObservation { site:                Site::Place("lyon".into()),
                           condition:           Some("mist".into()),
                           temperature_celsius: Some(0.0),
                           wind_speed_mps:      None, };
    assert!(!observation.is_empty());
  }

  #[test]
  fn prediction_test() {
    assert_eq!(Prediction::Minutes(12.5), Prediction::Minutes(12.5));
    assert_ne!(Prediction::Minutes(0.0), Prediction::Unavailable);
  }
}
