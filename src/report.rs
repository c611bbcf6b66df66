// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use crate::{config::MapParams,
            features::ScoredObservation,
            types::{Coordinate, Prediction, RouteSummary,
                    WeatherObservation}};

use itertools::Itertools;


/// Everything a completed prediction cycle produced, ready for rendering.
/// Pure data plus formatting; no network, no state.
#[derive(Clone, Debug)]
pub struct CycleReport {
  pub origin:              String,
  pub destination:         String,
  pub route:               RouteSummary,
  pub origin_weather:      WeatherObservation,
  pub destination_weather: WeatherObservation,
  pub route_weather:       Vec<ScoredObservation>,
  pub prediction:          Prediction,
}

impl CycleReport {
  /// Formats the report as one human-readable block: route metrics, the
  /// predicted delay and the weather along the route.
  pub fn render(&self) -> String {
    let origin = capitalize(&self.origin);
    let destination = capitalize(&self.destination);

    let delay = match self.prediction {
      Prediction::Minutes(minutes) => format_minutes(minutes),
      Prediction::Unavailable => String::from("unavailable"),
    };

    let points = self.route_weather
                     .iter()
                     .enumerate()
                     .map(|(i, sample)| {
                       format!("Point {}: {}",
                               i + 1,
                               weather_line(&sample.observation))
                     })
                     .join("\n");

    format!("Route Information\n\
             From: {origin} -> {destination}\n\
             Distance: {distance:.2} km\n\
             \n\
             Predicted Delay\n\
             {delay}\n\
             \n\
             Route Weather Conditions\n\
             Source ({origin}): {source}\n\
             {points}\n\
             Destination ({destination}): {dest}",
            origin = origin,
            destination = destination,
            distance = self.route.distance_meters / 1_000.0,
            delay = delay,
            source = weather_line(&self.origin_weather),
            points = points,
            dest = weather_line(&self.destination_weather))
  }
}


/// Formats a delay in minutes as "H hour(s) M minute(s)", omitting zero
/// components and pluralizing only above 1.
pub fn format_minutes(minutes: f64) -> String {
  let hours = (minutes / 60.0).floor() as i64;
  let remainder = (minutes % 60.0).round() as i64;

  if hours > 0 && remainder > 0 {
    format!("{} hour{} {} minute{}",
            hours,
            plural(hours),
            remainder,
            plural(remainder))
  } else if hours > 0 {
    format!("{} hour{}", hours, plural(hours))
  } else {
    format!("{} minute{}", remainder, plural(remainder))
  }
}

fn plural(n: i64) -> &'static str {
  if n > 1 {
    "s"
  } else {
    ""
  }
}

/// Place names are normalized to lowercase on input; re-capitalize the first
/// letter for display.
fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn weather_line(observation: &WeatherObservation) -> String {
  if observation.is_empty() {
    return String::from("weather data not available");
  }

  format!("{}, {} °C, wind {} m/s",
          observation.condition.as_deref().unwrap_or("unknown"),
          reading(observation.temperature_celsius),
          reading(observation.wind_speed_mps))
}

fn reading(value: Option<f64>) -> String {
  value.map(|v| format!("{:.1}", v))
       .unwrap_or_else(|| String::from("n/a"))
}


/// Handle on the map widget state. The widget itself is an external
/// collaborator; this owns the single "current route" overlay, which is
/// removed and re-added exactly once per successful cycle.
#[derive(Clone, Debug)]
pub struct MapView {
  center: [f64; 2],
  zoom:   u8,
  route:  Option<Vec<Coordinate>>,
}

impl MapView {
  pub fn new(params: MapParams) -> Self {
    Self { center: params.center,
           zoom:   params.zoom,
           route:  None, }
  }

  pub fn center(&self) -> [f64; 2] {
    self.center
  }

  pub fn zoom(&self) -> u8 {
    self.zoom
  }

  pub fn route(&self) -> Option<&[Coordinate]> {
    self.route.as_deref()
  }

  /// Replaces the current overlay: the old polyline is removed before the
  /// new one is installed.
  pub fn set_route(&mut self, polyline: Vec<Coordinate>) {
    self.route.take();
    self.route = Some(polyline);
  }

  /// Bounding box of the current overlay as (southwest, northeast), for
  /// fitting the view to the route.
  pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
    let route = self.route.as_ref()?;
    let first = route.first()?;

    let mut southwest = *first;
    let mut northeast = *first;
    for point in route.iter().skip(1) {
      southwest.latitude = southwest.latitude.min(point.latitude);
      southwest.longitude = southwest.longitude.min(point.longitude);
      northeast.latitude = northeast.latitude.max(point.latitude);
      northeast.longitude = northeast.longitude.max(point.longitude);
    }

    Some((southwest, northeast))
  }
}

// fin --------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use super::{capitalize, format_minutes, CycleReport, MapView};
  use crate::{config::MapParams,
              features::ScoredObservation,
              types::{Coordinate, Prediction, RouteSummary, Site,
                      WeatherObservation}};

  use indoc::indoc;
  use pretty_assertions::assert_eq;
  use wildmatch::WildMatch;


  fn observation(site: Site,
                 condition: &str,
                 temp: f64,
                 wind: f64)
                 -> WeatherObservation {
    WeatherObservation { site,
                         condition: Some(condition.to_owned()),
                         temperature_celsius: Some(temp),
                         wind_speed_mps: Some(wind), }
  }

  fn report() -> CycleReport {
    let polyline = vec![Coordinate::new(48.85, 2.35),
                        Coordinate::new(47.00, 3.50),
                        Coordinate::new(45.76, 4.83)];
    let point = Coordinate::new(47.0, 3.5);

    CycleReport {
      origin: String::from("paris"),
      destination: String::from("lyon"),
      route: RouteSummary { distance_meters:  392_410.0,
                            duration_seconds: 14_100.0,
                            polyline },
      origin_weather: observation(Site::Place("paris".into()),
                                  "light rain",
                                  12.3,
                                  4.1),
      destination_weather: observation(Site::Place("lyon".into()),
                                       "clear sky",
                                       18.0,
                                       5.0),
      route_weather: vec![ScoredObservation {
                            observation: observation(Site::Point(point),
                                                     "mist",
                                                     10.0,
                                                     2.0),
                            severity:    1.0,
                          }],
      prediction: Prediction::Minutes(150.0),
    }
  }

  #[test]
  fn format_minutes_test() {
    assert_eq!(format_minutes(0.0), "0 minute");
    assert_eq!(format_minutes(1.0), "1 minute");
    assert_eq!(format_minutes(2.0), "2 minutes");
    assert_eq!(format_minutes(23.4), "23 minutes");
    assert_eq!(format_minutes(60.0), "1 hour");
    assert_eq!(format_minutes(61.2), "1 hour 1 minute");
    assert_eq!(format_minutes(120.0), "2 hours");
    assert_eq!(format_minutes(125.4), "2 hours 5 minutes");
  }

  #[test]
  fn capitalize_test() {
    assert_eq!(capitalize("paris"), "Paris");
    assert_eq!(capitalize("new delhi"), "New delhi");
    assert_eq!(capitalize(""), "");
  }

  #[test]
  fn render_test() {
    let expected = indoc! {"
      Route Information
      From: Paris -> Lyon
      Distance: 392.41 km

      Predicted Delay
      2 hours 30 minutes

      Route Weather Conditions
      Source (Paris): light rain, 12.3 °C, wind 4.1 m/s
      Point 1: mist, 10.0 °C, wind 2.0 m/s
      Destination (Lyon): clear sky, 18.0 °C, wind 5.0 m/s"};

    assert_eq!(report().render(), expected);
  }

  #[test]
  fn render_unavailable_test() {
    let mut report = report();
    report.prediction = Prediction::Unavailable;
    report.origin_weather.condition = None;
    report.origin_weather.temperature_celsius = None;
    report.origin_weather.wind_speed_mps = None;

    let rendered = report.render();

    assert!(WildMatch::new("*Predicted Delay\nunavailable*")
              .matches(&rendered));
    assert!(WildMatch::new("*Source (Paris): weather data not available*")
              .matches(&rendered));
  }

  #[test]
  fn map_view_test() {
    let mut view = MapView::new(MapParams { center: [20.0, 0.0],
                                            zoom:   2, });

    assert_eq!(view.center(), [20.0, 0.0]);
    assert_eq!(view.zoom(), 2);
    assert!(view.route().is_none());
    assert!(view.bounds().is_none());

    view.set_route(vec![Coordinate::new(48.85, 2.35),
                        Coordinate::new(45.76, 4.83)]);
    assert_eq!(view.route().unwrap().len(), 2);

    // a new cycle fully replaces the previous overlay
    view.set_route(vec![Coordinate::new(1.0, 1.0),
                        Coordinate::new(2.0, -1.0),
                        Coordinate::new(0.5, 3.0)]);
    assert_eq!(view.route().unwrap().len(), 3);

    let (southwest, northeast) = view.bounds().unwrap();
    assert_eq!(southwest, Coordinate::new(0.5, -1.0));
    assert_eq!(northeast, Coordinate::new(2.0, 3.0));
  }
}
