// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

//! Turns raw route and weather data into the fixed-shape numeric payload the
//! delay model consumes. Unknown readings never reach the arithmetic: they
//! are excluded from the along-route averages, and aggregation fails rather
//! than emit a payload field that is not a number.

use crate::{error::Error,
            severity::SEVERE_THRESHOLD,
            types::{RouteSummary, WeatherObservation}};

use serde::Serialize;


/// A sampled-point observation with its severity score attached.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredObservation {
  pub observation: WeatherObservation,
  pub severity:    f64,
}


/// The feature vector posted to the delay model. Exactly these eleven fields,
/// all numeric; the model rejects partial payloads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeaturePayload {
  pub distance_km:          f64,
  pub duration_min:         f64,
  pub origin_temp:          f64,
  pub origin_wind:          f64,
  pub dest_temp:            f64,
  pub dest_wind:            f64,
  pub avg_temp_along_route: f64,
  pub avg_wind_along_route: f64,
  pub mean_condition:       f64,
  pub max_condition:        f64,
  pub severe_count:         u32,
}


/// Combines route metrics, endpoint weather and scored sampled-point weather
/// into a [`FeaturePayload`].
///
/// Fails with [`Error::EmptySample`] when no points were sampled and with
/// [`Error::IncompleteObservation`] when an endpoint reading is unknown or
/// no sampled point delivered a known reading for some quantity.
pub fn aggregate(route: &RouteSummary,
                 origin: &WeatherObservation,
                 destination: &WeatherObservation,
                 samples: &[ScoredObservation])
                 -> Result<FeaturePayload, Error> {
  if samples.is_empty() {
    return Err(Error::EmptySample);
  }

  let severities = samples.iter().map(|s| s.severity).collect::<Vec<_>>();

  let mean_condition =
    severities.iter().sum::<f64>() / severities.len() as f64;
  let max_condition = severities.iter().copied().fold(f64::MIN, f64::max);
  let severe_count =
    severities.iter().filter(|s| **s >= SEVERE_THRESHOLD).count() as u32;

  Ok(FeaturePayload {
    distance_km: route.distance_meters / 1_000.0,
    duration_min: route.duration_seconds / 60.0,
    origin_temp: known(origin.temperature_celsius, "temperature", origin)?,
    origin_wind: known(origin.wind_speed_mps, "wind", origin)?,
    dest_temp: known(destination.temperature_celsius,
                     "temperature",
                     destination)?,
    dest_wind: known(destination.wind_speed_mps, "wind", destination)?,
    avg_temp_along_route: mean_along(samples,
                                     |o| o.temperature_celsius,
                                     "temperature")?,
    avg_wind_along_route: mean_along(samples,
                                     |o| o.wind_speed_mps,
                                     "wind")?,
    mean_condition,
    max_condition,
    severe_count,
  })
}

/// Unwraps an endpoint reading or reports which quantity is missing where.
fn known(reading: Option<f64>,
         quantity: &'static str,
         observation: &WeatherObservation)
         -> Result<f64, Error> {
  reading.ok_or_else(|| {
           Error::IncompleteObservation { quantity,
                                          site: observation.site
                                                           .to_string() }
         })
}

/// Mean over the known sampled readings of one quantity. Unknown readings
/// are excluded; if every reading is unknown there is nothing to average.
fn mean_along(samples: &[ScoredObservation],
              reading: impl Fn(&WeatherObservation) -> Option<f64>,
              quantity: &'static str)
              -> Result<f64, Error> {
  let known = samples.iter()
                     .filter_map(|s| reading(&s.observation))
                     .collect::<Vec<_>>();

  if known.is_empty() {
    return Err(Error::IncompleteObservation { quantity,
                                              site: String::from("route \
                                                                  samples") });
  }

  Ok(known.iter().sum::<f64>() / known.len() as f64)
}

// fin --------------------------------------------------------------------- //
