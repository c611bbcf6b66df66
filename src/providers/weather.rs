// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use super::WeatherSource;
use crate::{config::WeatherParams,
            error::Error,
            types::{Coordinate, Site, WeatherObservation}};

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;


/// OpenWeatherMap client. Requests metric units; missing sub-fields in the
/// provider response become `None` on the observation, never a failure.
#[derive(Clone, Debug)]
pub struct OwmClient {
  http:     reqwest::Client,
  api_key:  String,
  base_url: String,
}

impl OwmClient {
  pub fn new(params: &WeatherParams) -> Result<Self, Error> {
    let http =
      reqwest::Client::builder().timeout(Duration::from_secs(
                                  params.timeout_seconds,
                                ))
                                .build()
                                .map_err(|e| Error::provider("weather", e))?;

    Ok(Self { http,
              api_key: params.api_key.clone(),
              base_url: params.base_url.clone(), })
  }

  async fn fetch(&self,
                 query: &[(&str, &str)],
                 site: Site)
                 -> Result<WeatherObservation, Error> {
    let url = format!("{}/weather", self.base_url);

    let response = self.http
                       .get(&url)
                       .query(query)
                       .query(&[("appid", self.api_key.as_str()),
                                ("units", "metric")])
                       .send()
                       .await
                       .map_err(|e| Error::provider("weather", e))?;

    if !response.status().is_success() {
      return Err(Error::provider_status("weather", response.status()));
    }

    let weather: WeatherResponse =
      response.json()
              .await
              .map_err(|e| Error::provider("weather", e))?;

    Ok(into_observation(site, weather))
  }
}

#[async_trait]
impl WeatherSource for OwmClient {
  async fn current_by_name(&self,
                           place: &str)
                           -> Result<WeatherObservation, Error> {
    debug!("fetching weather for '{}'", place);
    self.fetch(&[("q", place)], Site::Place(place.to_owned())).await
  }

  async fn current_at(&self,
                      coordinate: Coordinate)
                      -> Result<WeatherObservation, Error> {
    debug!("fetching weather at {}", coordinate);
    let latitude = coordinate.latitude.to_string();
    let longitude = coordinate.longitude.to_string();

    self.fetch(&[("lat", latitude.as_str()), ("lon", longitude.as_str())],
               Site::Point(coordinate))
        .await
  }
}


#[derive(Debug, Deserialize)]
struct WeatherResponse {
  #[serde(default)]
  weather: Vec<ConditionEntry>,
  main:    Option<MainBlock>,
  wind:    Option<WindBlock>,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
  description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
  temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
  speed: Option<f64>,
}


/// An empty condition list or an absent temperature or wind block map to the
/// unknown sentinel on the observation.
fn into_observation(site: Site,
                    response: WeatherResponse)
                    -> WeatherObservation {
  WeatherObservation {
    site,
    condition: response.weather.into_iter().next().and_then(|w| w.description),
    temperature_celsius: response.main.and_then(|m| m.temp),
    wind_speed_mps: response.wind.and_then(|w| w.speed),
  }
}

// fin --------------------------------------------------------------------- //
