// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use super::{Geocoder, Router};
use crate::{config::RoutingParams,
            error::Error,
            types::{Coordinate, RouteSummary}};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;


/// OpenRouteService client covering both the geocoding and the directions
/// endpoint. Both requests run under the configured timeout; neither is
/// retried.
#[derive(Clone, Debug)]
pub struct OrsClient {
  http:     reqwest::Client,
  api_key:  String,
  base_url: String,
}

impl OrsClient {
  pub fn new(params: &RoutingParams) -> Result<Self, Error> {
    let http =
      reqwest::Client::builder().timeout(Duration::from_secs(
                                  params.timeout_seconds,
                                ))
                                .build()
                                .map_err(|e| Error::provider("routing", e))?;

    Ok(Self { http,
              api_key: params.api_key.clone(),
              base_url: params.base_url.clone(), })
  }
}

#[async_trait]
impl Geocoder for OrsClient {
  async fn geocode(&self, place: &str) -> Result<Coordinate, Error> {
    let url = format!("{}/geocode/search", self.base_url);
    debug!("geocoding '{}'", place);

    let response = self.http
                       .get(&url)
                       .query(&[("api_key", self.api_key.as_str()),
                                ("text", place)])
                       .send()
                       .await
                       .map_err(|e| Error::provider("geocoding", e))?;

    if !response.status().is_success() {
      return Err(Error::provider_status("geocoding", response.status()));
    }

    let geocode: GeocodeResponse =
      response.json()
              .await
              .map_err(|e| Error::provider("geocoding", e))?;

    first_coordinate(geocode, place)
  }
}

#[async_trait]
impl Router for OrsClient {
  async fn driving_route(&self,
                         origin: Coordinate,
                         destination: Coordinate)
                         -> Result<RouteSummary, Error> {
    let url = format!("{}/v2/directions/driving-car/geojson", self.base_url);
    let request =
      DirectionsRequest { coordinates:  [[origin.longitude,
                                          origin.latitude],
                                         [destination.longitude,
                                          destination.latitude]],
                          instructions: true,
                          elevation:    false, };
    debug!("requesting route {} -> {}", origin, destination);

    let response = self.http
                       .post(&url)
                       .header("Authorization", &self.api_key)
                       .json(&request)
                       .send()
                       .await
                       .map_err(|e| Error::provider("routing", e))?;

    if !response.status().is_success() {
      return Err(Error::provider_status("routing", response.status()));
    }

    let directions: DirectionsResponse =
      response.json()
              .await
              .map_err(|e| Error::provider("routing", e))?;

    into_route_summary(directions)
  }
}


/// GeoJSON request body for the directions endpoint. Coordinates are in wire
/// order, `[lon, lat]`.
#[derive(Debug, Serialize)]
struct DirectionsRequest {
  coordinates:  [[f64; 2]; 2],
  instructions: bool,
  elevation:    bool,
}


#[derive(Debug, Deserialize)]
struct GeocodeResponse {
  #[serde(default)]
  features: Vec<PointFeature>,
}

#[derive(Debug, Deserialize)]
struct PointFeature {
  geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
  coordinates: [f64; 2],
}


#[derive(Debug, Deserialize)]
struct DirectionsResponse {
  #[serde(default)]
  features: Vec<RouteFeature>,
}

#[derive(Debug, Deserialize)]
struct RouteFeature {
  geometry:   LineGeometry,
  properties: RouteProperties,
}

#[derive(Debug, Deserialize)]
struct LineGeometry {
  coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct RouteProperties {
  summary: SummaryBlock,
}

#[derive(Debug, Deserialize)]
struct SummaryBlock {
  distance: f64,
  duration: f64,
}


/// First geocoding result wins; zero results is a [`Error::NotFound`].
fn first_coordinate(response: GeocodeResponse,
                    place: &str)
                    -> Result<Coordinate, Error> {
  let feature =
    response.features
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound { place: place.to_owned() })?;

  let [longitude, latitude] = feature.geometry.coordinates;
  Ok(Coordinate::new(latitude, longitude))
}

/// Pulls polyline and summary out of the directions response.
fn into_route_summary(response: DirectionsResponse)
                      -> Result<RouteSummary, Error> {
  let feature = response.features.into_iter().next().ok_or_else(|| {
                  Error::provider("routing", "empty directions response")
                })?;

  let polyline = feature.geometry
                        .coordinates
                        .into_iter()
                        .map(|[longitude, latitude]| {
                          Coordinate::new(latitude, longitude)
                        })
                        .collect::<Vec<_>>();

  if polyline.len() < 2 {
    return Err(Error::provider("routing", "degenerate route geometry"));
  }

  Ok(RouteSummary { distance_meters: feature.properties.summary.distance,
                    duration_seconds: feature.properties.summary.duration,
                    polyline })
}

// fin --------------------------------------------------------------------- //
