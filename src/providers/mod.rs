// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

//! External collaborators of the prediction pipeline. Each provider is a
//! black box reachable over HTTP returning JSON; the traits here are the
//! seams the pipeline is wired and tested against, the submodules hold the
//! `reqwest` backed clients.

mod delay;
mod ors;
mod weather;

pub use delay::DelayEndpoint;
pub use ors::OrsClient;
pub use weather::OwmClient;

use crate::{error::Error,
            features::FeaturePayload,
            types::{Coordinate, RouteSummary, WeatherObservation}};

use async_trait::async_trait;


/// Resolves a free-text place name to a coordinate pair. The first provider
/// result wins; provider ranking is trusted.
#[async_trait]
pub trait Geocoder: Send + Sync {
  async fn geocode(&self, place: &str) -> Result<Coordinate, Error>;
}


/// Requests a drivable path between two coordinates. One attempt, no
/// retries.
#[async_trait]
pub trait Router: Send + Sync {
  async fn driving_route(&self,
                         origin: Coordinate,
                         destination: Coordinate)
                         -> Result<RouteSummary, Error>;
}


/// Resolves current weather, either at a named place or at a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync {
  async fn current_by_name(&self,
                           place: &str)
                           -> Result<WeatherObservation, Error>;

  async fn current_at(&self,
                      coordinate: Coordinate)
                      -> Result<WeatherObservation, Error>;
}


/// Posts a feature payload to the delay model and returns the predicted
/// delay in minutes. Callers downgrade failures instead of propagating them.
#[async_trait]
pub trait DelayModel: Send + Sync {
  async fn predict(&self, payload: &FeaturePayload) -> Result<f64, Error>;
}
