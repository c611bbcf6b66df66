// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use crate::{config::AppConfig,
            error::Error,
            features::{self, ScoredObservation},
            providers::{DelayEndpoint, DelayModel, Geocoder, OrsClient,
                        OwmClient, Router, WeatherSource},
            report::CycleReport,
            sampler,
            severity,
            types::Prediction};

use futures::future;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};


/// Runs one prediction cycle end to end: geocode both endpoints, fetch the
/// route, sample weather along it, aggregate the feature payload, ask the
/// delay model. Everything up to the model call is fail-fast; the model call
/// alone is downgraded to an unavailable prediction.
pub struct Pipeline {
  geocoder:     Box<dyn Geocoder>,
  router:       Box<dyn Router>,
  weather:      Box<dyn WeatherSource>,
  delay:        Box<dyn DelayModel>,
  sample_count: usize,
}

impl Pipeline {
  pub fn new(geocoder: Box<dyn Geocoder>,
             router: Box<dyn Router>,
             weather: Box<dyn WeatherSource>,
             delay: Box<dyn DelayModel>,
             sample_count: usize)
             -> Self {
    Self { geocoder,
           router,
           weather,
           delay,
           sample_count }
  }

  /// Wires the live provider clients from the app configuration.
  pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
    Ok(Self::new(Box::new(OrsClient::new(&config.routing)?),
                 Box::new(OrsClient::new(&config.routing)?),
                 Box::new(OwmClient::new(&config.weather)?),
                 Box::new(DelayEndpoint::new(&config.predictor)?),
                 config.sampling.sample_count))
  }

  /// One user-triggered cycle. Place names are trimmed and lowercased
  /// before anything else; blank input aborts before any network call.
  pub async fn run(&self,
                   origin: &str,
                   destination: &str)
                   -> Result<CycleReport, Error> {
    let origin = origin.trim().to_lowercase();
    let destination = destination.trim().to_lowercase();

    if origin.is_empty() || destination.is_empty() {
      return Err(Error::Validation);
    }

    info!("geocoding '{}' and '{}'", origin, destination);
    let (origin_coordinate, destination_coordinate) =
      tokio::try_join!(self.geocoder.geocode(&origin),
                       self.geocoder.geocode(&destination))?;

    info!("requesting driving route {} -> {}",
          origin_coordinate,
          destination_coordinate);
    let route = self.router
                    .driving_route(origin_coordinate, destination_coordinate)
                    .await?;

    let samples = sampler::sample_route(&route.polyline, self.sample_count);
    info!("sampling weather at {} of {} route points",
          samples.len(),
          route.polyline.len());

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
      ProgressStyle::with_template(
        "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}/{len:3}")
      .unwrap()
      .progress_chars("#|-"));

    // one fan-out group: endpoint weather plus every sampled point; the
    // whole group fails if any member fails
    let weather = self.weather.as_ref();
    let fetches = samples.iter().map(|&coordinate| {
                                  let pb = pb.clone();
                                  async move {
                                    let observation =
                                      weather.current_at(coordinate).await?;
                                    pb.inc(1);
                                    Ok::<_, Error>(observation)
                                  }
                                });

    let (origin_weather, destination_weather, point_weather) =
      tokio::try_join!(weather.current_by_name(&origin),
                       weather.current_by_name(&destination),
                       future::try_join_all(fetches))?;
    pb.finish_and_clear();

    let route_weather =
      point_weather.into_iter()
                   .map(|observation| {
                     let severity =
                       observation.condition
                                  .as_deref()
                                  .map(severity::score)
                                  .unwrap_or(severity::DEFAULT_SEVERITY);

                     ScoredObservation { observation,
                                         severity }
                   })
                   .collect::<Vec<_>>();

    let payload = features::aggregate(&route,
                                      &origin_weather,
                                      &destination_weather,
                                      &route_weather)?;

    info!("requesting delay prediction...");
    let prediction = match self.delay.predict(&payload).await {
      Ok(minutes) => Prediction::Minutes(minutes),
      Err(err) => {
        // the one recoverable failure: the report is still worth rendering
        // without the model's estimate
        error!("delay prediction unavailable: {}", err);
        Prediction::Unavailable
      }
    };

    Ok(CycleReport { origin,
                     destination,
                     route,
                     origin_weather,
                     destination_weather,
                     route_weather,
                     prediction })
  }
}

// fin --------------------------------------------------------------------- //
