// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use super::DelayModel;
use crate::{config::PredictorParams, error::Error, features::FeaturePayload};

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;


/// Client for the remote delay prediction service. Errors raised here are
/// downgraded to an unavailable prediction by the pipeline; a flaky model
/// service never blocks the route and weather report.
#[derive(Clone, Debug)]
pub struct DelayEndpoint {
  http:     reqwest::Client,
  base_url: String,
}

impl DelayEndpoint {
  pub fn new(params: &PredictorParams) -> Result<Self, Error> {
    let http = reqwest::Client::builder().timeout(Duration::from_secs(
                                           params.timeout_seconds,
                                         ))
                                         .build()
                                         .map_err(|e| {
                                           Error::provider("prediction", e)
                                         })?;

    Ok(Self { http,
              base_url: params.base_url.clone(), })
  }
}

#[async_trait]
impl DelayModel for DelayEndpoint {
  async fn predict(&self, payload: &FeaturePayload) -> Result<f64, Error> {
    let url = format!("{}/predict-delay", self.base_url);
    debug!("posting feature payload to {}", url);

    let response = self.http
                       .post(&url)
                       .json(payload)
                       .send()
                       .await
                       .map_err(|e| Error::provider("prediction", e))?;

    if !response.status().is_success() {
      return Err(Error::provider_status("prediction", response.status()));
    }

    let prediction: PredictionResponse =
      response.json()
              .await
              .map_err(|e| Error::provider("prediction", e))?;

    Ok(prediction.delay_minutes)
  }
}


/// The service also returns a `status` field; only the delay is consumed.
#[derive(Debug, Deserialize)]
struct PredictionResponse {
  delay_minutes: f64,
}

// fin --------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use super::PredictionResponse;

  use pretty_assertions::assert_eq;


  #[test]
  fn prediction_response_test() {
    let response: PredictionResponse = serde_json::from_str(
      r#"{ "delay_minutes": 23.75, "status": "success" }"#,
    ).unwrap();

    assert_eq!(response.delay_minutes, 23.75);
  }
}
