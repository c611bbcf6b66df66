// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use thiserror::Error;


/// Everything that can go wrong during a prediction cycle. All variants abort
/// the cycle and surface to the user; the delay model call is the single
/// exception and is downgraded by its caller instead of propagated.
#[derive(Debug, Error)]
pub enum Error {
  /// Missing user input, raised before any network call is made.
  #[error("both origin and destination are required")]
  Validation,

  /// Non-success HTTP status or transport failure from one of the providers.
  #[error("{provider} provider error: {message}")]
  Provider {
    provider: &'static str,
    message:  String,
  },

  /// The geocoding provider returned zero results for the given place.
  #[error("no geocoding results for '{place}'")]
  NotFound { place: String },

  /// Feature aggregation over zero sampled points would divide by zero.
  #[error("cannot aggregate features over an empty route sample")]
  EmptySample,

  /// A payload field cannot be filled with a number: an endpoint observation
  /// is missing a reading, or no sampled point delivered a known one.
  #[error("no usable {quantity} reading for {site}")]
  IncompleteObservation {
    quantity: &'static str,
    site:     String,
  },
}

impl Error {
  /// Shorthand for wrapping a transport or decoding error from a provider.
  pub fn provider(provider: &'static str,
                  err: impl std::fmt::Display)
                  -> Self {
    Self::Provider { provider,
                     message: err.to_string() }
  }

  /// Shorthand for a provider answering with a non-success HTTP status.
  pub fn provider_status(provider: &'static str,
                         status: reqwest::StatusCode)
                         -> Self {
    Self::Provider { provider,
                     message: format!("request failed with status {}",
                                      status) }
  }
}

// fin --------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use super::Error;

  use pretty_assertions::assert_eq;


  #[test]
  fn display_test() {
    assert_eq!(Error::Validation.to_string(),
               "both origin and destination are required");

    assert_eq!(Error::provider("weather", "connection reset").to_string(),
               "weather provider error: connection reset");

    assert_eq!(Error::NotFound { place: "atlantis".into() }.to_string(),
               "no geocoding results for 'atlantis'");

    assert_eq!(Error::EmptySample.to_string(),
               "cannot aggregate features over an empty route sample");

    assert_eq!(Error::IncompleteObservation { quantity: "temperature",
                                              site:     "paris".into(), }
                                            .to_string(),
               "no usable temperature reading for paris");
  }

  #[test]
  fn provider_status_test() {
    let err =
      Error::provider_status("routing",
                             reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(err.to_string(),
               "routing provider error: request failed with status 500 \
                Internal Server Error");
  }
}
