// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use clap::Parser;
use eyre::Result;
use serde::Deserialize;
use std::fs;


#[derive(Clone, Debug, Parser, PartialEq)]
#[clap(author, version, about)]
/// Uses the `clap` crate to parse runtime parameters from the command line.
pub struct CommandLineArgs {
  /// Set path for config file
  #[clap(short, long, default_value = "./conf/delvaux.toml")]
  pub config_path: String,
  /// Origin place name
  pub origin:      String,
  /// Destination place name
  pub destination: String,
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Deserialized from config file. All provider credentials and endpoints are
/// injected here; nothing is hard-coded.
pub struct AppConfig {
  pub routing:   RoutingParams,
  pub weather:   WeatherParams,
  pub predictor: PredictorParams,
  #[serde(default)]
  pub sampling:  SamplingParams,
  #[serde(default)]
  pub map:       MapParams,
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Geocoding and directions provider parameters.
pub struct RoutingParams {
  pub api_key:         String,
  #[serde(default = "default_routing_base_url")]
  pub base_url:        String,
  #[serde(default = "default_timeout_seconds")]
  pub timeout_seconds: u64,
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Weather provider parameters.
pub struct WeatherParams {
  pub api_key:         String,
  #[serde(default = "default_weather_base_url")]
  pub base_url:        String,
  #[serde(default = "default_timeout_seconds")]
  pub timeout_seconds: u64,
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Delay model endpoint parameters. The base URL differs between local and
/// deployed setups.
pub struct PredictorParams {
  #[serde(default = "default_predictor_base_url")]
  pub base_url:        String,
  #[serde(default = "default_timeout_seconds")]
  pub timeout_seconds: u64,
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Parameters for picking weather sampling points along the route.
pub struct SamplingParams {
  #[serde(default = "default_sample_count")]
  pub sample_count: usize,
}

impl Default for SamplingParams {
  fn default() -> Self {
    Self { sample_count: default_sample_count() }
  }
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Initial view of the map widget rendering the route overlay.
pub struct MapParams {
  #[serde(default = "default_map_center")]
  pub center: [f64; 2],
  #[serde(default = "default_map_zoom")]
  pub zoom:   u8,
}

impl Default for MapParams {
  fn default() -> Self {
    Self { center: default_map_center(),
           zoom:   default_map_zoom(), }
  }
}


fn default_routing_base_url() -> String {
  String::from("https://api.openrouteservice.org")
}

fn default_weather_base_url() -> String {
  String::from("https://api.openweathermap.org/data/2.5")
}

fn default_predictor_base_url() -> String {
  String::from("http://127.0.0.1:5000")
}

fn default_timeout_seconds() -> u64 {
  10
}

fn default_sample_count() -> usize {
  10
}

fn default_map_center() -> [f64; 2] {
  [20.0, 0.0]
}

fn default_map_zoom() -> u8 {
  2
}


#[derive(Debug)]
/// Everything needed to start a run: command line arguments plus the parsed
/// config file.
pub struct AppInit {
  pub args:   CommandLineArgs,
  pub config: AppConfig,
}

impl AppInit {
  /// Options are taken from the command line, parameters are parsed from a
  /// (required) config file.
  pub fn parse() -> Result<Self> {
    let args = CommandLineArgs::parse();
    let config: AppConfig =
      toml::from_str(&fs::read_to_string(&args.config_path)?)?;

    Ok(Self { args,
              config })
  }
}

// fin --------------------------------------------------------------------- //
