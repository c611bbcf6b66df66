// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

//! `delvaux` - _Ceci n'est pas un retard_.
//!
//! Predicts the traffic delay on a driving route from the weather along it:
//! geocode both endpoints, fetch the route, sample weather at evenly spaced
//! route points, aggregate a feature payload and ask a remote delay model
//! for its estimate.

mod config;
mod error;
mod features;
mod pipeline;
mod providers;
mod report;
mod sampler;
mod severity;
mod types;

use config::AppInit;
use pipeline::Pipeline;
use report::MapView;

use eyre::Result;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};


#[tokio::main]
async fn main() -> Result<()> {
  setup()?;
  info!("logging and error reporting setup complete, delvaux starting up");

  info!("reading command line arguments and config file...");
  let AppInit { args, config } = AppInit::parse()?;
  info!(origin = %args.origin,
        destination = %args.destination,
        "prediction cycle requested");

  let pipeline = Pipeline::from_config(&config)?;
  let mut map_view = MapView::new(config.map);
  debug!("map view centered at {:?}, zoom {}",
         map_view.center(),
         map_view.zoom());

  let cycle_report = pipeline.run(&args.origin, &args.destination).await?;

  // replace the route overlay and fit the view to the new route
  map_view.set_route(cycle_report.route.polyline.clone());
  if let Some((southwest, northeast)) = map_view.bounds() {
    debug!("overlay of {} points fitted between {} and {}",
           map_view.route().map_or(0, |route| route.len()),
           southwest,
           northeast);
  }

  println!("{}", cycle_report.render());

  info!("delvaux has shut down");
  Ok(())
}

/// Initalizes backtracing and error handling capabilities and sets up the
/// tracing infrastructure for outputting logs from all components.
fn setup() -> Result<()> {
  // set up eyre with colors
  const BT_ENVVAR: &str = "RUST_LIB_BACKTRACE";
  if std::env::var(BT_ENVVAR).is_err() {
    std::env::set_var(BT_ENVVAR, "1")
  }
  color_eyre::install()?;

  // set up format layer with filtering for tracing
  const LG_ENVVAR: &str = "RUST_LOG";
  if std::env::var(LG_ENVVAR).is_err() {
    std::env::set_var(LG_ENVVAR, "info")
  }
  let format_layer = fmt::layer().with_filter(EnvFilter::from_default_env());

  tracing_subscriber::registry().with(format_layer).init();

  Ok(())
}

// fin --------------------------------------------------------------------- //
