// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

use crate::types::Coordinate;


/// Picks evenly spaced points from a polyline for weather sampling.
///
/// The stride is `max(1, N / target)`, emitting indices 0, stride,
/// 2 * stride, ... below N. This does not guarantee exactly `target` points:
/// the last partial stride is kept, so N = 95 with target 10 yields 11
/// points. Deterministic for a given N and target.
pub fn sample_route(polyline: &[Coordinate],
                    target: usize)
                    -> Vec<Coordinate> {
  if polyline.is_empty() {
    return Vec::new();
  }

  let stride = std::cmp::max(1, polyline.len() / target.max(1));

  polyline.iter().step_by(stride).copied().collect()
}

// fin --------------------------------------------------------------------- //
