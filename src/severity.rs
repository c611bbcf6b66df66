// Copyright 2022 Florian Eich <florian.eich@gmail.com>
//
// This work is licensed under the Apache License, Version 2.0. You should have
// received a copy of this license along with the source code. If that is not
// the case, please find one at http://www.apache.org/licenses/LICENSE-2.0.

//! Keyword classifier mapping weather condition descriptions to a severity
//! score on a 0 to 5 scale. This is substring containment against a fixed
//! table, not parsing: the first entry whose phrase is contained in the
//! description wins, so the table keeps more specific phrases ahead of their
//! generic tails ("heavy thunderstorm" before "thunderstorm").


/// Severity returned when no table phrase is contained in the description.
pub const DEFAULT_SEVERITY: f64 = 1.0;

/// Sampled points scoring at or above this count as severe.
pub const SEVERE_THRESHOLD: f64 = 3.0;

/// Condition phrase to severity, ordered most specific phrase first within
/// each condition family. Iteration order is part of the contract.
const SEVERITY_TABLE: &[(&str, f64)] = &[
  // thunderstorms
  ("thunderstorm with heavy drizzle", 4.0),
  ("thunderstorm with heavy rain", 4.0),
  ("thunderstorm with light rain", 3.0),
  ("thunderstorm with drizzle", 3.5),
  ("thunderstorm with rain", 3.5),
  ("heavy thunderstorm", 4.0),
  ("ragged thunderstorm", 4.0),
  ("light thunderstorm", 3.0),
  ("thunderstorm", 3.5),
  // rain
  ("heavy shower rain and drizzle", 3.5),
  ("shower rain and drizzle", 3.0),
  ("heavy intensity shower rain", 3.3),
  ("light intensity shower rain", 2.7),
  ("ragged shower rain", 3.2),
  ("shower rain", 2.8),
  ("heavy intensity rain", 3.0),
  ("very heavy rain", 3.5),
  ("extreme rain", 4.0),
  ("moderate rain", 2.5),
  ("light rain", 2.0),
  // drizzle
  ("light intensity drizzle", 1.8),
  ("heavy intensity drizzle", 2.5),
  ("drizzle", 2.0),
  // snow and sleet
  ("heavy snow", 3.5),
  ("light snow", 2.5),
  ("sleet", 3.2),
  ("snow", 3.0),
  // atmosphere
  ("sand/dust whirls", 2.5),
  ("volcanic ash", 3.0),
  ("squalls", 3.5),
  ("tornado", 5.0),
  ("smoke", 1.2),
  ("haze", 1.5),
  ("mist", 1.0),
  ("fog", 2.0),
  ("sand", 2.0),
  ("dust", 2.2),
  // clouds
  ("scattered clouds", 0.5),
  ("broken clouds", 0.7),
  ("overcast clouds", 0.7),
  ("few clouds", 0.3),
  ("clear sky", 0.0),
];


/// Scores a condition description. Matching is case-insensitive substring
/// containment in table order; unknown descriptions score
/// [`DEFAULT_SEVERITY`].
pub fn score(description: &str) -> f64 {
  let description = description.to_lowercase();

  SEVERITY_TABLE.iter()
                .find(|(phrase, _)| description.contains(phrase))
                .map(|(_, severity)| *severity)
                .unwrap_or(DEFAULT_SEVERITY)
}

// fin --------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use super::{score, DEFAULT_SEVERITY, SEVERITY_TABLE};

  use pretty_assertions::assert_eq;


  #[test]
  fn exact_phrase_test() {
    assert_eq!(score("light rain"), 2.0);
    assert_eq!(score("clear sky"), 0.0);
    assert_eq!(score("tornado"), 5.0);
    assert_eq!(score("sand/dust whirls"), 2.5);
  }

  #[test]
  fn specific_phrase_wins_test() {
    // the bare "thunderstorm" entry must not shadow the heavier variants
    assert_eq!(score("heavy thunderstorm"), 4.0);
    assert_eq!(score("light thunderstorm"), 3.0);
    assert_eq!(score("thunderstorm"), 3.5);

    assert_eq!(score("heavy shower rain and drizzle"), 3.5);
    assert_eq!(score("shower rain"), 2.8);
    assert_eq!(score("heavy snow"), 3.5);
    assert_eq!(score("snow"), 3.0);
  }

  #[test]
  fn substring_containment_test() {
    // containment, not equality: descriptions may carry extra words
    assert_eq!(score("light rain showers expected"), 2.0);
    assert_eq!(score("patchy mist near the coast"), 1.0);
  }

  #[test]
  fn default_severity_test() {
    assert_eq!(score("sunny"), DEFAULT_SEVERITY);
    assert_eq!(score(""), DEFAULT_SEVERITY);
    assert_eq!(score("unknown"), DEFAULT_SEVERITY);
  }

  #[test]
  fn case_insensitive_test() {
    assert_eq!(score("Light Rain"), 2.0);
    assert_eq!(score("HEAVY THUNDERSTORM"), 4.0);
  }

  #[test]
  fn table_order_test() {
    // every phrase must win against its own table entry: if a more generic
    // phrase were ordered ahead of a specific one containing it, the
    // specific severity would be unreachable
    for (phrase, severity) in SEVERITY_TABLE {
      assert_eq!(score(phrase), *severity, "unreachable entry: {}", phrase);
    }
  }
}
