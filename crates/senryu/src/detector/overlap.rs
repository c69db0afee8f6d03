//! Overlap policy
//!
//! The search reports every candidate, including ones that overlap.
//! A policy decides which of them the caller gets back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::DetectionResult;

/// How overlapping results are reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
  /// Every candidate, in discovery order
  #[default]
  KeepAll,
  /// One result per start position: standard 5-7-5 first, then the longest span
  BestPerStart,
  /// `BestPerStart`, then drop results overlapping an earlier kept one
  NonOverlapping,
}

impl OverlapPolicy {
  /// Name as written in configuration files
  pub fn as_str(&self) -> &'static str {
    match self {
      OverlapPolicy::KeepAll => "keep-all",
      OverlapPolicy::BestPerStart => "best-per-start",
      OverlapPolicy::NonOverlapping => "non-overlapping",
    }
  }

  /// Applies the policy. The input must be in ascending start order, as the detector produces it.
  pub fn apply(&self, results: Vec<DetectionResult>) -> Vec<DetectionResult> {
    match self {
      OverlapPolicy::KeepAll => results,
      OverlapPolicy::BestPerStart => best_per_start(results),
      OverlapPolicy::NonOverlapping => non_overlapping(best_per_start(results)),
    }
  }
}

impl fmt::Display for OverlapPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OverlapPolicy {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
      "keep-all" | "all" => Ok(OverlapPolicy::KeepAll),
      "best-per-start" => Ok(OverlapPolicy::BestPerStart),
      "non-overlapping" => Ok(OverlapPolicy::NonOverlapping),
      _ => Err(ConfigError::InvalidValue {
        field: "detector.overlap",
        value: s.to_string(),
      }),
    }
  }
}

/// `true` when `candidate` should replace `kept` for the same start.
fn is_better(candidate: &DetectionResult, kept: &DetectionResult) -> bool {
  match (candidate.is_standard, kept.is_standard) {
    (true, false) => true,
    (false, true) => false,
    _ => candidate.char_len() > kept.char_len(),
  }
}

fn best_per_start(results: Vec<DetectionResult>) -> Vec<DetectionResult> {
  let mut kept: Vec<DetectionResult> = Vec::with_capacity(results.len());
  for result in results {
    match kept.last_mut() {
      Some(last) if last.start_position == result.start_position => {
        if is_better(&result, last) {
          *last = result;
        }
      }
      _ => kept.push(result),
    }
  }
  kept
}

fn non_overlapping(results: Vec<DetectionResult>) -> Vec<DetectionResult> {
  let mut kept: Vec<DetectionResult> = Vec::with_capacity(results.len());
  for result in results {
    if kept.last().is_none_or(|last| !last.overlaps(&result)) {
      kept.push(result);
    }
  }
  kept
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detector::SenryuDetector;
  use crate::models::{SenryuPattern, Token};

  fn tokens(readings: &[&str]) -> Vec<Token> {
    readings.iter().map(|r| Token::new(*r, *r, "名詞")).collect()
  }

  /// Three candidates: (0, 5-8-5), (0, 6-7-5), (1, 5-7-5)
  fn overlapping_results() -> Vec<DetectionResult> {
    let stream = tokens(&["あ", "ふるいけ", "や", "かわずとびこむ", "みずのおと"]);
    SenryuDetector::new().detect(&stream)
  }

  #[test]
  fn keep_all_is_identity() {
    let results = overlapping_results();
    assert_eq!(results.len(), 3);
    assert_eq!(OverlapPolicy::KeepAll.apply(results.clone()), results);
  }

  #[test]
  fn best_per_start_keeps_one_result_per_start() {
    let results = OverlapPolicy::BestPerStart.apply(overlapping_results());
    let found: Vec<(usize, SenryuPattern)> =
      results.iter().map(|r| (r.start_position, r.pattern)).collect();
    // equal length at start 0, so the first discovered one stays
    assert_eq!(found, vec![(0, SenryuPattern::JiamariMiddle), (1, SenryuPattern::Standard)]);
  }

  #[test]
  fn best_per_start_prefers_standard() {
    let mut results = overlapping_results();
    let standard = results.pop().unwrap();
    let mut shifted = standard.clone();
    shifted.start_position = 0;
    results.push(shifted);
    let best = OverlapPolicy::BestPerStart.apply(results);
    assert_eq!(best.len(), 1);
    assert!(best[0].is_standard);
  }

  #[test]
  fn non_overlapping_drops_later_overlaps() {
    let results = OverlapPolicy::NonOverlapping.apply(overlapping_results());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].start_position, 0);
  }

  #[test]
  fn non_overlapping_keeps_touching_spans() {
    let verse = ["ふるいけ", "や", "かわずとびこむ", "みずのおと"];
    let stream = tokens(&[verse, verse].concat());
    let results = OverlapPolicy::NonOverlapping.apply(SenryuDetector::new().detect(&stream));

    let spans: Vec<(usize, usize)> =
      results.iter().map(|r| (r.start_position, r.end_position)).collect();
    assert_eq!(spans, vec![(0, 17), (17, 34)]);
    assert!(!results[0].overlaps(&results[1]));
  }

  #[test]
  fn parses_policy_names() {
    assert_eq!("keep-all".parse::<OverlapPolicy>().unwrap(), OverlapPolicy::KeepAll);
    assert_eq!("best_per_start".parse::<OverlapPolicy>().unwrap(), OverlapPolicy::BestPerStart);
    assert_eq!("Non-Overlapping".parse::<OverlapPolicy>().unwrap(), OverlapPolicy::NonOverlapping);
    assert!("first".parse::<OverlapPolicy>().is_err());
    assert_eq!(OverlapPolicy::BestPerStart.to_string(), "best-per-start");
  }
}
