//! Config loading from environment variables

use std::str::FromStr;

use senryu::SenryuConfig;
use senryu::config::{DictionaryConfig, DictionaryPreset, LogLevel};
use senryu::detector::OverlapPolicy;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT, PORT_BIND_HOST};
use crate::errors::ApiError;

/// Environment variable names read by [`Config::from_env`]
pub mod vars {
  /// Bind address such as `127.0.0.1:8080`
  pub const BASE_URL: &str = "SENRYU_API_BASE_URL";
  /// Port to listen on all interfaces (used when `SENRYU_API_BASE_URL` is unset)
  pub const PORT: &str = "PORT";
  /// Optional TOML configuration file
  pub const CONFIG: &str = "SENRYU_CONFIG";
  /// Dictionary preset
  pub const PRESET_DICT: &str = "SENRYU_PRESET_DICT";
  /// Overlap policy
  pub const OVERLAP_POLICY: &str = "SENRYU_OVERLAP_POLICY";
  /// Enables every candidate filter
  pub const STRICT: &str = "SENRYU_STRICT";
  /// Default log directive
  pub const LOG: &str = "SENRYU_LOG";
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8080")
  pub bind_addr: String,
  /// Detector configuration handed to `SenryuService`
  pub senryu: SenryuConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the configuration from any key lookup.
  ///
  /// Values found in `SENRYU_CONFIG` are loaded first; the other variables override them.
  /// The preset falls back to [`DEFAULT_PRESET_DICT`] only when neither source sets it.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed or the TOML file cannot be read
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let bind_addr = match (get(vars::BASE_URL), get(vars::PORT)) {
      (Some(addr), _) => addr,
      (None, Some(port)) => {
        let port: u16 = port
          .parse()
          .map_err(|_| ApiError::config(format!("{} is not a port number: {port}", vars::PORT)))?;
        format!("{PORT_BIND_HOST}:{port}")
      }
      (None, None) => DEFAULT_BIND_ADDR.to_string(),
    };

    let mut senryu = match get(vars::CONFIG) {
      Some(path) => SenryuConfig::from_file(&path).map_err(|e| ApiError::config(e.to_string()))?,
      None => SenryuConfig {
        dictionary: DictionaryConfig {
          preset: DictionaryPreset::from_str(DEFAULT_PRESET_DICT)
            .map_err(|e| ApiError::config(e.to_string()))?,
          ..Default::default()
        },
        ..Default::default()
      },
    };

    if let Some(preset) = get(vars::PRESET_DICT) {
      senryu.dictionary.preset =
        DictionaryPreset::from_str(&preset).map_err(|e| ApiError::config(e.to_string()))?;
    }

    if let Some(policy) = get(vars::OVERLAP_POLICY) {
      senryu.detector.overlap =
        OverlapPolicy::from_str(&policy).map_err(|e| ApiError::config(e.to_string()))?;
    }

    if let Some(strict) = get(vars::STRICT) {
      if parse_flag(vars::STRICT, &strict)? {
        let filters = &mut senryu.detector.filters;
        filters.sentence_boundary = true;
        filters.sokuon_ending = true;
        filters.phrase_start = true;
        filters.unknown_words = true;
      }
    }

    if let Some(level) = get(vars::LOG) {
      senryu.logging.level =
        LogLevel::from_str(&level).map_err(|e| ApiError::config(e.to_string()))?;
    }

    Ok(Self { bind_addr, senryu })
  }
}

fn parse_flag(key: &str, value: &str) -> crate::errors::Result<bool> {
  match value.to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(ApiError::config(format!("{key} must be a boolean: {value}"))),
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;
  use std::io::Write;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn defaults_without_variables() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.senryu.dictionary.preset, DictionaryPreset::UnidicCwj);
    assert_eq!(config.senryu.detector.overlap, OverlapPolicy::KeepAll);
    assert!(!config.senryu.detector.filters.any_enabled());
    assert_eq!(config.senryu.logging.level, LogLevel::Info);
  }

  #[test]
  fn base_url_wins_over_port() {
    let config = Config::from_lookup(lookup_from(&[
      (vars::BASE_URL, "127.0.0.1:9000"),
      (vars::PORT, "3000"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:9000");
  }

  #[test]
  fn port_binds_all_interfaces() {
    let config = Config::from_lookup(lookup_from(&[(vars::PORT, "3000")])).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:3000");

    let err = Config::from_lookup(lookup_from(&[(vars::PORT, "http")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn detector_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      (vars::PRESET_DICT, "IPADIC"),
      (vars::OVERLAP_POLICY, "non_overlapping"),
      (vars::STRICT, "true"),
      (vars::LOG, "debug"),
    ]))
    .unwrap();
    assert_eq!(config.senryu.dictionary.preset, DictionaryPreset::Ipadic);
    assert_eq!(config.senryu.detector.overlap, OverlapPolicy::NonOverlapping);
    assert!(config.senryu.detector.filters.sentence_boundary);
    assert!(config.senryu.detector.filters.unknown_words);
    assert_eq!(config.senryu.logging.level, LogLevel::Debug);
  }

  #[test]
  fn strict_off_keeps_filters_disabled() {
    let config = Config::from_lookup(lookup_from(&[(vars::STRICT, "0")])).unwrap();
    assert!(!config.senryu.detector.filters.any_enabled());
  }

  #[test]
  fn invalid_values_are_config_errors() {
    for (key, value) in [
      (vars::PRESET_DICT, "jumandic"),
      (vars::OVERLAP_POLICY, "random"),
      (vars::STRICT, "maybe"),
      (vars::LOG, "loud"),
    ] {
      let err = Config::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
      assert_eq!(err.code(), "config_error", "{key}={value}");
    }
  }

  #[test]
  fn blank_values_are_ignored() {
    let config = Config::from_lookup(lookup_from(&[(vars::PRESET_DICT, "  ")])).unwrap();
    assert_eq!(config.senryu.dictionary.preset, DictionaryPreset::UnidicCwj);
  }

  #[test]
  fn toml_file_is_loaded_then_overridden() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
      file,
      "[dictionary]\npreset = \"ipadic\"\n\n[detector]\noverlap = \"best-per-start\""
    )
    .unwrap();
    let path = file.path().to_string_lossy().to_string();

    let config = Config::from_lookup(lookup_from(&[(vars::CONFIG, &path)])).unwrap();
    assert_eq!(config.senryu.dictionary.preset, DictionaryPreset::Ipadic);
    assert_eq!(config.senryu.detector.overlap, OverlapPolicy::BestPerStart);

    let config = Config::from_lookup(lookup_from(&[
      (vars::CONFIG, &path),
      (vars::OVERLAP_POLICY, "keep-all"),
    ]))
    .unwrap();
    assert_eq!(config.senryu.detector.overlap, OverlapPolicy::KeepAll);
  }

  #[test]
  fn missing_toml_file_is_config_error() {
    let err =
      Config::from_lookup(lookup_from(&[(vars::CONFIG, "/nonexistent/senryu.toml")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }
}
