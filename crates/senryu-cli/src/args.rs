//! Command-line arguments

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use senryu::SenryuConfig;
use senryu::config::{DictionaryPreset, LogLevel};
use senryu::detector::OverlapPolicy;

/// Detect senryu (5-7-5) verses in Japanese text.
///
/// Reads the positional TEXT, or one text per line from stdin when none is given.
#[derive(Debug, Parser)]
#[command(name = "senryu", version, about)]
pub struct Cli {
  /// Text to analyze; several words are joined with a space
  #[arg(value_name = "TEXT")]
  pub text: Vec<String>,

  /// TOML configuration file
  #[arg(short, long, value_name = "FILE", env = "SENRYU_CONFIG")]
  pub config: Option<PathBuf>,

  /// Dictionary preset: ipadic | unidic-cwj | unidic-csj
  #[arg(short, long, value_name = "PRESET", env = "SENRYU_PRESET_DICT")]
  pub preset: Option<DictionaryPreset>,

  /// Dictionary cache directory
  #[arg(long, value_name = "DIR")]
  pub cache_dir: Option<PathBuf>,

  /// Overlap policy: keep-all | best-per-start | non-overlapping
  #[arg(short, long, value_name = "POLICY", env = "SENRYU_OVERLAP_POLICY")]
  pub overlap: Option<OverlapPolicy>,

  /// Enable every candidate filter
  #[arg(short, long)]
  pub strict: bool,

  /// Print results as JSON (one document per input)
  #[arg(long)]
  pub json: bool,

  /// Pretty-print JSON output
  #[arg(long, requires = "json")]
  pub pretty: bool,

  /// Print the morphological analysis instead of detecting verses
  #[arg(long)]
  pub tokens: bool,

  /// Increase log verbosity (-v: debug, -vv: trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

impl Cli {
  /// Builds the detector configuration: TOML file first, then command-line overrides.
  ///
  /// # Errors
  /// Returns an error if the configuration file cannot be read or is invalid.
  pub fn to_config(&self) -> Result<SenryuConfig> {
    let mut config = match &self.config {
      Some(path) => SenryuConfig::from_file(path)
        .with_context(|| format!("failed to load config: {}", path.display()))?,
      None => SenryuConfig::default(),
    };

    if let Some(preset) = self.preset {
      config.dictionary.preset = preset;
    }
    if let Some(dir) = &self.cache_dir {
      config.dictionary.cache_dir = Some(dir.clone());
    }
    if let Some(overlap) = self.overlap {
      config.detector.overlap = overlap;
    }
    if self.strict {
      let filters = &mut config.detector.filters;
      filters.sentence_boundary = true;
      filters.sokuon_ending = true;
      filters.phrase_start = true;
      filters.unknown_words = true;
    }
    match self.verbose {
      0 => {}
      1 => config.logging.level = LogLevel::Debug,
      _ => config.logging.level = LogLevel::Trace,
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
  }

  /// The positional text, or `None` when input should come from stdin
  pub fn inline_text(&self) -> Option<String> {
    (!self.text.is_empty()).then(|| self.text.join(" "))
  }
}
