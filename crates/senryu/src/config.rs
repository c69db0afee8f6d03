// crates/senryu/src/config.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::detector::OverlapPolicy;
use crate::errors::ConfigError;

/// Sentence boundary marks used when none are configured.
pub const DEFAULT_BOUNDARY_MARKS: [&str; 5] = ["。", "！", "？", "!", "?"];

/// Parts of speech a phrase may not start with.
pub const DEFAULT_PHRASE_START_DENIED_POS: [&str; 6] =
  ["助詞", "助動詞", "補助記号", "記号", "接続詞", "接尾辞"];

/// Top-level configuration for senryu.
///
/// Every section may be omitted from TOML and falls back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SenryuConfig {
  /// [dictionary] section
  pub dictionary: DictionaryConfig,
  /// [detector] section
  pub detector: DetectorConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` leaves the choice to `DictionaryManager` (OS cache directory).
  pub cache_dir: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` belongs to vibrato-rkyv and does not implement
/// `Deserialize`, and the orphan rule keeps us from adding it. This type is the
/// configuration-side mirror and converts with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  #[default]
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl DictionaryPreset {
  /// Name as written in configuration files
  pub fn as_str(&self) -> &'static str {
    match self {
      DictionaryPreset::Ipadic => "ipadic",
      DictionaryPreset::UnidicCwj => "unidic-cwj",
      DictionaryPreset::UnidicCsj => "unidic-csj",
    }
  }
}

impl fmt::Display for DictionaryPreset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for DictionaryPreset {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "ipadic" => Ok(DictionaryPreset::Ipadic),
      "unidic-cwj" | "unidic_cwj" | "unidiccwj" => Ok(DictionaryPreset::UnidicCwj),
      "unidic-csj" | "unidic_csj" | "unidiccsj" => Ok(DictionaryPreset::UnidicCsj),
      _ => Err(ConfigError::InvalidValue {
        field: "dictionary.preset",
        value: s.to_string(),
      }),
    }
  }
}

/// [detector] section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
  /// How overlapping results are reduced
  pub overlap: OverlapPolicy,
  /// Normalize newlines and whitespace before analysis
  pub normalize_text: bool,
  /// [detector.filters] section
  pub filters: FilterConfig,
}

impl Default for DetectorConfig {
  fn default() -> Self {
    Self {
      overlap: OverlapPolicy::default(),
      normalize_text: true,
      filters: FilterConfig::default(),
    }
  }
}

/// [detector.filters] section configuration.
///
/// All filters are off by default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
  /// Reject candidates spanning a sentence boundary mark
  pub sentence_boundary: bool,
  /// Reject candidates with a phrase ending in a sokuon
  pub sokuon_ending: bool,
  /// Reject candidates with a phrase starting on a denied part of speech
  pub phrase_start: bool,
  /// Reject candidates containing unreadable tokens
  pub unknown_words: bool,
  /// Surfaces treated as sentence boundaries
  pub boundary_marks: Vec<String>,
  /// Parts of speech a phrase may not start with
  pub phrase_start_denied_pos: Vec<String>,
}

impl Default for FilterConfig {
  fn default() -> Self {
    Self {
      sentence_boundary: false,
      sokuon_ending: false,
      phrase_start: false,
      unknown_words: false,
      boundary_marks: DEFAULT_BOUNDARY_MARKS.iter().map(|s| s.to_string()).collect(),
      phrase_start_denied_pos: DEFAULT_PHRASE_START_DENIED_POS
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
  }
}

impl FilterConfig {
  /// Every filter enabled with the default marks and deny list
  pub fn strict() -> Self {
    Self {
      sentence_boundary: true,
      sokuon_ending: true,
      phrase_start: true,
      unknown_words: true,
      ..Self::default()
    }
  }

  /// `true` when at least one filter is enabled
  pub fn any_enabled(&self) -> bool {
    self.sentence_boundary || self.sokuon_ending || self.phrase_start || self.unknown_words
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive usable with `tracing_subscriber::EnvFilter`
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for LogLevel {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "trace" => Ok(LogLevel::Trace),
      "debug" => Ok(LogLevel::Debug),
      "info" => Ok(LogLevel::Info),
      "warn" | "warning" => Ok(LogLevel::Warn),
      "error" => Ok(LogLevel::Error),
      _ => Err(ConfigError::InvalidValue {
        field: "logging.level",
        value: s.to_string(),
      }),
    }
  }
}

// ===== Loading =====

impl SenryuConfig {
  /// Parses a TOML document.
  ///
  /// # Errors
  /// `ConfigError::Parse` when the document is not valid TOML or a value has the wrong type.
  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    toml::from_str(s).map_err(|e| ConfigError::Parse { source: Arc::new(e) })
  }

  /// Reads and parses a TOML file. The result is not validated.
  ///
  /// # Errors
  /// `ConfigError::FileRead` or `ConfigError::Parse`.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_toml_str(&content)
  }
}

// ===== Accessor Methods =====

impl SenryuConfig {
  /// Returns the preset dictionary type to pass to DictionaryManager.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.dictionary.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  ///
  /// `None` if unspecified.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.dictionary.cache_dir.as_deref()
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `detector.filters.boundary_marks` is not empty when `sentence_boundary` is enabled
  /// - no boundary mark is blank
  /// - `dictionary.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let filters = &self.detector.filters;

    if filters.sentence_boundary && filters.boundary_marks.is_empty() {
      return Err(ConfigError::EmptyBoundaryMarks);
    }

    if let Some(index) = filters.boundary_marks.iter().position(|m| m.trim().is_empty()) {
      return Err(ConfigError::BlankBoundaryMark { index });
    }

    // dictionary.cache_dir exists or can be created
    if let Some(cache_dir) = &self.dictionary.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// DictionaryPreset (for configuration file) -> PresetDictionaryKind (for vibrato-rkyv).
impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
