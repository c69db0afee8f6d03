//! Dictionary Management Module
//!
//! Loads vibrato-rkyv dictionaries and downloads preset dictionaries on first use.
//! Later runs load from the cache directory. A local dictionary file can also be
//! loaded directly.

use crate::config::SenryuConfig;
use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Dictionary manager for vibrato-rkyv
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Preset dictionary type; `None` for local dictionaries
  preset_kind: Option<PresetDictionaryKind>,

  /// Dictionary file path; `None` for preset dictionaries
  dictionary_path: Option<PathBuf>,

  /// Loaded dictionary, initialized once.
  /// DictionaryError implements Clone so the Result itself is cached.
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Preset dictionary type, if any
  pub fn preset_kind(&self) -> Option<PresetDictionaryKind> {
    self.preset_kind
  }

  /// `true` if the preset dictionary has already been downloaded into the cache
  pub fn is_cached(&self) -> bool {
    match (&self.dictionary_path, self.preset_kind) {
      (Some(path), _) => path.is_file(),
      (None, Some(kind)) => self.cache_dir.join(kind.name()).exists(),
      _ => false,
    }
  }

  /// Preset dictionary in the OS cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self::with_preset_in(preset_kind, default_cache_dir()?))
  }

  /// Preset dictionary in a given cache directory
  pub fn with_preset_in<P: Into<PathBuf>>(preset_kind: PresetDictionaryKind, cache_dir: P) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      preset_kind: Some(preset_kind),
      dictionary_path: None,
      dictionary: OnceLock::new(),
    }
  }

  /// Preset and cache directory taken from the configuration
  pub fn from_config(config: &SenryuConfig) -> Result<Self, DictionaryError> {
    match config.dictionary_cache_dir() {
      Some(dir) => Ok(Self::with_preset_in(config.dictionary_preset(), dir)),
      None => Self::with_preset(config.dictionary_preset()),
    }
  }

  /// Local dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      let s = path.display().to_string();
      return Err(DictionaryError::DictionaryNotFound(s));
    }

    // The file's parent directory doubles as the cache directory
    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      preset_kind: None,
      dictionary_path: Some(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Loads the dictionary.
  ///
  /// - The first call loads (and downloads if needed)
  /// - Later calls return a clone of the same `Arc<Dictionary>`
  /// - A failure on the first call is cached and returned again
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match (&self.dictionary_path, self.preset_kind) {
      (Some(path), _) => Self::load_from_local_path(path),
      (None, Some(preset_kind)) => self.load_from_preset(preset_kind),
      _ => Err(DictionaryError::InvalidPathOrInvalidPresetKind(
        self.cache_dir.clone(),
        self.preset_kind,
      )),
    }
  }

  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    info!(path = %path.display(), "Loading local dictionary");
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    // One subdirectory per dictionary name
    let dict_dir = self.cache_dir.join(preset_kind.name());

    info!(
      preset = preset_kind.name(),
      dir = %dict_dir.display(),
      cached = dict_dir.exists(),
      "Loading preset dictionary"
    );

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Default cache directory
///
/// | OS      | Example Path                                |
/// |---------|---------------------------------------------|
/// | Linux   | `~/.cache/senryu/dict`                      |
/// | macOS   | `~/Library/Caches/senryu/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\senryu\dict` |
pub fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("senryu").join("dict"))
}

/// `vibrato_rkyv::Dictionary` is not `Debug`; only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("preset_kind", &self.preset_kind)
      .field("dictionary_path", &self.dictionary_path)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}
