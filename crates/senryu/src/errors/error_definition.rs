//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// 設定（SenryuConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// detector.filters.boundary_marks が空（sentence_boundary 有効時）
  #[error("sentence_boundary を有効にする場合は boundary_marks を1つ以上指定してください")]
  EmptyBoundaryMarks,

  /// boundary_marks に空文字・空白のみの要素が含まれる
  #[error("boundary_marks に空の要素が含まれています: index={index}")]
  BlankBoundaryMark {
    /// 問題のある要素の位置
    index: usize,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 設定ファイルの読み込みに失敗
  #[error("設定ファイルを読み込めません: path={path:?}, error={source}")]
  FileRead {
    /// 設定ファイルのパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// TOML の解析に失敗
  #[error("設定の TOML 解析に失敗しました: {source}")]
  Parse {
    /// 元となった TOML エラー
    #[source]
    source: Arc<toml::de::Error>,
  },

  /// 文字列から列挙値への変換に失敗（環境変数・CLI 引数など）
  #[error("{field} の値が不正です: {value}")]
  InvalidValue {
    /// 対象項目
    field: &'static str,
    /// 指定された値
    value: String,
  },
}

/// 辞書関連のエラー
/// Vibrato では ipadic, unidic 等の辞書を使用可能
/// これらのエラーを定義する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// 辞書パスが不正または辞書種別が不正
  #[error("辞書パスまたは辞書種別が不正です: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 形態素解析器関連エラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TokenizerError {
  /// 辞書起因のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),

  /// 入力テキストが不正
  #[error("形態素解析対象の入力テキストが不正: {reason}")]
  InvalidInput {
    /// 不正の理由
    reason: String,
  },
}

/// 検出器に渡されたトークン列が前提を満たさない場合のエラー
///
/// 検出処理そのものは失敗しない。形態素解析器の出力を検出器へ渡す前の検証で使う。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectorError {
  /// 表層形が空のトークンが含まれる
  #[error("表層形が空のトークンがあります: index={index}")]
  EmptySurface {
    /// トークン列中の位置
    index: usize,
  },

  /// 表層形を連結しても元テキストに一致しない
  #[error("トークン列が元テキストを覆っていません: byte_offset={byte_offset}")]
  TilingMismatch {
    /// 最初に不一致となったバイト位置
    byte_offset: usize,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `SenryuResult<T>` = `Result<T, SenryuError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SenryuError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// 形態素解析器関連エラー
  #[error(transparent)]
  Tokenizer(#[from] TokenizerError),

  /// トークン列の検証エラー
  #[error(transparent)]
  Detector(#[from] DetectorError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// senryu クレートの標準 Result 型エイリアス
pub type SenryuResult<T> = Result<T, SenryuError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokenizer_error_wraps_dictionary_error() {
    let err: TokenizerError = DictionaryError::CacheDirNotFound.into();
    assert!(matches!(err, TokenizerError::Dictionary(DictionaryError::CacheDirNotFound)));
    assert!(err.to_string().contains("辞書エラー"));
  }

  #[test]
  fn senryu_error_is_transparent() {
    let inner = DetectorError::EmptySurface { index: 3 };
    let err: SenryuError = inner.clone().into();
    assert_eq!(err.to_string(), inner.to_string());
  }
}
