// crates/senryu/src/service.rs

//! SenryuService: senryu クレートの統合ファサード。
//!
//! - 辞書管理 (DictionaryManager)
//! - 形態素解析 (MorphologicalAnalyzer)
//! - 川柳検出 (SenryuDetector)
//!
//! HTTP API や CLI からは、この構造体だけを意識すればよい。

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{DetectorConfig, SenryuConfig};
use crate::detector::{SenryuDetector, validate_token_stream};
use crate::dictionary::DictionaryManager;
use crate::errors::SenryuResult;
use crate::models::{DetectionResult, Token};
use crate::text::{contains_japanese, normalize_text};
use crate::tokenizer::{FeatureLayout, MorphologicalAnalyzer, VibratoAnalyzer};

/// senryu クレートの統合ファサード。
pub struct SenryuService {
  /// 形態素解析器
  analyzer: Arc<dyn MorphologicalAnalyzer>,

  /// 検出器（フィルタ・重複ポリシー込み）
  detector: SenryuDetector,

  /// 解析前にテキストを正規化するか
  normalize: bool,

  /// 辞書マネージャ（`with_analyzer` で構築した場合は `None`）
  dictionary_manager: Option<DictionaryManager>,
}

impl SenryuService {
  /// 初期化（設定検証 + 辞書ロード + 解析器・検出器の構築）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. DictionaryManager を構築し辞書をロード（初回はダウンロード）
  /// 3. VibratoAnalyzer と SenryuDetector を構築
  ///
  /// # エラー
  /// - 設定が不正
  /// - 辞書ロード失敗
  pub fn init(config: &SenryuConfig) -> SenryuResult<Self> {
    // ConfigError は #[from] で SenryuError に自動変換
    config.validate()?;

    let manager = DictionaryManager::from_config(config)?;
    let dict = manager.load()?;
    let layout = FeatureLayout::from(config.dictionary.preset);
    let analyzer = VibratoAnalyzer::from_shared_dictionary(dict, layout);

    info!(
      preset = %config.dictionary.preset,
      cache_dir = %manager.cache_dir().display(),
      overlap = %config.detector.overlap,
      filters = ?config.detector.filters,
      "SenryuService initialized"
    );

    Ok(Self {
      analyzer: Arc::new(analyzer),
      detector: SenryuDetector::from_config(&config.detector),
      normalize: config.detector.normalize_text,
      dictionary_manager: Some(manager),
    })
  }

  /// 任意の形態素解析器で構築する（テストや別エンジン用）
  pub fn with_analyzer(analyzer: Arc<dyn MorphologicalAnalyzer>, config: &DetectorConfig) -> Self {
    Self {
      analyzer,
      detector: SenryuDetector::from_config(config),
      normalize: config.normalize_text,
      dictionary_manager: None,
    }
  }

  /// 解析対象テキストを準備する。解析不要なら `None`。
  fn prepare(&self, text: &str) -> Option<String> {
    let text = if self.normalize { normalize_text(text) } else { text.to_string() };
    if text.trim().is_empty() || !contains_japanese(&text) {
      return None;
    }
    Some(text)
  }

  /// テキストから川柳を検出する。
  ///
  /// 空白のみ・日本語を含まないテキストは解析せずに空の結果を返す。
  /// 結果の位置情報は正規化後のテキスト（`original_text`）に対する文字オフセット。
  ///
  /// # エラー
  /// - 形態素解析の失敗
  /// - 解析器が元テキストを覆わないトークン列を返した場合
  pub fn detect(&self, text: &str) -> SenryuResult<Vec<DetectionResult>> {
    let Some(text) = self.prepare(text) else {
      debug!("No Japanese text to analyze");
      return Ok(Vec::new());
    };

    let tokens = self.analyzer.analyze(&text)?;
    validate_token_stream(&tokens, &text)?;

    Ok(self.detector.detect(&tokens))
  }

  /// 複数テキストをまとめて検出する（入力順を保持）。
  ///
  /// `parallel` feature 有効時は rayon のスレッドプールで並列に処理する。
  ///
  /// # エラー
  /// いずれかのテキストで失敗した場合、そのエラーを返す。
  pub fn detect_batch<S>(&self, texts: &[S]) -> SenryuResult<Vec<Vec<DetectionResult>>>
  where
    S: AsRef<str> + Sync,
  {
    #[cfg(feature = "parallel")]
    let texts = texts.par_iter();
    #[cfg(not(feature = "parallel"))]
    let texts = texts.iter();

    texts.map(|text| self.detect(text.as_ref())).collect()
  }

  /// 検出と同じ前処理を行った上で形態素解析だけを実行する。
  pub fn analyze(&self, text: &str) -> SenryuResult<Vec<Token>> {
    let Some(text) = self.prepare(text) else {
      return Ok(Vec::new());
    };
    Ok(self.analyzer.analyze(&text)?)
  }

  // ===== アクセサ =====

  /// 内部の検出器への参照を返す。
  pub fn detector(&self) -> &SenryuDetector {
    &self.detector
  }

  /// 内部の DictionaryManager への参照を返す（`init` で構築した場合のみ）。
  pub fn dictionary_manager(&self) -> Option<&DictionaryManager> {
    self.dictionary_manager.as_ref()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────
