//! リクエストモデル定義

use serde::Deserialize;

fn default_details() -> bool {
  true
}

/// 川柳検出リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct DetectRequest {
  /// 解析対象のテキスト
  pub text: String,
  /// `true` の場合、`is_valid` な結果のみを返す
  #[serde(default)]
  pub only_valid: bool,
  /// `false` の場合、句ごとの詳細（上・中・下の句）を省略する
  #[serde(default = "default_details")]
  pub details: bool,
}

/// バッチ検出リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDetectRequest {
  /// 解析対象のテキスト群（入力順に結果を返す）
  pub texts: Vec<String>,
  /// [`DetectRequest::only_valid`] と同じ
  #[serde(default)]
  pub only_valid: bool,
  /// [`DetectRequest::details`] と同じ
  #[serde(default = "default_details")]
  pub details: bool,
}
