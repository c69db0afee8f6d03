//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use senryu::errors::{SenryuError, TokenizerError};

/// APIエラー
///
/// 入力起因の 3 種は 400、それ以外は 500 を返す。
#[derive(Debug, Error)]
pub enum ApiError {
  /// 空のテキストなど、リクエストの内容が不正
  #[error("入力値が無効です: {0}")]
  InvalidInput(String),

  /// `text` のバイト数が上限を超えた
  #[error("テキストが長すぎます: {bytes} バイト（最大: {max} バイト）")]
  TextTooLong {
    /// 受け取ったバイト数
    bytes: usize,
    /// 上限
    max: usize,
  },

  /// `texts` の件数が上限を超えた
  #[error("バッチの件数が多すぎます: {count} 件（最大: {max} 件）")]
  BatchTooLarge {
    /// 受け取った件数
    count: usize,
    /// 上限
    max: usize,
  },

  /// 検出処理やサーバーの失敗
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 環境変数・設定ファイル・辞書の問題
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// レスポンスの `error.code`
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput(_) => "invalid_input",
      Self::TextTooLong { .. } => "text_too_long",
      Self::BatchTooLarge { .. } => "batch_too_large",
      Self::Internal(_) => "internal_error",
      Self::Config(_) => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput(_) | Self::TextTooLong { .. } | Self::BatchTooLarge { .. } => {
        StatusCode::BAD_REQUEST
      }
      Self::Internal(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// SenryuError から ApiError への変換
///
/// 入力起因のものだけを 400 とし、それ以外はサーバー側の問題として扱う。
impl From<SenryuError> for ApiError {
  fn from(err: SenryuError) -> Self {
    match err {
      SenryuError::Tokenizer(TokenizerError::InvalidInput { reason }) => {
        ApiError::invalid_input(reason)
      }
      SenryuError::Dictionary(_) | SenryuError::Tokenizer(TokenizerError::Dictionary(_)) => {
        ApiError::config(format!("dictionary error: {err}"))
      }
      SenryuError::Config(err) => ApiError::config(err.to_string()),
      SenryuError::Detector(_) => ApiError::internal(format!("analyzer output rejected: {err}")),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;
  use senryu::errors::{ConfigError, DetectorError, DictionaryError};

  #[test]
  fn input_errors_are_400() {
    let cases = [
      (ApiError::invalid_input("テストエラー"), "invalid_input"),
      (ApiError::TextTooLong { bytes: 100, max: 50 }, "text_too_long"),
      (ApiError::BatchTooLarge { count: 101, max: 100 }, "batch_too_large"),
    ];
    for (err, code) in cases {
      assert_eq!(err.code(), code);
      assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
  }

  #[test]
  fn limit_messages_carry_both_numbers() {
    let message = ApiError::TextTooLong { bytes: 100, max: 50 }.to_string();
    assert!(message.contains("100") && message.contains("50"));
    assert!(ApiError::BatchTooLarge { count: 101, max: 100 }.to_string().contains("101"));
  }

  #[test]
  fn server_side_kinds_are_500() {
    assert_eq!(ApiError::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ApiError::internal("x").code(), "internal_error");
    assert_eq!(ApiError::config("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ApiError::config("x").code(), "config_error");
  }

  #[test]
  fn from_senryu_error_invalid_input() {
    let err = SenryuError::Tokenizer(TokenizerError::InvalidInput {
      reason: "長すぎる".to_string(),
    });
    let api_err: ApiError = err.into();
    assert!(matches!(api_err, ApiError::InvalidInput(_)));
    assert!(api_err.to_string().contains("長すぎる"));
  }

  #[test]
  fn from_senryu_error_dictionary_and_config() {
    let api_err: ApiError = SenryuError::Dictionary(DictionaryError::CacheDirNotFound).into();
    assert_eq!(api_err.code(), "config_error");

    let api_err: ApiError = SenryuError::Config(ConfigError::EmptyBoundaryMarks).into();
    assert_eq!(api_err.code(), "config_error");
  }

  #[test]
  fn from_senryu_error_detector_is_internal() {
    let err = SenryuError::Detector(DetectorError::TilingMismatch { byte_offset: 3 });
    let api_err: ApiError = err.into();
    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[tokio::test]
  async fn error_response_body_shape() {
    let response = ApiError::BatchTooLarge { count: 5, max: 1 }.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "batch_too_large");
    assert!(json["error"]["message"].as_str().unwrap().contains("5"));
  }
}
