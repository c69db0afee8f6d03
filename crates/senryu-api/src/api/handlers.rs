//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::config::EXAMPLE_VERSES;
use crate::errors::ApiError;
use crate::models::{
  BatchDetectRequest, BatchDetectResponse, DetectRequest, DetectResponse, ExamplesResponse,
  HealthResponse, ServiceInfoResponse,
};

use super::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET / エンドポイント
///
/// サービス名・バージョン・エンドポイント一覧を返す。
pub async fn root() -> Json<ServiceInfoResponse> {
  Json(ServiceInfoResponse {
    message: "川柳検出API - Senryu Detector API",
    version: VERSION,
    endpoints: vec![
      "GET /health",
      "GET /examples",
      "POST /detect",
      "POST /detect/batch",
    ],
  })
}

/// ヘルスチェックエンドポイント
///
/// サービスは起動時に初期化済みのため、応答できれば healthy。
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "healthy",
    message: "川柳検出サービスは正常に動作しています",
    version: VERSION,
  })
}

/// GET /examples エンドポイント
pub async fn list_examples() -> Json<ExamplesResponse> {
  let (examples, descriptions) = EXAMPLE_VERSES.iter().copied().unzip();
  Json(ExamplesResponse {
    examples,
    descriptions,
  })
}

/// POST /detect エンドポイント
///
/// テキスト中の川柳を検出する。
///
/// # Request Body
/// ```json
/// { "text": "古池や蛙飛び込む水の音", "only_valid": false, "details": true }
/// ```
///
/// # Response
/// - 200 OK: 検出成功（0件を含む）
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: 内部エラー
pub async fn post_detect(
  State(state): State<AppState>,
  Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
  debug!(text_len = request.text.len(), "川柳検出リクエストを受信");

  // 形態素解析は CPU バウンドなので spawn_blocking で非同期ランタイムから分離
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.detect(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    count = response.count,
    elapsed_ms = response.elapsed_ms,
    "川柳検出完了"
  );

  Ok(Json(response))
}

/// POST /detect/batch エンドポイント
///
/// # Request Body
/// ```json
/// { "texts": ["古池や蛙飛び込む水の音", "柿食えば鐘が鳴るなり法隆寺"] }
/// ```
///
/// # Response
/// - 200 OK: 入力順の検出結果
/// - 400 Bad Request: 空のバッチ、件数超過、いずれかのテキストが不正
pub async fn post_detect_batch(
  State(state): State<AppState>,
  Json(request): Json<BatchDetectRequest>,
) -> Result<Json<BatchDetectResponse>, ApiError> {
  debug!(texts = request.texts.len(), "バッチ検出リクエストを受信");

  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || service.detect_batch(request))
    .await
    .map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    texts = response.results.len(),
    total_count = response.total_count,
    elapsed_ms = response.elapsed_ms,
    "バッチ検出完了"
  );

  Ok(Json(response))
}
