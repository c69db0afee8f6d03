//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, list_examples, post_detect, post_detect_batch, root};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(root))
    .route("/health", get(health_check))
    .route("/examples", get(list_examples))
    .route("/detect", post(post_detect))
    .route("/detect/batch", post(post_detect_batch))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Errors
/// バインドまたはサーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {addr}: {e}")))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {e}")))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{BatchDetectRequest, BatchDetectResponse, DetectRequest, DetectResponse};
  use crate::service::SenryuApiService;

  /// テスト用のダミー実装（辞書を一切触らない）
  struct DummyService;

  impl SenryuApiService for DummyService {
    fn detect(&self, request: DetectRequest) -> ApiResult<DetectResponse> {
      Ok(DetectResponse::new(request.text, &[], false, true, Some(0)))
    }

    fn detect_batch(&self, _request: BatchDetectRequest) -> ApiResult<BatchDetectResponse> {
      Ok(BatchDetectResponse::new(Vec::new(), 0))
    }
  }

  #[test]
  fn test_router_creation() {
    let config = Config::from_lookup(|_| None).unwrap();
    let service = Arc::new(DummyService) as Arc<dyn SenryuApiService>;
    let _router = create_router(AppState::new(config, service));
  }
}
