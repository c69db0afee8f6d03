//! senryu-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use senryu_api::ApiError;
use senryu_api::api::{AppState, run_server};
use senryu_api::config::Config;
use senryu_api::service::SenryuApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ログレベルは設定値が既定、RUST_LOG があればそちらを優先
  let config = Config::from_env()?;
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.senryu.logging.level.as_str()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    bind_addr = %config.bind_addr,
    preset = %config.senryu.dictionary.preset,
    overlap = %config.senryu.detector.overlap,
    "設定を読み込みました"
  );

  // 辞書のロード（初回はダウンロード）を含むため時間がかかる場合がある
  let service = Arc::new(SenryuApiServiceFull::new(&config)?);
  tracing::info!("川柳検出サービスを初期化しました");

  let state = AppState::new(config, service);

  run_server(state).await
}
