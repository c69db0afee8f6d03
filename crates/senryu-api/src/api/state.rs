//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::SenryuApiService;

/// Application State
///
/// State shared across the entire server.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Detection Service
  ///
  /// - Production: `Arc::new(SenryuApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubSenryuApiService)`
  pub service: Arc<dyn SenryuApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn SenryuApiService>) -> Self {
    Self { config, service }
  }
}
