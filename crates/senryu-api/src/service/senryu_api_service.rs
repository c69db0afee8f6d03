//! Senryu Detection Service

use std::time::Instant;

use senryu::SenryuService;
use tracing::debug;

use crate::config::{Config, MAX_BATCH_SIZE, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{BatchDetectRequest, BatchDetectResponse, DetectRequest, DetectResponse};

/// Common interface for the detection service
///
/// This trait allows swapping production implementation (`SenryuApiServiceFull`) with
/// test stubs/mocks.
pub trait SenryuApiService: Send + Sync {
  /// Detects verses in a single text
  ///
  /// # Errors
  /// - Input error (blank text, length exceeded)
  /// - Internal error
  fn detect(&self, request: DetectRequest) -> Result<DetectResponse>;

  /// Detects verses in every text of the batch, keeping input order
  ///
  /// # Errors
  /// - Input error (empty batch, too many texts, any invalid text)
  /// - Internal error
  fn detect_batch(&self, request: BatchDetectRequest) -> Result<BatchDetectResponse>;
}

/// Checks a single input text
///
/// # Errors
/// - `invalid_input` if the text is empty or whitespace only
/// - `text_too_long` if the text exceeds [`MAX_TEXT_LENGTH`] bytes
pub fn validate_text(text: &str) -> Result<()> {
  if text.trim().is_empty() {
    return Err(ApiError::invalid_input("Text is empty"));
  }

  let text_bytes = text.len();
  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::TextTooLong { bytes: text_bytes, max: MAX_TEXT_LENGTH });
  }

  Ok(())
}

/// Checks a batch and each of its texts
///
/// # Errors
/// - `invalid_input` if the batch is empty or a text is blank
/// - `batch_too_large` if there are more than [`MAX_BATCH_SIZE`] texts
/// - `text_too_long` if a text exceeds [`MAX_TEXT_LENGTH`] bytes
pub fn validate_batch(texts: &[String]) -> Result<()> {
  if texts.is_empty() {
    return Err(ApiError::invalid_input("Batch is empty"));
  }

  if texts.len() > MAX_BATCH_SIZE {
    return Err(ApiError::BatchTooLarge { count: texts.len(), max: MAX_BATCH_SIZE });
  }

  for (index, text) in texts.iter().enumerate() {
    validate_text(text).map_err(|err| match err {
      ApiError::InvalidInput(message) => ApiError::invalid_input(format!("texts[{index}]: {message}")),
      other => other,
    })?;
  }

  Ok(())
}

fn elapsed_ms(start: Instant) -> u64 {
  u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Detection Service
///
/// Owns a fully initialized `SenryuService` (dictionary, analyzer and detector).
pub struct SenryuApiServiceFull {
  inner: SenryuService,
}

impl SenryuApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including dictionary preset and detector settings)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or dictionary load fails
  pub fn new(config: &Config) -> Result<Self> {
    let inner = SenryuService::init(&config.senryu)?;
    Ok(Self { inner })
  }

  /// Wraps an already built `SenryuService`
  #[must_use]
  pub fn from_service(inner: SenryuService) -> Self {
    Self { inner }
  }

  /// Detects verses in a single text
  ///
  /// # Errors
  /// - If text is blank
  /// - If text exceeds maximum length
  /// - If analysis fails
  pub fn detect(&self, request: DetectRequest) -> Result<DetectResponse> {
    validate_text(&request.text)?;

    let start = Instant::now();
    let results = self.inner.detect(&request.text)?;
    let elapsed = elapsed_ms(start);

    debug!(found = results.len(), elapsed_ms = elapsed, "detect finished");

    Ok(DetectResponse::new(
      request.text,
      &results,
      request.only_valid,
      request.details,
      Some(elapsed),
    ))
  }

  /// Detects verses in every text of the batch
  ///
  /// # Errors
  /// - If the batch or one of its texts is invalid
  /// - If analysis fails for any text
  pub fn detect_batch(&self, request: BatchDetectRequest) -> Result<BatchDetectResponse> {
    validate_batch(&request.texts)?;

    let start = Instant::now();
    let all_results = self.inner.detect_batch(&request.texts)?;
    let elapsed = elapsed_ms(start);

    let items = request
      .texts
      .into_iter()
      .zip(all_results)
      .map(|(text, results)| {
        DetectResponse::new(text, &results, request.only_valid, request.details, None)
      })
      .collect();

    Ok(BatchDetectResponse::new(items, elapsed))
  }
}

/// Production implementation of trait `SenryuApiService`
impl SenryuApiService for SenryuApiServiceFull {
  fn detect(&self, request: DetectRequest) -> Result<DetectResponse> {
    // `self.detect(...)` would resolve to this trait method again
    SenryuApiServiceFull::detect(self, request)
  }

  fn detect_batch(&self, request: BatchDetectRequest) -> Result<BatchDetectResponse> {
    SenryuApiServiceFull::detect_batch(self, request)
  }
}
