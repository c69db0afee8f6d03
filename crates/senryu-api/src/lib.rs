//! senryu-api crate
//!
//! Web server exposing senryu (5-7-5) verse detection as an HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Service information
//! - `GET /health` - Health Check
//! - `GET /examples` - Example verses
//! - `POST /detect` - Detect verses in one text
//! - `POST /detect/batch` - Detect verses in several texts
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8080/detect \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "古池や蛙飛び込む水の音"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::ApiError;
pub use models::{BatchDetectRequest, BatchDetectResponse, DetectRequest, DetectResponse};
pub use service::{SenryuApiService, SenryuApiServiceFull};
