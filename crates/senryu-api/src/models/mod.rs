//! モデルモジュール

mod request;
mod response;

pub use request::{BatchDetectRequest, DetectRequest};
pub use response::{
  BatchDetectResponse, DetectResponse, DetectionDto, ExamplesResponse, HealthResponse, PhraseDto,
  ServiceInfoResponse, TokenDto,
};
