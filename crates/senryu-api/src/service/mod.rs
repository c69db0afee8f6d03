//! Service module

mod senryu_api_service;

pub use senryu_api_service::{SenryuApiService, SenryuApiServiceFull, validate_batch, validate_text};
