//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT, EXAMPLE_VERSES, MAX_BATCH_SIZE, MAX_TEXT_LENGTH,
  PORT_BIND_HOST,
};
pub use env::{Config, vars};
