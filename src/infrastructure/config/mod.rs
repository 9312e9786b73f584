//! Configuration infrastructure module

mod json;

pub use json::{JsonConfigStore, DEFAULT_CONFIG_PATH};
