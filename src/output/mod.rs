// Thu Jan 22 2026 - Alex

pub mod json;

pub use json::{JsonWriter, OutputError};
