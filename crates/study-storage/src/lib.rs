//! study-storage - Storage library for study-log
//!
//! This crate provides the JSON file store behind the session manager,
//! including the legacy on-disk format handling.

mod codec;
mod json_store;

pub use json_store::{JsonFileStore, DEFAULT_FILE};
