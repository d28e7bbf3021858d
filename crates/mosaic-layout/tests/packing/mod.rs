//! Packing integration test modules.

mod properties;
mod scenarios;
