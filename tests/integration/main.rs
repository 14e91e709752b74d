//! Integration test entry point.

mod custom_backend;
mod pipeline;
