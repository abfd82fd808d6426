//! Config Module
//!
//! Centralized configuration for placement, movement and object tuning.

pub mod engine_config;

pub use engine_config::EngineConfig;
