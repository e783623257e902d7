//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the favorites core:
//! - Logging and tracing infrastructure
//! - Configuration management and store injection
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the library and service
//! crates depend on. It establishes the logging conventions and the
//! fail-fast configuration used to wire a host's persistent store into the
//! core.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder, FeatureFlags};
pub use error::{Error, Result};
