//! Core functionality for the BDK network tooling.
//!
//! This crate provides the shared types, configuration and logging setup
//! used by the membership materialization engine and the artifact
//! accessors.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{AdminGrantPolicy, Config, LoggingConfig};
pub use error::{CoreError, Result};
pub use types::{InstanceType, OrgKind};
