//! File accessors for BDK network artifacts.
//!
//! Orchestration code reads and writes the documents of a network through
//! [`NetworkFiles`]: the shared `.env`, generated config yaml, channel
//! artifacts, organization JSON, docker compose documents and chaincode
//! package ids. Documents are taken as serializable values or raw text;
//! nothing here decides which certificate is trusted.

pub mod chaincode;
pub mod compose;
pub mod env;
pub mod error;
pub mod network;

pub use compose::ComposeInventory;
pub use env::{parse_env, stringify_env, EnvMap};
pub use error::{ArtifactError, ArtifactResult};
pub use network::NetworkFiles;
