//! Configuration management for BDK.

use serde::{Deserialize, Serialize};
#[cfg(feature = "toml")]
use std::path::Path;
use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Environment variable overriding `infra.bdk_path`.
pub const ENV_BDK_PATH: &str = "BDK_PATH";
/// Environment variable overriding `network.name`.
pub const ENV_NETWORK_NAME: &str = "BDK_NETWORK_NAME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub infra: InfraConfig,
    pub network: NetworkConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfraConfig {
    /// Directory holding every network instance and the shared `.env`.
    pub bdk_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub admin_grant: AdminGrantPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

/// Which users get their signing certificate copied into the
/// organization-level `msp/admincerts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminGrantPolicy {
    /// Every materialized user is trusted as an organization admin.
    #[default]
    AllUsers,
    /// Only users whose name starts with `admin` (case-insensitive).
    AdminsOnly,
}

impl std::str::FromStr for AdminGrantPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all-users" => Ok(AdminGrantPolicy::AllUsers),
            "admins-only" => Ok(AdminGrantPolicy::AdminsOnly),
            other => Err(CoreError::Config(format!(
                "unknown admin grant policy '{}' (expected all-users or admins-only)",
                other
            ))),
        }
    }
}

impl Config {
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            infra: InfraConfig {
                bdk_path: PathBuf::from(".bdk"),
            },
            network: NetworkConfig {
                name: "bdk-network".to_string(),
            },
            policy: PolicyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Apply `BDK_PATH` / `BDK_NETWORK_NAME` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(
            std::env::var(ENV_BDK_PATH).ok(),
            std::env::var(ENV_NETWORK_NAME).ok(),
        )
    }

    fn apply_overrides(
        &mut self,
        bdk_path: Option<String>,
        network_name: Option<String>,
    ) -> Result<()> {
        if let Some(path) = bdk_path {
            self.infra.bdk_path = PathBuf::from(path);
        }
        if let Some(name) = network_name {
            self.network.name = name;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.network.name.trim().is_empty() {
            return Err(CoreError::Config("network.name cannot be empty".to_string()));
        }
        if self.network.name.contains('/') {
            return Err(CoreError::Config(format!(
                "network.name '{}' must not contain '/'",
                self.network.name
            )));
        }
        if self.infra.bdk_path.as_os_str().is_empty() {
            return Err(CoreError::Config("infra.bdk_path cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Crypto material root of the configured network: `<bdk_path>/<network>`.
    pub fn material_root(&self) -> PathBuf {
        self.infra.bdk_path.join(&self.network.name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
