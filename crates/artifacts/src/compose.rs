//! Docker compose documents of a network.
//!
//! Each container gets `docker-compose/docker-compose-<type>-<host>.yaml`;
//! the set of those file names is the inventory of deployed instances.

use std::fs;
use std::path::PathBuf;

use bdk_core::InstanceType;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, ArtifactResult};
use crate::network::{read_text, write_text, NetworkFiles};

const COMPOSE_PREFIX: &str = "docker-compose-";
const COMPOSE_SUFFIX: &str = ".yaml";

/// Hostnames with a compose document, grouped by instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeInventory {
    pub peer: Vec<String>,
    pub orderer: Vec<String>,
    pub ca: Vec<String>,
}

impl NetworkFiles {
    fn compose_dir(&self) -> PathBuf {
        self.root_path().join("docker-compose")
    }

    pub fn docker_compose_path(&self, host: &str, instance: InstanceType) -> PathBuf {
        self.compose_dir().join(format!(
            "{}{}-{}{}",
            COMPOSE_PREFIX, instance, host, COMPOSE_SUFFIX
        ))
    }

    pub fn write_docker_compose<T: Serialize>(
        &self,
        host: &str,
        instance: InstanceType,
        document: &T,
    ) -> ArtifactResult<PathBuf> {
        let path = self.docker_compose_path(host, instance);
        write_text(&path, &serde_yaml::to_string(document)?)?;
        Ok(path)
    }

    pub fn read_docker_compose<T: DeserializeOwned>(
        &self,
        host: &str,
        instance: InstanceType,
    ) -> ArtifactResult<T> {
        let source = read_text(&self.docker_compose_path(host, instance))?;
        Ok(serde_yaml::from_str(&source)?)
    }

    /// Scan the compose folder. A network without one has no instances.
    pub fn docker_compose_inventory(&self) -> ArtifactResult<ComposeInventory> {
        let dir = self.compose_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ComposeInventory::default())
            }
            Err(e) => return Err(ArtifactError::io(&dir, e)),
        };

        let mut inventory = ComposeInventory::default();
        for entry in entries {
            let entry = entry.map_err(|e| ArtifactError::io(&dir, e))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let Some(stem) = file_name
                .strip_prefix(COMPOSE_PREFIX)
                .and_then(|rest| rest.strip_suffix(COMPOSE_SUFFIX))
            else {
                continue;
            };

            if let Some(host) = stem.strip_prefix("orderer-") {
                inventory.orderer.push(host.to_string());
            } else if let Some(host) = stem.strip_prefix("peer-") {
                inventory.peer.push(host.to_string());
            } else if let Some(host) = stem.strip_prefix("ca-") {
                inventory.ca.push(host.to_string());
            }
        }
        inventory.orderer.sort();
        inventory.peer.sort();
        inventory.ca.sort();
        Ok(inventory)
    }
}
