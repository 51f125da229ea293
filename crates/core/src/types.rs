//! Core types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Kind of network instance a container or identity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    Ca,
    Orderer,
    Peer,
}

impl InstanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceType::Ca => "ca",
            InstanceType::Orderer => "orderer",
            InstanceType::Peer => "peer",
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ca" => Ok(InstanceType::Ca),
            "orderer" => Ok(InstanceType::Orderer),
            "peer" => Ok(InstanceType::Peer),
            other => Err(CoreError::Config(format!(
                "unknown instance type '{}' (expected ca, orderer or peer)",
                other
            ))),
        }
    }
}

/// Kind of organization, and of the nodes it hosts.
///
/// Ordering organizations host `orderers/`, peer organizations host
/// `peers/`. A CA never owns a membership tree of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgKind {
    Orderer,
    Peer,
}

impl OrgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgKind::Orderer => "orderer",
            OrgKind::Peer => "peer",
        }
    }

    /// Directory under the material root holding organizations of this kind.
    pub fn organizations_dir(&self) -> &'static str {
        match self {
            OrgKind::Orderer => "ordererOrganizations",
            OrgKind::Peer => "peerOrganizations",
        }
    }

    /// Directory under an organization holding its nodes.
    pub fn nodes_dir(&self) -> &'static str {
        match self {
            OrgKind::Orderer => "orderers",
            OrgKind::Peer => "peers",
        }
    }
}

impl fmt::Display for OrgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrgKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orderer" => Ok(OrgKind::Orderer),
            "peer" => Ok(OrgKind::Peer),
            other => Err(CoreError::Config(format!(
                "unknown organization kind '{}' (expected orderer or peer)",
                other
            ))),
        }
    }
}

impl TryFrom<InstanceType> for OrgKind {
    type Error = CoreError;

    fn try_from(value: InstanceType) -> Result<Self, Self::Error> {
        match value {
            InstanceType::Orderer => Ok(OrgKind::Orderer),
            InstanceType::Peer => Ok(OrgKind::Peer),
            InstanceType::Ca => Err(CoreError::Config(
                "a CA instance has no organization membership tree".to_string(),
            )),
        }
    }
}
