//! Canonical paths of the crypto material tree.
//!
//! Everything here is plain path arithmetic: nothing touches the filesystem
//! and nothing can fail. Organization, node and user locations are handed
//! to the assemblers as values.

use bdk_core::{Config, OrgKind};
use std::path::{Path, PathBuf};

pub const MSP: &str = "msp";
pub const TLS: &str = "tls";
pub const CACERTS: &str = "cacerts";
pub const INTERMEDIATECERTS: &str = "intermediatecerts";
pub const ADMINCERTS: &str = "admincerts";
pub const TLSCACERTS: &str = "tlscacerts";
pub const TLSINTERMEDIATECERTS: &str = "tlsintermediatecerts";
pub const SIGNCERTS: &str = "signcerts";
pub const KEYSTORE: &str = "keystore";

/// Node OU policy file inside an organization MSP.
pub const NODE_OU_CONFIG_FILE: &str = "config.yaml";

/// Root of one network's crypto material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLayout {
    root: PathBuf,
}

impl MaterialLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.material_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory where the CA step stages its issuance output.
    pub fn ca_dir(&self) -> PathBuf {
        self.root.join("ca")
    }

    /// `ca/<identity>@<org>`: staged output for org, node and admin identities.
    pub fn staged_identity(&self, identity: &str, org_name: &str) -> PathBuf {
        self.ca_dir().join(format!("{}@{}", identity, org_name))
    }

    /// `ca/<user>@<org>/user`: staged output for a plain user enrollment.
    pub fn staged_user(&self, user: &str, org_name: &str) -> PathBuf {
        self.staged_identity(user, org_name).join("user")
    }

    /// `<kind>Organizations/<domain>`.
    pub fn org(&self, kind: OrgKind, domain: &str) -> OrgPaths {
        OrgPaths {
            kind,
            domain: domain.to_string(),
            root: self.root.join(kind.organizations_dir()).join(domain),
        }
    }
}

/// Resolved location of one organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgPaths {
    kind: OrgKind,
    domain: String,
    root: PathBuf,
}

impl OrgPaths {
    pub fn kind(&self) -> OrgKind {
        self.kind
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn msp(&self) -> PathBuf {
        self.root.join(MSP)
    }

    pub fn msp_subdir(&self, name: &str) -> PathBuf {
        self.msp().join(name)
    }

    pub fn ca_dir(&self) -> PathBuf {
        self.root.join("ca")
    }

    /// `ca/ca.<domain>-cert.pem`, the CA certificate the organization presents.
    pub fn ca_cert_file(&self) -> PathBuf {
        self.ca_dir().join(format!("ca.{}-cert.pem", self.domain))
    }

    /// `msp/tlscacerts/tlsca.<domain>-cert.pem`.
    pub fn tlsca_cert_file(&self) -> PathBuf {
        self.msp_subdir(TLSCACERTS)
            .join(format!("tlsca.{}-cert.pem", self.domain))
    }

    pub fn node_ou_config(&self) -> PathBuf {
        self.msp().join(NODE_OU_CONFIG_FILE)
    }

    /// `orderers/` or `peers/`, depending on the organization kind.
    pub fn nodes_dir(&self) -> PathBuf {
        self.root.join(self.kind.nodes_dir())
    }

    pub fn node(&self, name: &str) -> NodePaths {
        NodePaths {
            name: name.to_string(),
            root: self.nodes_dir().join(name),
        }
    }

    pub fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    pub fn user(&self, name: &str) -> UserPaths {
        UserPaths {
            name: name.to_string(),
            root: self.users_dir().join(name),
        }
    }

    /// Name a user's signing certificate takes inside a shared `admincerts`.
    ///
    /// Issuance names every signing certificate alike, so the owner is
    /// encoded in the name: `<user>@<domain>-<file>`.
    pub fn admin_cert_name(&self, user: &str, file_name: &str) -> String {
        format!("{}@{}-{}", user, self.domain, file_name)
    }
}

/// Resolved location of one orderer or peer node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePaths {
    name: String,
    root: PathBuf,
}

impl NodePaths {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn msp(&self) -> PathBuf {
        self.root.join(MSP)
    }

    pub fn msp_subdir(&self, name: &str) -> PathBuf {
        self.msp().join(name)
    }

    pub fn tls(&self) -> PathBuf {
        self.root.join(TLS)
    }

    pub fn tls_subdir(&self, name: &str) -> PathBuf {
        self.tls().join(name)
    }

    pub fn tls_ca_cert(&self) -> PathBuf {
        self.tls().join("ca.crt")
    }

    pub fn tls_server_cert(&self) -> PathBuf {
        self.tls().join("server.crt")
    }

    pub fn tls_server_key(&self) -> PathBuf {
        self.tls().join("server.key")
    }
}

/// Resolved location of one user identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPaths {
    name: String,
    root: PathBuf,
}

impl UserPaths {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn msp(&self) -> PathBuf {
        self.root.join(MSP)
    }

    pub fn signcerts(&self) -> PathBuf {
        self.msp().join(SIGNCERTS)
    }

    pub fn admincerts(&self) -> PathBuf {
        self.msp().join(ADMINCERTS)
    }
}
