//! Accessors for the files of one network instance.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bdk_core::{Config, OrgKind};
use bdk_msp::MaterialLayout;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::env::{parse_env, stringify_env, EnvMap};
use crate::error::{ArtifactError, ArtifactResult};

/// File accessors rooted at `<bdk_path>/<network_name>`.
#[derive(Debug, Clone)]
pub struct NetworkFiles {
    bdk_path: PathBuf,
    root: PathBuf,
    layout: MaterialLayout,
}

impl NetworkFiles {
    pub fn new(bdk_path: impl Into<PathBuf>, network_name: &str) -> Self {
        let bdk_path = bdk_path.into();
        let root = bdk_path.join(network_name);
        Self {
            layout: MaterialLayout::new(&root),
            bdk_path,
            root,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.infra.bdk_path, &config.network.name)
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &MaterialLayout {
        &self.layout
    }

    pub fn env_path(&self) -> PathBuf {
        self.bdk_path.join(".env")
    }

    // -- environment ------------------------------------------------------

    pub fn load_env(&self) -> ArtifactResult<EnvMap> {
        let path = self.env_path();
        match fs::read_to_string(&path) {
            Ok(source) => Ok(parse_env(&source)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ArtifactError::MissingEnv { path })
            }
            Err(e) => Err(ArtifactError::io(&path, e)),
        }
    }

    pub fn create_env(&self, env: &EnvMap) -> ArtifactResult<()> {
        write_text(&self.env_path(), &stringify_env(env))
    }

    /// `env/<address>.env` for one organization's CLI container.
    pub fn write_org_env(&self, address: &str, dotenv: &str) -> ArtifactResult<()> {
        write_text(
            &self.root.join("env").join(format!("{}.env", address)),
            dotenv,
        )
    }

    // -- network folders --------------------------------------------------

    pub fn create_network_folder(&self) -> ArtifactResult<()> {
        ensure_dir(&self.root)
    }

    pub fn delete_network_folder(&self) -> ArtifactResult<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ArtifactError::io(&self.root, e)),
        }
    }

    pub fn create_ca_folder(&self) -> ArtifactResult<()> {
        ensure_dir(&self.layout.ca_dir())
    }

    // -- config-yaml ------------------------------------------------------

    fn config_yaml_dir(&self) -> PathBuf {
        self.root.join("config-yaml")
    }

    pub fn write_crypto_config(&self, yaml: &str) -> ArtifactResult<()> {
        write_text(&self.config_yaml_dir().join("crypto-config.yaml"), yaml)
    }

    pub fn write_configtx(&self, yaml: &str) -> ArtifactResult<()> {
        write_text(&self.config_yaml_dir().join("configtx.yaml"), yaml)
    }

    pub fn write_channel_configtx(&self, channel: &str, yaml: &str) -> ArtifactResult<()> {
        write_text(
            &self
                .config_yaml_dir()
                .join(format!("{}Channel", channel))
                .join("configtx.yaml"),
            yaml,
        )
    }

    pub fn write_configtx_orgs<T: Serialize>(&self, orgs: &T) -> ArtifactResult<()> {
        write_json(&self.config_yaml_dir().join("configtxOrgs.json"), orgs)
    }

    pub fn read_configtx_orgs<T: DeserializeOwned>(&self) -> ArtifactResult<T> {
        read_json(&self.config_yaml_dir().join("configtxOrgs.json"))
    }

    // -- certificates -----------------------------------------------------

    fn node_tls_dir(&self, kind: OrgKind, host: &str, domain: &str) -> PathBuf {
        self.layout
            .org(kind, domain)
            .node(&format!("{}.{}", host, domain))
            .tls()
    }

    /// Orderer `tls/server.crt`, base64 encoded for consenter definitions.
    pub fn orderer_server_cert_base64(&self, host: &str, domain: &str) -> ArtifactResult<String> {
        let path = self
            .node_tls_dir(OrgKind::Orderer, host, domain)
            .join("server.crt");
        let bytes = fs::read(&path).map_err(|e| ArtifactError::io(&path, e))?;
        Ok(STANDARD.encode(bytes))
    }

    /// Copy a node's `tls/ca.crt` to `tlsca/<host>.<domain>/ca.crt`.
    pub fn export_tls_ca(&self, kind: OrgKind, host: &str, domain: &str) -> ArtifactResult<PathBuf> {
        let src = self.node_tls_dir(kind, host, domain).join("ca.crt");
        let dst = self
            .root
            .join("tlsca")
            .join(format!("{}.{}", host, domain))
            .join("ca.crt");
        if let Some(parent) = dst.parent() {
            ensure_dir(parent)?;
        }
        fs::copy(&src, &dst).map_err(|e| ArtifactError::io(&src, e))?;
        Ok(dst)
    }

    /// `tls/ca.crt` of `peer<number>.<domain>`.
    pub fn peer_tls_ca_cert(&self, number: u32, domain: &str) -> ArtifactResult<String> {
        read_text(
            &self
                .node_tls_dir(OrgKind::Peer, &format!("peer{}", number), domain)
                .join("ca.crt"),
        )
    }

    /// The CA certificate a peer organization presents.
    pub fn peer_org_ca_cert(&self, domain: &str) -> ArtifactResult<String> {
        read_text(&self.layout.org(OrgKind::Peer, domain).ca_cert_file())
    }

    // -- channel artifacts ------------------------------------------------

    fn channel_dir(&self, channel: &str) -> PathBuf {
        self.root.join("channel-artifacts").join(channel)
    }

    pub fn create_channel_folder(&self, channel: &str) -> ArtifactResult<()> {
        ensure_dir(&self.channel_dir(channel))
    }

    pub fn write_channel_config_json(
        &self,
        channel: &str,
        file_name: &str,
        json: &str,
    ) -> ArtifactResult<()> {
        write_text(
            &self.channel_dir(channel).join(format!("{}.json", file_name)),
            json,
        )
    }

    pub fn read_channel_config_json(&self, channel: &str, file_name: &str) -> ArtifactResult<String> {
        read_text(&self.channel_dir(channel).join(format!("{}.json", file_name)))
    }

    /// `channel-artifacts/<channel>/<channel>.json` as decoded JSON.
    pub fn read_decoded_channel_config(&self, channel: &str) -> ArtifactResult<serde_json::Value> {
        read_json(&self.channel_dir(channel).join(format!("{}.json", channel)))
    }

    // -- organization documents -------------------------------------------

    fn org_json_dir(&self) -> PathBuf {
        self.root.join("org-json")
    }

    pub fn write_org_config_json(&self, name: &str, json: &str) -> ArtifactResult<()> {
        write_text(&self.org_json_dir().join(format!("{}.json", name)), json)
    }

    pub fn read_org_config_json(&self, name: &str) -> ArtifactResult<String> {
        read_text(&self.org_json_dir().join(format!("{}.json", name)))
    }

    pub fn write_orderer_consenter(&self, name: &str, json: &str) -> ArtifactResult<()> {
        write_text(
            &self.org_json_dir().join(format!("{}-consenter.json", name)),
            json,
        )
    }

    pub fn read_orderer_consenter(&self, name: &str) -> ArtifactResult<String> {
        read_text(&self.org_json_dir().join(format!("{}-consenter.json", name)))
    }

    /// Write an exported organization definition to an arbitrary path.
    pub fn write_exported_org_json<T: Serialize>(&self, org: &T, file: &Path) -> ArtifactResult<()> {
        let json = serde_json::to_string(org)?;
        write_text(file, &json)
    }

    /// `connection-<name>.json` and `.yaml` next to the peer organization.
    pub fn write_connection_profile<T: Serialize>(
        &self,
        name: &str,
        domain: &str,
        profile: &T,
    ) -> ArtifactResult<()> {
        let org_root = self.layout.org(OrgKind::Peer, domain).root().to_path_buf();
        write_json(&org_root.join(format!("connection-{}.json", name)), profile)?;
        write_text(
            &org_root.join(format!("connection-{}.yaml", name)),
            &serde_yaml::to_string(profile)?,
        )
    }
}

pub(crate) fn ensure_dir(path: &Path) -> ArtifactResult<()> {
    fs::create_dir_all(path).map_err(|e| ArtifactError::io(path, e))
}

pub(crate) fn write_text(path: &Path, contents: &str) -> ArtifactResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).map_err(|e| ArtifactError::io(path, e))?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

pub(crate) fn read_text(path: &Path) -> ArtifactResult<String> {
    fs::read_to_string(path).map_err(|e| ArtifactError::io(path, e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ArtifactResult<()> {
    write_text(path, &serde_json::to_string_pretty(value)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> ArtifactResult<T> {
    Ok(serde_json::from_str(&read_text(path)?)?)
}
