//! Materialization engine with per-organization serialization.
//!
//! User materialization and node assembly of the same organization both
//! write `admincerts` directories in that organization's subtree, so they
//! must not interleave. Each call takes the lock token of its organization;
//! different organizations proceed in parallel.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use bdk_core::{AdminGrantPolicy, Config, OrgKind};
use parking_lot::Mutex;

use crate::error::MspResult;
use crate::inspect::{admin_certificates, admin_fingerprints, AdminCertificate};
use crate::layout::{MaterialLayout, OrgPaths};
use crate::node::{assemble_node, NodeOutcome, NodeRequest};
use crate::organization::{assemble_organization, OrgRequest};
use crate::propagation::{assemble_user, UserOutcome, UserRequest};

type OrgKey = (OrgKind, String);

/// Registry of per-organization lock tokens.
#[derive(Debug, Default)]
pub struct OrgLocks {
    tokens: Mutex<HashMap<OrgKey, Arc<Mutex<()>>>>,
}

impl OrgLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock token for one organization; the same token for every call.
    pub fn token(&self, kind: OrgKind, domain: &str) -> Arc<Mutex<()>> {
        let mut tokens = self.tokens.lock();
        tokens
            .entry((kind, domain.to_string()))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.tokens.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entry point for orchestration code that may run assemblies concurrently.
#[derive(Debug)]
pub struct MaterializationEngine {
    layout: MaterialLayout,
    admin_grant: AdminGrantPolicy,
    locks: OrgLocks,
}

impl MaterializationEngine {
    pub fn new(layout: MaterialLayout, admin_grant: AdminGrantPolicy) -> Self {
        Self {
            layout,
            admin_grant,
            locks: OrgLocks::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            MaterialLayout::from_config(config),
            config.policy.admin_grant,
        )
    }

    pub fn layout(&self) -> &MaterialLayout {
        &self.layout
    }

    pub fn admin_grant(&self) -> AdminGrantPolicy {
        self.admin_grant
    }

    pub fn organization(&self, request: &OrgRequest) -> MspResult<OrgPaths> {
        let token = self.locks.token(request.kind, &request.domain);
        let _guard = token.lock();
        assemble_organization(&self.layout, request)
    }

    pub fn node(&self, request: &NodeRequest) -> MspResult<NodeOutcome> {
        let token = self.locks.token(request.kind, &request.domain);
        let _guard = token.lock();
        assemble_node(&self.layout, request)
    }

    pub fn user(&self, request: &UserRequest) -> MspResult<UserOutcome> {
        let token = self.locks.token(request.kind, &request.domain);
        let _guard = token.lock();
        assemble_user(&self.layout, request, self.admin_grant)
    }

    /// Admin fingerprints trusted by the organization MSP, or by one of its nodes.
    pub fn admin_fingerprints(
        &self,
        kind: OrgKind,
        domain: &str,
        node: Option<&str>,
    ) -> MspResult<BTreeSet<String>> {
        let token = self.locks.token(kind, domain);
        let _guard = token.lock();
        admin_fingerprints(&self.msp_dir(kind, domain, node))
    }

    /// Admin certificates trusted by the organization MSP, or by one of its nodes.
    pub fn admin_certificates(
        &self,
        kind: OrgKind,
        domain: &str,
        node: Option<&str>,
    ) -> MspResult<Vec<AdminCertificate>> {
        let token = self.locks.token(kind, domain);
        let _guard = token.lock();
        admin_certificates(&self.msp_dir(kind, domain, node))
    }

    /// Membership directory of an organization, or of one of its nodes.
    pub fn msp_dir(&self, kind: OrgKind, domain: &str, node: Option<&str>) -> PathBuf {
        let org = self.layout.org(kind, domain);
        match node {
            Some(name) => org.node(name).msp(),
            None => org.msp(),
        }
    }
}
