//! Orderer and peer node assembly.
//!
//! Both node kinds follow one procedure; only the directory under the
//! organization (`orderers/` or `peers/`) differs.

use bdk_core::OrgKind;

use crate::error::MspResult;
use crate::fsops::{copy_file, copy_tree, ensure_dir, list_subdirs};
use crate::layout::{
    MaterialLayout, NodePaths, ADMINCERTS, CACERTS, INTERMEDIATECERTS, KEYSTORE, SIGNCERTS,
    TLSCACERTS, TLSINTERMEDIATECERTS,
};
use crate::propagation::{install_admin_certs, is_admin_name};
use crate::selector::newest_artifact;

/// Node to materialize from the staged `<node_name>@<org_name>` tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRequest {
    pub kind: OrgKind,
    pub org_name: String,
    /// Node hostname, e.g. `peer0.org1.example.com`.
    pub node_name: String,
    /// Domain of the owning organization.
    pub domain: String,
}

/// Result of a node assembly.
#[derive(Debug, Clone)]
pub struct NodeOutcome {
    pub paths: NodePaths,
    /// Admin users whose signing certificates were pulled into `msp/admincerts`.
    pub pulled_admins: Vec<String>,
}

/// Build the node's `msp/` and `tls/` trees and pull in existing admin certificates.
pub fn assemble_node(layout: &MaterialLayout, request: &NodeRequest) -> MspResult<NodeOutcome> {
    let org = layout.org(request.kind, &request.domain);
    let node = org.node(&request.node_name);
    let staged = layout.staged_identity(&request.node_name, &request.org_name);

    tracing::info!(
        "Assembling {} node {} from {}",
        request.kind,
        request.node_name,
        staged.display()
    );

    ensure_dir(&node.msp_subdir(ADMINCERTS))?;
    ensure_dir(&node.msp_subdir(TLSCACERTS))?;
    ensure_dir(&node.msp_subdir(TLSINTERMEDIATECERTS))?;

    copy_tree(&staged, node.root())?;

    // Nodes keep the full CA chain for mutual TLS, not a single derived file.
    copy_tree(&node.msp_subdir(CACERTS), &node.msp_subdir(TLSCACERTS))?;
    copy_tree(
        &node.msp_subdir(INTERMEDIATECERTS),
        &node.msp_subdir(TLSINTERMEDIATECERTS),
    )?;

    let tls_ca = newest_artifact(&node.tls_subdir(TLSINTERMEDIATECERTS))?;
    copy_file(&tls_ca, &node.tls_ca_cert())?;
    let server_cert = newest_artifact(&node.tls_subdir(SIGNCERTS))?;
    copy_file(&server_cert, &node.tls_server_cert())?;
    let server_key = newest_artifact(&node.tls_subdir(KEYSTORE))?;
    copy_file(&server_key, &node.tls_server_key())?;

    let mut pulled_admins = Vec::new();
    for user in list_subdirs(&org.users_dir())? {
        if !is_admin_name(&user) {
            continue;
        }
        install_admin_certs(&org, &user, &node.msp_subdir(ADMINCERTS))?;
        tracing::debug!("pulled admin {} into node {}", user, request.node_name);
        pulled_admins.push(user);
    }

    tracing::info!(
        "Node {} assembled ({} admin certificate source(s))",
        request.node_name,
        pulled_admins.len()
    );
    Ok(NodeOutcome {
        paths: node,
        pulled_admins,
    })
}
