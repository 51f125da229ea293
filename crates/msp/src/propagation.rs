//! User materialization and admin-certificate propagation.
//!
//! Admin trust flows two ways. Materializing an admin user pushes its
//! signing certificate to every node that already exists; assembling a node
//! pulls the certificates of every admin user that already exists. With
//! both in place the final `admincerts` content does not depend on the
//! order in which nodes and users are created.

use std::path::Path;

use bdk_core::{AdminGrantPolicy, OrgKind};

use crate::error::MspResult;
use crate::fsops::{copy_files_renamed, copy_tree, ensure_dir, list_subdirs};
use crate::layout::{MaterialLayout, OrgPaths, UserPaths, ADMINCERTS};

/// Admin identities are recognised by name: `admin` prefix, any case.
pub fn is_admin_name(name: &str) -> bool {
    name.to_lowercase().starts_with("admin")
}

/// User to materialize from the staged `<user_name>@<org_name>/user` tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRequest {
    pub kind: OrgKind,
    pub org_name: String,
    pub user_name: String,
    pub domain: String,
}

/// Result of a user materialization.
#[derive(Debug, Clone)]
pub struct UserOutcome {
    pub paths: UserPaths,
    /// Whether the certificate went into the organization `msp/admincerts`.
    pub org_admin_granted: bool,
    /// Nodes that received the certificate in their `msp/admincerts`.
    pub pushed_to_nodes: Vec<String>,
}

/// Copy a user's signing certificates into a shared `admincerts` directory.
///
/// Copies are named per owner, so certificates of different users never
/// replace each other, whichever side of the push/pull wrote them.
pub(crate) fn install_admin_certs(
    org: &OrgPaths,
    user_name: &str,
    admincerts: &Path,
) -> MspResult<Vec<String>> {
    copy_files_renamed(&org.user(user_name).signcerts(), admincerts, |file| {
        org.admin_cert_name(user_name, file)
    })
}

fn grants_org_admin(policy: AdminGrantPolicy, user_name: &str) -> bool {
    match policy {
        AdminGrantPolicy::AllUsers => true,
        AdminGrantPolicy::AdminsOnly => is_admin_name(user_name),
    }
}

/// Materialize `users/<user>/msp` and propagate the user's signing certificate.
pub fn assemble_user(
    layout: &MaterialLayout,
    request: &UserRequest,
    policy: AdminGrantPolicy,
) -> MspResult<UserOutcome> {
    let org = layout.org(request.kind, &request.domain);
    let user = org.user(&request.user_name);
    let staged = layout.staged_user(&request.user_name, &request.org_name);

    tracing::info!(
        "Materializing user {} of {} organization {}",
        request.user_name,
        request.kind,
        request.domain
    );

    ensure_dir(&user.msp())?;
    copy_tree(&staged, &user.msp())?;

    let signcerts = user.signcerts();

    let org_admin_granted = grants_org_admin(policy, &request.user_name);
    if org_admin_granted {
        install_admin_certs(&org, &request.user_name, &org.msp_subdir(ADMINCERTS))?;
    } else {
        tracing::debug!(
            "user {} not granted organization admin under {:?}",
            request.user_name,
            policy
        );
    }

    copy_tree(&signcerts, &user.admincerts())?;

    let mut pushed_to_nodes = Vec::new();
    if is_admin_name(&request.user_name) {
        for node_name in list_subdirs(&org.nodes_dir())? {
            install_admin_certs(
                &org,
                &request.user_name,
                &org.node(&node_name).msp_subdir(ADMINCERTS),
            )?;
            tracing::debug!("pushed admin {} into node {}", request.user_name, node_name);
            pushed_to_nodes.push(node_name);
        }
    }

    tracing::info!(
        "User {} materialized (org admin: {}, nodes updated: {})",
        request.user_name,
        org_admin_granted,
        pushed_to_nodes.len()
    );
    Ok(UserOutcome {
        paths: user,
        org_admin_granted,
        pushed_to_nodes,
    })
}
