//! Organization-level membership assembly.

use bdk_core::OrgKind;

use crate::error::MspResult;
use crate::fsops::{copy_file, copy_tree, ensure_dir, write_file};
use crate::layout::{
    MaterialLayout, OrgPaths, ADMINCERTS, CACERTS, INTERMEDIATECERTS, MSP, TLSCACERTS,
    TLSINTERMEDIATECERTS,
};
use crate::selector::newest_artifact;

/// Node OU classification: roles are told apart by the OU of the certificate.
pub const NODE_OU_CONFIG: &str = "NodeOUs:\n  Enable: true\n  ClientOUIdentifier:\n    OrganizationalUnitIdentifier: client\n  PeerOUIdentifier:\n    OrganizationalUnitIdentifier: peer\n  AdminOUIdentifier:\n    OrganizationalUnitIdentifier: admin\n  OrdererOUIdentifier:\n    OrganizationalUnitIdentifier: orderer\n";

/// Organization to materialize from the staged `<client_id>@<org_name>/msp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgRequest {
    /// Organization name used by the CA step when staging identities.
    pub org_name: String,
    /// Registered identity whose MSP seeds the organization MSP.
    pub client_id: String,
    pub kind: OrgKind,
    /// Organization domain, e.g. `org1.example.com`.
    pub domain: String,
}

/// Build `<kind>Organizations/<domain>` from the staged identity.
///
/// The organization TLS root is the newest `cacerts` file stored under the
/// fixed name `tlsca.<domain>-cert.pem`; the presented CA certificate is the
/// newest `intermediatecerts` file stored as `ca/ca.<domain>-cert.pem`.
pub fn assemble_organization(layout: &MaterialLayout, request: &OrgRequest) -> MspResult<OrgPaths> {
    let org = layout.org(request.kind, &request.domain);
    let staged = layout
        .staged_identity(&request.client_id, &request.org_name)
        .join(MSP);

    tracing::info!(
        "Assembling {} organization {} from {}",
        request.kind,
        request.domain,
        staged.display()
    );

    ensure_dir(&org.ca_dir())?;
    ensure_dir(&org.msp_subdir(ADMINCERTS))?;
    ensure_dir(&org.msp_subdir(TLSCACERTS))?;
    ensure_dir(&org.msp_subdir(TLSINTERMEDIATECERTS))?;

    copy_tree(&staged, &org.msp())?;

    let root_ca = newest_artifact(&org.msp_subdir(CACERTS))?;
    copy_file(&root_ca, &org.tlsca_cert_file())?;

    copy_tree(
        &org.msp_subdir(INTERMEDIATECERTS),
        &org.msp_subdir(TLSINTERMEDIATECERTS),
    )?;

    let intermediate = newest_artifact(&org.msp_subdir(INTERMEDIATECERTS))?;
    copy_file(&intermediate, &org.ca_cert_file())?;

    write_file(&org.node_ou_config(), NODE_OU_CONFIG.as_bytes())?;

    tracing::info!("Organization {} assembled", request.domain);
    Ok(org)
}
