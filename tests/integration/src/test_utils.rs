//! Test utilities for workspace integration tests

use bdk_msp::{MaterialLayout, NodeRequest, OrgKind, OrgRequest, UserRequest};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Organization name every fixture stages under
pub const ORG: &str = "org1";

/// Write a file and pin its modification time to `secs` after the epoch.
pub fn stage_file(path: &Path, contents: &str, secs: u64) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
    fs::File::open(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

/// Staged CA output for one organization of a given kind
pub struct StagedOrg<'a> {
    pub layout: &'a MaterialLayout,
    pub kind: OrgKind,
    pub domain: String,
}

impl<'a> StagedOrg<'a> {
    pub fn new(layout: &'a MaterialLayout, kind: OrgKind, domain: &str) -> Self {
        Self {
            layout,
            kind,
            domain: domain.to_string(),
        }
    }

    /// Stage the enrollment of the organization's client identity
    pub fn stage_org_admin(&self, client_id: &str) {
        let msp = self.layout.staged_identity(client_id, ORG).join("msp");
        stage_file(&msp.join("cacerts/rca-old.pem"), "root-ca-t0", 1_000);
        stage_file(&msp.join("cacerts/rca.pem"), "root-ca-t1", 2_000);
        stage_file(&msp.join("intermediatecerts/ica.pem"), "ica", 1_500);
        stage_file(&msp.join("signcerts/cert.pem"), "org-admin", 1_500);
        stage_file(&msp.join("keystore/priv_sk"), "org-admin-key", 1_500);
    }

    /// Stage enrollment and TLS output of a node
    pub fn stage_node(&self, node: &str) {
        let staged = self.layout.staged_identity(node, ORG);
        stage_file(&staged.join("msp/cacerts/rca.pem"), "root-ca-t1", 2_000);
        stage_file(&staged.join("msp/intermediatecerts/ica.pem"), "ica", 1_500);
        stage_file(&staged.join("msp/signcerts/cert.pem"), &format!("{}-cert", node), 1_500);
        stage_file(&staged.join("msp/keystore/priv_sk"), &format!("{}-key", node), 1_500);
        stage_file(&staged.join("tls/tlsintermediatecerts/tls-ica.pem"), "tls-ica", 1_500);
        stage_file(&staged.join("tls/signcerts/cert.pem"), &format!("{}-tls", node), 3_000);
        stage_file(&staged.join("tls/keystore/priv_sk"), &format!("{}-tls-key", node), 3_000);
    }

    /// Stage enrollment output of a user
    pub fn stage_user(&self, user: &str) {
        let staged = self.layout.staged_user(user, ORG);
        stage_file(&staged.join("signcerts/cert.pem"), &format!("{}-signcert", user), 1_500);
        stage_file(&staged.join("keystore/priv_sk"), &format!("{}-key", user), 1_500);
        stage_file(&staged.join("cacerts/rca.pem"), "root-ca-t1", 2_000);
    }

    pub fn org_request(&self, client_id: &str) -> OrgRequest {
        OrgRequest {
            org_name: ORG.to_string(),
            client_id: client_id.to_string(),
            kind: self.kind,
            domain: self.domain.clone(),
        }
    }

    pub fn node_request(&self, node: &str) -> NodeRequest {
        NodeRequest {
            kind: self.kind,
            org_name: ORG.to_string(),
            node_name: node.to_string(),
            domain: self.domain.clone(),
        }
    }

    pub fn user_request(&self, user: &str) -> UserRequest {
        UserRequest {
            kind: self.kind,
            org_name: ORG.to_string(),
            user_name: user.to_string(),
            domain: self.domain.clone(),
        }
    }
}

/// Initialize tracing once for the test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
