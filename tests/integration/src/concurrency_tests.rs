//! Concurrent engine use against one organization.

use crate::test_utils::{init_tracing, StagedOrg};
use bdk_msp::{AdminGrantPolicy, MaterialLayout, MaterializationEngine, OrgKind};
use std::fs;

const DOMAIN: &str = "ord.example.com";

#[test]
fn test_parallel_nodes_and_admin_share_one_org() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let engine = MaterializationEngine::new(MaterialLayout::new(dir.path()), AdminGrantPolicy::AllUsers);
    let staged = StagedOrg::new(engine.layout(), OrgKind::Orderer, DOMAIN);
    staged.stage_org_admin("Admin");
    staged.stage_user("Admin2");
    let nodes = ["orderer0", "orderer1", "orderer2", "orderer3"];
    for node in nodes {
        staged.stage_node(node);
    }

    engine.organization(&staged.org_request("Admin")).unwrap();

    std::thread::scope(|scope| {
        for node in nodes {
            let engine = &engine;
            let request = staged.node_request(node);
            scope.spawn(move || engine.node(&request).unwrap());
        }
        let engine = &engine;
        let request = staged.user_request("Admin2");
        scope.spawn(move || engine.user(&request).unwrap());
    });

    // Whichever side ran first, every node ends up trusting the admin.
    let org = engine.layout().org(OrgKind::Orderer, DOMAIN);
    for node in nodes {
        let paths = org.node(node);
        let admin_cert = paths
            .msp_subdir("admincerts")
            .join(org.admin_cert_name("Admin2", "cert.pem"));
        assert_eq!(fs::read_to_string(admin_cert).unwrap(), "Admin2-signcert");
        assert_eq!(
            fs::read_to_string(paths.tls_server_cert()).unwrap(),
            format!("{}-tls", node)
        );
        assert_eq!(
            engine
                .admin_fingerprints(OrgKind::Orderer, DOMAIN, Some(node))
                .unwrap(),
            engine.admin_fingerprints(OrgKind::Orderer, DOMAIN, None).unwrap()
        );
    }
}
