//! Admin trust must not depend on whether a node or an admin user was
//! materialized first.

use crate::test_utils::{init_tracing, StagedOrg};
use bdk_msp::{AdminGrantPolicy, MaterialLayout, MaterializationEngine, OrgKind};
use std::collections::BTreeSet;

const DOMAIN: &str = "org1.example.com";

fn build(order_node_first: bool, root: &std::path::Path) -> MaterializationEngine {
    let engine = MaterializationEngine::new(MaterialLayout::new(root), AdminGrantPolicy::AllUsers);
    let staged = StagedOrg::new(engine.layout(), OrgKind::Peer, DOMAIN);
    staged.stage_org_admin("Admin");
    staged.stage_node("peer0");
    staged.stage_user("Admin2");
    staged.stage_user("Admin3");

    engine.organization(&staged.org_request("Admin")).unwrap();
    if order_node_first {
        engine.node(&staged.node_request("peer0")).unwrap();
        engine.user(&staged.user_request("Admin3")).unwrap();
        engine.user(&staged.user_request("Admin2")).unwrap();
    } else {
        engine.user(&staged.user_request("Admin2")).unwrap();
        engine.user(&staged.user_request("Admin3")).unwrap();
        engine.node(&staged.node_request("peer0")).unwrap();
    }
    engine
}

#[test]
fn test_node_admins_converge_across_orders() {
    init_tracing();

    let node_first_dir = tempfile::tempdir().unwrap();
    let admin_first_dir = tempfile::tempdir().unwrap();
    let node_first = build(true, node_first_dir.path());
    let admin_first = build(false, admin_first_dir.path());

    let a = node_first
        .admin_fingerprints(OrgKind::Peer, DOMAIN, Some("peer0"))
        .unwrap();
    let b = admin_first
        .admin_fingerprints(OrgKind::Peer, DOMAIN, Some("peer0"))
        .unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(a, b);

    let org_a = node_first.admin_fingerprints(OrgKind::Peer, DOMAIN, None).unwrap();
    let org_b = admin_first.admin_fingerprints(OrgKind::Peer, DOMAIN, None).unwrap();
    assert_eq!(org_a, org_b);
}

#[test]
fn test_admins_only_policy_keeps_users_out_of_org_msp() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let engine =
        MaterializationEngine::new(MaterialLayout::new(dir.path()), AdminGrantPolicy::AdminsOnly);
    let staged = StagedOrg::new(engine.layout(), OrgKind::Peer, DOMAIN);
    staged.stage_org_admin("Admin");
    staged.stage_node("peer0");
    staged.stage_user("User1");
    staged.stage_user("Admin2");

    engine.organization(&staged.org_request("Admin")).unwrap();
    engine.node(&staged.node_request("peer0")).unwrap();
    let before = engine.admin_fingerprints(OrgKind::Peer, DOMAIN, None).unwrap();

    let user = engine.user(&staged.user_request("User1")).unwrap();
    assert!(!user.org_admin_granted);
    assert!(user.pushed_to_nodes.is_empty());
    assert_eq!(
        engine.admin_fingerprints(OrgKind::Peer, DOMAIN, None).unwrap(),
        before
    );

    let admin = engine.user(&staged.user_request("Admin2")).unwrap();
    assert!(admin.org_admin_granted);
    assert_eq!(admin.pushed_to_nodes, vec!["peer0".to_string()]);

    let node_admins: BTreeSet<String> = engine
        .admin_fingerprints(OrgKind::Peer, DOMAIN, Some("peer0"))
        .unwrap();
    let org_admins = engine.admin_fingerprints(OrgKind::Peer, DOMAIN, None).unwrap();
    assert!(node_admins.is_subset(&org_admins));
    assert!(org_admins.len() > before.len());
}
