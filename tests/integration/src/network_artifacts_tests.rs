//! Network artifact accessors over a materialized tree.

use crate::test_utils::{init_tracing, StagedOrg};
use bdk_artifacts::{ArtifactError, EnvMap, NetworkFiles};
use bdk_core::{Config, InstanceType};
use bdk_msp::{AdminGrantPolicy, MaterializationEngine, OrgKind};
use std::fs;

const PEER_DOMAIN: &str = "org1.example.com";
const ORDERER_DOMAIN: &str = "ord.example.com";

fn config(bdk_path: &std::path::Path) -> Config {
    let mut config = Config::default_config();
    config.infra.bdk_path = bdk_path.to_path_buf();
    config.network.name = "fabric".to_string();
    config
}

#[test]
fn test_tls_exports_follow_node_assembly() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let files = NetworkFiles::from_config(&config);
    let engine = MaterializationEngine::from_config(&config);
    assert_eq!(engine.admin_grant(), AdminGrantPolicy::AllUsers);
    assert_eq!(engine.layout().root(), files.layout().root());

    let peers = StagedOrg::new(engine.layout(), OrgKind::Peer, PEER_DOMAIN);
    peers.stage_org_admin("Admin");
    peers.stage_node("peer0.org1.example.com");
    engine.organization(&peers.org_request("Admin")).unwrap();
    engine.node(&peers.node_request("peer0.org1.example.com")).unwrap();

    let orderers = StagedOrg::new(engine.layout(), OrgKind::Orderer, ORDERER_DOMAIN);
    orderers.stage_org_admin("OrdAdmin");
    orderers.stage_node("orderer0.ord.example.com");
    engine.organization(&orderers.org_request("OrdAdmin")).unwrap();
    engine
        .node(&orderers.node_request("orderer0.ord.example.com"))
        .unwrap();

    let exported = files
        .export_tls_ca(OrgKind::Peer, "peer0", PEER_DOMAIN)
        .unwrap();
    assert_eq!(
        exported,
        dir.path().join("fabric/tlsca/peer0.org1.example.com/ca.crt")
    );
    assert_eq!(fs::read_to_string(&exported).unwrap(), "tls-ica");
    assert_eq!(files.peer_tls_ca_cert(0, PEER_DOMAIN).unwrap(), "tls-ica");
    assert_eq!(files.peer_org_ca_cert(PEER_DOMAIN).unwrap(), "ica");

    // "orderer0.ord.example.com-tls" in base64
    assert_eq!(
        files
            .orderer_server_cert_base64("orderer0", ORDERER_DOMAIN)
            .unwrap(),
        "b3JkZXJlcjAub3JkLmV4YW1wbGUuY29tLXRscw=="
    );
}

#[test]
fn test_env_and_compose_lifecycle() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let files = NetworkFiles::from_config(&config(dir.path()));

    assert!(matches!(
        files.load_env(),
        Err(ArtifactError::MissingEnv { .. })
    ));

    let mut env = EnvMap::new();
    env.insert("BDK_NETWORK_NAME".to_string(), "fabric".to_string());
    env.insert("BDK_ORG_DOMAIN_NAME".to_string(), PEER_DOMAIN.to_string());
    files.create_env(&env).unwrap();
    assert_eq!(files.load_env().unwrap(), env);

    files.create_network_folder().unwrap();
    let compose: EnvMap = EnvMap::from([("version".to_string(), "3.7".to_string())]);
    files
        .write_docker_compose("peer0.org1.example.com", InstanceType::Peer, &compose)
        .unwrap();
    files
        .write_docker_compose("ca.org1.example.com", InstanceType::Ca, &compose)
        .unwrap();

    let inventory = files.docker_compose_inventory().unwrap();
    assert_eq!(inventory.peer, vec!["peer0.org1.example.com"]);
    assert_eq!(inventory.ca, vec!["ca.org1.example.com"]);
    assert!(inventory.orderer.is_empty());

    files.delete_network_folder().unwrap();
    assert!(!files.root_path().exists());
    assert!(files.docker_compose_inventory().unwrap().peer.is_empty());
    // The shared .env lives beside the network, not inside it.
    assert!(files.load_env().is_ok());
}
