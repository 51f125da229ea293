//! BDK MSP CLI
//!
//! Command-line front end for materializing organization, node and user
//! membership directories from staged CA output.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use bdk_core::{logging, AdminGrantPolicy, Config, OrgKind};
use bdk_msp::{MaterialLayout, MaterializationEngine, NodeRequest, OrgRequest, UserRequest};
use clap::{Parser, Subcommand};

/// Materialize MSP trust stores from CA issuance output
#[derive(Parser, Debug)]
#[command(name = "bdk-msp")]
#[command(about = "Materialize MSP trust stores from CA issuance output")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Crypto material root; overrides `<bdk_path>/<network>` from the config
    #[arg(long)]
    root: Option<PathBuf>,

    /// Network name; overrides `network.name`
    #[arg(long)]
    network: Option<String>,

    /// Organization admin grant policy (all-users or admins-only)
    #[arg(long)]
    admin_grant: Option<AdminGrantPolicy>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble an organization MSP from a staged identity
    Org {
        #[arg(long)]
        name: String,
        #[arg(long)]
        client_id: String,
        #[arg(long)]
        kind: OrgKind,
        #[arg(long)]
        domain: String,
    },
    /// Assemble an orderer or peer node
    Node {
        #[arg(long)]
        kind: OrgKind,
        #[arg(long)]
        org: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        domain: String,
    },
    /// Materialize a user and propagate admin certificates
    User {
        #[arg(long)]
        kind: OrgKind,
        #[arg(long)]
        org: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        domain: String,
    },
    /// List admin certificates trusted by an organization or node MSP
    Admins {
        #[arg(long)]
        kind: OrgKind,
        #[arg(long)]
        domain: String,
        #[arg(long)]
        node: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default_config(),
    };
    config
        .apply_env_overrides()
        .context("invalid environment override")?;
    if let Some(network) = &args.network {
        config.network.name = network.clone();
    }
    if let Some(policy) = args.admin_grant {
        config.policy.admin_grant = policy;
    }
    if args.json_logs {
        config.logging.json = true;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    logging::init_from_config(&config.logging);

    let layout = match &args.root {
        Some(root) => MaterialLayout::new(root),
        None => MaterialLayout::from_config(&config),
    };
    let engine = MaterializationEngine::new(layout, config.policy.admin_grant);

    match args.command {
        Command::Org {
            name,
            client_id,
            kind,
            domain,
        } => {
            let org = engine
                .organization(&OrgRequest {
                    org_name: name,
                    client_id,
                    kind,
                    domain,
                })
                .context("organization assembly failed")?;
            println!("Organization MSP: {}", org.msp().display());
        }
        Command::Node {
            kind,
            org,
            name,
            domain,
        } => {
            let outcome = engine
                .node(&NodeRequest {
                    kind,
                    org_name: org,
                    node_name: name,
                    domain,
                })
                .context("node assembly failed")?;
            println!("Node: {}", outcome.paths.root().display());
            println!("Admins pulled: {}", outcome.pulled_admins.join(", "));
        }
        Command::User {
            kind,
            org,
            name,
            domain,
        } => {
            let outcome = engine
                .user(&UserRequest {
                    kind,
                    org_name: org,
                    user_name: name,
                    domain,
                })
                .context("user materialization failed")?;
            println!("User MSP: {}", outcome.paths.msp().display());
            println!("Organization admin: {}", outcome.org_admin_granted);
            println!("Nodes updated: {}", outcome.pushed_to_nodes.join(", "));
        }
        Command::Admins {
            kind,
            domain,
            node,
            json,
        } => {
            let certs = engine
                .admin_certificates(kind, &domain, node.as_deref())
                .with_context(|| {
                    format!(
                        "failed to scan {}",
                        engine.msp_dir(kind, &domain, node.as_deref()).display()
                    )
                })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&certs)?);
            } else {
                for cert in &certs {
                    println!("{}  {}", cert.fingerprint, cert.file_name);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
