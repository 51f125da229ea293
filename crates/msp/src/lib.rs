//! Membership (MSP) materialization for BDK networks.
//!
//! This crate turns the per-identity output of a certificate authority,
//! staged under `ca/<identity>@<org>`, into the trust-store layout that
//! ordering and peer nodes consume unmodified:
//!
//! - **Organization**: `<kind>Organizations/<domain>/{ca,msp}` with a derived
//!   TLS root and the node OU policy
//! - **Node**: `orderers/<node>` or `peers/<node>` with `msp/` and
//!   `tls/{ca.crt,server.crt,server.key}`
//! - **User**: `users/<user>/msp`, with admin certificates propagated to the
//!   organization and its nodes
//!
//! When a directory holds several candidate artifacts, the most recently
//! modified one is canonical. The engine only copies files; it never issues,
//! signs or validates certificates.

pub mod engine;
pub mod error;
mod fsops;
pub mod inspect;
pub mod layout;
pub mod node;
pub mod organization;
pub mod propagation;
pub mod selector;

pub use engine::{MaterializationEngine, OrgLocks};
pub use error::{MspError, MspResult};
pub use inspect::{admin_certificates, admin_fingerprints, fingerprint_file, AdminCertificate};
pub use layout::{MaterialLayout, NodePaths, OrgPaths, UserPaths};
pub use node::{assemble_node, NodeOutcome, NodeRequest};
pub use organization::{assemble_organization, OrgRequest, NODE_OU_CONFIG};
pub use propagation::{assemble_user, is_admin_name, UserOutcome, UserRequest};
pub use selector::{newest_artifact, pick_newest, Candidate};

// Re-export core types for convenience
pub use bdk_core::{AdminGrantPolicy, OrgKind};
