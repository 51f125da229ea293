//! Workspace integration tests for BDK materialization
//!
//! This test suite validates:
//! - Admin trust converges regardless of node/user creation order
//! - Concurrent engine calls on one organization leave a consistent tree
//! - Network artifact accessors read what the assemblers produce
//! - The admins-only grant policy keeps ordinary users out of the org MSP

pub mod test_utils;

#[cfg(test)]
mod admin_order_tests;

#[cfg(test)]
mod concurrency_tests;

#[cfg(test)]
mod network_artifacts_tests;
