//! Read-only aggregate views: dashboard numbers and the risk register
//! rollup.
//!
//! # Responsibility
//! - Derive display-ready tallies from stored rows.
//! - Never mutate the store.

pub mod portfolio;
pub mod risk_register;
