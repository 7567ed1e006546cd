//! Shared DTOs and pure client logic for the Disability Management System.
//!
//! Everything here is plain Rust with no browser dependency, so the payload
//! mappings, form rules and report builders are testable with `cargo test`.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
