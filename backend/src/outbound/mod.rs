//! Outbound adapters implementing domain ports for infrastructure concerns.
//!
//! - **persistence**: in-memory account and token stores
//! - **security**: Argon2id password hashing
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business logic.

pub mod persistence;
pub mod security;
