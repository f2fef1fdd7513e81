//! In-process persistence adapters.
//!
//! State lives behind `tokio::sync::RwLock` so adapters can be shared across
//! actix workers via `Arc` without lock poisoning concerns.

mod in_memory_account_repository;
mod in_memory_token_store;

pub use in_memory_account_repository::InMemoryAccountRepository;
pub use in_memory_token_store::InMemoryTokenStore;
