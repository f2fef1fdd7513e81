//! In-memory [`TokenStore`] adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{TokenStore, TokenStoreError};
use crate::domain::{AccountId, TokenDigest};

/// Maps issued token digests to their owning account.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    issued: RwLock<HashMap<TokenDigest, AccountId>>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded token digests.
    pub async fn len(&self) -> usize {
        self.issued.read().await.len()
    }

    /// Whether no token has been issued yet.
    pub async fn is_empty(&self) -> bool {
        self.issued.read().await.is_empty()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn record(&self, account: AccountId, digest: TokenDigest) -> Result<(), TokenStoreError> {
        self.issued.write().await.insert(digest, account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BearerToken;

    async fn owner_of(store: &InMemoryTokenStore, digest: &TokenDigest) -> Option<AccountId> {
        store.issued.read().await.get(digest).copied()
    }

    #[tokio::test]
    async fn recorded_digest_resolves_to_owner() {
        let store = InMemoryTokenStore::new();
        let owner = AccountId::random();
        let token = BearerToken::generate();

        store.record(owner, token.digest()).await.expect("record");

        let found = owner_of(&store, &token.digest()).await;
        assert_eq!(found, Some(owner));
    }

    #[tokio::test]
    async fn unknown_digest_has_no_owner() {
        let store = InMemoryTokenStore::new();
        let found = owner_of(&store, &BearerToken::generate().digest()).await;
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn every_issued_token_is_kept() {
        let store = InMemoryTokenStore::new();
        let owner = AccountId::random();
        assert!(store.is_empty().await);

        for _ in 0..3 {
            store
                .record(owner, BearerToken::generate().digest())
                .await
                .expect("record");
        }
        assert_eq!(store.len().await, 3);
    }
}
