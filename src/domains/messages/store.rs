use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::RngCore;
use tokio::sync::RwLock;

use super::models::MessageInput;

/// Random bytes per message id (20 hex characters once encoded).
const ID_BYTES: usize = 10;

/// Shared in-memory message store.
///
/// A cloneable handle over the id -> record map. Every write replaces the
/// whole record under its key; nothing is evicted and nothing survives a
/// restart. Resolvers receive the store through the GraphQL context, so
/// tests can run independent instances side by side.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    records: Arc<RwLock<HashMap<String, MessageInput>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the record stored under `id`, if any.
    pub async fn get(&self, id: &str) -> Option<MessageInput> {
        self.records.read().await.get(id).cloned()
    }

    /// Stores `record` under `id`, replacing any previous record in full.
    pub async fn set(&self, id: String, record: MessageInput) {
        self.records.write().await.insert(id, record);
    }

    /// Number of stored messages.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Generates a fresh message id: 20 lowercase hex characters from 10
/// cryptographically random bytes.
///
/// Collisions are possible in principle and not checked; a colliding id
/// would silently overwrite the existing record.
pub fn generate_message_id() -> String {
    let mut bytes = [0u8; ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
