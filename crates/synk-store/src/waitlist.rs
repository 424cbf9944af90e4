//! Typed repository for waitlist signups.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use synk_models::WaitlistEntry;

use crate::error::{StoreError, StoreResult};
use crate::store::{Document, DocumentStore};

/// Collection holding one document per waitlist signup.
pub const WAITLIST_COLLECTION: &str = "waitlistuser";

/// Repository for waitlist documents. Create-only.
#[derive(Clone)]
pub struct WaitlistRepository {
    store: Arc<DocumentStore>,
}

impl WaitlistRepository {
    /// Create a new waitlist repository.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a signup and return the generated document ID.
    pub async fn create(&self, entry: &WaitlistEntry) -> StoreResult<String> {
        let doc_id = Uuid::new_v4().to_string();
        let fields = to_document(entry)?;
        self.store
            .create_document(WAITLIST_COLLECTION, &doc_id, fields)
            .await?;
        info!("Created waitlist entry {} ({})", doc_id, entry.source);
        Ok(doc_id)
    }
}

fn to_document(entry: &WaitlistEntry) -> StoreResult<Document> {
    use serde::de::Error as _;
    match serde_json::to_value(entry)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(serde_json::Error::custom(
            format!("entry serialized to non-object value: {other}"),
        ))),
    }
}
