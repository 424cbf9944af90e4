//! Collection/document store.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A stored document: a flat field map, as marshalled by the repositories.
pub type Document = Map<String, Value>;

/// In-process document store.
///
/// Collections are created lazily on first write. Every operation is a
/// single-document read or write under one lock, which gives the
/// per-document write atomicity the rest of the system assumes: a
/// partial field update is either fully visible to a reader or not at
/// all.
#[derive(Debug, Default)]
pub struct DocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document. Fails if the ID is already taken.
    pub async fn create_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: Document,
    ) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs.contains_key(doc_id) {
            return Err(StoreError::already_exists(format!("{collection}/{doc_id}")));
        }

        docs.insert(doc_id.to_string(), fields);
        debug!("Created document {}/{}", collection, doc_id);
        Ok(())
    }

    /// Point lookup by document ID.
    pub async fn get_document(&self, collection: &str, doc_id: &str) -> Option<Document> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .and_then(|docs| docs.get(doc_id))
            .cloned()
    }

    /// Partial field update: merge `fields` into an existing document.
    ///
    /// Untouched fields keep their values. Fails if the document does
    /// not exist; updates never upsert.
    pub async fn update_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: Document,
    ) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(doc_id))
            .ok_or_else(|| StoreError::not_found(format!("{collection}/{doc_id}")))?;

        for (key, value) in fields {
            doc.insert(key, value);
        }
        debug!("Updated document {}/{}", collection, doc_id);
        Ok(())
    }

    /// Names of all collections that have received at least one write.
    pub async fn list_collections(&self) -> Vec<String> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of documents in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, |docs| docs.len())
    }
}
