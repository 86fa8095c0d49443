use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::document::Document;
use crate::error::{Result, StoreError};

use super::filters;
use super::id::{IdGenerator, UuidGenerator};
use super::request::SearchRequest;

/// In-memory documents keyed by id, iterated in the order ids were first
/// saved. Not thread-safe; callers own the store and borrow it mutably to save.
pub struct DocumentStore<G = UuidGenerator> {
    documents: IndexMap<String, Document>,
    ids: G,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::with_generator(UuidGenerator)
    }
}

impl<G: IdGenerator> DocumentStore<G> {
    pub fn with_generator(ids: G) -> Self {
        Self {
            documents: IndexMap::new(),
            ids,
        }
    }

    /// Upserts `document`, assigning a fresh id when it has none (or an empty
    /// one). An existing entry is replaced wholesale and keeps its position.
    /// `created` is stored exactly as given.
    pub fn save(&mut self, mut document: Document) -> &Document {
        let id = match document.assigned_id().map(str::to_owned) {
            Some(id) => id,
            None => {
                let id = self.ids.next_id();
                document.id = Some(id.clone());
                id
            }
        };

        let entry = self.documents.entry(id);
        tracing::debug!(id = %entry.key(), "Saving document");
        match entry {
            Entry::Occupied(mut occupied) => {
                occupied.insert(document);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(document),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<&Document>> {
        if id.is_empty() {
            return Err(StoreError::invalid_argument("Id should not be empty"));
        }

        Ok(self.documents.get(id))
    }

    /// Documents matching every present criterion, in store order. A request
    /// with no criteria at all matches nothing.
    pub fn search(&self, request: &SearchRequest) -> Vec<&Document> {
        if request.is_empty() {
            tracing::debug!("Search request has no criteria, returning no documents");
            return Vec::new();
        }

        let results: Vec<&Document> = self
            .documents
            .values()
            .filter(|document| filters::matches(request, document))
            .collect();

        tracing::debug!(
            matched = results.len(),
            total = self.documents.len(),
            "Search finished"
        );
        results
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
