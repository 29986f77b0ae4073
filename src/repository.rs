//! Generic entity repository over the JSON document store.
//!
//! Each entity kind (lead, customer, invoice, payment, account) is stored as
//! an ordered array inside its own document. The repository wraps
//! [`JsonStore`](crate::store::JsonStore) with typed list semantics: list,
//! insert with id assignment, update by id, remove by id. Every mutation is
//! a full load-mutate-save cycle under the document's write lock.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::store::JsonStore;

/// A record kind persisted as a JSON collection.
///
/// Implementations name the backing document and the top-level key wrapping
/// the collection (they usually match, but the chart of accounts lives in
/// `chart_of_accounts.json` under the key `COA`).
pub trait Entity: Clone + Serialize + serde::de::DeserializeOwned + Send + Sync + 'static {
    /// Document name under the data directory, without the `.json` extension.
    const DOCUMENT: &'static str;

    /// Top-level key holding the collection inside the document.
    const COLLECTION_KEY: &'static str;

    /// Whether a missing document reads as an empty collection instead of a
    /// storage error. Only the chart of accounts opts in; for the other
    /// collections a missing file is a deployment mistake worth surfacing.
    const TOLERATE_MISSING: bool = false;

    /// Unique numeric id of this record.
    fn id(&self) -> i64;
}

/// Typed access to one entity collection.
pub struct Repository<E: Entity> {
    store: Arc<JsonStore>,
    _marker: PhantomData<E>,
}

impl<E: Entity> Repository<E> {
    pub fn new(store: &Arc<JsonStore>) -> Self {
        Self {
            store: Arc::clone(store),
            _marker: PhantomData,
        }
    }

    /// Next id for an insert: highest existing id plus one, starting at 1.
    ///
    /// Ids are never reused: deleting the highest record frees its id only
    /// until the next insert re-derives the maximum from what remains.
    pub fn next_id(items: &[E]) -> i64 {
        items.iter().map(E::id).max().unwrap_or(0) + 1
    }

    /// Return the collection in document order.
    ///
    /// An absent collection key reads as an empty list; a missing document
    /// is an error unless the entity tolerates it (see
    /// [`Entity::TOLERATE_MISSING`]).
    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        self.load_items().await
    }

    /// Run a closure against the full collection under the document lock,
    /// then persist the result.
    ///
    /// This is the building block for every mutation, and is used directly
    /// where an operation needs to see the whole collection (invoice
    /// numbering derives from the collection length, not the new id).
    ///
    /// The document is re-saved regardless of what the closure did.
    pub async fn mutate<T, F>(&self, apply: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Vec<E>) -> T + Send,
        T: Send,
    {
        let _guard = self.store.lock(E::DOCUMENT).await;

        let mut items = self.load_items().await?;
        let result = apply(&mut items);
        self.save_items(&items).await?;

        Ok(result)
    }

    /// Build and append a new record, assigning it the next id.
    ///
    /// Returns the created record.
    pub async fn insert<F>(&self, build: F) -> Result<E, AppError>
    where
        F: FnOnce(i64) -> E + Send,
    {
        self.mutate(|items| {
            let entity = build(Self::next_id(items));
            items.push(entity.clone());
            entity
        })
        .await
    }

    /// Apply a closure to the first record with a matching id.
    ///
    /// Returns the updated record, or `None` when no record matched. The
    /// document is persisted either way.
    pub async fn update<F>(&self, id: i64, apply: F) -> Result<Option<E>, AppError>
    where
        F: FnOnce(&mut E) + Send,
    {
        self.mutate(move |items| match items.iter_mut().find(|e| e.id() == id) {
            Some(entity) => {
                apply(&mut *entity);
                Some(entity.clone())
            }
            None => None,
        })
        .await
    }

    /// Remove the record with a matching id.
    ///
    /// Returns whether anything was removed. Removing an absent id leaves
    /// the collection unchanged, so re-applying a removal is harmless.
    pub async fn remove(&self, id: i64) -> Result<bool, AppError> {
        self.mutate(move |items| {
            let before = items.len();
            items.retain(|e| e.id() != id);
            items.len() < before
        })
        .await
    }

    async fn load_items(&self) -> Result<Vec<E>, AppError> {
        let document = if E::TOLERATE_MISSING {
            self.store
                .load_or_default(E::DOCUMENT, empty_document(E::COLLECTION_KEY))
                .await?
        } else {
            self.store.load(E::DOCUMENT).await?
        };

        let raw = document
            .get(E::COLLECTION_KEY)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        Ok(serde_json::from_value(raw)?)
    }

    async fn save_items(&self, items: &[E]) -> Result<(), AppError> {
        let mut document = serde_json::Map::new();
        document.insert(E::COLLECTION_KEY.to_string(), serde_json::to_value(items)?);

        self.store.save(E::DOCUMENT, &Value::Object(document)).await
    }
}

fn empty_document(key: &str) -> Value {
    let mut document = serde_json::Map::new();
    document.insert(key.to_string(), Value::Array(Vec::new()));
    Value::Object(document)
}
