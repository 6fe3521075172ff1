//! In-memory record store
//!
//! Table-per-entity maps behind a single `RwLock`. Handlers run on a
//! multi-threaded runtime, so insert-then-read sequences (id generation, list
//! ordering) are serialized through the lock.
//!
//! The store never enforces cross-record constraints; in particular username
//! uniqueness is deliberately unenforced and `insert` is infallible apart from
//! lock poisoning.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::entity::Entity;
use super::errors::{StoreError, StoreResult};
use super::seed::sample_news;

/// Records keyed by generated id
type Table = HashMap<String, Value>;

/// The in-memory record store.
///
/// Constructed once at process start and shared by handle; tests construct
/// isolated instances per case.
pub struct MemStore {
    tables: RwLock<HashMap<Entity, Table>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store seeded with the three sample news items.
    pub fn with_sample_news() -> Self {
        let store = Self::new();
        for record in sample_news() {
            store.seed(Entity::News, record);
        }
        store
    }

    /// Direct key lookup.
    pub fn get(&self, entity: Entity, id: &str) -> StoreResult<Option<Value>> {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(tables.get(&entity).and_then(|t| t.get(id)).cloned())
    }

    /// Linear scan for the first record whose `field` equals `value`.
    pub fn find_by_field(
        &self,
        entity: Entity,
        field: &str,
        value: &Value,
    ) -> StoreResult<Option<Value>> {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(tables
            .get(&entity)
            .and_then(|t| t.values().find(|r| r.get(field) == Some(value)))
            .cloned())
    }

    /// Insert a validated payload as a new record.
    ///
    /// Generates a fresh id, attaches the entity's server-set timestamp, and
    /// returns the stored record. No constraint checks.
    pub fn insert(&self, entity: Entity, payload: Map<String, Value>) -> StoreResult<Value> {
        let mut record = payload;
        let id = Uuid::new_v4().to_string();
        record.insert("id".to_string(), Value::String(id.clone()));

        if let Some(field) = entity.timestamp_field() {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            record.insert(field.to_string(), Value::String(now));
        }

        let record = Value::Object(record);
        let mut tables = self.tables.write().map_err(|_| StoreError::LockPoisoned)?;
        tables.entry(entity).or_default().insert(id, record.clone());

        Ok(record)
    }

    /// List records, optionally filtered by equality on one field, ordered
    /// newest-first by the entity's timestamp field.
    ///
    /// Records lacking a parseable timestamp sort as oldest.
    pub fn list(
        &self,
        entity: Entity,
        filter: Option<(&str, &str)>,
    ) -> StoreResult<Vec<Value>> {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;

        let mut records: Vec<Value> = tables
            .get(&entity)
            .map(|t| {
                t.values()
                    .filter(|r| match filter {
                        Some((field, value)) => {
                            r.get(field).and_then(Value::as_str) == Some(value)
                        }
                        None => true,
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(field) = entity.timestamp_field() {
            records.sort_by_key(|r| std::cmp::Reverse(timestamp_of(r, field)));
        }

        Ok(records)
    }

    /// Store a fully-formed record, ids and timestamps included.
    ///
    /// Only used for seeding at construction time; every API-reachable write
    /// goes through `insert`.
    fn seed(&self, entity: Entity, record: Map<String, Value>) {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if let Ok(mut tables) = self.tables.write() {
            tables.entry(entity).or_default().insert(id, Value::Object(record));
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a record's timestamp field, treating missing or malformed values as
/// the epoch so they sort oldest.
fn timestamp_of(record: &Value, field: &str) -> DateTime<Utc> {
    record
        .get(field)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
