//! Wire shape of the standard `{ "data", "meta", "errors" }` response envelope.
//!
//! [`Meta`] owns the one invariant of the envelope: its `status` entry is the
//! HTTP status the envelope was built with, whatever the caller put in the
//! metadata map.

use serde::Serialize;
use serde_json::{json, Map, Value};
use utoipa::ToSchema;

use crate::types::JsonMap;

/// Reserved metadata key carrying the numeric HTTP status.
pub const STATUS_KEY: &str = "status";

/// Status used when none is given. The HTTP layer leaves it untouched.
pub const DEFAULT_STATUS: u16 = 200;

// ---------------------------------------------------------------------------
// Meta
// ---------------------------------------------------------------------------

/// Response metadata: a free-form map that always carries `status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    status: u16,
    #[serde(flatten)]
    extra: JsonMap,
}

impl Meta {
    /// Metadata holding only the status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            extra: JsonMap::new(),
        }
    }

    /// Copy caller-supplied entries and stamp `status` over them.
    ///
    /// A `status` key in `entries` is discarded.
    pub fn from_map(entries: JsonMap, status: u16) -> Self {
        let mut meta = Self::new(status);
        meta.extend(entries);
        meta
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Add one entry. The reserved `status` key is ignored; use
    /// [`Meta::set_status`] instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        if key == STATUS_KEY {
            return;
        }
        self.extra.insert(key, value.into());
    }

    pub fn extend(&mut self, entries: JsonMap) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Look up an entry, including `status`.
    pub fn get(&self, key: &str) -> Option<Value> {
        if key == STATUS_KEY {
            return Some(Value::from(self.status));
        }
        self.extra.get(key).cloned()
    }

    /// Caller-supplied entries, without `status`.
    pub fn extra(&self) -> &JsonMap {
        &self.extra
    }

    /// Number of keys as serialized, `status` included.
    pub fn len(&self) -> usize {
        self.extra.len() + 1
    }

    /// Never empty: `status` is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Typed error entry for the `errors` array.
///
/// The envelope stores entries as plain JSON so any shape is accepted; this
/// is the shape produced by the service's own error handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorEntry {
    /// Machine-readable error code.
    #[schema(example = "BAD_REQUEST")]
    pub code: String,
    /// Human-readable message.
    #[schema(example = "limit must be a number")]
    pub message: String,
    /// Input field the error refers to, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "name")]
    pub field: Option<String>,
}

impl ErrorEntry {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Attach the name of the input field the error refers to.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl From<ErrorEntry> for Value {
    fn from(entry: ErrorEntry) -> Self {
        let mut object = json!({
            "code": entry.code,
            "message": entry.message,
        });
        if let (Some(field), Value::Object(map)) = (entry.field, &mut object) {
            map.insert("field".to_string(), Value::String(field));
        }
        object
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Standard `{ "data": T, "meta": {...}, "errors": [...] }` envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: T,
    pub meta: Meta,
    pub errors: Vec<Value>,
}

/// `data` value used when there is no resource: an empty JSON object.
pub fn empty_data() -> Value {
    Value::Object(Map::new())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
