//! Resolved member tables.
//!
//! An `EnumTable` is built once from a `Declaration` and never changes
//! afterwards. Members are keyed by their upper-cased name so that every
//! lookup is case-insensitive, while iteration follows declaration order.

use crate::config::{DuplicatePolicy, EnumConfig};
use crate::declaration::Declaration;
use crate::error::{EnumError, Result};
use crate::instance::EnumInstance;
use crate::value::Value;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::{debug, warn};

/// A resolved member of an enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    value: Value,
    meta: Option<Value>,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: Option<Value>) -> Self {
        self.meta = meta;
        self
    }

    /// Name as declared, case preserved.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }
}

/// Lookup key of a member name.
///
/// Only ASCII letters are folded; other characters must match exactly, so
/// `"straße"` and `"STRASSE"` stay distinct.
pub(crate) fn fold_key(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// The cache of one enum type
#[derive(Debug)]
pub struct EnumTable {
    enum_name: String,
    entries: IndexMap<String, Entry, FxBuildHasher>,
}

impl EnumTable {
    /// Populate a table from a declaration.
    ///
    /// Fails with `DuplicateMember` when two names fold to the same key and
    /// the policy is `Reject`.
    pub fn build(
        enum_name: impl Into<String>,
        declaration: &Declaration,
        config: &EnumConfig,
    ) -> Result<Self> {
        let enum_name = enum_name.into();
        let mut entries: IndexMap<String, Entry, FxBuildHasher> =
            IndexMap::with_capacity_and_hasher(declaration.len(), FxBuildHasher);

        for (name, item) in declaration.iter() {
            let entry = Entry::new(name, item.value().clone()).with_meta(item.meta().cloned());
            let key = fold_key(name);

            if let Some(existing) = entries.get(&key) {
                match config.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(EnumError::DuplicateMember {
                            enum_name,
                            name: name.to_string(),
                            existing: existing.name.clone(),
                        });
                    }
                    DuplicatePolicy::LastWins => {
                        warn!(
                            "Enum {}: member [{}] shadows earlier [{}]",
                            enum_name, name, existing.name
                        );
                    }
                }
            }

            // Replacing an existing key keeps its original position.
            entries.insert(key, entry);
        }

        debug!(
            "Populated enum table {} with {} members",
            enum_name,
            entries.len()
        );

        Ok(Self { enum_name, entries })
    }

    /// Name of the enum type this table belongs to.
    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Case-insensitive lookup of one entry.
    pub fn resolve(&self, name: &str) -> Option<&Entry> {
        self.entries.get(&fold_key(name))
    }

    /// Lookup that reports an unknown name as an error.
    pub fn entry(&self, name: &str) -> Result<&Entry> {
        self.resolve(name)
            .ok_or_else(|| EnumError::unknown_member(name, &self.enum_name))
    }

    /// Lookup by an arbitrary scalar, which must be a string.
    pub fn entry_for(&self, name: &Value) -> Result<&Entry> {
        match name {
            Value::Str(name) => self.entry(name),
            other => Err(EnumError::NameNotString {
                found: other.type_name(),
            }),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries().map(Entry::name).collect()
    }

    pub fn values(&self) -> Vec<&Value> {
        self.entries().map(Entry::value).collect()
    }

    /// Ordered name → value map of every member.
    pub fn to_array(&self) -> IndexMap<String, Value> {
        self.entries()
            .map(|entry| (entry.name.clone(), entry.value.clone()))
            .collect()
    }

    /// First entry, in declaration order, whose value matches `value`
    /// case-insensitively on their string forms.
    pub fn search_entry(&self, value: &Value) -> Option<&Entry> {
        self.entries().find(|entry| entry.value.eq_ignore_case(value))
    }

    /// Instance of the declared member `name`, with its declared value.
    pub fn make(self: &Arc<Self>, name: &str) -> Result<EnumInstance> {
        let entry = self.entry(name)?;
        Ok(EnumInstance::from_entry(Arc::clone(self), entry))
    }

    /// Instance named `name` carrying `value` instead of the declared one.
    ///
    /// A non-null value skips the member lookup, so `name` does not have to
    /// be declared. `Null` counts as no value and behaves like `make`.
    pub fn make_with(self: &Arc<Self>, name: &str, value: impl Into<Value>) -> Result<EnumInstance> {
        match value.into() {
            Value::Null => self.make(name),
            value => Ok(EnumInstance::new(
                Arc::clone(self),
                Some(name.to_string()),
                value,
                None,
            )),
        }
    }

    /// Like `make`, but accepts any scalar as the name.
    pub fn try_make(self: &Arc<Self>, name: &Value) -> Result<EnumInstance> {
        let entry = self.entry_for(name)?;
        Ok(EnumInstance::from_entry(Arc::clone(self), entry))
    }

    /// Instance with neither name nor value.
    pub fn blank(self: &Arc<Self>) -> EnumInstance {
        EnumInstance::new(Arc::clone(self), None, Value::Null, None)
    }

    pub fn search(self: &Arc<Self>, value: impl Into<Value>) -> Option<EnumInstance> {
        let value = value.into();
        self.search_entry(&value)
            .map(|entry| EnumInstance::from_entry(Arc::clone(self), entry))
    }
}
