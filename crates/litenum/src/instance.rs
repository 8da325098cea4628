use crate::dispatch::{self, DispatchArg, Dispatched};
use crate::error::{EnumError, Result};
use crate::table::{fold_key, Entry, EnumTable};
use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A constructed member (or ad-hoc name/value pair) of an enum type.
///
/// Instances compare by name only, ignoring case. The value is whatever was
/// captured at construction.
#[derive(Clone)]
pub struct EnumInstance {
    table: Arc<EnumTable>,
    name: Option<String>,
    value: Value,
    meta: Option<Value>,
}

impl EnumInstance {
    pub(crate) fn new(
        table: Arc<EnumTable>,
        name: Option<String>,
        value: Value,
        meta: Option<Value>,
    ) -> Self {
        Self {
            table,
            name,
            value,
            meta,
        }
    }

    pub(crate) fn from_entry(table: Arc<EnumTable>, entry: &Entry) -> Self {
        let name = Some(entry.name().to_string());
        let value = entry.value().clone();
        let meta = entry.meta().cloned();
        Self::new(table, name, value, meta)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    /// Table of the enum type this instance was built from.
    pub fn table(&self) -> &Arc<EnumTable> {
        &self.table
    }

    pub fn enum_name(&self) -> &str {
        self.table.enum_name()
    }

    /// String form of the value.
    pub fn try_to_string(&self) -> Result<String> {
        self.value
            .coerce_str()
            .map(|s| s.into_owned())
            .ok_or_else(|| EnumError::NotStringCoercible {
                enum_name: self.enum_name().to_string(),
                name: self.name.clone().unwrap_or_default(),
            })
    }

    /// Case-insensitive name comparison against another instance or a bare
    /// member name.
    pub fn equals<'a>(&self, other: impl Into<Comparand<'a>>) -> bool {
        let other = other.into();
        match (self.name(), other.name()) {
            (Some(mine), Some(theirs)) => fold_key(mine) == fold_key(theirs),
            (None, None) => true,
            _ => false,
        }
    }

    /// Shorthand for `equals` with a member name.
    pub fn is(&self, name: &str) -> bool {
        self.equals(name)
    }

    /// Instance-level named-method dispatch, see [`dispatch::call`].
    pub fn call(&self, method: &str, args: &[DispatchArg]) -> Result<Dispatched> {
        dispatch::call(self, method, args)
    }

    /// The declared entry this instance names, if any.
    pub fn entry(&self) -> Option<&Entry> {
        self.name().and_then(|name| self.table.resolve(name))
    }
}

impl fmt::Debug for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInstance")
            .field("enum", &self.table.enum_name())
            .field("name", &self.name)
            .field("value", &self.value)
            .field("meta", &self.meta)
            .finish()
    }
}

/// Writes the value's string form; an unset value writes nothing.
impl fmt::Display for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.coerce_str() {
            Some(s) => f.write_str(&s),
            None => Ok(()),
        }
    }
}

impl PartialEq for EnumInstance {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for EnumInstance {}

impl Hash for EnumInstance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.as_deref().map(fold_key).hash(state);
    }
}

impl PartialEq<str> for EnumInstance {
    fn eq(&self, other: &str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&str> for EnumInstance {
    fn eq(&self, other: &&str) -> bool {
        self.equals(*other)
    }
}

/// Right-hand side of an equality check.
#[derive(Debug, Clone, Copy)]
pub enum Comparand<'a> {
    Instance(&'a EnumInstance),
    Name(&'a str),
}

impl<'a> Comparand<'a> {
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Comparand::Instance(instance) => instance.name(),
            Comparand::Name(name) => Some(name),
        }
    }
}

impl<'a> From<&'a EnumInstance> for Comparand<'a> {
    fn from(instance: &'a EnumInstance) -> Self {
        Comparand::Instance(instance)
    }
}

impl<'a> From<&'a str> for Comparand<'a> {
    fn from(name: &'a str) -> Self {
        Comparand::Name(name)
    }
}

impl<'a> From<&'a String> for Comparand<'a> {
    fn from(name: &'a String) -> Self {
        Comparand::Name(name)
    }
}
