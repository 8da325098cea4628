//! Enum declarations: the ordered member list a table is populated from.

use crate::config::EnumConfig;
use crate::error::Result;
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One declared member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredItem {
    /// `{ "value": .., "meta": .. }`
    Structured {
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<Value>,
    },
    /// A bare scalar used directly as the member value.
    Bare(Value),
}

impl DeclaredItem {
    pub fn value(&self) -> &Value {
        match self {
            DeclaredItem::Structured { value, .. } | DeclaredItem::Bare(value) => value,
        }
    }

    pub fn meta(&self) -> Option<&Value> {
        match self {
            DeclaredItem::Structured { meta, .. } => meta.as_ref(),
            DeclaredItem::Bare(_) => None,
        }
    }
}

/// Ordered name → item mapping for one enum type.
///
/// Names are kept exactly as written, including names that only differ in
/// case, so that duplicate handling can be decided when the table is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, DeclaredItem>",
    into = "IndexMap<String, DeclaredItem>"
)]
pub struct Declaration {
    members: Vec<(String, DeclaredItem)>,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a member with a bare value.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members
            .push((name.into(), DeclaredItem::Bare(value.into())));
        self
    }

    /// Declare a member whose value is its own name.
    pub fn named(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let value = Value::Str(name.clone());
        self.member(name, value)
    }

    /// Declare a member with an explicit value and metadata.
    pub fn member_with_meta(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        meta: impl Into<Value>,
    ) -> Self {
        self.members.push((
            name.into(),
            DeclaredItem::Structured {
                value: value.into(),
                meta: Some(meta.into()),
            },
        ));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, item: DeclaredItem) {
        self.members.push((name.into(), item));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DeclaredItem)> {
        self.members.iter().map(|(name, item)| (name.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Parse a JSON object of `member: value` or `member: {value, meta}`.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a YAML mapping of `member: value` or `member: {value, meta}`.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl From<IndexMap<String, DeclaredItem>> for Declaration {
    fn from(map: IndexMap<String, DeclaredItem>) -> Self {
        Self {
            members: map.into_iter().collect(),
        }
    }
}

impl From<Declaration> for IndexMap<String, DeclaredItem> {
    fn from(decl: Declaration) -> Self {
        decl.members.into_iter().collect()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Declaration {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Declaration::new(), |decl, (name, value)| {
                decl.member(name, value)
            })
    }
}

/// A complete enum definition: type name, options and members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationFile {
    pub name: String,

    #[serde(default)]
    pub config: EnumConfig,

    pub members: Declaration,
}

impl DeclarationFile {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}
