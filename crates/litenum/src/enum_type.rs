use crate::config::EnumConfig;
use crate::declaration::Declaration;
use crate::dispatch::{self, DispatchArg, Dispatched};
use crate::error::Result;
use crate::instance::EnumInstance;
use crate::table::{Entry, EnumTable};
use crate::value::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// A statically declared enum type.
///
/// Implementors provide the type name, the member declaration and a place to
/// keep the populated table; `declare_enum!` writes all three. Every other
/// operation is provided and goes through `table()`, so the first call of any
/// of them populates the cache.
pub trait EnumType {
    /// Type name used in error messages.
    const NAME: &'static str;

    fn declaration() -> Declaration;

    fn config() -> EnumConfig {
        EnumConfig::default()
    }

    /// The populated table. Population failures are returned on every call.
    fn table() -> Result<Arc<EnumTable>>;

    /// Shared by `table()` implementations: builds the table exactly once.
    fn populate() -> Result<Arc<EnumTable>> {
        EnumTable::build(Self::NAME, &Self::declaration(), &Self::config()).map(Arc::new)
    }

    fn resolve(name: &str) -> Result<Option<Entry>> {
        Ok(Self::table()?.resolve(name).cloned())
    }

    fn make(name: &str) -> Result<EnumInstance> {
        Self::table()?.make(name)
    }

    /// Alias of `make`, reads better with the generated name constants.
    fn of(name: &str) -> Result<EnumInstance> {
        Self::make(name)
    }

    fn make_with(name: &str, value: impl Into<Value>) -> Result<EnumInstance> {
        Self::table()?.make_with(name, value)
    }

    fn try_make(name: impl Into<Value>) -> Result<EnumInstance> {
        Self::table()?.try_make(&name.into())
    }

    fn blank() -> Result<EnumInstance> {
        Ok(Self::table()?.blank())
    }

    fn keys() -> Result<Vec<String>> {
        Ok(Self::table()?.entries().map(|e| e.name().to_string()).collect())
    }

    fn values() -> Result<Vec<Value>> {
        Ok(Self::table()?.entries().map(|e| e.value().clone()).collect())
    }

    fn to_array() -> Result<IndexMap<String, Value>> {
        Ok(Self::table()?.to_array())
    }

    fn all() -> Result<IndexMap<String, Value>> {
        Self::to_array()
    }

    fn search(value: impl Into<Value>) -> Result<Option<EnumInstance>> {
        Ok(Self::table()?.search(value))
    }

    /// Type-level named-method dispatch, see [`dispatch::call_static`].
    fn call(method: &str, args: &[DispatchArg]) -> Result<Dispatched> {
        dispatch::call_static(&Self::table()?, method, args)
    }
}
