//! Named-method dispatch.
//!
//! A method name is interpreted as an enum operation:
//!
//! - `isX` (longer than the bare prefix) is an equality check against member `X`;
//! - any other name with arguments builds an ad-hoc instance named after the
//!   method, with `args[0]` as value and `args[1]` as metadata;
//! - any other name without arguments looks up the declared member of that name.
//!
//! Type-level calls start from a bare instance named after the method and then
//! dispatch on it, so both entry points share the rules above.

use crate::error::{EnumError, Result};
use crate::instance::EnumInstance;
use crate::table::{fold_key, EnumTable};
use crate::value::Value;
use std::sync::Arc;
use tracing::trace;

const PREDICATE_PREFIX: &str = "is";

/// Argument of a dispatched call.
#[derive(Debug, Clone)]
pub enum DispatchArg {
    Instance(EnumInstance),
    Value(Value),
}

impl DispatchArg {
    /// The name this argument stands for in an equality check.
    fn compared_name(&self) -> Option<String> {
        match self {
            DispatchArg::Instance(instance) => instance.name().map(str::to_string),
            DispatchArg::Value(value) => value.coerce_str().map(|s| s.into_owned()),
        }
    }

    /// A `Null` value stands for a missing argument.
    fn is_null(&self) -> bool {
        matches!(self, DispatchArg::Value(Value::Null))
    }

    /// The value this argument stands for when building an instance.
    fn into_value(self) -> Value {
        match self {
            DispatchArg::Instance(instance) => instance.value().clone(),
            DispatchArg::Value(value) => value,
        }
    }
}

impl From<EnumInstance> for DispatchArg {
    fn from(instance: EnumInstance) -> Self {
        DispatchArg::Instance(instance)
    }
}

impl From<&EnumInstance> for DispatchArg {
    fn from(instance: &EnumInstance) -> Self {
        DispatchArg::Instance(instance.clone())
    }
}

impl From<Value> for DispatchArg {
    fn from(value: Value) -> Self {
        DispatchArg::Value(value)
    }
}

macro_rules! scalar_args {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DispatchArg {
                fn from(value: $ty) -> Self {
                    DispatchArg::Value(Value::from(value))
                }
            }
        )*
    };
}

scalar_args!(&str, String, bool, i32, i64, f64);

/// Result of a dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    Bool(bool),
    Instance(EnumInstance),
}

impl Dispatched {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dispatched::Bool(b) => Some(*b),
            Dispatched::Instance(_) => None,
        }
    }

    pub fn into_instance(self) -> Option<EnumInstance> {
        match self {
            Dispatched::Instance(instance) => Some(instance),
            Dispatched::Bool(_) => None,
        }
    }
}

/// Member name checked by an `is`-prefixed method, if `method` is one.
fn predicate_suffix(method: &str) -> Option<&str> {
    method
        .strip_prefix(PREDICATE_PREFIX)
        .filter(|suffix| !suffix.is_empty())
}

fn undefined(table: &EnumTable, method: &str) -> EnumError {
    EnumError::UndefinedMethod {
        enum_name: table.enum_name().to_string(),
        method: method.to_string(),
    }
}

/// Dispatch `method` on an instance.
pub fn call(instance: &EnumInstance, method: &str, args: &[DispatchArg]) -> Result<Dispatched> {
    let table = instance.table();
    if method.is_empty() {
        return Err(undefined(table, method));
    }

    if let Some(suffix) = predicate_suffix(method) {
        let matched = match args.first().filter(|arg| !arg.is_null()) {
            None => {
                let own = match instance.name() {
                    Some(name) => table.entry(name)?,
                    None => table.entry_for(&Value::Null)?,
                };
                fold_key(own.name()) == fold_key(suffix)
            }
            Some(arg) => {
                let expected = table.entry(suffix)?;
                arg.compared_name()
                    .is_some_and(|name| fold_key(expected.name()) == fold_key(&name))
            }
        };
        trace!("{}->{}() = {}", table.enum_name(), method, matched);
        return Ok(Dispatched::Bool(matched));
    }

    let mut args = args.iter().cloned();
    match args.next() {
        Some(value) if !value.is_null() => {
            trace!("{}->{}(..) builds an ad-hoc member", table.enum_name(), method);
            let meta = args.next().map(DispatchArg::into_value);
            Ok(Dispatched::Instance(EnumInstance::new(
                Arc::clone(table),
                Some(method.to_string()),
                value.into_value(),
                meta,
            )))
        }
        _ => table.make(method).map(Dispatched::Instance),
    }
}

/// Dispatch `method` at type level.
///
/// `is`-prefixed methods need exactly one non-null argument, the instance or
/// name to compare.
pub fn call_static(table: &Arc<EnumTable>, method: &str, args: &[DispatchArg]) -> Result<Dispatched> {
    if method.is_empty() {
        return Err(undefined(table, method));
    }

    let bare_name = match predicate_suffix(method) {
        Some(_) if args.len() != 1 || args[0].is_null() => {
            return Err(EnumError::MissingArgument {
                enum_name: table.enum_name().to_string(),
                method: method.to_string(),
            });
        }
        Some(suffix) => suffix,
        None => method,
    };

    let bare = EnumInstance::new(Arc::clone(table), Some(bare_name.to_string()), Value::Null, None);
    call(&bare, method, args)
}
