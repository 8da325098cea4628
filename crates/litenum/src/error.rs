use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    #[error("The given name [{name}] is not available in this enum {enum_name}")]
    UnknownMember { name: String, enum_name: String },

    #[error("The name for an enum must be a string but {found} given")]
    NameNotString { found: &'static str },

    #[error("Calling {enum_name}::{method}() in static context requires one argument")]
    MissingArgument { enum_name: String, method: String },

    #[error("Call to undefined method {enum_name}->{method}()")]
    UndefinedMethod { enum_name: String, method: String },

    #[error("Duplicate member [{name}] in enum {enum_name} (already declared as [{existing}])")]
    DuplicateMember {
        enum_name: String,
        name: String,
        existing: String,
    },

    #[error("Value of {enum_name}::{name} cannot be converted to a string")]
    NotStringCoercible { enum_name: String, name: String },

    #[error("Enum {enum_name} is not registered")]
    UnregisteredEnum { enum_name: String },

    #[error("Invalid enum declaration: {0}")]
    InvalidDeclaration(String),
}

impl EnumError {
    pub(crate) fn unknown_member(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        EnumError::UnknownMember {
            name: name.into(),
            enum_name: enum_name.into(),
        }
    }

    /// True for both flavours of a failed name lookup.
    pub fn is_unknown_member(&self) -> bool {
        matches!(
            self,
            EnumError::UnknownMember { .. } | EnumError::NameNotString { .. }
        )
    }
}

impl From<serde_json::Error> for EnumError {
    fn from(err: serde_json::Error) -> Self {
        EnumError::InvalidDeclaration(err.to_string())
    }
}

impl From<serde_yaml::Error> for EnumError {
    fn from(err: serde_yaml::Error) -> Self {
        EnumError::InvalidDeclaration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EnumError>;
