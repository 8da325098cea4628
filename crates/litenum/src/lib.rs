//! Declared name/value enumerations.
//!
//! An enum type is declared once as an ordered list of members, each a name
//! with a value and optional metadata. The first operation on the type
//! populates its table; after that the table never changes. Members are looked
//! up and compared by name without regard to case, enumerated in declaration
//! order, and searched by value.
//!
//! ```
//! use litenum::{declare_enum, EnumType};
//!
//! declare_enum! {
//!     pub Suit {
//!         Hearts = "H",
//!         Spades = "S",
//!         Clubs = "C",
//!         Diamonds = "D",
//!     }
//! }
//!
//! assert_eq!(Suit::keys().unwrap(), vec!["Hearts", "Spades", "Clubs", "Diamonds"]);
//! assert_eq!(Suit::make("Hearts").unwrap().value(), "H");
//! assert_eq!(Suit::search("s").unwrap().unwrap().name(), Some("Spades"));
//! ```
//!
//! Enums only known at runtime are kept in a [`Registry`], and the
//! [`dispatch`] module interprets method names such as `"isHearts"` or
//! `"Red"` as member checks and lookups.

pub mod config;
pub mod declaration;
pub mod dispatch;
pub mod enum_type;
pub mod error;
pub mod instance;
mod macros;
pub mod registry;
pub mod table;
pub mod value;

pub use config::{DuplicatePolicy, EnumConfig};
pub use declaration::{Declaration, DeclarationFile, DeclaredItem};
pub use dispatch::{DispatchArg, Dispatched};
pub use enum_type::EnumType;
pub use error::{EnumError, Result};
pub use instance::{Comparand, EnumInstance};
pub use registry::Registry;
pub use table::{Entry, EnumTable};
pub use value::Value;
