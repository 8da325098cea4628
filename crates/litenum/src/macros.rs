/// Declare an enum type.
///
/// Generates a unit struct implementing [`EnumType`](crate::EnumType), with one
/// associated name constant per member and a table populated on first use.
///
/// ```
/// use litenum::{declare_enum, EnumType};
///
/// declare_enum! {
///     /// Card suits.
///     pub Suit {
///         Hearts = "H",
///         Spades = "S",
///         Clubs = "C",
///         Diamonds = "D",
///     }
/// }
///
/// let hearts = Suit::of(Suit::Hearts).unwrap();
/// assert_eq!(hearts.value(), "H");
/// assert!(hearts.is(Suit::Hearts));
/// ```
///
/// A member without `= value` uses its own name as value; `=> meta` attaches
/// metadata. An optional parenthesised [`EnumConfig`](crate::EnumConfig) after
/// the type name replaces the default options:
///
/// ```
/// use litenum::{declare_enum, EnumConfig, EnumType};
///
/// declare_enum! {
///     Legacy(EnumConfig::last_wins()) {
///         Active => "shown in lists",
///         Retired = 0,
///     }
/// }
///
/// assert_eq!(Legacy::keys().unwrap(), vec!["Active", "Retired"]);
/// ```
#[macro_export]
macro_rules! declare_enum {
    (@item $member:ident [] []) => {
        $crate::DeclaredItem::Bare($crate::Value::from(stringify!($member)))
    };
    (@item $member:ident [$value:expr] []) => {
        $crate::DeclaredItem::Bare($crate::Value::from($value))
    };
    (@item $member:ident [] [$meta:expr]) => {
        $crate::DeclaredItem::Structured {
            value: $crate::Value::from(stringify!($member)),
            meta: Some($crate::Value::from($meta)),
        }
    };
    (@item $member:ident [$value:expr] [$meta:expr]) => {
        $crate::DeclaredItem::Structured {
            value: $crate::Value::from($value),
            meta: Some($crate::Value::from($meta)),
        }
    };

    (
        $(#[$attr:meta])*
        $vis:vis $name:ident $(($config:expr))? {
            $( $member:ident $(= $value:expr)? $(=> $meta:expr)? ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        #[allow(non_upper_case_globals, dead_code)]
        impl $name {
            $(
                pub const $member: &'static str = stringify!($member);
            )*
        }

        impl $crate::EnumType for $name {
            const NAME: &'static str = stringify!($name);

            fn declaration() -> $crate::Declaration {
                #[allow(unused_mut)]
                let mut declaration = $crate::Declaration::new();
                $(
                    declaration.push(
                        stringify!($member),
                        $crate::declare_enum!(@item $member [$($value)?] [$($meta)?]),
                    );
                )*
                declaration
            }

            $(
                fn config() -> $crate::EnumConfig {
                    $config
                }
            )?

            fn table() -> $crate::Result<::std::sync::Arc<$crate::EnumTable>> {
                static TABLE: ::std::sync::OnceLock<
                    $crate::Result<::std::sync::Arc<$crate::EnumTable>>,
                > = ::std::sync::OnceLock::new();
                TABLE
                    .get_or_init(<Self as $crate::EnumType>::populate)
                    .clone()
            }
        }
    };
}
