//! String enumerations with wire-name round trips.

/// A closed string enumeration as it appears on the wire.
///
/// Implementations are generated by [`wire_enum!`]; the trait gives
/// [`ParseNode::enumeration`](crate::ParseNode::enumeration) and
/// [`FieldWriter::write_enum`](crate::FieldWriter::write_enum) a uniform
/// surface.
pub trait WireEnum: Copy + Sized {
    /// Type name used in unknown-value errors.
    const TYPE_NAME: &'static str;

    /// Resolves a wire string to a variant, `None` when unknown.
    fn from_wire(value: &str) -> Option<Self>;

    /// The wire string for this variant.
    fn as_wire(self) -> &'static str;
}

/// Defines a string enumeration together with its [`WireEnum`], `Display`
/// and `FromStr` implementations.
///
/// ```
/// graphbeta_wire::wire_enum! {
///     /// Publication state of a search answer.
///     pub enum AnswerState {
///         Published => "published",
///         Draft => "draft",
///         Excluded => "excluded",
///         UnknownFutureValue => "unknownFutureValue",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $crate::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_wire(value: &str) -> ::core::option::Option<Self> {
                match value {
                    $( $wire => ::core::option::Option::Some(Self::$variant), )+
                    _ => ::core::option::Option::None,
                }
            }

            fn as_wire(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::WireEnum::as_wire(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <$name as $crate::WireEnum>::from_wire(s).ok_or_else(|| {
                    $crate::Error::UnknownEnumValue {
                        type_name: <$name as $crate::WireEnum>::TYPE_NAME,
                        value: s.to_owned(),
                    }
                })
            }
        }
    };
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{Error, WireEnum};

    wire_enum! {
        enum Flavor {
            Plain => "plain",
            DoubleChocolate => "doubleChocolate",
            UnknownFutureValue => "unknownFutureValue",
        }
    }

    #[test]
    fn test_round_trip() {
        for flavor in [Flavor::Plain, Flavor::DoubleChocolate, Flavor::UnknownFutureValue] {
            assert_eq!(Flavor::from_wire(flavor.as_wire()), Some(flavor));
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        assert_eq!(Flavor::DoubleChocolate.to_string(), "doubleChocolate");
    }

    #[test]
    fn test_unknown_value_error() {
        let err = "mint".parse::<Flavor>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownEnumValue { type_name: "Flavor", .. }
        ));
    }
}
