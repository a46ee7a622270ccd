//! Internal macros generating the model template.
//!
//! Every Graph model is the same shape: private optional fields, accessor
//! pairs, a field-deserializer table, and a serializer. These macros stamp
//! that shape out from a declarative field list. Field kinds:
//!
//! | kind                  | storage                   | wire shape            |
//! |-----------------------|---------------------------|-----------------------|
//! | `str()`               | `String`                  | string                |
//! | `bool()` .. `f64()`   | scalar                    | boolean / number      |
//! | `uuid()`              | `Uuid`                    | GUID string           |
//! | `datetime()`          | `DateTime<Utc>`           | RFC 3339 string       |
//! | `enum_(E)`            | `E: WireEnum`             | camelCase string      |
//! | `obj(T)`              | `T: Parsable`             | object                |
//! | `coll(T)`             | `Vec<T>`                  | array of objects      |
//! | `poly(T, factory)`    | `T` via discriminator     | object                |
//! | `poly_coll(T, factory)` | `Vec<T>` via discriminator | array of objects   |
//! | `str_coll()` etc.     | `Vec<_>`                  | array of scalars      |

/// Per-kind fragments: storage type, accessors, one deserializer entry, one
/// serializer statement.
macro_rules! graph_field {
    // Storage types.
    (@ty str()) => { ::core::option::Option<::std::string::String> };
    (@ty bool()) => { ::core::option::Option<bool> };
    (@ty i32()) => { ::core::option::Option<i32> };
    (@ty i64()) => { ::core::option::Option<i64> };
    (@ty f64()) => { ::core::option::Option<f64> };
    (@ty uuid()) => { ::core::option::Option<::uuid::Uuid> };
    (@ty datetime()) => { ::core::option::Option<::chrono::DateTime<::chrono::Utc>> };
    (@ty enum_($E:ty)) => { ::core::option::Option<$E> };
    (@ty obj($T:ty)) => { ::core::option::Option<$T> };
    (@ty coll($T:ty)) => { ::core::option::Option<::std::vec::Vec<$T>> };
    (@ty poly($T:ty, $factory:expr)) => { ::core::option::Option<$T> };
    (@ty poly_coll($T:ty, $factory:expr)) => { ::core::option::Option<::std::vec::Vec<$T>> };
    (@ty str_coll()) => { ::core::option::Option<::std::vec::Vec<::std::string::String>> };
    (@ty uuid_coll()) => { ::core::option::Option<::std::vec::Vec<::uuid::Uuid>> };
    (@ty enum_coll($E:ty)) => { ::core::option::Option<::std::vec::Vec<$E>> };

    // Accessor pairs.
    (@accessors $field:ident, $setter:ident, str()) => {
        #[must_use]
        pub fn $field(&self) -> ::core::option::Option<&str> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, value: ::core::option::Option<::std::string::String>) {
            self.$field = value;
        }
    };
    (@accessors $field:ident, $setter:ident, bool()) => {
        crate::macros::graph_field!(@copy_accessors $field, $setter, bool);
    };
    (@accessors $field:ident, $setter:ident, i32()) => {
        crate::macros::graph_field!(@copy_accessors $field, $setter, i32);
    };
    (@accessors $field:ident, $setter:ident, i64()) => {
        crate::macros::graph_field!(@copy_accessors $field, $setter, i64);
    };
    (@accessors $field:ident, $setter:ident, f64()) => {
        crate::macros::graph_field!(@copy_accessors $field, $setter, f64);
    };
    (@accessors $field:ident, $setter:ident, uuid()) => {
        crate::macros::graph_field!(@copy_accessors $field, $setter, ::uuid::Uuid);
    };
    (@accessors $field:ident, $setter:ident, datetime()) => {
        crate::macros::graph_field!(
            @copy_accessors $field, $setter, ::chrono::DateTime<::chrono::Utc>
        );
    };
    (@accessors $field:ident, $setter:ident, enum_($E:ty)) => {
        crate::macros::graph_field!(@copy_accessors $field, $setter, $E);
    };
    (@accessors $field:ident, $setter:ident, obj($T:ty)) => {
        crate::macros::graph_field!(@ref_accessors $field, $setter, $T);
    };
    (@accessors $field:ident, $setter:ident, poly($T:ty, $factory:expr)) => {
        crate::macros::graph_field!(@ref_accessors $field, $setter, $T);
    };
    (@accessors $field:ident, $setter:ident, coll($T:ty)) => {
        crate::macros::graph_field!(@slice_accessors $field, $setter, $T);
    };
    (@accessors $field:ident, $setter:ident, poly_coll($T:ty, $factory:expr)) => {
        crate::macros::graph_field!(@slice_accessors $field, $setter, $T);
    };
    (@accessors $field:ident, $setter:ident, str_coll()) => {
        crate::macros::graph_field!(@slice_accessors $field, $setter, ::std::string::String);
    };
    (@accessors $field:ident, $setter:ident, uuid_coll()) => {
        crate::macros::graph_field!(@slice_accessors $field, $setter, ::uuid::Uuid);
    };
    (@accessors $field:ident, $setter:ident, enum_coll($E:ty)) => {
        crate::macros::graph_field!(@slice_accessors $field, $setter, $E);
    };

    (@copy_accessors $field:ident, $setter:ident, $ty:ty) => {
        #[must_use]
        pub fn $field(&self) -> ::core::option::Option<$ty> {
            self.$field
        }

        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) {
            self.$field = value;
        }
    };
    (@ref_accessors $field:ident, $setter:ident, $ty:ty) => {
        #[must_use]
        pub fn $field(&self) -> ::core::option::Option<&$ty> {
            self.$field.as_ref()
        }

        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) {
            self.$field = value;
        }
    };
    (@slice_accessors $field:ident, $setter:ident, $ty:ty) => {
        #[must_use]
        pub fn $field(&self) -> ::core::option::Option<&[$ty]> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, value: ::core::option::Option<::std::vec::Vec<$ty>>) {
            self.$field = value;
        }
    };

    // Deserializer bodies (one per table entry).
    (@apply $m:ident, $n:ident, $field:ident, str()) => {
        $m.$field = ::core::option::Option::Some($n.string()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, bool()) => {
        $m.$field = ::core::option::Option::Some($n.boolean()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, i32()) => {
        $m.$field = ::core::option::Option::Some($n.int32()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, i64()) => {
        $m.$field = ::core::option::Option::Some($n.int64()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, f64()) => {
        $m.$field = ::core::option::Option::Some($n.float64()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, uuid()) => {
        $m.$field = ::core::option::Option::Some($n.uuid()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, datetime()) => {
        $m.$field = ::core::option::Option::Some($n.datetime()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, enum_($E:ty)) => {
        $m.$field = ::core::option::Option::Some($n.enumeration::<$E>()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, obj($T:ty)) => {
        $m.$field = ::core::option::Option::Some($n.object(::graphbeta_wire::parse_node::<$T>)?)
    };
    (@apply $m:ident, $n:ident, $field:ident, coll($T:ty)) => {
        $m.$field =
            ::core::option::Option::Some($n.collection(::graphbeta_wire::parse_node::<$T>)?)
    };
    (@apply $m:ident, $n:ident, $field:ident, poly($T:ty, $factory:expr)) => {
        $m.$field = ::core::option::Option::Some($n.object($factory)?)
    };
    (@apply $m:ident, $n:ident, $field:ident, poly_coll($T:ty, $factory:expr)) => {
        $m.$field = ::core::option::Option::Some($n.collection($factory)?)
    };
    (@apply $m:ident, $n:ident, $field:ident, str_coll()) => {
        $m.$field = ::core::option::Option::Some($n.string_collection()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, uuid_coll()) => {
        $m.$field = ::core::option::Option::Some($n.uuid_collection()?)
    };
    (@apply $m:ident, $n:ident, $field:ident, enum_coll($E:ty)) => {
        $m.$field = ::core::option::Option::Some($n.enum_collection::<$E>()?)
    };

    // Serializer statements.
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, str()) => {
        $w.write_str($wire, $self.$field.as_deref());
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, bool()) => {
        $w.write_bool($wire, $self.$field);
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, i32()) => {
        $w.write_i32($wire, $self.$field);
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, i64()) => {
        $w.write_i64($wire, $self.$field);
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, f64()) => {
        $w.write_f64($wire, $self.$field);
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, uuid()) => {
        $w.write_uuid($wire, $self.$field);
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, datetime()) => {
        $w.write_datetime($wire, $self.$field);
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, enum_($E:ty)) => {
        $w.write_enum($wire, $self.$field);
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, obj($T:ty)) => {
        $w.write_object($wire, $self.$field.as_ref());
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, coll($T:ty)) => {
        $w.write_collection($wire, $self.$field.as_deref());
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, poly($T:ty, $factory:expr)) => {
        $w.write_object($wire, $self.$field.as_ref());
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, poly_coll($T:ty, $factory:expr)) => {
        $w.write_collection($wire, $self.$field.as_deref());
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, str_coll()) => {
        $w.write_str_collection($wire, $self.$field.as_deref());
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, uuid_coll()) => {
        $w.write_uuid_collection($wire, $self.$field.as_deref());
    };
    (@write $w:ident, $self:ident, $field:ident, $wire:literal, enum_coll($E:ty)) => {
        $w.write_enum_collection($wire, $self.$field.as_deref());
    };
}

/// An entity model: composes a base (ending in [`crate::Entity`]), presets
/// the `@odata.type` tag, and chains field application through the base.
macro_rules! graph_entity_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $base:ty {
            tag: $tag:literal,
            fields: {
                $(
                    $(#[$fmeta:meta])*
                    $field:ident / $setter:ident : $kind:ident ( $($args:tt)* ) => $wire:literal
                ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            base: $base,
            $(
                $(#[$fmeta])*
                $field: crate::macros::graph_field!(@ty $kind($($args)*)),
            )*
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                let mut model = Self {
                    base: <$base>::default(),
                    $( $field: ::core::option::Option::None, )*
                };
                crate::GraphEntity::entity_mut(&mut model)
                    .set_odata_type(::core::option::Option::Some($tag.to_owned()));
                model
            }

            /// The inherited portion of this model.
            #[must_use]
            pub fn base(&self) -> &$base {
                &self.base
            }

            pub fn base_mut(&mut self) -> &mut $base {
                &mut self.base
            }

            $( crate::macros::graph_field!(@accessors $field, $setter, $kind($($args)*)); )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl crate::GraphEntity for $name {
            fn entity(&self) -> &crate::Entity {
                crate::GraphEntity::entity(&self.base)
            }

            fn entity_mut(&mut self) -> &mut crate::Entity {
                crate::GraphEntity::entity_mut(&mut self.base)
            }
        }

        impl ::graphbeta_wire::Serializable for $name {
            fn serialize_fields(&self, writer: &mut ::graphbeta_wire::FieldWriter) {
                ::graphbeta_wire::Serializable::serialize_fields(&self.base, writer);
                $( crate::macros::graph_field!(@write writer, self, $field, $wire, $kind($($args)*)); )*
            }
        }

        impl ::graphbeta_wire::Parsable for $name {
            fn apply_field(
                &mut self,
                name: &str,
                node: &::graphbeta_wire::ParseNode<'_>,
            ) -> ::core::result::Result<bool, ::graphbeta_wire::Error> {
                static FIELDS: &[(&str, ::graphbeta_wire::FieldFn<$name>)] = &[
                    $(
                        ($wire, |m, n| {
                            crate::macros::graph_field!(@apply m, n, $field, $kind($($args)*));
                            ::core::result::Result::Ok(())
                        }),
                    )*
                ];
                if ::graphbeta_wire::apply_from_table(self, FIELDS, name, node)? {
                    return ::core::result::Result::Ok(true);
                }
                ::graphbeta_wire::Parsable::apply_field(&mut self.base, name, node)
            }

            fn additional_data_mut(&mut self) -> &mut ::graphbeta_wire::AdditionalData {
                ::graphbeta_wire::Parsable::additional_data_mut(&mut self.base)
            }
        }
    };
}

/// A complex (non-entity) model: no base chain, but its own `@odata.type`
/// tag and additional-data store.
macro_rules! graph_complex_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            tag: $tag:literal,
            fields: {
                $(
                    $(#[$fmeta:meta])*
                    $field:ident / $setter:ident : $kind:ident ( $($args:tt)* ) => $wire:literal
                ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                $field: crate::macros::graph_field!(@ty $kind($($args)*)),
            )*
            odata_type: ::core::option::Option<::std::string::String>,
            additional_data: ::graphbeta_wire::AdditionalData,
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self {
                    $( $field: ::core::option::Option::None, )*
                    odata_type: ::core::option::Option::Some($tag.to_owned()),
                    additional_data: ::graphbeta_wire::AdditionalData::new(),
                }
            }

            #[must_use]
            pub fn odata_type(&self) -> ::core::option::Option<&str> {
                self.odata_type.as_deref()
            }

            pub fn set_odata_type(&mut self, value: ::core::option::Option<::std::string::String>) {
                self.odata_type = value;
            }

            #[must_use]
            pub fn additional_data(&self) -> &::graphbeta_wire::AdditionalData {
                &self.additional_data
            }

            $( crate::macros::graph_field!(@accessors $field, $setter, $kind($($args)*)); )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::graphbeta_wire::Serializable for $name {
            fn serialize_fields(&self, writer: &mut ::graphbeta_wire::FieldWriter) {
                $( crate::macros::graph_field!(@write writer, self, $field, $wire, $kind($($args)*)); )*
                writer.write_str("@odata.type", self.odata_type.as_deref());
                writer.write_additional_data(&self.additional_data);
            }
        }

        impl ::graphbeta_wire::Parsable for $name {
            fn apply_field(
                &mut self,
                name: &str,
                node: &::graphbeta_wire::ParseNode<'_>,
            ) -> ::core::result::Result<bool, ::graphbeta_wire::Error> {
                static FIELDS: &[(&str, ::graphbeta_wire::FieldFn<$name>)] = &[
                    $(
                        ($wire, |m, n| {
                            crate::macros::graph_field!(@apply m, n, $field, $kind($($args)*));
                            ::core::result::Result::Ok(())
                        }),
                    )*
                    ("@odata.type", |m, n| {
                        m.odata_type = ::core::option::Option::Some(n.string()?);
                        ::core::result::Result::Ok(())
                    }),
                ];
                ::graphbeta_wire::apply_from_table(self, FIELDS, name, node)
            }

            fn additional_data_mut(&mut self) -> &mut ::graphbeta_wire::AdditionalData {
                &mut self.additional_data
            }
        }
    };
}

pub(crate) use graph_complex_model;
pub(crate) use graph_entity_model;
pub(crate) use graph_field;
