#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Wire-format primitives for Graph beta models.
//!
//! The Graph beta surface speaks JSON with a handful of conventions layered on
//! top: optional fields are omitted rather than nulled, every payload may
//! carry fields the client does not know about, and abstract types are
//! resolved through the `@odata.type` discriminator. This crate provides the
//! machinery the model definitions are built on:
//!
//! - [`ParseNode`] — typed extractors over a borrowed [`serde_json::Value`].
//! - [`FieldWriter`] — field-by-field JSON object construction.
//! - [`Parsable`] / [`Serializable`] — the model contract, driven by static
//!   field deserializer tables ([`FieldFn`]).
//! - [`wire_enum!`] — string enumerations with parse/serialize round-trips.

pub mod enums;
pub mod errors;
pub mod node;
pub mod parsable;
pub mod writer;

pub use enums::WireEnum;
pub use errors::Error;
pub use node::ParseNode;
pub use parsable::{
    AdditionalData, FieldFn, Parsable, Serializable, apply_from_table, from_slice, from_str,
    from_value, parse_node, to_value, to_vec,
};
pub use writer::FieldWriter;
