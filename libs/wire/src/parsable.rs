//! The model contract: field-deserializer tables and the parse/write drivers.

use serde_json::{Map, Value};

use crate::errors::Error;
use crate::node::{ParseNode, kind_of};
use crate::writer::FieldWriter;

/// Fields of a payload that no deserializer entry claimed. Preserved verbatim
/// and written back out on serialization.
pub type AdditionalData = Map<String, Value>;

/// One entry of a field deserializer table: assigns a single parsed field
/// into the model.
pub type FieldFn<T> = fn(&mut T, &ParseNode<'_>) -> Result<(), Error>;

/// Writes a model's fields into a [`FieldWriter`].
pub trait Serializable {
    fn serialize_fields(&self, writer: &mut FieldWriter);
}

/// A model that can be populated from a JSON object.
///
/// Implementations consult their own static field table first and then
/// delegate to the embedded base type, mirroring how the generated clients
/// merge inherited deserializer maps.
pub trait Parsable: Serializable + Default {
    /// Applies one JSON field. Returns `false` when no deserializer entry
    /// claims the field, in which case the driver stores it as additional
    /// data.
    fn apply_field(&mut self, name: &str, node: &ParseNode<'_>) -> Result<bool, Error>;

    /// The additional-data store for this model. Derived types forward to
    /// their base so each instance has exactly one store.
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// Looks up `name` in a field deserializer table and applies the match.
pub fn apply_from_table<T>(
    model: &mut T,
    table: &[(&str, FieldFn<T>)],
    name: &str,
    node: &ParseNode<'_>,
) -> Result<bool, Error> {
    for (field, deserialize) in table {
        if *field == name {
            deserialize(model, node)?;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Populates a model from a JSON object value.
///
/// `null` fields are skipped (the field stays unset), unknown fields are
/// preserved as additional data, and errors are wrapped with the offending
/// field name.
pub fn from_value<T: Parsable>(value: &Value) -> Result<T, Error> {
    let Value::Object(fields) = value else {
        return Err(Error::Mismatch {
            expected: "object",
            found: kind_of(value),
        });
    };

    let mut model = T::default();
    for (name, field) in fields {
        if field.is_null() {
            continue;
        }
        let node = ParseNode::new(field);
        let claimed = model
            .apply_field(name, &node)
            .map_err(|e| Error::in_field(name, e))?;
        if !claimed {
            tracing::trace!(field = %name, "unmapped field kept as additional data");
            model.additional_data_mut().insert(name.clone(), field.clone());
        }
    }
    Ok(model)
}

/// [`from_value`] as a node factory, usable in field tables:
/// `n.object(parse_node::<TitleArea>)`.
pub fn parse_node<T: Parsable>(node: &ParseNode<'_>) -> Result<T, Error> {
    from_value(node.value())
}

/// Parses a model from raw JSON bytes.
pub fn from_slice<T: Parsable>(bytes: &[u8]) -> Result<T, Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_value(&value)
}

/// Parses a model from a JSON string.
pub fn from_str<T: Parsable>(text: &str) -> Result<T, Error> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Serializes a model to a JSON object value.
#[must_use]
pub fn to_value<T: Serializable>(model: &T) -> Value {
    let mut writer = FieldWriter::new();
    model.serialize_fields(&mut writer);
    writer.finish()
}

/// Serializes a model to raw JSON bytes.
pub fn to_vec<T: Serializable>(model: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(&to_value(model))?)
}
