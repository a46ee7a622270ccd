//! The root of the Graph entity hierarchy.

use graphbeta_wire::{
    AdditionalData, Error, FieldFn, FieldWriter, Parsable, ParseNode, Serializable,
    apply_from_table,
};

/// Base of every Graph entity: the identifier, the `@odata.type` tag, and
/// the store for fields no deserializer claimed.
#[derive(Clone, Debug)]
pub struct Entity {
    id: Option<String>,
    odata_type: Option<String>,
    additional_data: AdditionalData,
}

static FIELDS: &[(&str, FieldFn<Entity>)] = &[
    ("id", |m, n| {
        m.id = Some(n.string()?);
        Ok(())
    }),
    ("@odata.type", |m, n| {
        m.odata_type = Some(n.string()?);
        Ok(())
    }),
];

impl Entity {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            odata_type: None,
            additional_data: AdditionalData::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    #[must_use]
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    #[must_use]
    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializable for Entity {
    fn serialize_fields(&self, writer: &mut FieldWriter) {
        writer.write_str("id", self.id.as_deref());
        writer.write_str("@odata.type", self.odata_type.as_deref());
        writer.write_additional_data(&self.additional_data);
    }
}

impl Parsable for Entity {
    fn apply_field(&mut self, name: &str, node: &ParseNode<'_>) -> Result<bool, Error> {
        apply_from_table(self, FIELDS, name, node)
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Uniform access to the [`Entity`] at the bottom of a model's base chain.
pub trait GraphEntity {
    fn entity(&self) -> &Entity;
    fn entity_mut(&mut self) -> &mut Entity;

    fn id(&self) -> Option<&str> {
        self.entity().id()
    }

    fn odata_type(&self) -> Option<&str> {
        self.entity().odata_type()
    }
}

impl GraphEntity for Entity {
    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use graphbeta_wire::{from_value, to_value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_id_and_type_tag() {
        let entity: Entity = from_value(&json!({
            "id": "42",
            "@odata.type": "#microsoft.graph.entity",
        }))
        .unwrap();
        assert_eq!(entity.id(), Some("42"));
        assert_eq!(entity.odata_type(), Some("#microsoft.graph.entity"));
    }

    #[test]
    fn test_unmapped_fields_survive_round_trip() {
        let payload = json!({"id": "42", "custom": {"nested": true}});
        let entity: Entity = from_value(&payload).unwrap();
        assert_eq!(entity.additional_data().get("custom"), Some(&json!({"nested": true})));
        assert_eq!(to_value(&entity), payload);
    }
}
