//! Web parts: the building blocks of SharePoint page content.

use graphbeta_wire::{Error, FieldWriter, ParseNode, Serializable, parse_node};

use crate::macros::{graph_complex_model, graph_entity_model};
use crate::{Entity, GraphEntity};

graph_entity_model! {
    /// A web part rendering raw text.
    pub struct TextWebPart : Entity {
        tag: "#microsoft.graph.textWebPart",
        fields: {
            /// The HTML string of the text web part.
            inner_html/set_inner_html: str() => "innerHtml",
        }
    }
}

graph_complex_model! {
    /// Configuration of a standard web part.
    pub struct WebPartData {
        tag: "#microsoft.graph.webPartData",
        fields: {
            /// Audience information of the web part.
            audiences/set_audiences: str_coll() => "audiences",
            /// Data version of the web part.
            data_version/set_data_version: str() => "dataVersion",
            /// Description of the web part.
            description/set_description: str() => "description",
            /// Title of the web part.
            title/set_title: str() => "title",
        }
    }
}

graph_entity_model! {
    /// A first-party SharePoint web part.
    pub struct StandardWebPart : Entity {
        tag: "#microsoft.graph.standardWebPart",
        fields: {
            /// Data of the web part.
            data/set_data: obj(WebPartData) => "data",
            /// A Guid that indicates the web part type.
            web_part_type/set_web_part_type: str() => "webPartType",
        }
    }
}

/// A web part resolved from its `@odata.type` discriminator.
///
/// Payloads carrying a tag this crate does not model are preserved as a bare
/// [`Entity`], keeping every field in additional data.
#[derive(Clone, Debug)]
pub enum AnyWebPart {
    Text(TextWebPart),
    Standard(StandardWebPart),
    Unknown(Entity),
}

impl AnyWebPart {
    /// Discriminator-based factory for web part payloads.
    pub fn from_node(node: &ParseNode<'_>) -> Result<Self, Error> {
        match node.discriminator() {
            Some("#microsoft.graph.textWebPart") => Ok(Self::Text(parse_node(node)?)),
            Some("#microsoft.graph.standardWebPart") => Ok(Self::Standard(parse_node(node)?)),
            tag => {
                if let Some(tag) = tag {
                    tracing::debug!(tag, "unknown web part discriminator, keeping raw entity");
                }
                Ok(Self::Unknown(parse_node(node)?))
            }
        }
    }
}

impl GraphEntity for AnyWebPart {
    fn entity(&self) -> &Entity {
        match self {
            Self::Text(part) => part.entity(),
            Self::Standard(part) => part.entity(),
            Self::Unknown(entity) => entity,
        }
    }

    fn entity_mut(&mut self) -> &mut Entity {
        match self {
            Self::Text(part) => part.entity_mut(),
            Self::Standard(part) => part.entity_mut(),
            Self::Unknown(entity) => entity,
        }
    }
}

impl Serializable for AnyWebPart {
    fn serialize_fields(&self, writer: &mut FieldWriter) {
        match self {
            Self::Text(part) => part.serialize_fields(writer),
            Self::Standard(part) => part.serialize_fields(writer),
            Self::Unknown(entity) => entity.serialize_fields(writer),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_text_web_part_resolution() {
        let value = json!({
            "@odata.type": "#microsoft.graph.textWebPart",
            "id": "wp-1",
            "innerHtml": "<p>hello</p>",
        });
        let part = AnyWebPart::from_node(&ParseNode::new(&value)).unwrap();
        let AnyWebPart::Text(text) = part else {
            panic!("expected a text web part");
        };
        assert_eq!(text.inner_html(), Some("<p>hello</p>"));
        assert_eq!(text.id(), Some("wp-1"));
    }

    #[test]
    fn test_standard_web_part_resolution() {
        let value = json!({
            "@odata.type": "#microsoft.graph.standardWebPart",
            "webPartType": "d1d91016-032f-456d-98a4-721247c305e8",
            "data": {"title": "Image", "audiences": []},
        });
        let part = AnyWebPart::from_node(&ParseNode::new(&value)).unwrap();
        let AnyWebPart::Standard(standard) = part else {
            panic!("expected a standard web part");
        };
        assert_eq!(
            standard.web_part_type(),
            Some("d1d91016-032f-456d-98a4-721247c305e8")
        );
        assert_eq!(standard.data().and_then(WebPartData::title), Some("Image"));
    }

    #[test]
    fn test_unknown_discriminator_keeps_fields() {
        let value = json!({
            "@odata.type": "#microsoft.graph.futureWebPart",
            "id": "wp-9",
            "somethingNew": true,
        });
        let part = AnyWebPart::from_node(&ParseNode::new(&value)).unwrap();
        let AnyWebPart::Unknown(entity) = &part else {
            panic!("expected an unknown web part");
        };
        assert_eq!(entity.id(), Some("wp-9"));
        assert_eq!(entity.additional_data().get("somethingNew"), Some(&json!(true)));
    }

    #[test]
    fn test_unknown_round_trips_unchanged() {
        let value = json!({
            "@odata.type": "#microsoft.graph.futureWebPart",
            "id": "wp-9",
            "somethingNew": true,
        });
        let part = AnyWebPart::from_node(&ParseNode::new(&value)).unwrap();
        assert_eq!(graphbeta_wire::to_value(&part), value);
    }
}
