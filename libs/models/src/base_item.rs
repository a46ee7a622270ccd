//! Shared surface of drive- and site-scoped items.

use crate::macros::graph_entity_model;
use crate::{IdentitySet, ItemReference};

graph_entity_model! {
    /// Common fields of items stored in drives and sites. Concrete item
    /// types ([`crate::Site`], [`crate::SitePage`]) compose this.
    pub struct BaseItem : crate::Entity {
        tag: "#microsoft.graph.baseItem",
        fields: {
            /// Identity of the user, device, or application which created the item.
            created_by/set_created_by: obj(IdentitySet) => "createdBy",
            /// Date and time of item creation.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// Provides a user-visible description of the item.
            description/set_description: str() => "description",
            /// ETag for the item.
            e_tag/set_e_tag: str() => "eTag",
            /// Identity of the user, device, and application which last modified the item.
            last_modified_by/set_last_modified_by: obj(IdentitySet) => "lastModifiedBy",
            /// Date and time the item was last modified.
            last_modified_date_time/set_last_modified_date_time: datetime() => "lastModifiedDateTime",
            /// The name of the item.
            name/set_name: str() => "name",
            /// Parent information, if the item has a parent.
            parent_reference/set_parent_reference: obj(ItemReference) => "parentReference",
            /// URL that displays the resource in the browser.
            web_url/set_web_url: str() => "webUrl",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::GraphEntity;
    use graphbeta_wire::{from_value, to_value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_inherited_fields_chain_to_entity() {
        let item: BaseItem = from_value(&json!({
            "id": "item-1",
            "name": "General",
            "createdDateTime": "2023-01-25T09:45:00Z",
            "createdBy": {"user": {"displayName": "Dustin Abbot"}},
        }))
        .unwrap();
        assert_eq!(item.id(), Some("item-1"));
        assert_eq!(item.name(), Some("General"));
        assert_eq!(
            item.created_date_time().map(|t| t.to_rfc3339()),
            Some("2023-01-25T09:45:00+00:00".to_owned())
        );
    }

    #[test]
    fn test_new_presets_type_tag() {
        let item = BaseItem::new();
        assert_eq!(item.odata_type(), Some("#microsoft.graph.baseItem"));
    }

    #[test]
    fn test_serializer_emits_base_then_own_fields() {
        let mut item = BaseItem::new();
        item.entity_mut().set_id(Some("item-1".to_owned()));
        item.set_name(Some("General".to_owned()));
        assert_eq!(
            to_value(&item),
            json!({
                "id": "item-1",
                "@odata.type": "#microsoft.graph.baseItem",
                "name": "General",
            })
        );
    }
}
