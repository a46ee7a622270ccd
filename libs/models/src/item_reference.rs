//! References from an item to the drive and site containing it.

use crate::macros::graph_complex_model;

graph_complex_model! {
    /// SharePoint REST compatibility identifiers.
    pub struct SharepointIds {
        tag: "#microsoft.graph.sharepointIds",
        fields: {
            /// The unique identifier (guid) for the item's list.
            list_id/set_list_id: str() => "listId",
            /// An integer identifier for the item within the containing list.
            list_item_id/set_list_item_id: str() => "listItemId",
            /// The unique identifier (guid) for the item within OneDrive for Business or a SharePoint site.
            list_item_unique_id/set_list_item_unique_id: str() => "listItemUniqueId",
            /// The unique identifier (guid) for the item's site collection (SPSite).
            site_id/set_site_id: str() => "siteId",
            /// The SharePoint URL for the site that contains the item.
            site_url/set_site_url: str() => "siteUrl",
            /// The unique identifier (guid) for the tenancy.
            tenant_id/set_tenant_id: str() => "tenantId",
            /// The unique identifier (guid) for the item's site (SPWeb).
            web_id/set_web_id: str() => "webId",
        }
    }
}

graph_complex_model! {
    /// A reference to an item in a drive.
    pub struct ItemReference {
        tag: "#microsoft.graph.itemReference",
        fields: {
            /// Identifier of the drive instance that contains the item.
            drive_id/set_drive_id: str() => "driveId",
            /// Identifies the type of drive.
            drive_type/set_drive_type: str() => "driveType",
            /// Identifier of the item in the drive.
            id/set_id: str() => "id",
            /// The name of the item being referenced.
            name/set_name: str() => "name",
            /// Percent-encoded path that can be used to navigate to the item.
            path/set_path: str() => "path",
            /// Identifiers useful for SharePoint REST compatibility.
            sharepoint_ids/set_sharepoint_ids: obj(SharepointIds) => "sharepointIds",
            /// Identifier of the site.
            site_id/set_site_id: str() => "siteId",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use graphbeta_wire::from_value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_nested_sharepoint_ids() {
        let reference: ItemReference = from_value(&json!({
            "driveId": "b!x1,2",
            "path": "/drives/b!x1,2/root:/General",
            "sharepointIds": {"siteId": "site-guid", "webId": "web-guid"},
        }))
        .unwrap();
        assert_eq!(reference.drive_id(), Some("b!x1,2"));
        let ids = reference.sharepoint_ids().unwrap();
        assert_eq!(ids.site_id(), Some("site-guid"));
        assert_eq!(ids.web_id(), Some("web-guid"));
    }
}
