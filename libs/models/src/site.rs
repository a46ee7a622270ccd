//! SharePoint sites and their facets.

use crate::macros::{graph_complex_model, graph_entity_model};
use crate::{BaseItem, SharepointIds, SitePage};

graph_complex_model! {
    /// Indicates that an item is the top-most one in its hierarchy. Carries
    /// no fields of its own.
    pub struct Root {
        tag: "#microsoft.graph.root",
        fields: {}
    }
}

graph_complex_model! {
    /// Indicates that an item has been deleted.
    pub struct Deleted {
        tag: "#microsoft.graph.deleted",
        fields: {
            /// Represents the state of the deleted item.
            state/set_state: str() => "state",
        }
    }
}

graph_complex_model! {
    /// Details about the site collection a root site belongs to.
    pub struct SiteCollection {
        tag: "#microsoft.graph.siteCollection",
        fields: {
            /// The geographic region code for where this site collection resides.
            data_location_code/set_data_location_code: str() => "dataLocationCode",
            /// The hostname for the site collection.
            hostname/set_hostname: str() => "hostname",
            /// If present, indicates that this is a root site collection in SharePoint.
            root/set_root: obj(Root) => "root",
        }
    }
}

graph_complex_model! {
    /// The settings of a site.
    pub struct SiteSettings {
        tag: "#microsoft.graph.siteSettings",
        fields: {
            /// The language tag for the language used on this site.
            language_tag/set_language_tag: str() => "languageTag",
            /// Indicates the time offset for the time zone of the site from Coordinated Universal Time.
            time_zone/set_time_zone: str() => "timeZone",
        }
    }
}

graph_entity_model! {
    /// A SharePoint site, carrying the slice of the Graph surface this
    /// crate models: its facets, pages, and sub-sites.
    pub struct Site : BaseItem {
        tag: "#microsoft.graph.site",
        fields: {
            /// The deleted facet, present when the site has been deleted.
            deleted/set_deleted: obj(Deleted) => "deleted",
            /// The full title for the site. Read-only.
            display_name/set_display_name: str() => "displayName",
            /// The collection of pages in the SitePages list in this site.
            pages/set_pages: coll(SitePage) => "pages",
            /// If present, indicates that this is the root site in the site collection. Read-only.
            root/set_root: obj(Root) => "root",
            /// The settings on this site. Read-only.
            settings/set_settings: obj(SiteSettings) => "settings",
            /// Returns identifiers useful for SharePoint REST compatibility. Read-only.
            sharepoint_ids/set_sharepoint_ids: obj(SharepointIds) => "sharepointIds",
            /// Details about the site's site collection. Available only on the root site. Read-only.
            site_collection/set_site_collection: obj(SiteCollection) => "siteCollection",
            /// The collection of the sub-sites under this site.
            sites/set_sites: coll(Site) => "sites",
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

    fn sample_site() -> serde_json::Value {
        json!({
            "id": "8qzvrj.sharepoint.com,deadbeef-0000,cafe-1111",
            "displayName": "Test Site",
            "name": "testsite",
            "webUrl": "https://8qzvrj.sharepoint.com/sites/testsite",
            "root": {},
            "siteCollection": {
                "hostname": "8qzvrj.sharepoint.com",
                "dataLocationCode": "EUR",
                "root": {},
            },
            "settings": {"languageTag": "en-US", "timeZone": "UTC"},
            "sharepointIds": {"siteId": "deadbeef-0000", "webId": "cafe-1111"},
            "sites": [
                {"id": "sub-1", "displayName": "Subsite"},
            ],
        })
    }

    #[test]
    fn test_parse_site_with_facets() {
        let site: Site = from_value(&sample_site()).unwrap();
        assert_eq!(site.display_name(), Some("Test Site"));
        assert_eq!(site.base().web_url(), Some("https://8qzvrj.sharepoint.com/sites/testsite"));
        assert!(site.root().is_some());
        assert_eq!(
            site.site_collection().and_then(SiteCollection::hostname),
            Some("8qzvrj.sharepoint.com")
        );
        assert_eq!(
            site.settings().and_then(SiteSettings::language_tag),
            Some("en-US")
        );
    }

    #[test]
    fn test_sub_sites_recurse() {
        let site: Site = from_value(&sample_site()).unwrap();
        let subs = site.sites().unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].display_name(), Some("Subsite"));
        assert_eq!(subs[0].id(), Some("sub-1"));
    }

    #[test]
    fn test_deleted_facet() {
        let site: Site = from_value(&json!({"deleted": {"state": "softDeleted"}})).unwrap();
        assert_eq!(site.deleted().and_then(Deleted::state), Some("softDeleted"));
    }

    #[test]
    fn test_serializer_keeps_ids() {
        let site: Site = from_value(&sample_site()).unwrap();
        let rendered = to_value(&site);
        assert_eq!(rendered.get("id"), sample_site().get("id"));
        assert_eq!(
            rendered.pointer("/sharepointIds/siteId"),
            Some(&json!("deadbeef-0000"))
        );
    }
}
