//! The data source hierarchy: where collected content comes from.

use graphbeta_wire::{Error, FieldWriter, ParseNode, Serializable, parse_node, wire_enum};

use crate::macros::graph_entity_model;
use crate::{Entity, GraphEntity, IdentitySet, Site};

wire_enum! {
    /// Hold status of a data source.
    pub enum DataSourceHoldStatus {
        NotApplied => "notApplied",
        Applied => "applied",
        Applying => "applying",
        Removing => "removing",
        Partial => "partial",
    }
}

wire_enum! {
    /// Which source categories a user source covers.
    pub enum SourceType {
        Mailbox => "mailbox",
        Site => "site",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_entity_model! {
    /// Shared surface of all eDiscovery data sources.
    pub struct DataSource : Entity {
        tag: "#microsoft.graph.ediscovery.dataSource",
        fields: {
            /// The user who created the data source.
            created_by/set_created_by: obj(IdentitySet) => "createdBy",
            /// The date and time the data source was created.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// The display name of the data source.
            display_name/set_display_name: str() => "displayName",
            /// The hold status of the data source.
            hold_status/set_hold_status: enum_(DataSourceHoldStatus) => "holdStatus",
        }
    }
}

graph_entity_model! {
    /// A user mailbox or OneDrive acting as a data source.
    pub struct UserSource : DataSource {
        tag: "#microsoft.graph.ediscovery.userSource",
        fields: {
            /// Email address of the user's mailbox.
            email/set_email: str() => "email",
            /// Specifies which sources are included in this group.
            included_sources/set_included_sources: enum_coll(SourceType) => "includedSources",
        }
    }
}

graph_entity_model! {
    /// A SharePoint site acting as a data source.
    pub struct SiteSource : DataSource {
        tag: "#microsoft.graph.ediscovery.siteSource",
        fields: {
            /// The SharePoint site associated with the site source.
            site/set_site: obj(Site) => "site",
        }
    }
}

/// A data source resolved from its `@odata.type` discriminator.
#[derive(Clone, Debug)]
pub enum AnyDataSource {
    User(UserSource),
    Site(SiteSource),
    Unknown(DataSource),
}

impl AnyDataSource {
    /// Discriminator-based factory for data source payloads. Tags outside
    /// the modeled hierarchy keep the shared [`DataSource`] surface.
    pub fn from_node(node: &ParseNode<'_>) -> Result<Self, Error> {
        match node.discriminator() {
            Some("#microsoft.graph.ediscovery.userSource") => Ok(Self::User(parse_node(node)?)),
            Some("#microsoft.graph.ediscovery.siteSource") => Ok(Self::Site(parse_node(node)?)),
            tag => {
                if let Some(tag) = tag {
                    tracing::debug!(tag, "unknown data source discriminator, keeping base fields");
                }
                Ok(Self::Unknown(parse_node(node)?))
            }
        }
    }

    /// The shared data-source surface, regardless of concrete type.
    #[must_use]
    pub fn data_source(&self) -> &DataSource {
        match self {
            Self::User(source) => source.base(),
            Self::Site(source) => source.base(),
            Self::Unknown(source) => source,
        }
    }
}

impl GraphEntity for AnyDataSource {
    fn entity(&self) -> &Entity {
        self.data_source().entity()
    }

    fn entity_mut(&mut self) -> &mut Entity {
        match self {
            Self::User(source) => source.entity_mut(),
            Self::Site(source) => source.entity_mut(),
            Self::Unknown(source) => source.entity_mut(),
        }
    }
}

impl Serializable for AnyDataSource {
    fn serialize_fields(&self, writer: &mut FieldWriter) {
        match self {
            Self::User(source) => source.serialize_fields(writer),
            Self::Site(source) => source.serialize_fields(writer),
            Self::Unknown(source) => source.serialize_fields(writer),
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
    fn test_user_source_resolution() {
        let value = json!({
            "@odata.type": "#microsoft.graph.ediscovery.userSource",
            "id": "ds-1",
            "displayName": "Dustin Abbot",
            "email": "dustina@8qzvrj.onmicrosoft.com",
            "holdStatus": "applied",
            "includedSources": ["mailbox", "site"],
        });
        let source = AnyDataSource::from_node(&ParseNode::new(&value)).unwrap();
        assert_eq!(
            source.data_source().hold_status(),
            Some(DataSourceHoldStatus::Applied)
        );
        let AnyDataSource::User(user) = source else {
            panic!("expected a user source");
        };
        assert_eq!(user.email(), Some("dustina@8qzvrj.onmicrosoft.com"));
        assert_eq!(
            user.included_sources(),
            Some(&[SourceType::Mailbox, SourceType::Site][..])
        );
    }

    #[test]
    fn test_site_source_carries_site() {
        let value = json!({
            "@odata.type": "#microsoft.graph.ediscovery.siteSource",
            "site": {"webUrl": "https://8qzvrj.sharepoint.com/sites/testsite"},
        });
        let AnyDataSource::Site(source) = AnyDataSource::from_node(&ParseNode::new(&value)).unwrap()
        else {
            panic!("expected a site source");
        };
        assert_eq!(
            source.site().and_then(|s| s.base().web_url()),
            Some("https://8qzvrj.sharepoint.com/sites/testsite")
        );
    }

    #[test]
    fn test_unknown_tag_keeps_shared_fields() {
        let value = json!({
            "@odata.type": "#microsoft.graph.ediscovery.unifiedGroupSource",
            "displayName": "All Company",
        });
        let source = AnyDataSource::from_node(&ParseNode::new(&value)).unwrap();
        assert!(matches!(source, AnyDataSource::Unknown(_)));
        assert_eq!(source.data_source().display_name(), Some("All Company"));
    }
}
