//! Source collections: the queries that gather content from custodial and
//! non-custodial data sources.

use graphbeta_wire::wire_enum;

use crate::ediscovery::{
    AddToReviewSetOperation, AnyDataSource, DataSourceHoldStatus, EstimateStatisticsOperation,
};
use crate::macros::graph_entity_model;
use crate::{Entity, IdentitySet};

wire_enum! {
    /// Tenant-wide scopes a collection may pull from in addition to its
    /// explicit sources.
    pub enum DataSourceScopes {
        None => "none",
        AllTenantMailboxes => "allTenantMailboxes",
        AllTenantSites => "allTenantSites",
        AllCaseCustodians => "allCaseCustodians",
        AllCaseNoncustodialDataSources => "allCaseNoncustodialDataSources",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// Lifecycle status of a data source container.
    pub enum DataSourceContainerStatus {
        Active => "active",
        Released => "released",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_entity_model! {
    /// Shared surface of custodians and non-custodial data sources.
    pub struct DataSourceContainer : Entity {
        tag: "#microsoft.graph.ediscovery.dataSourceContainer",
        fields: {
            /// Created date and time of the container.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// Display name of the container.
            display_name/set_display_name: str() => "displayName",
            /// The hold status of the container.
            hold_status/set_hold_status: enum_(DataSourceHoldStatus) => "holdStatus",
            /// Last modified date and time of the container.
            last_modified_date_time/set_last_modified_date_time: datetime() => "lastModifiedDateTime",
            /// Date and time the container was released from the case.
            released_date_time/set_released_date_time: datetime() => "releasedDateTime",
            /// Latest status of the container.
            status/set_status: enum_(DataSourceContainerStatus) => "status",
        }
    }
}

graph_entity_model! {
    /// A data source in a case that is not associated with a custodian.
    pub struct NoncustodialDataSource : DataSourceContainer {
        tag: "#microsoft.graph.ediscovery.noncustodialDataSource",
        fields: {
            /// Indicates if hold is applied to the non-custodial data source.
            apply_hold_to_source/set_apply_hold_to_source: bool() => "applyHoldToSource",
            /// User or site source associated with the non-custodial data source.
            data_source/set_data_source: poly(AnyDataSource, AnyDataSource::from_node) => "dataSource",
        }
    }
}

graph_entity_model! {
    /// A query that collects content from data sources for review.
    pub struct SourceCollection : Entity {
        tag: "#microsoft.graph.ediscovery.sourceCollection",
        fields: {
            /// Adds an additional source to the collection while holding it in context.
            additional_sources/set_additional_sources: poly_coll(AnyDataSource, AnyDataSource::from_node) => "additionalSources",
            /// Adds the results of the collection to the specified review set.
            add_to_review_set_operation/set_add_to_review_set_operation: obj(AddToReviewSetOperation) => "addToReviewSetOperation",
            /// The query string in KQL (Keyword Query Language) query.
            content_query/set_content_query: str() => "contentQuery",
            /// The user who created the collection.
            created_by/set_created_by: obj(IdentitySet) => "createdBy",
            /// The date and time the collection was created.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// Custodial data sources that are included in the collection.
            custodian_sources/set_custodian_sources: poly_coll(AnyDataSource, AnyDataSource::from_node) => "custodianSources",
            /// When specified, the collection spans across a service for an entire workload.
            data_source_scopes/set_data_source_scopes: enum_(DataSourceScopes) => "dataSourceScopes",
            /// The description of the collection.
            description/set_description: str() => "description",
            /// The display name of the collection.
            display_name/set_display_name: str() => "displayName",
            /// The last estimate statistics operation for the collection.
            last_estimate_statistics_operation/set_last_estimate_statistics_operation: obj(EstimateStatisticsOperation) => "lastEstimateStatisticsOperation",
            /// The last user who modified the collection.
            last_modified_by/set_last_modified_by: obj(IdentitySet) => "lastModifiedBy",
            /// The date and time the collection was last modified.
            last_modified_date_time/set_last_modified_date_time: datetime() => "lastModifiedDateTime",
            /// Non-custodial data sources that are included in the collection.
            noncustodial_sources/set_noncustodial_sources: coll(NoncustodialDataSource) => "noncustodialSources",
        }
    }
}
