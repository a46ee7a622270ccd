//! Long-running operations attached to an eDiscovery case.

use graphbeta_wire::wire_enum;

use crate::macros::{graph_complex_model, graph_entity_model};
use crate::{Entity, IdentitySet};

wire_enum! {
    /// The action a case operation performs.
    pub enum CaseAction {
        ContentExport => "contentExport",
        ApplyTags => "applyTags",
        ConvertToPdf => "convertToPdf",
        Index => "index",
        EstimateStatistics => "estimateStatistics",
        AddToReviewSet => "addToReviewSet",
        HoldUpdate => "holdUpdate",
        UnknownFutureValue => "unknownFutureValue",
        PurgeData => "purgeData",
        ExportReport => "exportReport",
        ExportResult => "exportResult",
    }
}

wire_enum! {
    /// Completion state of a case operation.
    pub enum CaseOperationStatus {
        NotStarted => "notStarted",
        SubmissionFailed => "submissionFailed",
        Running => "running",
        Succeeded => "succeeded",
        PartiallySucceeded => "partiallySucceeded",
        Failed => "failed",
    }
}

graph_complex_model! {
    /// Detail of a failed operation.
    pub struct ResultInfo {
        tag: "#microsoft.graph.resultInfo",
        fields: {
            /// The result code.
            code/set_code: i32() => "code",
            /// The message that explains the result.
            message/set_message: str() => "message",
            /// The result sub-code.
            subcode/set_subcode: i32() => "subcode",
        }
    }
}

graph_entity_model! {
    /// Shared surface of all case operations.
    pub struct CaseOperation : Entity {
        tag: "#microsoft.graph.ediscovery.caseOperation",
        fields: {
            /// The type of action the operation represents.
            action/set_action: enum_(CaseAction) => "action",
            /// The date and time the operation was completed.
            completed_date_time/set_completed_date_time: datetime() => "completedDateTime",
            /// The user that created the operation.
            created_by/set_created_by: obj(IdentitySet) => "createdBy",
            /// The date and time the operation was created.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// The progress of the operation.
            percent_progress/set_percent_progress: i32() => "percentProgress",
            /// Contains success and failure-specific result information.
            result_info/set_result_info: obj(ResultInfo) => "resultInfo",
            /// The status of the case operation.
            status/set_status: enum_(CaseOperationStatus) => "status",
        }
    }
}

graph_entity_model! {
    /// A collection of review set items within an eDiscovery case.
    pub struct ReviewSet : Entity {
        tag: "#microsoft.graph.ediscovery.reviewSet",
        fields: {
            /// The user who created the review set.
            created_by/set_created_by: obj(IdentitySet) => "createdBy",
            /// The datetime when the review set was created.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// The review set name.
            display_name/set_display_name: str() => "displayName",
        }
    }
}

graph_entity_model! {
    /// The operation that adds collected results to a review set.
    pub struct AddToReviewSetOperation : CaseOperation {
        tag: "#microsoft.graph.ediscovery.addToReviewSetOperation",
        fields: {
            /// eDiscovery review set to which items matching the source collection query get added.
            review_set/set_review_set: obj(ReviewSet) => "reviewSet",
        }
    }
}

graph_entity_model! {
    /// Statistics estimation for a source collection.
    pub struct EstimateStatisticsOperation : CaseOperation {
        tag: "#microsoft.graph.ediscovery.estimateStatisticsOperation",
        fields: {
            /// The estimated count of items for the source collection that matched the content query.
            indexed_item_count/set_indexed_item_count: i64() => "indexedItemCount",
            /// The estimated size of items for the source collection that matched the content query.
            indexed_items_size/set_indexed_items_size: i64() => "indexedItemsSize",
            /// The number of mailboxes that had search hits.
            mailbox_count/set_mailbox_count: i32() => "mailboxCount",
            /// The number of sites that had search hits.
            site_count/set_site_count: i32() => "siteCount",
            /// The estimated count of unindexed items for the collection.
            unindexed_item_count/set_unindexed_item_count: i64() => "unindexedItemCount",
            /// The estimated size of unindexed items for the collection.
            unindexed_items_size/set_unindexed_items_size: i64() => "unindexedItemsSize",
        }
    }
}
