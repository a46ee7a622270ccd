//! Advanced eDiscovery models: source collections, data sources, and the
//! long-running case operations attached to them.

mod case_operation;
mod data_source;
mod source_collection;

pub use case_operation::{
    AddToReviewSetOperation, CaseAction, CaseOperation, CaseOperationStatus,
    EstimateStatisticsOperation, ResultInfo, ReviewSet,
};
pub use data_source::{
    AnyDataSource, DataSource, DataSourceHoldStatus, SiteSource, SourceType, UserSource,
};
pub use source_collection::{
    DataSourceContainer, DataSourceContainerStatus, DataSourceScopes, NoncustodialDataSource,
    SourceCollection,
};
