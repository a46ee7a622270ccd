//! Lifecycle workflow execution results for identity governance.

use graphbeta_wire::wire_enum;

use crate::macros::graph_entity_model;
use crate::{Entity, User};

wire_enum! {
    /// Processing status of a lifecycle workflow run.
    pub enum LifecycleWorkflowProcessingStatus {
        Queued => "queued",
        InProgress => "inProgress",
        Completed => "completed",
        CompletedWithErrors => "completedWithErrors",
        Canceled => "canceled",
        Failed => "failed",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// How a workflow execution was triggered.
    pub enum WorkflowExecutionType {
        Scheduled => "scheduled",
        OnDemand => "onDemand",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_entity_model! {
    /// The result of running a lifecycle workflow for one user.
    pub struct UserProcessingResult : Entity {
        tag: "#microsoft.graph.identityGovernance.userProcessingResult",
        fields: {
            /// The date time that the workflow execution for a user completed.
            completed_date_time/set_completed_date_time: datetime() => "completedDateTime",
            /// The number of tasks that failed in the workflow execution.
            failed_tasks_count/set_failed_tasks_count: i32() => "failedTasksCount",
            /// The workflow execution status.
            processing_status/set_processing_status: enum_(LifecycleWorkflowProcessingStatus) => "processingStatus",
            /// The date time that the workflow is scheduled to be executed for a user.
            scheduled_date_time/set_scheduled_date_time: datetime() => "scheduledDateTime",
            /// The date time that the workflow execution started.
            started_date_time/set_started_date_time: datetime() => "startedDateTime",
            /// The user the workflow executed against.
            subject/set_subject: obj(User) => "subject",
            /// The total number of tasks that in the workflow execution.
            total_tasks_count/set_total_tasks_count: i32() => "totalTasksCount",
            /// The total number of unprocessed tasks for the workflow.
            total_unprocessed_tasks_count/set_total_unprocessed_tasks_count: i32() => "totalUnprocessedTasksCount",
            /// Describes whether the workflow execution was scheduled or on demand.
            workflow_execution_type/set_workflow_execution_type: enum_(WorkflowExecutionType) => "workflowExecutionType",
            /// The version of the workflow that was executed.
            workflow_version/set_workflow_version: i32() => "workflowVersion",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use graphbeta_wire::{from_value, to_value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_result() -> serde_json::Value {
        json!({
            "id": "40efc576-840f-47d0-ab95-5abd245ezz92",
            "processingStatus": "completedWithErrors",
            "workflowExecutionType": "scheduled",
            "workflowVersion": 3,
            "totalTasksCount": 3,
            "failedTasksCount": 1,
            "totalUnprocessedTasksCount": 0,
            "startedDateTime": "2022-08-24T18:27:43.557Z",
            "completedDateTime": "2022-08-24T18:30:01.003Z",
            "subject": {
                "id": "df744d9e-2148-4922-88a8-633896cdfa20",
                "userPrincipalName": "MiguelDegollado@contoso.com",
            },
        })
    }

    #[test]
    fn test_parse_processing_result() {
        let result: UserProcessingResult = from_value(&sample_result()).unwrap();
        assert_eq!(
            result.processing_status(),
            Some(LifecycleWorkflowProcessingStatus::CompletedWithErrors)
        );
        assert_eq!(
            result.workflow_execution_type(),
            Some(WorkflowExecutionType::Scheduled)
        );
        assert_eq!(result.failed_tasks_count(), Some(1));
        assert_eq!(
            result.subject().and_then(|u| u.user_principal_name()),
            Some("MiguelDegollado@contoso.com")
        );
    }

    #[test]
    fn test_subject_serializes_with_user_tag() {
        let result: UserProcessingResult = from_value(&sample_result()).unwrap();
        let rendered = to_value(&result);
        assert_eq!(
            rendered.pointer("/subject/@odata.type"),
            Some(&json!("#microsoft.graph.user"))
        );
        assert_eq!(
            rendered.get("processingStatus"),
            Some(&json!("completedWithErrors"))
        );
    }
}
