//! Management templates: reusable configuration baselines and the steps a
//! tenant works through to adopt them.

use graphbeta_wire::wire_enum;

use crate::Entity;
use crate::macros::{graph_complex_model, graph_entity_model};

wire_enum! {
    /// The management area a template applies to.
    pub enum ManagementCategory {
        Custom => "custom",
        Devices => "devices",
        Identity => "identity",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// Who authored a management template.
    pub enum ManagementProvider {
        Microsoft => "microsoft",
        Community => "community",
        IndirectProvider => "indirectProvider",
        SelfManaged => "self",
    }
}

graph_complex_model! {
    /// A named link into a management portal.
    pub struct ActionUrl {
        tag: "#microsoft.graph.managedTenants.actionUrl",
        fields: {
            /// The friendly name for the action.
            action_name/set_action_name: str() => "actionName",
            /// The URL for the action.
            action_url/set_action_url: str() => "actionUrl",
        }
    }
}

graph_entity_model! {
    /// A baseline of recommended configuration for managed tenants.
    pub struct ManagementTemplate : Entity {
        tag: "#microsoft.graph.managedTenants.managementTemplate",
        fields: {
            /// The management category for the template.
            category/set_category: enum_(ManagementCategory) => "category",
            /// The description for the template.
            description/set_description: str() => "description",
            /// The display name for the template.
            display_name/set_display_name: str() => "displayName",
            /// The priority for the template, used to order execution.
            priority/set_priority: i32() => "priority",
            /// The provider that authored the template.
            provider/set_provider: enum_(ManagementProvider) => "provider",
            /// The version for the template.
            version/set_version: i32() => "version",
        }
    }
}

graph_entity_model! {
    /// One published revision of a template step.
    pub struct ManagementTemplateStepVersion : Entity {
        tag: "#microsoft.graph.managedTenants.managementTemplateStepVersion",
        fields: {
            /// The identifier of the user who created the version.
            created_by_user_id/set_created_by_user_id: str() => "createdByUserId",
            /// The date and time the version was created.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// The name for the version.
            name/set_name: str() => "name",
            /// The version number.
            version/set_version: i32() => "version",
        }
    }
}

graph_entity_model! {
    /// A single actionable step within a management template.
    pub struct ManagementTemplateStep : Entity {
        tag: "#microsoft.graph.managedTenants.managementTemplateStep",
        fields: {
            /// The accepted version of the step.
            accepted_version/set_accepted_version: obj(ManagementTemplateStepVersion) => "acceptedVersion",
            /// The management category for the step.
            category/set_category: enum_(ManagementCategory) => "category",
            /// The identifier of the user who created the step.
            created_by_user_id/set_created_by_user_id: str() => "createdByUserId",
            /// The date and time the step was created.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// The description for the step.
            description/set_description: str() => "description",
            /// The display name for the step.
            display_name/set_display_name: str() => "displayName",
            /// The identifier of the user who last acted on the step.
            last_action_by_user_id/set_last_action_by_user_id: str() => "lastActionByUserId",
            /// The date and time of the last action on the step.
            last_action_date_time/set_last_action_date_time: datetime() => "lastActionDateTime",
            /// The management template the step belongs to.
            management_template/set_management_template: obj(ManagementTemplate) => "managementTemplate",
            /// The link to the management portal where the step is carried out.
            portal_link/set_portal_link: obj(ActionUrl) => "portalLink",
            /// The priority for the step, used to order execution.
            priority/set_priority: i32() => "priority",
            /// The published versions of the step.
            versions/set_versions: coll(ManagementTemplateStepVersion) => "versions",
        }
    }
}

graph_entity_model! {
    /// Adoption counts of a template step across managed tenants.
    pub struct ManagementTemplateStepTenantSummary : Entity {
        tag: "#microsoft.graph.managedTenants.managementTemplateStepTenantSummary",
        fields: {
            /// The number of tenants the step is assigned to.
            assigned_tenants_count/set_assigned_tenants_count: i32() => "assignedTenantsCount",
            /// The number of tenants compliant with the step.
            compliant_tenants_count/set_compliant_tenants_count: i32() => "compliantTenantsCount",
            /// The identifier of the user who created the summary.
            created_by_user_id/set_created_by_user_id: str() => "createdByUserId",
            /// The date and time the summary was created.
            created_date_time/set_created_date_time: datetime() => "createdDateTime",
            /// The number of tenants that dismissed the step.
            dismissed_tenants_count/set_dismissed_tenants_count: i32() => "dismissedTenantsCount",
            /// The number of tenants not eligible for the step.
            ineligible_tenants_count/set_ineligible_tenants_count: i32() => "ineligibleTenantsCount",
            /// The identifier of the user who last acted on the summary.
            last_action_by_user_id/set_last_action_by_user_id: str() => "lastActionByUserId",
            /// The date and time of the last action on the summary.
            last_action_date_time/set_last_action_date_time: datetime() => "lastActionDateTime",
            /// The display name of the template collection.
            management_template_collection_display_name/set_management_template_collection_display_name: str() => "managementTemplateCollectionDisplayName",
            /// The identifier of the template collection.
            management_template_collection_id/set_management_template_collection_id: str() => "managementTemplateCollectionId",
            /// The display name of the template.
            management_template_display_name/set_management_template_display_name: str() => "managementTemplateDisplayName",
            /// The identifier of the template.
            management_template_id/set_management_template_id: str() => "managementTemplateId",
            /// The display name of the template step.
            management_template_step_display_name/set_management_template_step_display_name: str() => "managementTemplateStepDisplayName",
            /// The identifier of the template step.
            management_template_step_id/set_management_template_step_id: str() => "managementTemplateStepId",
            /// The number of tenants not compliant with the step.
            not_compliant_tenants_count/set_not_compliant_tenants_count: i32() => "notCompliantTenantsCount",
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

    #[test]
    fn test_parse_step_with_versions() {
        let step: ManagementTemplateStep = from_value(&json!({
            "id": "step-1",
            "displayName": "Require MFA for admins",
            "category": "identity",
            "priority": 1,
            "portalLink": {"actionName": "Open policy", "actionUrl": "https://entra.microsoft.com/"},
            "acceptedVersion": {"name": "v2", "version": 2},
            "versions": [{"name": "v1", "version": 1}, {"name": "v2", "version": 2}],
            "managementTemplate": {
                "displayName": "Identity baseline",
                "category": "identity",
                "provider": "microsoft",
                "version": 3,
            },
        }))
        .unwrap();
        assert_eq!(step.category(), Some(ManagementCategory::Identity));
        assert_eq!(step.accepted_version().and_then(|v| v.version()), Some(2));
        assert_eq!(step.versions().map(<[_]>::len), Some(2));
        assert_eq!(
            step.management_template().and_then(ManagementTemplate::provider),
            Some(ManagementProvider::Microsoft)
        );
        assert_eq!(
            step.portal_link().and_then(ActionUrl::action_name),
            Some("Open policy")
        );
    }

    #[test]
    fn test_self_provider_wire_name() {
        let template: ManagementTemplate = from_value(&json!({"provider": "self"})).unwrap();
        assert_eq!(template.provider(), Some(ManagementProvider::SelfManaged));
        let rendered = to_value(&template);
        assert_eq!(rendered.get("provider"), Some(&json!("self")));
    }

    #[test]
    fn test_tenant_summary_counts() {
        let summary: ManagementTemplateStepTenantSummary = from_value(&json!({
            "assignedTenantsCount": 24,
            "compliantTenantsCount": 20,
            "notCompliantTenantsCount": 3,
            "dismissedTenantsCount": 1,
            "managementTemplateStepDisplayName": "Require MFA for admins",
        }))
        .unwrap();
        assert_eq!(summary.assigned_tenants_count(), Some(24));
        assert_eq!(summary.compliant_tenants_count(), Some(20));
        assert_eq!(summary.not_compliant_tenants_count(), Some(3));
    }
}
