//! The tenant aggregate that carries the reports and templates.

use crate::Entity;
use crate::macros::graph_entity_model;
use crate::managedtenants::{
    CloudPcOverview, CredentialUserRegistrationsSummary, ManagedDeviceCompliance,
    ManagementTemplate, ManagementTemplateStep, ManagementTemplateStepTenantSummary,
};

graph_entity_model! {
    /// A tenant onboarded to the multi-tenant management platform, with the
    /// report and template collections this crate models.
    pub struct ManagedTenant : Entity {
        tag: "#microsoft.graph.managedTenants.managedTenant",
        fields: {
            /// The collection of cloud PC overviews across managed tenants.
            cloud_pcs_overview/set_cloud_pcs_overview: coll(CloudPcOverview) => "cloudPcsOverview",
            /// The collection of credential user registration summaries across managed tenants.
            credential_user_registrations_summaries/set_credential_user_registrations_summaries: coll(CredentialUserRegistrationsSummary) => "credentialUserRegistrationsSummaries",
            /// The collection of device compliance states across managed tenants.
            managed_device_compliances/set_managed_device_compliances: coll(ManagedDeviceCompliance) => "managedDeviceCompliances",
            /// The collection of baseline management templates across managed tenants.
            management_templates/set_management_templates: coll(ManagementTemplate) => "managementTemplates",
            /// The collection of management template steps across managed tenants.
            management_template_steps/set_management_template_steps: coll(ManagementTemplateStep) => "managementTemplateSteps",
            /// The collection of management template step adoption summaries across managed tenants.
            management_template_step_tenant_summaries/set_management_template_step_tenant_summaries: coll(ManagementTemplateStepTenantSummary) => "managementTemplateStepTenantSummaries",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::GraphEntity;
    use graphbeta_wire::from_value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_collections_resolve() {
        let tenant: ManagedTenant = from_value(&json!({
            "id": "mt-1",
            "managementTemplates": [
                {"displayName": "Identity baseline", "category": "identity"},
            ],
            "managedDeviceCompliances": [
                {"managedDeviceName": "CONTOSO-LT-042", "complianceStatus": "compliant"},
            ],
            "cloudPcsOverview": [
                {"tenantDisplayName": "Contoso", "totalCloudPcStatus": 12},
            ],
        }))
        .unwrap();
        assert_eq!(tenant.id(), Some("mt-1"));
        assert_eq!(
            tenant.management_templates().unwrap()[0].display_name(),
            Some("Identity baseline")
        );
        assert_eq!(
            tenant.managed_device_compliances().unwrap()[0].compliance_status(),
            Some("compliant")
        );
        assert_eq!(
            tenant.cloud_pcs_overview().unwrap()[0].total_cloud_pc_status(),
            Some(12)
        );
    }
}
