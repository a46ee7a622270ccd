//! Per-tenant posture reports surfaced through multi-tenant management.

use crate::Entity;
use crate::macros::graph_entity_model;

graph_entity_model! {
    /// Device compliance state for one managed device in a tenant.
    pub struct ManagedDeviceCompliance : Entity {
        tag: "#microsoft.graph.managedTenants.managedDeviceCompliance",
        fields: {
            /// Compliance state of the device.
            compliance_status/set_compliance_status: str() => "complianceStatus",
            /// The type of the device.
            device_type/set_device_type: str() => "deviceType",
            /// The date and time when the grace period expires.
            in_grace_period_until_date_time/set_in_grace_period_until_date_time: datetime() => "inGracePeriodUntilDateTime",
            /// Date and time the entity was last updated in the multi-tenant management platform.
            last_refreshed_date_time/set_last_refreshed_date_time: datetime() => "lastRefreshedDateTime",
            /// The date and time the device last completed a successful sync with Microsoft Intune.
            last_sync_date_time/set_last_sync_date_time: datetime() => "lastSyncDateTime",
            /// The identifier for the managed device.
            managed_device_id/set_managed_device_id: str() => "managedDeviceId",
            /// The display name for the managed device.
            managed_device_name/set_managed_device_name: str() => "managedDeviceName",
            /// The manufacture for the device.
            manufacturer/set_manufacturer: str() => "manufacturer",
            /// The model for the device.
            model/set_model: str() => "model",
            /// The description of the operating system.
            os_description/set_os_description: str() => "osDescription",
            /// The version of the operating system.
            os_version/set_os_version: str() => "osVersion",
            /// The type of owner for the device.
            owner_type/set_owner_type: str() => "ownerType",
            /// The display name for the managed tenant.
            tenant_display_name/set_tenant_display_name: str() => "tenantDisplayName",
            /// The Azure Active Directory tenant identifier for the managed tenant.
            tenant_id/set_tenant_id: str() => "tenantId",
        }
    }
}

graph_entity_model! {
    /// Multifactor authentication and self-service password reset
    /// registration counts for one tenant.
    pub struct CredentialUserRegistrationsSummary : Entity {
        tag: "#microsoft.graph.managedTenants.credentialUserRegistrationsSummary",
        fields: {
            /// Date and time the entity was last updated in the multi-tenant management platform.
            last_refreshed_date_time/set_last_refreshed_date_time: datetime() => "lastRefreshedDateTime",
            /// The number of users that are capable of performing multifactor authentication or self-service password reset.
            mfa_and_sspr_capable_user_count/set_mfa_and_sspr_capable_user_count: i32() => "mfaAndSsprCapableUserCount",
            /// The state of a conditional access policy that enforces multifactor authentication.
            mfa_conditional_access_policy_state/set_mfa_conditional_access_policy_state: str() => "mfaConditionalAccessPolicyState",
            /// The number of users in the conditional access policy exclusion group.
            mfa_excluded_user_count/set_mfa_excluded_user_count: i32() => "mfaExcludedUserCount",
            /// The number of users registered for multifactor authentication.
            mfa_registered_user_count/set_mfa_registered_user_count: i32() => "mfaRegisteredUserCount",
            /// A flag indicating whether security defaults are enabled for the tenant.
            security_defaults_enabled/set_security_defaults_enabled: bool() => "securityDefaultsEnabled",
            /// The number of users enabled for self-service password reset.
            sspr_enabled_user_count/set_sspr_enabled_user_count: i32() => "ssprEnabledUserCount",
            /// The number of users registered for self-service password reset.
            sspr_registered_user_count/set_sspr_registered_user_count: i32() => "ssprRegisteredUserCount",
            /// The display name for the managed tenant.
            tenant_display_name/set_tenant_display_name: str() => "tenantDisplayName",
            /// The Azure Active Directory tenant identifier for the managed tenant.
            tenant_id/set_tenant_id: str() => "tenantId",
            /// The total number of users in the tenant.
            total_user_count/set_total_user_count: i32() => "totalUserCount",
        }
    }
}

graph_entity_model! {
    /// Windows 365 status rollup for one tenant.
    pub struct CloudPcOverview : Entity {
        tag: "#microsoft.graph.managedTenants.cloudPcOverview",
        fields: {
            /// Date and time the entity was last updated in the multi-tenant management platform.
            last_refreshed_date_time/set_last_refreshed_date_time: datetime() => "lastRefreshedDateTime",
            /// The number of cloud PC connections with a failed status.
            number_of_cloud_pc_connection_status_failed/set_number_of_cloud_pc_connection_status_failed: i32() => "numberOfCloudPcConnectionStatusFailed",
            /// The number of cloud PC connections with a passed status.
            number_of_cloud_pc_connection_status_passed/set_number_of_cloud_pc_connection_status_passed: i32() => "numberOfCloudPcConnectionStatusPassed",
            /// The number of cloud PC connections with a pending status.
            number_of_cloud_pc_connection_status_pending/set_number_of_cloud_pc_connection_status_pending: i32() => "numberOfCloudPcConnectionStatusPending",
            /// The number of cloud PC connections with a running status.
            number_of_cloud_pc_connection_status_running/set_number_of_cloud_pc_connection_status_running: i32() => "numberOfCloudPcConnectionStatusRunning",
            /// The number of cloud PC connections with an unknown status.
            number_of_cloud_pc_connection_status_unkown_future_value/set_number_of_cloud_pc_connection_status_unkown_future_value: i32() => "numberOfCloudPcConnectionStatusUnkownFutureValue",
            /// The number of cloud PCs in a deprovisioning state.
            number_of_cloud_pc_status_deprovisioning/set_number_of_cloud_pc_status_deprovisioning: i32() => "numberOfCloudPcStatusDeprovisioning",
            /// The number of cloud PCs in a failed state.
            number_of_cloud_pc_status_failed/set_number_of_cloud_pc_status_failed: i32() => "numberOfCloudPcStatusFailed",
            /// The number of cloud PCs in a grace period.
            number_of_cloud_pc_status_in_grace_period/set_number_of_cloud_pc_status_in_grace_period: i32() => "numberOfCloudPcStatusInGracePeriod",
            /// The number of cloud PCs not yet provisioned.
            number_of_cloud_pc_status_not_provisioned/set_number_of_cloud_pc_status_not_provisioned: i32() => "numberOfCloudPcStatusNotProvisioned",
            /// The number of provisioned cloud PCs.
            number_of_cloud_pc_status_provisioned/set_number_of_cloud_pc_status_provisioned: i32() => "numberOfCloudPcStatusProvisioned",
            /// The number of cloud PCs being provisioned.
            number_of_cloud_pc_status_provisioning/set_number_of_cloud_pc_status_provisioning: i32() => "numberOfCloudPcStatusProvisioning",
            /// The number of cloud PCs in an unknown state.
            number_of_cloud_pc_status_unknown/set_number_of_cloud_pc_status_unknown: i32() => "numberOfCloudPcStatusUnknown",
            /// The number of cloud PCs being upgraded.
            number_of_cloud_pc_status_upgrading/set_number_of_cloud_pc_status_upgrading: i32() => "numberOfCloudPcStatusUpgrading",
            /// The display name for the managed tenant.
            tenant_display_name/set_tenant_display_name: str() => "tenantDisplayName",
            /// The Azure Active Directory tenant identifier for the managed tenant.
            tenant_id/set_tenant_id: str() => "tenantId",
            /// The total number of cloud PC business licenses.
            total_business_licenses/set_total_business_licenses: i32() => "totalBusinessLicenses",
            /// The total number of cloud PC connection statuses.
            total_cloud_pc_connection_status/set_total_cloud_pc_connection_status: i32() => "totalCloudPcConnectionStatus",
            /// The total number of cloud PC statuses.
            total_cloud_pc_status/set_total_cloud_pc_status: i32() => "totalCloudPcStatus",
            /// The total number of cloud PC enterprise licenses.
            total_enterprise_licenses/set_total_enterprise_licenses: i32() => "totalEnterpriseLicenses",
        }
    }
}
