//! Multi-tenant management (Microsoft 365 Lighthouse) models: management
//! templates, per-tenant posture reports, and the tenant aggregate that
//! carries them.

mod managed_tenant;
mod reports;
mod templates;

pub use managed_tenant::ManagedTenant;
pub use reports::{
    CloudPcOverview, CredentialUserRegistrationsSummary, ManagedDeviceCompliance,
};
pub use templates::{
    ActionUrl, ManagementCategory, ManagementProvider, ManagementTemplate, ManagementTemplateStep,
    ManagementTemplateStepTenantSummary, ManagementTemplateStepVersion,
};
