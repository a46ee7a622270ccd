//! The crate-wide discriminator registry.

use graphbeta_wire::{Error, FieldWriter, ParseNode, Serializable, parse_node};

use crate::ediscovery::{
    AddToReviewSetOperation, CaseOperation, EstimateStatisticsOperation, NoncustodialDataSource,
    ReviewSet, SiteSource, SourceCollection, UserSource,
};
use crate::identitygovernance::UserProcessingResult;
use crate::managedtenants::{
    CloudPcOverview, CredentialUserRegistrationsSummary, ManagedDeviceCompliance, ManagedTenant,
    ManagementTemplate, ManagementTemplateStep, ManagementTemplateStepTenantSummary,
    ManagementTemplateStepVersion,
};
use crate::search::Qna;
use crate::tenantadmin::Settings;
use crate::{Entity, GraphEntity, Site, SitePage, StandardWebPart, TextWebPart, User};

/// Any modeled entity, resolved from its `@odata.type` discriminator.
///
/// This is the entry point for payloads whose concrete type is only known
/// at runtime, such as the values of a heterogeneous collection. Tags
/// outside the modeled set parse into [`AnyEntity::Unknown`], which keeps
/// the entity fields plus everything else as additional data.
#[derive(Clone, Debug)]
pub enum AnyEntity {
    Site(Site),
    SitePage(SitePage),
    User(User),
    TextWebPart(TextWebPart),
    StandardWebPart(StandardWebPart),
    CaseOperation(CaseOperation),
    AddToReviewSetOperation(AddToReviewSetOperation),
    EstimateStatisticsOperation(EstimateStatisticsOperation),
    ReviewSet(ReviewSet),
    UserSource(UserSource),
    SiteSource(SiteSource),
    NoncustodialDataSource(NoncustodialDataSource),
    SourceCollection(SourceCollection),
    Qna(Qna),
    TenantSettings(Settings),
    ManagedTenant(ManagedTenant),
    ManagementTemplate(ManagementTemplate),
    ManagementTemplateStep(ManagementTemplateStep),
    ManagementTemplateStepVersion(ManagementTemplateStepVersion),
    ManagementTemplateStepTenantSummary(ManagementTemplateStepTenantSummary),
    ManagedDeviceCompliance(ManagedDeviceCompliance),
    CredentialUserRegistrationsSummary(CredentialUserRegistrationsSummary),
    CloudPcOverview(CloudPcOverview),
    UserProcessingResult(UserProcessingResult),
    Unknown(Entity),
}

impl AnyEntity {
    /// Discriminator-based factory over every modeled entity type.
    pub fn from_node(node: &ParseNode<'_>) -> Result<Self, Error> {
        match node.discriminator() {
            Some("#microsoft.graph.site") => Ok(Self::Site(parse_node(node)?)),
            Some("#microsoft.graph.sitePage") => Ok(Self::SitePage(parse_node(node)?)),
            Some("#microsoft.graph.user") => Ok(Self::User(parse_node(node)?)),
            Some("#microsoft.graph.textWebPart") => Ok(Self::TextWebPart(parse_node(node)?)),
            Some("#microsoft.graph.standardWebPart") => {
                Ok(Self::StandardWebPart(parse_node(node)?))
            }
            Some("#microsoft.graph.ediscovery.caseOperation") => {
                Ok(Self::CaseOperation(parse_node(node)?))
            }
            Some("#microsoft.graph.ediscovery.addToReviewSetOperation") => {
                Ok(Self::AddToReviewSetOperation(parse_node(node)?))
            }
            Some("#microsoft.graph.ediscovery.estimateStatisticsOperation") => {
                Ok(Self::EstimateStatisticsOperation(parse_node(node)?))
            }
            Some("#microsoft.graph.ediscovery.reviewSet") => Ok(Self::ReviewSet(parse_node(node)?)),
            Some("#microsoft.graph.ediscovery.userSource") => {
                Ok(Self::UserSource(parse_node(node)?))
            }
            Some("#microsoft.graph.ediscovery.siteSource") => {
                Ok(Self::SiteSource(parse_node(node)?))
            }
            Some("#microsoft.graph.ediscovery.noncustodialDataSource") => {
                Ok(Self::NoncustodialDataSource(parse_node(node)?))
            }
            Some("#microsoft.graph.ediscovery.sourceCollection") => {
                Ok(Self::SourceCollection(parse_node(node)?))
            }
            Some("#microsoft.graph.search.qna") => Ok(Self::Qna(parse_node(node)?)),
            Some("#microsoft.graph.tenantAdmin.settings") => {
                Ok(Self::TenantSettings(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.managedTenant") => {
                Ok(Self::ManagedTenant(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.managementTemplate") => {
                Ok(Self::ManagementTemplate(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.managementTemplateStep") => {
                Ok(Self::ManagementTemplateStep(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.managementTemplateStepVersion") => {
                Ok(Self::ManagementTemplateStepVersion(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.managementTemplateStepTenantSummary") => {
                Ok(Self::ManagementTemplateStepTenantSummary(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.managedDeviceCompliance") => {
                Ok(Self::ManagedDeviceCompliance(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.credentialUserRegistrationsSummary") => {
                Ok(Self::CredentialUserRegistrationsSummary(parse_node(node)?))
            }
            Some("#microsoft.graph.managedTenants.cloudPcOverview") => {
                Ok(Self::CloudPcOverview(parse_node(node)?))
            }
            Some("#microsoft.graph.identityGovernance.userProcessingResult") => {
                Ok(Self::UserProcessingResult(parse_node(node)?))
            }
            tag => {
                if let Some(tag) = tag {
                    tracing::debug!(tag, "unmodeled entity discriminator, keeping base fields");
                }
                Ok(Self::Unknown(parse_node(node)?))
            }
        }
    }
}

macro_rules! for_each_variant {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            AnyEntity::Site($inner) => $body,
            AnyEntity::SitePage($inner) => $body,
            AnyEntity::User($inner) => $body,
            AnyEntity::TextWebPart($inner) => $body,
            AnyEntity::StandardWebPart($inner) => $body,
            AnyEntity::CaseOperation($inner) => $body,
            AnyEntity::AddToReviewSetOperation($inner) => $body,
            AnyEntity::EstimateStatisticsOperation($inner) => $body,
            AnyEntity::ReviewSet($inner) => $body,
            AnyEntity::UserSource($inner) => $body,
            AnyEntity::SiteSource($inner) => $body,
            AnyEntity::NoncustodialDataSource($inner) => $body,
            AnyEntity::SourceCollection($inner) => $body,
            AnyEntity::Qna($inner) => $body,
            AnyEntity::TenantSettings($inner) => $body,
            AnyEntity::ManagedTenant($inner) => $body,
            AnyEntity::ManagementTemplate($inner) => $body,
            AnyEntity::ManagementTemplateStep($inner) => $body,
            AnyEntity::ManagementTemplateStepVersion($inner) => $body,
            AnyEntity::ManagementTemplateStepTenantSummary($inner) => $body,
            AnyEntity::ManagedDeviceCompliance($inner) => $body,
            AnyEntity::CredentialUserRegistrationsSummary($inner) => $body,
            AnyEntity::CloudPcOverview($inner) => $body,
            AnyEntity::UserProcessingResult($inner) => $body,
            AnyEntity::Unknown($inner) => $body,
        }
    };
}

impl GraphEntity for AnyEntity {
    fn entity(&self) -> &Entity {
        for_each_variant!(self, inner => inner.entity())
    }

    fn entity_mut(&mut self) -> &mut Entity {
        for_each_variant!(self, inner => inner.entity_mut())
    }
}

impl Serializable for AnyEntity {
    fn serialize_fields(&self, writer: &mut FieldWriter) {
        for_each_variant!(self, inner => inner.serialize_fields(writer));
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use graphbeta_wire::to_value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_site_page_resolution() {
        let value = json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "id": "page-1",
            "title": "Home",
        });
        let entity = AnyEntity::from_node(&ParseNode::new(&value)).unwrap();
        assert_eq!(entity.id(), Some("page-1"));
        let AnyEntity::SitePage(page) = entity else {
            panic!("expected a site page");
        };
        assert_eq!(page.title(), Some("Home"));
    }

    #[test]
    fn test_namespaced_resolution() {
        let value = json!({
            "@odata.type": "#microsoft.graph.tenantAdmin.settings",
            "isCommentingOnSitePagesEnabled": true,
        });
        let entity = AnyEntity::from_node(&ParseNode::new(&value)).unwrap();
        assert!(matches!(entity, AnyEntity::TenantSettings(_)));
    }

    #[test]
    fn test_unknown_tag_keeps_entity_and_extras() {
        let value = json!({
            "@odata.type": "#microsoft.graph.drive",
            "id": "drive-1",
            "driveType": "documentLibrary",
        });
        let entity = AnyEntity::from_node(&ParseNode::new(&value)).unwrap();
        assert!(matches!(entity, AnyEntity::Unknown(_)));
        assert_eq!(entity.id(), Some("drive-1"));

        // Unmodeled fields ride along as additional data.
        let rendered = to_value(&entity);
        assert_eq!(rendered.get("driveType"), Some(&json!("documentLibrary")));
        assert_eq!(rendered.get("@odata.type"), Some(&json!("#microsoft.graph.drive")));
    }

    #[test]
    fn test_missing_discriminator_falls_back() {
        let value = json!({"id": "bare-1"});
        let entity = AnyEntity::from_node(&ParseNode::new(&value)).unwrap();
        assert!(matches!(entity, AnyEntity::Unknown(_)));
        assert_eq!(entity.id(), Some("bare-1"));
    }
}
