//! SharePoint tenant administration settings.

use graphbeta_wire::wire_enum;

use crate::Entity;
use crate::macros::{graph_complex_model, graph_entity_model};

wire_enum! {
    /// How images uploaded to SharePoint get tagged.
    pub enum ImageTaggingChoice {
        Disabled => "disabled",
        Basic => "basic",
        Enhanced => "enhanced",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// External sharing level allowed for the tenant.
    pub enum SharingCapabilities {
        Disabled => "disabled",
        ExternalUserSharingOnly => "externalUserSharingOnly",
        ExternalUserAndGuestSharing => "externalUserAndGuestSharing",
        ExistingExternalUserSharingOnly => "existingExternalUserSharingOnly",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// How the sharing domain lists are interpreted.
    pub enum SharingDomainRestrictionMode {
        None => "none",
        AllowList => "allowList",
        BlockList => "blockList",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_complex_model! {
    /// Idle session sign-out policy for unmanaged devices.
    pub struct IdleSessionSignOut {
        tag: "#microsoft.graph.idleSessionSignOut",
        fields: {
            /// Indicates whether the idle session sign-out policy is enabled.
            is_enabled/set_is_enabled: bool() => "isEnabled",
            /// Number of seconds of inactivity after which a user is signed out.
            sign_out_after_in_seconds/set_sign_out_after_in_seconds: i32() => "signOutAfterInSeconds",
            /// Number of seconds of inactivity after which a user is notified and given the option to extend their session.
            warn_after_in_seconds/set_warn_after_in_seconds: i32() => "warnAfterInSeconds",
        }
    }
}

graph_entity_model! {
    /// The tenant-level settings for SharePoint and OneDrive.
    pub struct Settings : Entity {
        tag: "#microsoft.graph.tenantAdmin.settings",
        fields: {
            /// Collection of trusted domain GUIDs for the OneDrive sync app.
            allowed_domain_guids_for_sync_app/set_allowed_domain_guids_for_sync_app: uuid_coll() => "allowedDomainGuidsForSyncApp",
            /// Collection of managed paths available for site creation.
            available_managed_paths_for_site_creation/set_available_managed_paths_for_site_creation: str_coll() => "availableManagedPathsForSiteCreation",
            /// The number of days for preserving a deleted user's OneDrive.
            deleted_user_personal_site_retention_period_in_days/set_deleted_user_personal_site_retention_period_in_days: i32() => "deletedUserPersonalSiteRetentionPeriodInDays",
            /// Collection of file extensions not uploaded by the OneDrive sync app.
            excluded_file_extensions_for_sync_app/set_excluded_file_extensions_for_sync_app: str_coll() => "excludedFileExtensionsForSyncApp",
            /// Specifies the idle session sign-out policies for the tenant.
            idle_session_sign_out/set_idle_session_sign_out: obj(IdleSessionSignOut) => "idleSessionSignOut",
            /// Specifies the image tagging option for the tenant.
            image_tagging_option/set_image_tagging_option: enum_(ImageTaggingChoice) => "imageTaggingOption",
            /// Indicates whether commenting on site pages is enabled.
            is_commenting_on_site_pages_enabled/set_is_commenting_on_site_pages_enabled: bool() => "isCommentingOnSitePagesEnabled",
            /// Indicates whether push notifications are enabled for OneDrive events.
            is_file_activity_notification_enabled/set_is_file_activity_notification_enabled: bool() => "isFileActivityNotificationEnabled",
            /// Indicates whether legacy authentication protocols are enabled.
            is_legacy_auth_protocols_enabled/set_is_legacy_auth_protocols_enabled: bool() => "isLegacyAuthProtocolsEnabled",
            /// Indicates whether if Fluid Framework is allowed on SharePoint sites.
            is_loop_enabled/set_is_loop_enabled: bool() => "isLoopEnabled",
            /// Indicates whether files can be synced using the OneDrive sync app for Mac.
            is_mac_sync_app_enabled/set_is_mac_sync_app_enabled: bool() => "isMacSyncAppEnabled",
            /// Indicates whether guests must sign in using the same account to which sharing invitations are sent.
            is_require_accepting_user_to_match_invited_user_enabled/set_is_require_accepting_user_to_match_invited_user_enabled: bool() => "isRequireAcceptingUserToMatchInvitedUserEnabled",
            /// Indicates whether guests are allowed to reshare files, folders, and sites they don't own.
            is_resharing_by_external_users_enabled/set_is_resharing_by_external_users_enabled: bool() => "isResharingByExternalUsersEnabled",
            /// Indicates whether mobile push notifications are enabled for SharePoint.
            is_share_point_mobile_notification_enabled/set_is_share_point_mobile_notification_enabled: bool() => "isSharePointMobileNotificationEnabled",
            /// Indicates whether the newsfeed is allowed on the modern site pages.
            is_share_point_newsfeed_enabled/set_is_share_point_newsfeed_enabled: bool() => "isSharePointNewsfeedEnabled",
            /// Indicates whether users are allowed to create sites.
            is_site_creation_enabled/set_is_site_creation_enabled: bool() => "isSiteCreationEnabled",
            /// Indicates whether the UI commands for creating sites are shown.
            is_site_creation_ui_enabled/set_is_site_creation_ui_enabled: bool() => "isSiteCreationUIEnabled",
            /// Indicates whether creating new modern pages is allowed on classic sites.
            is_site_pages_creation_enabled/set_is_site_pages_creation_enabled: bool() => "isSitePagesCreationEnabled",
            /// Indicates whether site storage space is automatically managed or if specific storage limits are set per site.
            is_sites_storage_limit_automatic/set_is_sites_storage_limit_automatic: bool() => "isSitesStorageLimitAutomatic",
            /// Indicates whether the sync button in OneDrive for Business is hidden.
            is_sync_button_hidden_on_personal_site/set_is_sync_button_hidden_on_personal_site: bool() => "isSyncButtonHiddenOnPersonalSite",
            /// Indicates whether users are allowed to sync files only on PCs joined to specific domains.
            is_unmanaged_sync_app_for_tenant_restricted/set_is_unmanaged_sync_app_for_tenant_restricted: bool() => "isUnmanagedSyncAppForTenantRestricted",
            /// The default OneDrive storage limit for all new and existing users who are assigned a qualifying license, in megabytes.
            personal_site_default_storage_limit_in_mb/set_personal_site_default_storage_limit_in_mb: i64() => "personalSiteDefaultStorageLimitInMB",
            /// Collection of email domains that are allowed for sharing outside the organization.
            sharing_allowed_domain_list/set_sharing_allowed_domain_list: str_coll() => "sharingAllowedDomainList",
            /// Collection of email domains that are blocked for sharing outside the organization.
            sharing_blocked_domain_list/set_sharing_blocked_domain_list: str_coll() => "sharingBlockedDomainList",
            /// Sharing capability for the tenant.
            sharing_capability/set_sharing_capability: enum_(SharingCapabilities) => "sharingCapability",
            /// Specifies the external sharing mode for domains.
            sharing_domain_restriction_mode/set_sharing_domain_restriction_mode: enum_(SharingDomainRestrictionMode) => "sharingDomainRestrictionMode",
            /// The default managed path when a new site is created.
            site_creation_default_managed_path/set_site_creation_default_managed_path: str() => "siteCreationDefaultManagedPath",
            /// The default storage quota for a new site upon creation, in megabytes.
            site_creation_default_storage_limit_in_mb/set_site_creation_default_storage_limit_in_mb: i32() => "siteCreationDefaultStorageLimitInMB",
            /// The default timezone of a tenant for newly created sites.
            tenant_default_timezone/set_tenant_default_timezone: str() => "tenantDefaultTimezone",
        }
    }
}
