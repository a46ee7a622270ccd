//! Actor identification: who created or changed something.

use crate::macros::{graph_complex_model, graph_entity_model};

graph_complex_model! {
    /// A single actor (user, device, or application).
    pub struct Identity {
        tag: "#microsoft.graph.identity",
        fields: {
            /// The display name of the identity.
            display_name/set_display_name: str() => "displayName",
            /// Unique identifier for the identity.
            id/set_id: str() => "id",
        }
    }
}

graph_complex_model! {
    /// The set of actors associated with an event: at most one application,
    /// device, and user.
    pub struct IdentitySet {
        tag: "#microsoft.graph.identitySet",
        fields: {
            /// The application associated with this action.
            application/set_application: obj(Identity) => "application",
            /// The device associated with this action.
            device/set_device: obj(Identity) => "device",
            /// The user associated with this action.
            user/set_user: obj(Identity) => "user",
        }
    }
}

graph_entity_model! {
    /// A directory user, reduced to the fields the models in this crate
    /// reference.
    pub struct User : crate::Entity {
        tag: "#microsoft.graph.user",
        fields: {
            /// The name displayed in the address book for the user.
            display_name/set_display_name: str() => "displayName",
            /// The SMTP address for the user.
            mail/set_mail: str() => "mail",
            /// The user principal name (UPN) of the user.
            user_principal_name/set_user_principal_name: str() => "userPrincipalName",
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
    fn test_nested_identities() {
        let set: IdentitySet = from_value(&json!({
            "user": {"displayName": "Dustin Abbot", "id": "dustina@8qzvrj.onmicrosoft.com"},
            "application": {"displayName": "backup-tool"},
        }))
        .unwrap();
        assert_eq!(set.user().and_then(Identity::display_name), Some("Dustin Abbot"));
        assert_eq!(
            set.application().and_then(Identity::display_name),
            Some("backup-tool")
        );
        assert!(set.device().is_none());
    }

    #[test]
    fn test_complex_type_writes_its_tag() {
        let identity = Identity::new();
        assert_eq!(
            to_value(&identity),
            json!({"@odata.type": "#microsoft.graph.identity"})
        );
    }
}
