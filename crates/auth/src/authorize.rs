use thiserror::Error;

use stockyard_core::Entity;

use crate::profile::Profile;
use crate::{Capability, Role};

/// What a role is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// Every capability, including ones added later.
    All,
    Only(&'static [Capability]),
}

impl Grant {
    pub fn allows(&self, capability: Capability) -> bool {
        match self {
            Grant::All => true,
            Grant::Only(caps) => caps.contains(&capability),
        }
    }

    /// Expanded, sorted capability list (for display and audit).
    pub fn capabilities(&self) -> Vec<Capability> {
        let mut caps = match self {
            Grant::All => Capability::ALL.to_vec(),
            Grant::Only(caps) => caps.to_vec(),
        };
        caps.sort();
        caps
    }
}

const WAREHOUSE_MANAGER: &[Capability] = &[
    Capability::Inventory,
    Capability::Orders,
    Capability::Layout,
    Capability::Reports,
    Capability::Workers,
];

const WAREHOUSE_STAFF: &[Capability] = &[Capability::InventoryUpdate, Capability::OrderProcessing];

const FINANCE: &[Capability] = &[Capability::Reports, Capability::InventoryView];

/// Role → capability mapping.
pub fn role_grant(role: Role) -> Grant {
    match role {
        Role::Admin => Grant::All,
        Role::WarehouseManager => Grant::Only(WAREHOUSE_MANAGER),
        Role::WarehouseStaff => Grant::Only(WAREHOUSE_STAFF),
        Role::Finance => Grant::Only(FINANCE),
    }
}

/// Whether `role` is granted `capability`.
pub fn has_permission(role: Role, capability: Capability) -> bool {
    role_grant(role).allows(capability)
}

/// Permission predicate supplied by the auth collaborator.
///
/// Callers that need a different policy (e.g. one backed by a database)
/// implement this; [`StaticRolePolicy`] is the built-in mapping.
pub trait PermissionPolicy {
    fn has_permission(&self, role: Role, capability: Capability) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRolePolicy;

impl PermissionPolicy for StaticRolePolicy {
    fn has_permission(&self, role: Role, capability: Capability) -> bool {
        has_permission(role, capability)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("profile is inactive")]
    Inactive,

    #[error("forbidden: role '{role}' lacks capability '{capability}'")]
    Forbidden { role: Role, capability: Capability },
}

/// Authorize a profile against the built-in role mapping.
pub fn authorize(profile: &Profile, capability: Capability) -> Result<(), AuthzError> {
    authorize_with(&StaticRolePolicy, profile, capability)
}

/// Authorize a profile against an injected policy.
///
/// Inactive profiles are denied before the policy is consulted.
pub fn authorize_with<P>(policy: &P, profile: &Profile, capability: Capability) -> Result<(), AuthzError>
where
    P: PermissionPolicy + ?Sized,
{
    if !profile.is_active() {
        return Err(AuthzError::Inactive);
    }
    if policy.has_permission(profile.role(), capability) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role: profile.role(),
            capability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::NewProfile;
    use chrono::Utc;
    use stockyard_core::ProfileId;

    fn granted(role: Role) -> Vec<&'static str> {
        role_grant(role)
            .capabilities()
            .iter()
            .map(Capability::as_str)
            .collect()
    }

    #[test]
    fn role_mapping_is_exact() {
        assert_eq!(granted(Role::Admin).len(), Capability::ALL.len());
        assert_eq!(
            granted(Role::WarehouseManager),
            vec!["inventory", "orders", "layout", "reports", "workers"]
        );
        assert_eq!(
            granted(Role::WarehouseStaff),
            vec!["inventory_update", "order_processing"]
        );
        assert_eq!(granted(Role::Finance), vec!["inventory_view", "reports"]);
    }

    #[test]
    fn predicate_matches_the_mapping() {
        for role in Role::ALL {
            for cap in Capability::ALL {
                assert_eq!(has_permission(role, cap), role_grant(role).allows(cap));
            }
        }
        assert!(has_permission(Role::Admin, Capability::Layout));
        assert!(!has_permission(Role::Finance, Capability::Inventory));
        assert!(!has_permission(Role::WarehouseStaff, Capability::Reports));
        assert!(has_permission(Role::WarehouseStaff, Capability::OrderProcessing));
    }

    fn profile(role: Role, active: bool) -> Profile {
        Profile::create(
            ProfileId::new(),
            NewProfile {
                username: Some("jsmith".to_string()),
                email: Some("jsmith@warehouse.example".to_string()),
                role,
                is_active: active,
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn authorize_reports_the_missing_capability() {
        let staff = profile(Role::WarehouseStaff, true);
        assert_eq!(authorize(&staff, Capability::InventoryUpdate), Ok(()));

        let err = authorize(&staff, Capability::Workers).unwrap_err();
        assert_eq!(
            err.to_string(),
            "forbidden: role 'warehouse_staff' lacks capability 'workers'"
        );
    }

    #[test]
    fn inactive_profiles_are_denied() {
        let admin = profile(Role::Admin, false);
        assert_eq!(authorize(&admin, Capability::Reports), Err(AuthzError::Inactive));
    }

    struct DenyAll;

    impl PermissionPolicy for DenyAll {
        fn has_permission(&self, _role: Role, _capability: Capability) -> bool {
            false
        }
    }

    #[test]
    fn injected_policy_is_used() {
        let admin = profile(Role::Admin, true);
        assert!(authorize_with(&DenyAll, &admin, Capability::Reports).is_err());
        let dynamic: &dyn PermissionPolicy = &StaticRolePolicy;
        assert!(authorize_with(dynamic, &admin, Capability::Reports).is_ok());
    }
}
