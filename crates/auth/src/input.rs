//! Request bodies for profile endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use stockyard_core::{DomainResult, ProfileId};

use crate::Role;
use crate::profile::{NewProfile, Profile, ProfileChanges};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProfileInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateProfileInput {
    /// Role defaults to warehouse staff; profiles start active.
    pub fn into_profile(self, id: ProfileId, created_at: DateTime<Utc>) -> DomainResult<Profile> {
        Profile::create(
            id,
            NewProfile {
                username: self.username,
                email: self.email,
                role: self.role.unwrap_or_default(),
                is_active: self.is_active.unwrap_or(true),
            },
            created_at,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl UpdateProfileInput {
    pub fn into_changes(self) -> ProfileChanges {
        ProfileChanges {
            username: self.username,
            email: self.email,
            role: self.role,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockyard_core::Entity;

    #[test]
    fn create_defaults_to_active_warehouse_staff() {
        let input: CreateProfileInput = serde_json::from_str(r#"{"username":"mdavis"}"#).unwrap();
        let profile = input.into_profile(ProfileId::new(), Utc::now()).unwrap();
        assert_eq!(profile.role(), Role::WarehouseStaff);
        assert!(profile.is_active());
    }

    #[test]
    fn role_uses_snake_case_names() {
        let input: CreateProfileInput =
            serde_json::from_str(r#"{"email":"ops@warehouse.example","role":"warehouse_manager"}"#).unwrap();
        assert_eq!(input.role, Some(Role::WarehouseManager));

        assert!(serde_json::from_str::<CreateProfileInput>(r#"{"role":"superuser"}"#).is_err());
    }

    #[test]
    fn stored_upper_case_roles_are_accepted() {
        let input: CreateProfileInput = serde_json::from_str(r#"{"role":"WAREHOUSE_STAFF"}"#).unwrap();
        assert_eq!(input.role, Some(Role::WarehouseStaff));
        assert_eq!(input.role, Some("WAREHOUSE_STAFF".parse().unwrap()));

        let update: UpdateProfileInput = serde_json::from_str(r#"{"role":"Finance"}"#).unwrap();
        assert_eq!(update.role, Some(Role::Finance));
        assert_eq!(serde_json::to_value(Role::WarehouseStaff).unwrap(), "warehouse_staff");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<UpdateProfileInput>(r#"{"password":"hunter2"}"#).is_err());
    }

    #[test]
    fn empty_update_is_a_validation_error() {
        let mut profile = CreateProfileInput {
            username: None,
            email: None,
            role: None,
            is_active: None,
        }
        .into_profile(ProfileId::new(), Utc::now())
        .unwrap();
        let changes = UpdateProfileInput::default().into_changes();
        assert!(profile.apply_update(changes).unwrap_err().to_string().contains("no changes"));
    }
}
