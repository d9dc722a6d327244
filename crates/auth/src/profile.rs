use chrono::{DateTime, Utc};
use serde::Serialize;

use stockyard_core::{DomainError, DomainResult, Entity, ProfileId};

use crate::authorize::has_permission;
use crate::{Capability, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self == &ProfileChanges::default()
    }
}

/// A user profile: who may sign in and with which role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    id: ProfileId,
    username: Option<String>,
    email: Option<String>,
    role: Role,
    is_active: bool,
    created_at: DateTime<Utc>,
}

fn check_username(value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation("username cannot be blank"));
    }
    Ok(())
}

fn check_email(value: &str) -> DomainResult<()> {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DomainError::validation(format!("invalid email '{value}'"))),
    }
}

impl Profile {
    pub fn create(id: ProfileId, data: NewProfile, created_at: DateTime<Utc>) -> DomainResult<Self> {
        if let Some(username) = &data.username {
            check_username(username)?;
        }
        if let Some(email) = &data.email {
            check_email(email)?;
        }

        Ok(Self {
            id,
            username: data.username.map(|u| u.trim().to_string()),
            email: data.email.map(|e| e.trim().to_lowercase()),
            role: data.role,
            is_active: data.is_active,
            created_at,
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Inactive profiles hold no capabilities.
    pub fn has_permission(&self, capability: Capability) -> bool {
        self.is_active && has_permission(self.role, capability)
    }

    /// Capabilities currently held, sorted.
    pub fn capabilities(&self) -> Vec<Capability> {
        if !self.is_active {
            return Vec::new();
        }
        crate::authorize::role_grant(self.role).capabilities()
    }

    pub fn apply_update(&mut self, changes: ProfileChanges) -> DomainResult<()> {
        if changes.is_empty() {
            return Err(DomainError::validation("update contains no changes"));
        }
        if let Some(v) = &changes.username {
            check_username(v)?;
        }
        if let Some(v) = &changes.email {
            check_email(v)?;
        }

        if let Some(v) = changes.username {
            self.username = Some(v.trim().to_string());
        }
        if let Some(v) = changes.email {
            self.email = Some(v.trim().to_lowercase());
        }
        if let Some(v) = changes.role {
            self.role = v;
        }
        if let Some(v) = changes.is_active {
            self.is_active = v;
        }
        Ok(())
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !self.is_active {
            return Err(DomainError::invariant("profile is already inactive"));
        }
        self.is_active = false;
        Ok(())
    }
}

impl Entity for Profile {
    type Id = ProfileId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
