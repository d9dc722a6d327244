use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockyard_core::DomainError;

/// Closed set of user roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Role {
    Admin,
    WarehouseManager,
    #[default]
    WarehouseStaff,
    Finance,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::WarehouseManager,
        Role::WarehouseStaff,
        Role::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::WarehouseManager => "warehouse_manager",
            Role::WarehouseStaff => "warehouse_staff",
            Role::Finance => "finance",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Accepts the snake_case name in any case (`WAREHOUSE_STAFF` is stored
    /// upper-case by some persistence layers). Serde deserialization goes
    /// through here as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown role '{s}'")))
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
