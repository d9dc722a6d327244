use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockyard_core::DomainError;

/// Capability names checked by the UI and REST layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Capability {
    Inventory,
    InventoryUpdate,
    InventoryView,
    Orders,
    OrderProcessing,
    Layout,
    Reports,
    Workers,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::Inventory,
        Capability::InventoryUpdate,
        Capability::InventoryView,
        Capability::Orders,
        Capability::OrderProcessing,
        Capability::Layout,
        Capability::Reports,
        Capability::Workers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Inventory => "inventory",
            Capability::InventoryUpdate => "inventory_update",
            Capability::InventoryView => "inventory_view",
            Capability::Orders => "orders",
            Capability::OrderProcessing => "order_processing",
            Capability::Layout => "layout",
            Capability::Reports => "reports",
            Capability::Workers => "workers",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|cap| cap.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown capability '{s}'")))
    }
}

impl TryFrom<String> for Capability {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
