//! Inventory list filters.

use serde::Deserialize;

use crate::item::InventoryItem;
use crate::stock::StockStatus;

/// Filters accepted by the inventory list endpoint.
///
/// All filters are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InventoryQuery {
    /// Case-insensitive substring over name, item code and description.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Derived badge, computed with the same classifier the UI uses.
    pub stock_status: Option<StockStatus>,
    /// Retired items are hidden unless asked for.
    #[serde(default)]
    pub include_retired: bool,
}

impl InventoryQuery {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if !self.include_retired && !item.is_active() {
            return false;
        }

        if let Some(category) = &self.category {
            if item.category() != category {
                return false;
            }
        }

        if let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            let hit = item.name().to_lowercase().contains(&needle)
                || item.item_code().to_lowercase().contains(&needle)
                || item
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(wanted) = self.stock_status {
            match item.stock_status() {
                Ok(status) => {
                    if status != wanted {
                        return false;
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        item_code = item.item_code(),
                        error = %err,
                        "skipping item without a classifiable stock level"
                    );
                    return false;
                }
            }
        }

        true
    }

    /// Keep the matching items, preserving input order.
    pub fn apply<'a, I>(&self, items: I) -> Vec<&'a InventoryItem>
    where
        I: IntoIterator<Item = &'a InventoryItem>,
    {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{CreateItem, InventoryCommand, RetireItem, StockMethod};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use stockyard_core::{Aggregate, ItemId, Money};

    fn item(code: &str, name: &str, category: &str, stock: i64, min: i64) -> InventoryItem {
        let id = ItemId::new();
        let mut item = InventoryItem::empty(id);
        item.execute(&InventoryCommand::CreateItem(CreateItem {
            item_id: id,
            item_code: code.to_string(),
            name: name.to_string(),
            description: Some(format!("{name} for general use")),
            category: category.to_string(),
            location: "A-01".to_string(),
            current_stock: stock,
            min_stock_level: min,
            unit_price: Money::new(dec!(1.00)).unwrap(),
            method: StockMethod::Fifo,
            occurred_at: Utc::now(),
        }))
        .unwrap();
        item
    }

    fn catalog() -> Vec<InventoryItem> {
        vec![
            item("BRG-001", "Industrial Bearings", "Hardware", 5, 20),
            item("BLT-M12", "Steel Bolts M12", "Fasteners", 15, 50),
            item("HLM-010", "Safety Helmets", "Safety", 8, 25),
            item("GLV-200", "Work Gloves", "Safety", 22, 30),
            item("WSH-005", "Flat Washers", "Fasteners", 500, 100),
        ]
    }

    fn codes(items: &[&InventoryItem]) -> Vec<String> {
        items.iter().map(|i| i.item_code().to_string()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let items = catalog();
        let hits = InventoryQuery::default().apply(&items);
        assert_eq!(
            codes(&hits),
            vec!["BRG-001", "BLT-M12", "HLM-010", "GLV-200", "WSH-005"]
        );
    }

    #[test]
    fn search_covers_name_code_and_description() {
        let items = catalog();
        let by_name = InventoryQuery {
            search: Some("helmet".to_string()),
            ..InventoryQuery::default()
        };
        assert_eq!(codes(&by_name.apply(&items)), vec!["HLM-010"]);

        let by_code = InventoryQuery {
            search: Some("blt".to_string()),
            ..InventoryQuery::default()
        };
        assert_eq!(codes(&by_code.apply(&items)), vec!["BLT-M12"]);

        let by_description = InventoryQuery {
            search: Some("GENERAL USE".to_string()),
            ..InventoryQuery::default()
        };
        assert_eq!(by_description.apply(&items).len(), 5);
    }

    #[test]
    fn stock_status_filter_uses_the_classifier() {
        let items = catalog();
        let critical = InventoryQuery {
            stock_status: Some(StockStatus::Critical),
            ..InventoryQuery::default()
        };
        assert_eq!(
            codes(&critical.apply(&items)),
            vec!["BRG-001", "BLT-M12", "HLM-010"]
        );

        let low = InventoryQuery {
            stock_status: Some(StockStatus::Low),
            ..InventoryQuery::default()
        };
        assert_eq!(codes(&low.apply(&items)), vec!["GLV-200"]);

        let good = InventoryQuery {
            stock_status: Some(StockStatus::Good),
            category: Some("Fasteners".to_string()),
            ..InventoryQuery::default()
        };
        assert_eq!(codes(&good.apply(&items)), vec!["WSH-005"]);
    }

    #[test]
    fn unclassifiable_items_never_match_a_status_filter() {
        let items = vec![item("ZERO-1", "No Minimum", "Misc", 3, 0)];
        for status in StockStatus::ALL {
            let query = InventoryQuery {
                stock_status: Some(status),
                ..InventoryQuery::default()
            };
            assert!(query.apply(&items).is_empty());
        }
        assert_eq!(InventoryQuery::default().apply(&items).len(), 1);
    }

    #[test]
    fn retired_items_are_hidden_by_default() {
        let mut items = catalog();
        let id = items[0].id_typed();
        items[0]
            .execute(&InventoryCommand::RetireItem(RetireItem {
                item_id: id,
                occurred_at: Utc::now(),
            }))
            .unwrap();

        assert_eq!(InventoryQuery::default().apply(&items).len(), 4);
        let all = InventoryQuery {
            include_retired: true,
            ..InventoryQuery::default()
        };
        assert_eq!(all.apply(&items).len(), 5);
    }

    #[test]
    fn deserializes_from_query_parameters() {
        let query: InventoryQuery =
            serde_json::from_str(r#"{"search":"bolt","stockStatus":"critical"}"#).unwrap();
        assert_eq!(query.search.as_deref(), Some("bolt"));
        assert_eq!(query.stock_status, Some(StockStatus::Critical));

        let shouted: InventoryQuery = serde_json::from_str(r#"{"stockStatus":"LOW"}"#).unwrap();
        assert_eq!(shouted.stock_status, Some(StockStatus::Low));
        assert_eq!(shouted.stock_status, Some("LOW".parse().unwrap()));

        assert!(serde_json::from_str::<InventoryQuery>(r#"{"stockStatus":"empty"}"#).is_err());
        assert!(serde_json::from_str::<InventoryQuery>(r#"{"sort":"name"}"#).is_err());
    }
}
