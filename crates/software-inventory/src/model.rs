//! Typed view of the inventory document.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::AllowList;

/// One detected tool. Everything besides `name` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// An entry of a category list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InventoryItem {
    Tool(ToolRecord),
    /// Not an object with a string `name`.
    Unrecognized(Value),
}

/// The value stored under a category key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Items(Vec<InventoryItem>),
    /// Counters, flags or anything else that is not a list.
    Other(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub value: CategoryValue,
}

/// Categories in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    categories: Vec<Category>,
}

impl Inventory {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Every tool record, category order first, then list order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolRecord> {
        self.categories
            .iter()
            .filter_map(|category| match &category.value {
                CategoryValue::Items(items) => Some(items),
                CategoryValue::Other(_) => None,
            })
            .flatten()
            .filter_map(|item| match item {
                InventoryItem::Tool(tool) => Some(tool),
                InventoryItem::Unrecognized(_) => None,
            })
    }

    /// Flattened tool records whose name is on `allow`, in inventory order.
    pub fn filter(&self, allow: &AllowList) -> Vec<ToolRecord> {
        self.tools()
            .filter(|tool| allow.contains(&tool.name))
            .cloned()
            .collect()
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InventoryVisitor;

        impl<'de> Visitor<'de> for InventoryVisitor {
            type Value = Inventory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object mapping categories to tool lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Inventory, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, CategoryValue>()? {
                    categories.push(Category { name, value });
                }
                Ok(Inventory { categories })
            }
        }

        deserializer.deserialize_map(InventoryVisitor)
    }
}
