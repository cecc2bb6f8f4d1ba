//! Frontend Models
//!
//! Items held in the in-memory list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item name is empty")]
    EmptyName,
}

/// Opaque item identifier, generated once at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Fresh random id (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Trimmed, non-empty item name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: &str) -> Result<Self, ItemError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ItemError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Item data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    pub fn new(id: ItemId, name: ItemName) -> Self {
        Self {
            id,
            name: name.into_inner(),
        }
    }

    /// New item with a freshly generated id
    pub fn create(name: ItemName) -> Self {
        Self::new(ItemId::generate(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = ItemName::parse("  Milk \n").unwrap();
        assert_eq!(name.into_inner(), "Milk");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(ItemName::parse(""), Err(ItemError::EmptyName));
        assert_eq!(ItemName::parse(" \t "), Err(ItemError::EmptyName));
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = Item::create(ItemName::parse("a").unwrap());
        let b = Item::create(ItemName::parse("a").unwrap());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let item = Item::new(ItemId::from("42"), ItemName::parse("Eggs").unwrap());
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"42","name":"Eggs"}"#);
    }
}
