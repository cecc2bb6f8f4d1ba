//! Global Application State Store
//!
//! The item list lives in a `reactive_stores` store; every change goes
//! through [`reduce`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, ItemId};

/// Change requested by the form or a list row
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append to the end of the list
    Add(Item),
    /// Replace the item with the same id, no-op when absent
    Update(Item),
    /// Remove every item with this id, no-op when absent
    Delete(ItemId),
}

/// Apply `action` to `items`, producing the next list
pub fn reduce(mut items: Vec<Item>, action: Action) -> Vec<Item> {
    match action {
        Action::Add(item) => items.push(item),
        Action::Update(updated) => {
            if let Some(item) = items.iter_mut().find(|item| item.id == updated.id) {
                *item = updated;
            }
        }
        Action::Delete(id) => items.retain(|item| item.id != id),
    }
    items
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in insertion order
    pub items: Vec<Item>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Run `action` through the reducer against the store's items
pub fn dispatch(store: &AppStore, action: Action) {
    log::debug!("dispatch {:?}", action);
    let items_field = store.items();
    let mut items = items_field.write();
    let current = std::mem::take(&mut *items);
    *items = reduce(current, action);
}
