//! Form State
//!
//! Text field value plus the id of the row being edited, and the rules that
//! turn a submit into a store action.

use crate::models::{Item, ItemId, ItemName};
use crate::store::Action;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub text: String,
    pub editing: Option<ItemId>,
}

impl FormState {
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Load a row into the form for editing
    pub fn begin_edit(&mut self, item: &Item) {
        self.text = item.name.clone();
        self.editing = Some(item.id.clone());
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Action for the current input, clearing the form when one is produced.
    /// Blank input yields `None` and leaves the form untouched.
    pub fn submit(&mut self) -> Option<Action> {
        let name = match ItemName::parse(&self.text) {
            Ok(name) => name,
            Err(err) => {
                log::debug!("submit ignored: {}", err);
                return None;
            }
        };
        let action = match self.editing.take() {
            Some(id) => Action::Update(Item::new(id, name)),
            None => Action::Add(Item::create(name)),
        };
        self.text.clear();
        Some(action)
    }
}
