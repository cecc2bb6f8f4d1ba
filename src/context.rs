//! Application Context
//!
//! Store and form state shared via Leptos Context API.

use leptos::prelude::*;

use crate::form::FormState;
use crate::models::{Item, ItemId};
use crate::store::{self, Action, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Item list
    pub store: AppStore,
    /// Text field and editing id - read
    pub form: ReadSignal<FormState>,
    /// Text field and editing id - write
    set_form: WriteSignal<FormState>,
}

impl AppContext {
    pub fn new(store: AppStore, form: (ReadSignal<FormState>, WriteSignal<FormState>)) -> Self {
        Self {
            store,
            form: form.0,
            set_form: form.1,
        }
    }

    pub fn set_text(&self, text: String) {
        self.set_form.update(|form| form.set_text(text));
    }

    /// Load a row into the form
    pub fn begin_edit(&self, item: &Item) {
        self.set_form.update(|form| form.begin_edit(item));
    }

    /// Submit the form, dispatching Add or Update when the text is not blank
    pub fn submit(&self) {
        let mut action = None;
        self.set_form.update(|form| action = form.submit());
        if let Some(action) = action {
            store::dispatch(&self.store, action);
        }
    }

    /// Remove a row immediately
    pub fn delete(&self, id: ItemId) {
        store::dispatch(&self.store, Action::Delete(id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
