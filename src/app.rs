//! Items App
//!
//! Root component: owns the store and form state and lays out the screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemForm, ItemList};
use crate::config::{use_config, AppConfig};
use crate::context::AppContext;
use crate::form::FormState;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let form = signal(FormState::default());

    // Provide context to all children
    provide_context(StoredValue::new(config));
    provide_context(store);
    provide_context(AppContext::new(store, form));

    view! {
        <main class="app-container">
            <AppTitle />
            <ItemForm />
            <ItemList />
        </main>
    }
}

#[component]
fn AppTitle() -> impl IntoView {
    let config = use_config();
    view! { <h1 class="app-title">{config.with_value(|config| config.title.clone())}</h1> }
}
