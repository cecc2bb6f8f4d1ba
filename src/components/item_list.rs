//! Item List Component
//!
//! Scrollable list of rows in insertion order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::config::use_config;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    view! {
        <div class="item-list">
            <Show
                when=move || !store.items().with(|items| items.is_empty())
                fallback=move || view! {
                    <p class="item-list-empty">{config.with_value(|config| config.empty_text.clone())}</p>
                }
            >
                <For
                    each=move || store.items().get()
                    // Name is part of the key so an update re-renders the row
                    key=|item| (item.id.clone(), item.name.clone())
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </Show>
        </div>
    }
}
