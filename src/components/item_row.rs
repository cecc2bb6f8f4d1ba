//! Item Row Component
//!
//! One list entry with its Edit and Delete buttons.

use leptos::prelude::*;

use crate::config::use_config;
use crate::context::use_app_context;
use crate::models::Item;

/// A single item row in the list
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();

    let id = item.id.clone();
    let name = item.name.clone();
    let is_editing = {
        let id = id.clone();
        move || ctx.form.with(|form| form.editing.as_ref() == Some(&id))
    };

    view! {
        <div class=move || if is_editing() { "item-row editing" } else { "item-row" }>
            <span class="item-name">{name}</span>
            <div class="item-actions">
                <button class="edit-btn" on:click=move |_| ctx.begin_edit(&item)>
                    {config.with_value(|config| config.edit_label.clone())}
                </button>
                // No confirmation step
                <button class="delete-btn" on:click=move |_| ctx.delete(id.clone())>
                    {config.with_value(|config| config.delete_label.clone())}
                </button>
            </div>
        </div>
    }
}
