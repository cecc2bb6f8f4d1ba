//! Item Form Component
//!
//! Text field plus a submit button that adds a new item or updates the one
//! being edited.

use leptos::prelude::*;

use crate::config::use_config;
use crate::context::use_app_context;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let submit_label = move || {
        let editing = ctx.form.with(|form| form.is_editing());
        config.with_value(|config| config.submit_label(editing).to_string())
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <input
                type="text"
                class="item-input"
                placeholder=config.with_value(|config| config.placeholder.clone())
                prop:value=move || ctx.form.with(|form| form.text.clone())
                on:input=move |ev| ctx.set_text(event_target_value(&ev))
            />
            <button
                type="submit"
                class=move || if ctx.form.with(|form| form.is_editing()) { "submit-btn editing" } else { "submit-btn" }
            >
                {submit_label}
            </button>
        </form>
    }
}
