//! UI Components
//!
//! Leptos components for the single item screen.

mod item_form;
mod item_list;
mod item_row;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
