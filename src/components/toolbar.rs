//! Toolbar Component
//!
//! Create and export actions above the record table.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::CollectionStateStoreFields;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let records = ctx.store.records();

    view! {
        <div class="toolbar">
            <button
                class="btn btn-primary"
                on:click=move |_| ctx.collection().open_editor_for_create()
            >
                "Add New Image"
            </button>
            <button
                class="btn btn-secondary"
                on:click=move |_| ctx.spawn(|collection| async move {
                    collection.export_all().await;
                })
            >
                "Export All"
            </button>
            <span class="record-count">
                {move || match records.read().len() {
                    1 => "1 image".to_string(),
                    n => format!("{} images", n),
                }}
            </span>
        </div>
    }
}
