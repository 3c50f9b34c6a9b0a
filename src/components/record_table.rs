//! Record Table Component
//!
//! Tabular listing of the in-memory records, in server order.

use leptos::prelude::*;

use crate::components::RecordRow;
use crate::context::use_app_context;
use crate::store::CollectionStateStoreFields;

const COLUMNS: &[&str] = &[
    "Image",
    "Label",
    "Metadata",
    "Image Path",
    "Created At",
    "Updated At",
    "Actions",
];

#[component]
pub fn RecordTable() -> impl IntoView {
    let ctx = use_app_context();
    let records = ctx.store.records();

    view! {
        <table class="table table-striped table-bordered table-hover">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || records.get()
                    // Rows render from props, so any changed field must rebuild the row
                    key=|record| record.clone()
                    children=move |record| view! { <RecordRow record=record /> }
                />
            </tbody>
        </table>
    }
}
