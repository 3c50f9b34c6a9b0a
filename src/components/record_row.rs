//! Record Row Component
//!
//! One table row: thumbnail, fields, and the edit/delete actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{display_timestamp, ImageRecord};

#[component]
pub fn RecordRow(record: ImageRecord) -> impl IntoView {
    let ctx = use_app_context();
    let id = record.id;
    let image_url = ctx.collection().image_url(id);
    let created_at = display_timestamp(&record.created_at);
    let updated_at = display_timestamp(&record.updated_at);
    let editable = record.clone();

    let on_delete = Callback::new(move |_: ()| {
        ctx.spawn(move |collection| async move {
            collection.delete(id).await;
        });
    });

    view! {
        <tr>
            <td>
                <img src=image_url alt=record.label.clone() width="50" />
            </td>
            <td>{record.label}</td>
            <td>{record.image_metadata}</td>
            <td>{record.image_path}</td>
            <td>{created_at}</td>
            <td>{updated_at}</td>
            <td class="actions">
                <button
                    class="btn btn-warning"
                    on:click=move |_| ctx.collection().open_editor_for_edit(editable.clone())
                >
                    "Edit"
                </button>
                <DeleteConfirmButton button_class="btn btn-danger" on_confirm=on_delete />
            </td>
        </tr>
    }
}
