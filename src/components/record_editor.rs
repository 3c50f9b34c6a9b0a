//! Record Editor Component
//!
//! Modal form for creating or editing one record. Field state lives in the
//! store so the collection can clear it after a successful save.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::host::read_upload;
use crate::store::CollectionStateStoreFields;

#[component]
pub fn RecordEditor() -> impl IntoView {
    let ctx = use_app_context();
    let editor = ctx.store.editor();

    let invalid = move || editor.with(|e| e.error.is_some());
    let input_class = move || if invalid() { "form-control is-invalid" } else { "form-control" };

    let close = move |_: web_sys::MouseEvent| ctx.collection().close_editor();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|collection| async move {
            collection.submit().await;
        });
    };

    let pick_file = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        ctx.spawn(move |collection| async move {
            let read = match file {
                Some(file) => Some(read_upload(&file).await),
                None => None,
            };
            collection.attach_upload(read);
        });
    };

    view! {
        <Show when=move || editor.with(|e| e.open)>
            <div class="modal-backdrop"></div>
            <div class="modal" role="dialog">
                <div class="modal-dialog">
                    <form class="modal-content" on:submit=submit>
                        <div class="modal-header">
                            <h2 class="modal-title">{move || editor.with(|e| e.title())}</h2>
                            <button type="button" class="btn-close" on:click=close>"×"</button>
                        </div>

                        <div class="modal-body">
                            <div class="form-group">
                                <label for="form-label">"Label"</label>
                                <input
                                    id="form-label"
                                    type="text"
                                    placeholder="Enter label"
                                    class=input_class
                                    prop:value=move || editor.with(|e| e.form.label.clone())
                                    on:input=move |ev| ctx.collection().set_label(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-group">
                                <label for="form-metadata">"Metadata"</label>
                                <input
                                    id="form-metadata"
                                    type="text"
                                    placeholder="Enter metadata"
                                    class=input_class
                                    prop:value=move || editor.with(|e| e.form.metadata.clone())
                                    on:input=move |ev| ctx.collection().set_metadata(event_target_value(&ev))
                                />
                            </div>

                            // Stored images cannot be replaced, so no picker when editing
                            <Show when=move || editor.with(|e| e.accepts_file())>
                                <div class="form-group">
                                    <label for="form-file">"Image File"</label>
                                    <input
                                        id="form-file"
                                        type="file"
                                        accept="image/*"
                                        class="form-control"
                                        on:change=pick_file
                                    />
                                </div>
                            </Show>

                            {move || editor.with(|e| e.error.clone()).map(|message| view! {
                                <div class="alert alert-danger">{message}</div>
                            })}
                        </div>

                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=close>
                                "Close"
                            </button>
                            <button type="submit" class="btn btn-primary">
                                {move || editor.with(|e| e.submit_label())}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
