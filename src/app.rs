//! Image Metadata App
//!
//! Collection view: toolbar, record table and the record editor modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::Collection;
use crate::commands::HttpImageApi;
use crate::components::{RecordEditor, RecordTable, Toolbar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::host::BrowserHost;
use crate::store::CollectionState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(CollectionState::default());
    let collection = Collection::new(HttpImageApi::new(ApiConfig::default()), BrowserHost, store);
    let ctx = AppContext::new(store, collection);

    // Provide context to all children
    provide_context(ctx);

    // Load the list once on mount
    Effect::new(move |_| {
        ctx.spawn(|collection| async move {
            collection.fetch_all().await;
        });
    });

    view! {
        <div class="container">
            <h1>"Image Metadata"</h1>
            <Toolbar />
            <RecordTable />
            <RecordEditor />
        </div>
    }
}
