//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::collection::Collection;
use crate::commands::HttpImageApi;
use crate::host::BrowserHost;
use crate::store::AppStore;

/// The collection controller as wired in the browser
pub type AppCollection = Collection<HttpImageApi, BrowserHost, AppStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive state, read by components
    pub store: AppStore,
    /// Controller, the only writer of `store`
    collection: StoredValue<AppCollection, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, collection: AppCollection) -> Self {
        Self {
            store,
            collection: StoredValue::new_local(collection),
        }
    }

    pub fn collection(&self) -> AppCollection {
        self.collection.get_value()
    }

    /// Run an operation on the event loop without blocking the caller
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppCollection) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.collection()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
