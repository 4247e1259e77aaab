//! Application Context
//!
//! Store handle plus the app-wide actions components share, provided via
//! the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::models::User;
use crate::session::{self, LocalStorage};
use crate::store::{AppStore, ToastKind, store_dismiss_toast, store_set_current_user, store_show_toast};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Projects fetched per grid load
    pub page_size: u32,
    toast_millis: u32,
    storage_key: &'static str,
}

impl AppContext {
    pub fn new(store: AppStore, config: &AppConfig) -> Self {
        Self {
            store,
            page_size: config.page_size,
            toast_millis: config.toast_millis,
            storage_key: config.storage_key,
        }
    }

    /// Show a toast that hides itself after the configured delay
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = store_show_toast(&self.store, kind, message);
        let store = self.store;
        let delay = self.toast_millis;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_dismiss_toast(&store, id);
        });
    }

    /// Remember `user` as the current user, in memory and local storage
    pub fn sign_in(&self, user: User) {
        session::save_current_user(&LocalStorage, self.storage_key, &user);
        store_set_current_user(&self.store, Some(user));
    }

    pub fn sign_out(&self) {
        session::clear_current_user(&LocalStorage, self.storage_key);
        store_set_current_user(&self.store, None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
