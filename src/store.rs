//! Global Application State Store
//!
//! Single state object owned by `App` and shared through a
//! `reactive_stores::Store`. Anything beyond a plain field write goes
//! through the `store_*` helpers, which touch only the fields they change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{Page, ProjectQuery, SortBy};
use crate::models::{Category, Project, Statistics, User};

/// Top-level pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Projects,
    About,
    Register,
    NewProject,
}

impl Route {
    pub const NAV: [Route; 5] = [Route::Home, Route::Projects, Route::NewProject, Route::Register, Route::About];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
            Route::About => "About",
            Route::Register => "Sign up",
            Route::NewProject => "Start a project",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last list shown in the project grid
    pub projects: Vec<Project>,
    /// Most-funded projects for the home page
    pub featured: Vec<Project>,
    pub categories: Vec<Category>,
    pub statistics: Statistics,
    /// Registered user, mirrored in local storage
    pub current_user: Option<User>,
    /// Search box text as typed
    pub search: String,
    pub sort_by: SortBy,
    /// Category name filter (None = all)
    pub category: Option<String>,
    pub route: Route,
    /// Project whose modal is open
    pub open_project: Option<u32>,
    pub toast: Option<Toast>,
    /// Last toast id handed out
    pub toast_seq: u32,
    /// Bumped to make the grid refetch
    pub reload_version: u32,
}

impl AppState {
    pub fn new(current_user: Option<User>) -> Self {
        Self {
            current_user,
            ..Default::default()
        }
    }

    /// Query for the project grid from the search bar state.
    /// Search text is trimmed and lowercased; blank means no filter.
    pub fn project_query(&self, limit: u32) -> ProjectQuery {
        let search = self.search.trim().to_lowercase();
        ProjectQuery {
            page: Page::first(limit),
            category: self.category.clone(),
            search: (!search.is_empty()).then_some(search),
            sort_by: Some(self.sort_by),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
// Writes go through field handles only. A whole-store write wakes every
// field reader, including the grid loader.

/// Switch page and close any open project
pub fn store_navigate(store: &AppStore, route: Route) {
    if store.route().get_untracked() != route {
        store.route().set(route);
    }
    store_close_project(store);
}

/// Run the current search and show the results page
pub fn store_run_search(store: &AppStore) {
    if store.route().get_untracked() != Route::Projects {
        store.route().set(Route::Projects);
    }
    store.reload_version().update(|v| *v = v.wrapping_add(1));
}

pub fn store_open_project(store: &AppStore, project_id: u32) {
    store.open_project().set(Some(project_id));
}

pub fn store_close_project(store: &AppStore) {
    if store.open_project().get_untracked().is_some() {
        store.open_project().set(None);
    }
}

pub fn store_set_current_user(store: &AppStore, user: Option<User>) {
    store.current_user().set(user);
}

/// Replace any visible toast; returns the new toast id
pub fn store_show_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) -> u32 {
    store.toast_seq().update(|seq| *seq = seq.wrapping_add(1));
    let id = store.toast_seq().get_untracked();
    store.toast().set(Some(Toast { id, kind, message: message.into() }));
    id
}

/// Hide the toast only if it is still the one with `id`
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    if store.toast().with_untracked(|t| t.as_ref().is_some_and(|t| t.id == id)) {
        store.toast().set(None);
    }
}

/// After a pledge: close the modal and refresh the grid, popular first
pub fn store_pledge_recorded(store: &AppStore) {
    store_close_project(store);
    store.search().set(String::new());
    store.category().set(None);
    store.sort_by().set(SortBy::Popular);
    store.reload_version().update(|v| *v = v.wrapping_add(1));
}
