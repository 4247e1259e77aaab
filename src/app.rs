//! Crowdfund Frontend App
//!
//! Main application component: owns the store, loads the landing data and
//! switches pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, ResultExt};
use crate::components::{NavBar, NewProjectForm, ProjectGrid, ProjectModal, RegisterForm, SearchBar, StatsBar, ToastView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session::{self, LocalStorage};
use crate::store::{AppState, AppStateStoreFields, Route};

/// Featured projects on the home page
const FEATURED_LIMIT: u32 = 6;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let user = session::load_current_user(&LocalStorage, config.storage_key);
    let store = Store::new(AppState::new(user));
    let ctx = AppContext::new(store, &config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Statistics, featured projects and categories once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let api = commands::api();
            store.statistics().set(commands::get_statistics(&api).await.or_fallback());
            store.featured().set(commands::list_featured_projects(&api, FEATURED_LIMIT).await.or_fallback());
            store.categories().set(commands::list_categories(&api).await.or_fallback());
        });
    });

    // Project grid: initial popular list, then every search or pledge
    Effect::new(move |_| {
        let version = store.reload_version().get();
        let query = store.with_untracked(|s| s.project_query(ctx.page_size));
        log::debug!("loading projects (version {}): {:?}", version, query);
        spawn_local(async move {
            let api = commands::api();
            let projects = commands::list_projects(&api, &query).await.or_fallback();
            store.projects().set(projects);
        });
    });

    let projects = Signal::derive(move || store.projects().get());
    let featured = Signal::derive(move || store.featured().get());

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match store.route().get() {
                    Route::Home => view! {
                        <section id="home" class="page active">
                            <StatsBar />
                            <SearchBar />
                            <h2>"Popular projects"</h2>
                            <ProjectGrid projects=projects />
                            <h2>"Most funded"</h2>
                            <ProjectGrid projects=featured />
                        </section>
                    }.into_any(),
                    Route::Projects => view! {
                        <section id="projects" class="page active">
                            <SearchBar />
                            <ProjectGrid projects=projects />
                        </section>
                    }.into_any(),
                    Route::NewProject => view! {
                        <section id="new-project" class="page active">
                            <NewProjectForm />
                        </section>
                    }.into_any(),
                    Route::Register => view! {
                        <section id="register" class="page active">
                            <RegisterForm />
                        </section>
                    }.into_any(),
                    Route::About => view! {
                        <section id="about" class="page active">
                            <h2>"About"</h2>
                            <p>
                                "Crowdfund connects people with ideas to people who want to back them. "
                                "Every pledge goes straight to the project it supports."
                            </p>
                        </section>
                    }.into_any(),
                }}
            </main>

            {move || store.open_project().get().map(|id| view! { <ProjectModal project_id=id /> })}

            <ToastView />
        </div>
    }
}
