//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod new_project_form;
mod pledge_form;
mod progress_bar;
mod project_card;
mod project_grid;
mod project_modal;
mod register_form;
mod review_form;
mod search_bar;
mod stats_bar;
mod toast;

pub use nav_bar::NavBar;
pub use new_project_form::NewProjectForm;
pub use pledge_form::PledgeFormView;
pub use progress_bar::ProgressBar;
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use project_modal::ProjectModal;
pub use register_form::RegisterForm;
pub use review_form::ReviewFormView;
pub use search_bar::SearchBar;
pub use stats_bar::StatsBar;
pub use toast::ToastView;
