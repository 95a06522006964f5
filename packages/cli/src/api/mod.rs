use std::sync::Arc;

use axum::{routing::get, Router};

use contactus_settings::SettingsService;

pub mod form_handlers;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SettingsService>,
}

/// Build the router. The service exposes exactly one form endpoint: GET
/// returns the renderer view, POST takes a submission.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/forms/settings_form_contact_us",
            get(form_handlers::get_form).post(form_handlers::submit_form),
        )
        .with_state(state)
}
