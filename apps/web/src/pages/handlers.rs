use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::pages::{self, PageSpec, Section};
use crate::state::AppState;

/// Renders an assembled `PageSpec`, section by section, in declared order.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub page: PageSpec,
}

pub async fn home() -> impl IntoResponse {
    PageTemplate { page: pages::home() }
}

pub async fn about() -> impl IntoResponse {
    PageTemplate { page: pages::about() }
}

pub async fn contact() -> impl IntoResponse {
    PageTemplate { page: pages::contact() }
}

pub async fn privacy_policy() -> impl IntoResponse {
    PageTemplate { page: pages::privacy_policy() }
}

pub async fn terms() -> impl IntoResponse {
    PageTemplate { page: pages::terms() }
}

pub async fn refund_policy() -> impl IntoResponse {
    PageTemplate { page: pages::refund_policy() }
}

pub async fn checkout() -> impl IntoResponse {
    PageTemplate { page: pages::checkout() }
}

pub async fn profile() -> impl IntoResponse {
    PageTemplate { page: pages::profile() }
}

/// The only page that reads state: the Buy Now link comes from config.
pub async fn interview_master(State(state): State<AppState>) -> impl IntoResponse {
    PageTemplate {
        page: pages::interview_master(&state.config.buy_now_url),
    }
}
