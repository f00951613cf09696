//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page response is one mount of `PortalView`: form posts are submitted
//! first, then the five collections load and the page renders. If the client
//! goes away mid-request, Axum drops the handler future and with it the view,
//! which aborts any fetch still in flight.

use axum::Router;
use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::forms::{IssueFormInput, PostFormInput};
use crate::render::{STYLESHEET, render_page};
use crate::state::AppState;
use crate::view::{PortalView, Tab};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(portal_page))
        .route("/issues", post(submit_issue))
        .route("/posts", post(submit_post))
        .route("/portal.css", get(stylesheet))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    tab: Option<String>,
}

/// `GET /`: render the portal with the requested tab.
async fn portal_page(State(state): State<AppState>, Query(query): Query<TabQuery>) -> Html<String> {
    let view = PortalView::new(state.api, Tab::from_key(query.tab.as_deref()));
    render_view(view).await
}

/// `POST /issues`: validate and create an issue, then render the issue tab.
async fn submit_issue(State(state): State<AppState>, Form(input): Form<IssueFormInput>) -> Html<String> {
    let mut view = PortalView::new(state.api, Tab::RaiseIssue);
    view.submit_issue(input).await;
    render_view(view).await
}

/// `POST /posts`: validate and create a post, then render the post tab.
async fn submit_post(State(state): State<AppState>, Form(input): Form<PostFormInput>) -> Html<String> {
    let mut view = PortalView::new(state.api, Tab::PostActivity);
    view.submit_post(input).await;
    render_view(view).await
}

/// Mount after any submission so the page reflects it, and tear the mount
/// down once the model is taken.
async fn render_view(mut view: PortalView) -> Html<String> {
    view.mount();
    let model = view.ready().await;
    view.unmount();
    Html(render_page(model))
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
